//! # op-dispatch
//!
//! One binary-operation capability, invoked two ways.
//!
//! ## Architecture
//!
//! An [`Operation`](trait@Operation) computes a value from two `f64` operands and reports a
//! short symbol for display. The same trait is reachable through:
//!
//! ```text
//! dispatch_dynamic(&dyn Operation)      dispatch_static::<T: Operation>(&T)
//!         |                                       |
//!   vtable lookup at the call              one instantiation per T,
//!   (calculate, symbol slots)              direct calls, no vtable
//!         |                                       |
//!         +------------> Evaluation <-------------+
//!                     "a<symbol>b = result"
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capability                                              |
//! |  - Operation trait, is_operation! check                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Variants                                                |
//! |  - Add, Mul, define_operation!, #[derive(Operation)]              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch                                                |
//! |  - dynamic / generic entry points, Evaluation, Strategy, demo     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use op_dispatch::prelude::*;
//!
//! let mut out: Vec<u8> = Vec::new();
//! dispatch_dynamic_to(&mut out, &Add, 1.0, 2.0).unwrap();
//! dispatch_static_to(&mut out, &Mul, 4.0, 5.0).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Dynamic dispatch: 1 + 2 = 3\nStatic dispatch: 4 * 5 = 20\n",
//! );
//! ```

// Re-export paste for define_operation!
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Capability
// =============================================================================
pub mod operation;
pub mod detect;

// =============================================================================
// Layer 1: Variants
// =============================================================================
pub mod ops;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
pub mod dispatch;
pub mod demo;

pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use operation::Operation;
pub use ops::{Add, Mul};
pub use dispatch::{
    Evaluation, Strategy,
    dispatch_dynamic, dispatch_dynamic_to, evaluate_dynamic,
    dispatch_static, dispatch_static_to, evaluate_static,
};
pub use error::DispatchError;

/// `#[derive(Operation)]`, re-exported from the macros crate.
///
/// The derive lives in the macro namespace, so it shares the name of the
/// [`Operation`](trait@Operation) trait without clashing.
///
/// ```
/// use op_dispatch::prelude::*;
///
/// #[derive(Operation)]
/// #[operation(symbol = " max ", calculate = f64::max)]
/// struct Max;
///
/// assert_eq!(evaluate_static(&Max, 3.0, 7.0).to_string(), "3 max 7 = 7");
/// ```
///
/// The helper attribute is mandatory:
///
/// ```compile_fail
/// use op_dispatch::Operation;
///
/// #[derive(Operation)]
/// struct Bare;
/// ```
#[cfg(feature = "derive")]
pub use macros::Operation;

/// Common items for defining and dispatching operations.
pub mod prelude {
    pub use crate::operation::Operation;
    pub use crate::ops::{Add, Mul};
    pub use crate::dispatch::{
        Evaluation, Strategy,
        dispatch_dynamic, dispatch_dynamic_to, evaluate_dynamic,
        dispatch_static, dispatch_static_to, evaluate_static,
    };
    pub use crate::error::DispatchError;
    #[cfg(feature = "derive")]
    pub use macros::Operation;
    // Note: define_operation! and is_operation! are #[macro_export] so they're at crate root
}
