//! # Dispatch
//!
//! Two ways to invoke an [`Operation`](crate::operation::Operation), same output format:
//!
//! ```text
//! dispatch/
//! ├── dynamic.rs - `&dyn Operation`, resolved through the vtable at the call
//! └── generic.rs - `T: Operation`, one instantiation per concrete type
//! ```
//!
//! Both render `"<label>: <a><symbol><b> = <result>\n"`.
//!
//! ## Cost model
//!
//! A `&dyn Operation` is two words: the data pointer and a vtable pointer
//! with one slot each for `calculate` and `symbol`. A `&T` handed to the
//! generic path is one word, and the call is direct. The generic path is
//! compiled again for every distinct `T`.
//!
//! ```
//! use core::mem::size_of;
//! use op_dispatch::{Add, Operation};
//!
//! assert_eq!(size_of::<&dyn Operation>(), 2 * size_of::<usize>());
//! assert_eq!(size_of::<&Add>(), size_of::<usize>());
//! assert_eq!(size_of::<Add>(), 0);
//! ```

use core::fmt;

pub mod dynamic;
pub mod generic;

pub use dynamic::{dispatch_dynamic, dispatch_dynamic_to, evaluate_dynamic};
pub use generic::{dispatch_static, dispatch_static_to, evaluate_static};

// =============================================================================
// Strategy
// =============================================================================

/// How the operation was resolved. Prefixes every rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Through a trait object.
    Dynamic,
    /// Through a bounded type parameter.
    Static,
}

impl Strategy {
    /// Line prefix: `"Dynamic dispatch"` or `"Static dispatch"`.
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Dynamic => "Dynamic dispatch",
            Strategy::Static => "Static dispatch",
        }
    }

    /// Full output line for `evaluation`, without the trailing newline.
    pub fn render(self, evaluation: &Evaluation<'_>) -> String {
        format!("{self}: {evaluation}")
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// One invocation: operands, the operation's symbol, and the result.
///
/// Displays as `a<symbol>b = result` using `f64`'s own formatting, so
/// whole values carry no fractional part.
///
/// ```
/// use op_dispatch::{evaluate_static, Mul};
///
/// assert_eq!(evaluate_static(&Mul, 4.0, 5.0).to_string(), "4 * 5 = 20");
/// assert_eq!(evaluate_static(&Mul, 0.5, 3.0).to_string(), "0.5 * 3 = 1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<'op> {
    pub a: f64,
    pub symbol: &'op str,
    pub b: f64,
    pub result: f64,
}

impl fmt::Display for Evaluation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{} = {}", self.a, self.symbol, self.b, self.result)
    }
}

impl Evaluation<'_> {
    /// Emit the per-dispatch trace event.
    pub(crate) fn trace(&self, strategy: Strategy) {
        tracing::debug!(
            strategy = strategy.label(),
            symbol = self.symbol,
            a = self.a,
            b = self.b,
            result = self.result,
            "dispatched operation"
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
