//! Static dispatch through a bounded type parameter.
//!
//! `T: Operation` is checked where each function is instantiated. Every
//! distinct `T` gets its own copy with direct calls to `T::calculate` and
//! `T::symbol`; no vtable is involved. `T` is implicitly `Sized`, so a bare
//! trait object is turned away here:
//!
//! ```compile_fail,E0277
//! use op_dispatch::{evaluate_static, Add, Operation};
//!
//! let op: &dyn Operation = &Add;
//! evaluate_static(op, 1.0, 2.0);
//! ```
//!
//! Wrapping it in a handle that itself implements `Operation` is accepted,
//! and the vtable call then happens inside that handle:
//!
//! ```
//! use op_dispatch::{evaluate_static, Add, Operation};
//!
//! let op: &dyn Operation = &Add;
//! assert_eq!(evaluate_static(&op, 1.0, 2.0).result, 3.0);
//! ```

use std::io::{self, Write};

use super::{Evaluation, Strategy};
use crate::error::DispatchError;
use crate::operation::Operation;

/// Evaluate `op` on `a` and `b` without rendering anything.
#[inline]
pub fn evaluate_static<T: Operation>(op: &T, a: f64, b: f64) -> Evaluation<'_> {
    let result = op.calculate(a, b);
    Evaluation { a, symbol: op.symbol(), b, result }
}

/// Evaluate `op` and write `"Static dispatch: a<symbol>b = result\n"` to `out`.
pub fn dispatch_static_to<'op, W, T>(
    out: &mut W,
    op: &'op T,
    a: f64,
    b: f64,
) -> Result<Evaluation<'op>, DispatchError>
where
    W: Write + ?Sized,
    T: Operation,
{
    let evaluation = evaluate_static(op, a, b);
    evaluation.trace(Strategy::Static);

    writeln!(out, "{}", Strategy::Static.render(&evaluation))
        .map_err(|e| DispatchError::write(Strategy::Static, e))?;
    Ok(evaluation)
}

/// [`dispatch_static_to`] against standard output.
pub fn dispatch_static<T: Operation>(op: &T, a: f64, b: f64) -> Result<Evaluation<'_>, DispatchError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_static_to(&mut out, op, a, b)
}
