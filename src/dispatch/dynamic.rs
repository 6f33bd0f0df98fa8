//! Dynamic dispatch through `&dyn Operation`.
//!
//! Nothing here names a concrete variant. Which `calculate` and `symbol` run
//! is read from the trait object's vtable when the call happens, so a single
//! compiled copy of each function serves every operation.

use std::io::{self, Write};

use super::{Evaluation, Strategy};
use crate::error::DispatchError;
use crate::operation::Operation;

/// Evaluate `op` on `a` and `b` without rendering anything.
pub fn evaluate_dynamic(op: &dyn Operation, a: f64, b: f64) -> Evaluation<'_> {
    let result = op.calculate(a, b);
    Evaluation { a, symbol: op.symbol(), b, result }
}

/// Evaluate `op` and write `"Dynamic dispatch: a<symbol>b = result\n"` to `out`.
///
/// The sink is a trait object as well.
pub fn dispatch_dynamic_to<'op>(
    out: &mut dyn Write,
    op: &'op dyn Operation,
    a: f64,
    b: f64,
) -> Result<Evaluation<'op>, DispatchError> {
    let evaluation = evaluate_dynamic(op, a, b);
    evaluation.trace(Strategy::Dynamic);

    writeln!(out, "{}", Strategy::Dynamic.render(&evaluation))
        .map_err(|e| DispatchError::write(Strategy::Dynamic, e))?;
    Ok(evaluation)
}

/// [`dispatch_dynamic_to`] against standard output.
pub fn dispatch_dynamic(op: &dyn Operation, a: f64, b: f64) -> Result<Evaluation<'_>, DispatchError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_dynamic_to(&mut out, op, a, b)
}
