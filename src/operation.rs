//! # Operation Capability
//!
//! The single contract every variant satisfies:
//!
//! | Method | Signature | Contract |
//! |--------|-----------|----------|
//! | `calculate` | `(&self, f64, f64) -> f64` | pure, total over finite operands |
//! | `symbol` | `(&self) -> &str` | constant per variant, display only |
//!
//! The trait is dyn-compatible, so it backs both `&dyn Operation` (vtable
//! with one slot per method) and `T: Operation` bounds (checked when a
//! generic function is instantiated, no vtable emitted).
//!
//! ## Rejection at build time
//!
//! A type with only one of the two methods is not an operation. Passing it
//! to the static entry point fails to build, and the diagnostic names the
//! missing capability:
//!
//! ```compile_fail,E0277
//! use op_dispatch::dispatch_static;
//!
//! struct OnlyCalculate;
//!
//! impl OnlyCalculate {
//!     fn calculate(&self, a: f64, b: f64) -> f64 { a - b }
//! }
//!
//! // error[E0277]: `OnlyCalculate` is not an `Operation`
//! dispatch_static(&OnlyCalculate, 1.0, 2.0).unwrap();
//! ```
//!
//! An impl that leaves `symbol` out is rejected too:
//!
//! ```compile_fail,E0046
//! use op_dispatch::Operation;
//!
//! struct NoSymbol;
//!
//! impl Operation for NoSymbol {
//!     fn calculate(&self, a: f64, b: f64) -> f64 { a - b }
//! }
//! ```
//!
//! So is a mismatched signature:
//!
//! ```compile_fail,E0053
//! use op_dispatch::Operation;
//!
//! struct Narrow;
//!
//! impl Operation for Narrow {
//!     fn calculate(&self, a: f32, b: f32) -> f32 { a - b }
//!     fn symbol(&self) -> &str { " - " }
//! }
//! ```

/// A binary numeric operation over two `f64` operands.
///
/// Implementors are usually stateless unit structs. Use
/// [`define_operation!`](crate::define_operation) for `core::ops` operators or
/// `#[derive(Operation)]` for anything else.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Operation`",
    label = "missing the `Operation` capability",
    note = "an operation must provide both `fn calculate(&self, a: f64, b: f64) -> f64` and `fn symbol(&self) -> &str`",
    note = "implement `Operation` for `{Self}`, or derive it with `#[operation(symbol = \"..\", calculate = ..)]`"
)]
pub trait Operation {
    /// Compute the result for operands `a` and `b`.
    fn calculate(&self, a: f64, b: f64) -> f64;

    /// Infix symbol used when rendering, spaces included (`" + "`).
    fn symbol(&self) -> &str;
}

// =============================================================================
// Forwarding impls
// =============================================================================

impl<T: Operation + ?Sized> Operation for &T {
    #[inline]
    fn calculate(&self, a: f64, b: f64) -> f64 {
        (**self).calculate(a, b)
    }

    #[inline]
    fn symbol(&self) -> &str {
        (**self).symbol()
    }
}

impl<T: Operation + ?Sized> Operation for &mut T {
    #[inline]
    fn calculate(&self, a: f64, b: f64) -> f64 {
        (**self).calculate(a, b)
    }

    #[inline]
    fn symbol(&self) -> &str {
        (**self).symbol()
    }
}

impl<T: Operation + ?Sized> Operation for Box<T> {
    #[inline]
    fn calculate(&self, a: f64, b: f64) -> f64 {
        (**self).calculate(a, b)
    }

    #[inline]
    fn symbol(&self) -> &str {
        (**self).symbol()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Add, Mul};

    #[test]
    fn test_trait_object_calls() {
        let ops: [&dyn Operation; 2] = [&Add, &Mul];
        assert_eq!(ops[0].calculate(1.0, 2.0), 3.0);
        assert_eq!(ops[1].calculate(4.0, 5.0), 20.0);
        assert_eq!(ops[0].symbol(), " + ");
        assert_eq!(ops[1].symbol(), " * ");
    }

    #[test]
    fn test_boxed_trait_object_is_an_operation() {
        fn symbol_of<T: Operation>(op: &T) -> &str {
            op.symbol()
        }

        let boxed: Box<dyn Operation> = Box::new(Mul);
        assert_eq!(symbol_of(&boxed), " * ");
        assert_eq!(boxed.calculate(3.0, 3.0), 9.0);
    }

    #[test]
    fn test_reference_forwarding() {
        let mut add = Add;
        let by_ref: &Add = &add;
        assert_eq!(Operation::calculate(&by_ref, 2.0, 2.0), 4.0);

        let by_mut: &mut Add = &mut add;
        assert_eq!(Operation::symbol(&by_mut), " + ");
    }
}
