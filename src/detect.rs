//! # Conformance Check
//!
//! `is_operation!(T)` answers "does `T` implement [`Operation`](crate::operation::Operation)?"
//! as a `bool` constant, without making the build fail when the answer is no.
//!
//! ```
//! use op_dispatch::{is_operation, Add};
//!
//! struct OnlyCalculate;
//!
//! assert!(is_operation!(Add));
//! assert!(is_operation!(Box<dyn op_dispatch::Operation>));
//! assert!(!is_operation!(OnlyCalculate));
//! ```

// =============================================================================
// is_operation! - inherent const fallback (concrete types only)
// =============================================================================

/// Check if a concrete type implements `Operation` at compile time.
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied.
///
/// **Note**: Only works for concrete types. Inside a generic function the
/// bound is unknown and the fallback always wins.
#[macro_export]
macro_rules! is_operation {
    ($T:ty) => {{
        struct __Check<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback { const IS_OPERATION: bool = false; }
        impl<T: ?Sized> __Fallback for __Check<T> {}

        impl<T: ?Sized + $crate::Operation> __Check<T> {
            #[allow(dead_code)]
            const IS_OPERATION: bool = true;
        }

        __Check::<$T>::IS_OPERATION
    }};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Add, Mul, Operation};

    #[allow(dead_code)]
    struct OnlyCalculate;

    #[allow(dead_code)]
    impl OnlyCalculate {
        fn calculate(&self, a: f64, b: f64) -> f64 {
            a - b
        }
    }

    #[test]
    fn test_builtin_variants_conform() {
        assert!(is_operation!(Add));
        assert!(is_operation!(Mul));
    }

    #[test]
    fn test_handles_conform() {
        assert!(is_operation!(&'static Add));
        assert!(is_operation!(&'static dyn Operation));
        assert!(is_operation!(Box<dyn Operation>));
        assert!(is_operation!(dyn Operation));
    }

    #[test]
    fn test_inherent_methods_do_not_conform() {
        assert!(!is_operation!(OnlyCalculate));
        assert!(!is_operation!(f64));
        assert!(!is_operation!(String));
    }
}
