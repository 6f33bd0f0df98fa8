//! Built-in operations and the `define_operation!` generator.

// =============================================================================
// define_operation! - Unit-struct operation backed by a core::ops operator
// =============================================================================

/// Define a unit-struct [`Operation`](crate::operation::Operation) from a `core::ops`
/// binary operator.
///
/// The struct is named after the operator trait (`sub` -> `Sub`) and
/// computes `<f64 as core::ops::Sub>::sub(a, b)`.
///
/// # Usage
///
/// ```
/// use op_dispatch::{define_operation, evaluate_dynamic};
///
/// define_operation!(
///     /// Subtraction.
///     pub sub, " - "
/// );
///
/// assert_eq!(evaluate_dynamic(&Sub, 5.0, 3.0).to_string(), "5 - 3 = 2");
/// ```
#[macro_export]
macro_rules! define_operation {
    ($(#[$meta:meta])* $vis:vis $method:ident, $symbol:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct [<$method:camel>];

            impl $crate::Operation for [<$method:camel>] {
                #[inline]
                fn calculate(&self, a: f64, b: f64) -> f64 {
                    <f64 as ::core::ops::[<$method:camel>]>::$method(a, b)
                }

                #[inline]
                fn symbol(&self) -> &str {
                    $symbol
                }
            }
        }
    };
}

define_operation!(
    /// Addition: `a + b`, rendered as `" + "`.
    pub add, " + "
);

define_operation!(
    /// Multiplication: `a * b`, rendered as `" * "`.
    pub mul, " * "
);
