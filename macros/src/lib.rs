//! Procedural macros for op-dispatch
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Operation)]` | struct/enum | Implement `Operation` from an attribute |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Operation)]
//! #[operation(symbol = " - ", calculate = |a, b| a - b)]
//! struct Sub;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-Facing Macros (user/)
// =============================================================================

/// Derive macro implementing `Operation`.
///
/// Requires one `#[operation(...)]` helper attribute with two keys:
///
/// | Key | Value | Becomes |
/// |-----|-------|---------|
/// | `symbol` | string literal | `fn symbol(&self) -> &str` |
/// | `calculate` | function path or non-capturing closure, `fn(f64, f64) -> f64` | `fn calculate(&self, a: f64, b: f64) -> f64` |
///
/// # Usage
/// ```ignore
/// use op_dispatch::Operation;
///
/// #[derive(Operation)]
/// #[operation(symbol = " max ", calculate = f64::max)]
/// struct Max;
///
/// #[derive(Operation)]
/// #[operation(symbol = " avg ", calculate = |a, b| (a + b) / 2.0)]
/// struct Mean;
/// ```
#[proc_macro_derive(Operation, attributes(operation))]
pub fn derive_operation(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_operation(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
