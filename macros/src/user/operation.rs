use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput};

use crate::common::OperationArgs;

/// #[derive(Operation)] expands to a direct `impl ::op_dispatch::Operation`.
///
/// `calculate` is bound to a `fn(f64, f64) -> f64` local first, so a value of
/// the wrong shape is reported at the attribute instead of inside the impl.
pub fn expand_derive_operation(input: DeriveInput) -> syn::Result<TokenStream2> {
    if let Data::Union(data) = &input.data {
        return Err(syn::Error::new_spanned(
            data.union_token,
            "#[derive(Operation)] supports structs and enums only",
        ));
    }

    let OperationArgs { symbol, calculate } = OperationArgs::from_attrs(&input.ident, &input.attrs)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::op_dispatch::Operation for #ident #ty_generics #where_clause {
            #[inline]
            fn calculate(&self, a: f64, b: f64) -> f64 {
                let calculate: fn(f64, f64) -> f64 = #calculate;
                calculate(a, b)
            }

            #[inline]
            fn symbol(&self) -> &str {
                #symbol
            }
        }
    })
}
