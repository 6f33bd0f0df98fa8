//! Common parsing utilities
//!
//! Collects the `#[operation(symbol = "..", calculate = ..)]` helper attribute.

use syn::{meta::ParseNestedMeta, Attribute, Expr, Ident, Lit, LitStr};

/// Helper attribute name.
pub const ATTR: &str = "operation";

// =============================================================================
// Operation Arguments
// =============================================================================

/// Parsed `#[operation(...)]` arguments.
pub struct OperationArgs {
    pub symbol: LitStr,
    pub calculate: Expr,
}

impl OperationArgs {
    /// Collect arguments from every `#[operation(...)]` on the item.
    ///
    /// Keys may be split across several attributes, but each may appear once.
    pub fn from_attrs(ident: &Ident, attrs: &[Attribute]) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut calculate: Option<Expr> = None;
        let mut seen_attr = false;

        for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
            seen_attr = true;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("symbol") {
                    reject_duplicate(&meta, symbol.is_some(), "symbol")?;
                    symbol = Some(parse_symbol(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("calculate") {
                    reject_duplicate(&meta, calculate.is_some(), "calculate")?;
                    calculate = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown `operation` key; expected `symbol` or `calculate`"))
                }
            })?;
        }

        if !seen_attr {
            return Err(syn::Error::new_spanned(
                ident,
                "#[derive(Operation)] requires #[operation(symbol = \"..\", calculate = ..)]",
            ));
        }

        let symbol = symbol.ok_or_else(|| {
            syn::Error::new_spanned(ident, "missing `symbol = \"..\"` in #[operation(...)]")
        })?;
        let calculate = calculate.ok_or_else(|| {
            syn::Error::new_spanned(ident, "missing `calculate = ..` in #[operation(...)]")
        })?;

        Ok(OperationArgs { symbol, calculate })
    }
}

fn reject_duplicate(meta: &ParseNestedMeta, seen: bool, key: &str) -> syn::Result<()> {
    if seen {
        Err(meta.error(format!("duplicate `{key}` in #[operation(...)]")))
    } else {
        Ok(())
    }
}

fn parse_symbol(meta: &ParseNestedMeta) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(symbol) => Ok(symbol),
        other => Err(syn::Error::new_spanned(
            other,
            "`symbol` must be a string literal, e.g. symbol = \" + \"",
        )),
    }
}
