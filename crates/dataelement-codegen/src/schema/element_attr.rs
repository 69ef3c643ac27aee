use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::Token;

/// Arguments of the element attribute:
/// `name = "..."` (required), `implementation = "..."`, `collection = "..."`.
#[derive(Debug, Default)]
pub(crate) struct ElementAttr {
    pub(crate) name: Option<(String, Span)>,
    pub(crate) implementation: Option<String>,
    pub(crate) collection: Option<String>,
}

impl Parse for ElementAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut out = Self::default();

        let pairs = Punctuated::<syn::MetaNameValue, Token![,]>::parse_terminated(input)?;

        for pair in pairs {
            let value = string_value(&pair)?;

            if pair.path.is_ident("name") {
                if out.name.is_some() {
                    return Err(syn::Error::new_spanned(&pair.path, "duplicate `name`"));
                }
                out.name = Some((value, pair.value.span()));
            } else if pair.path.is_ident("implementation") {
                if out.implementation.is_some() {
                    return Err(syn::Error::new_spanned(
                        &pair.path,
                        "duplicate `implementation`",
                    ));
                }
                out.implementation = Some(value);
            } else if pair.path.is_ident("collection") {
                if out.collection.is_some() {
                    return Err(syn::Error::new_spanned(
                        &pair.path,
                        "duplicate `collection`",
                    ));
                }
                out.collection = Some(value);
            } else {
                return Err(syn::Error::new_spanned(
                    &pair.path,
                    "unknown data element attribute",
                ));
            }
        }

        Ok(out)
    }
}

fn string_value(pair: &syn::MetaNameValue) -> syn::Result<String> {
    if let syn::Expr::Lit(lit) = &pair.value {
        if let syn::Lit::Str(lit) = &lit.lit {
            return Ok(lit.value());
        }
    }

    Err(syn::Error::new_spanned(
        &pair.value,
        "expected a string literal",
    ))
}
