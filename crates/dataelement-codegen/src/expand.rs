mod implementation;
mod interface;
mod persistence;
mod util;

use crate::schema::{Element, Error};

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;

/// One generated source file, named and rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// File name relative to the package directory
    pub file_name: String,

    /// Complete file contents
    pub contents: String,
}

const BANNER: &str = "// Generated file. Do not edit by hand.\n\n";

impl Artifact {
    fn render(file_name: String, tokens: TokenStream) -> Self {
        let mut contents = String::from(BANNER);
        contents.push_str(&tokens.to_string());
        contents.push('\n');

        Self {
            file_name,
            contents,
        }
    }
}

/// Expands an element into one token stream, for in-place emission next to
/// an annotated spec struct. All three surfaces share the module scope, so
/// no imports are emitted.
pub(crate) fn expand(element: &Element) -> Result<TokenStream, Error> {
    let interface = interface::expand(element)?;
    let implementation = implementation::expand(element)?;
    let persistence = element
        .collection
        .as_deref()
        .map(|collection| persistence::expand(element, collection))
        .transpose()?;

    Ok(quote! {
        #interface
        #implementation
        #persistence
    })
}

/// Expands an element into per-surface source files, for the standalone
/// driver. The files are sibling modules, so the later surfaces import what
/// they need from `super`.
pub(crate) fn artifacts(element: &Element) -> Result<Vec<Artifact>, Error> {
    let trait_ident = &element.ident;
    let impl_ident = &element.impl_ident;

    let interface = interface::expand(element)?;
    let implementation = implementation::expand(element)?;

    let mut out = vec![
        Artifact::render(file_name(trait_ident), interface),
        Artifact::render(
            file_name(impl_ident),
            quote! {
                use super::#trait_ident;

                #implementation
            },
        ),
    ];

    if let Some(collection) = element.collection.as_deref() {
        let persistence = persistence::expand(element, collection)?;
        out.push(Artifact::render(
            file_name(&element.handler_ident),
            quote! {
                use super::#impl_ident;

                #persistence
            },
        ));
    }

    Ok(out)
}

fn file_name(ident: &syn::Ident) -> String {
    format!("{}.rs", ident.to_string().to_snake_case())
}
