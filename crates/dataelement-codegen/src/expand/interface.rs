use super::util;
use crate::schema::{Element, Error};

use proc_macro2::TokenStream;
use quote::quote;

/// Emits the interface trait: the identity getter plus accessor pairs for
/// every public field. Non-public fields keep their accessors on the
/// implementation type only.
pub(super) fn expand(element: &Element) -> Result<TokenStream, Error> {
    let vis = &element.vis;
    let ident = &element.ident;
    let impl_ident = &element.impl_ident;

    let mut methods = vec![];

    for field in element.fields.iter() {
        if util::is_identity(field) {
            let doc = util::doc_attr(field);
            let sig = util::getter_signature(&field.name.ident, field)?;
            methods.push(quote!(#doc #sig;));
            continue;
        }

        if !field.vis.is_public() {
            continue;
        }

        if field.getter {
            let doc = util::doc_attr(field);
            let sig = util::getter_signature(&field.name.ident, field)?;
            methods.push(quote!(#doc #sig;));
        }

        if field.setter {
            let sig = util::setter_signature(&field.name.setter_ident(), field)?;
            methods.push(quote!(#sig;));
        }

        for alias in &field.aliases {
            if alias.getter {
                let sig = util::getter_signature(&alias.name.ident, field)?;
                methods.push(quote!(#sig;));
            }

            if alias.setter {
                let sig = util::setter_signature(&alias.name.setter_ident(), field)?;
                methods.push(quote!(#sig;));
            }
        }
    }

    let doc = format!(" Accessor surface of the `{impl_ident}` data element.");

    Ok(quote! {
        #[doc = #doc]
        #vis trait #ident {
            #(#methods)*
        }
    })
}
