use super::util;
use crate::schema::{Element, Error, Field};

use proc_macro2::TokenStream;
use quote::quote;

/// Emits the implementation struct: storage slots at their declared
/// visibility, constructors, inherent accessors, matched-field equality and
/// hashing, JSON conversion, and the interface trait impl.
pub(super) fn expand(element: &Element) -> Result<TokenStream, Error> {
    let vis = &element.vis;
    let impl_ident = &element.impl_ident;
    let rt = util::runtime();

    let slots = slots(element)?;
    let constructors = constructors(element)?;
    let accessors = accessors(element)?;
    let json = json_methods(element);
    let equality = equality(element);
    let hashing = hashing(element);
    let trait_impl = trait_impl(element)?;

    let doc = format!(" Concrete state of the `{}` data element.", element.ident);

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, #rt::serde::Serialize, #rt::serde::Deserialize)]
        #[serde(crate = "::dataelement::serde")]
        #vis struct #impl_ident {
            #(#slots)*
        }

        impl #impl_ident {
            #constructors
            #(#accessors)*
            #json
        }

        impl ::core::default::Default for #impl_ident {
            fn default() -> Self {
                Self::new()
            }
        }

        #equality
        #hashing
        #trait_impl
    })
}

fn slots(element: &Element) -> Result<Vec<TokenStream>, Error> {
    element
        .fields
        .iter()
        .map(|field| {
            let doc = util::doc_attr(field);
            let slot_vis = field.vis;
            let ident = &field.name.ident;
            let ty = field.ty.to_type()?;

            Ok(if field.nullable {
                quote!(#doc #slot_vis #ident: Option<#ty>,)
            } else {
                quote!(#doc #slot_vis #ident: #ty,)
            })
        })
        .collect()
}

fn constructors(element: &Element) -> Result<TokenStream, Error> {
    let vis = &element.vis;

    let defaults = element
        .fields
        .iter()
        .map(|field| {
            let ident = &field.name.ident;
            let init = util::default_init(field)?;
            Ok(quote!(#ident: #init,))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let mut params = vec![];
    let mut inits = vec![];

    for field in element.fields.iter() {
        let ident = &field.name.ident;

        // Identity is assigned at construction, never passed in.
        if util::is_identity(field) {
            let init = util::default_init(field)?;
            inits.push(quote!(#ident: #init,));
            continue;
        }

        let ty = field.ty.to_type()?;
        if field.nullable {
            params.push(quote!(#ident: Option<#ty>));
        } else {
            params.push(quote!(#ident: #ty));
        }
        inits.push(quote!(#ident,));
    }

    Ok(quote! {
        /// Creates an element with every field at its declared default.
        #vis fn new() -> Self {
            Self {
                #(#defaults)*
            }
        }

        /// Creates an element from explicit values for every field except
        /// the identity, which is freshly assigned.
        #vis fn with_fields(#(#params),*) -> Self {
            Self {
                #(#inits)*
            }
        }
    })
}

fn accessors(element: &Element) -> Result<Vec<TokenStream>, Error> {
    let mut out = vec![];

    for field in element.fields.iter() {
        if util::is_identity(field) {
            let vis = &element.vis;
            let doc = util::doc_attr(field);
            let sig = util::getter_signature(&field.name.ident, field)?;
            let body = util::getter_body(field);
            out.push(quote! {
                #doc
                #vis #sig {
                    #body
                }
            });
            continue;
        }

        let slot_vis = field.vis;

        if field.getter {
            let doc = util::doc_attr(field);
            let sig = util::getter_signature(&field.name.ident, field)?;
            let body = util::getter_body(field);
            out.push(quote! {
                #doc
                #slot_vis #sig {
                    #body
                }
            });
        }

        if field.setter {
            let sig = util::setter_signature(&field.name.setter_ident(), field)?;
            let body = util::setter_body(field);
            out.push(quote! {
                #slot_vis #sig {
                    #body
                }
            });
        }

        for alias in &field.aliases {
            if alias.getter {
                let sig = util::getter_signature(&alias.name.ident, field)?;
                let body = util::getter_body(field);
                out.push(quote! {
                    #slot_vis #sig {
                        #body
                    }
                });
            }

            if alias.setter {
                let sig = util::setter_signature(&alias.name.setter_ident(), field)?;
                let body = util::setter_body(field);
                out.push(quote! {
                    #slot_vis #sig {
                        #body
                    }
                });
            }
        }
    }

    Ok(out)
}

fn json_methods(element: &Element) -> TokenStream {
    let vis = &element.vis;
    let rt = util::runtime();

    quote! {
        /// Serializes the element to a JSON string.
        #vis fn to_json(&self) -> Result<String, #rt::Error> {
            #rt::serde_json::to_string(self).map_err(#rt::Error::from)
        }

        /// Restores an element from a JSON string.
        #vis fn from_json(src: &str) -> Result<Self, #rt::Error> {
            #rt::serde_json::from_str(src).map_err(#rt::Error::from)
        }
    }
}

/// Equality covers matched fields only; floats compare by bit pattern so
/// equality stays consistent with hashing.
fn equality(element: &Element) -> TokenStream {
    let impl_ident = &element.impl_ident;

    let comparisons: Vec<_> = element
        .fields
        .iter()
        .filter(|field| field.matched)
        .map(|field| {
            let ident = &field.name.ident;
            if is_float(field) {
                quote!(self.#ident.to_bits() == other.#ident.to_bits())
            } else {
                quote!(self.#ident == other.#ident)
            }
        })
        .collect();

    let body = if comparisons.is_empty() {
        quote!(true)
    } else {
        quote!(#(#comparisons)&&*)
    };

    quote! {
        impl ::core::cmp::PartialEq for #impl_ident {
            fn eq(&self, other: &Self) -> bool {
                #body
            }
        }
    }
}

fn hashing(element: &Element) -> TokenStream {
    let impl_ident = &element.impl_ident;

    let statements: Vec<_> = element
        .fields
        .iter()
        .filter(|field| field.matched)
        .map(|field| {
            let ident = &field.name.ident;
            if is_float(field) {
                quote!(::core::hash::Hash::hash(&self.#ident.to_bits(), state);)
            } else {
                quote!(::core::hash::Hash::hash(&self.#ident, state);)
            }
        })
        .collect();

    quote! {
        impl ::core::hash::Hash for #impl_ident {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                #(#statements)*
            }
        }
    }
}

fn trait_impl(element: &Element) -> Result<TokenStream, Error> {
    let trait_ident = &element.ident;
    let impl_ident = &element.impl_ident;

    let mut methods = vec![];

    for field in element.fields.iter() {
        if util::is_identity(field) {
            let sig = util::getter_signature(&field.name.ident, field)?;
            let body = util::getter_body(field);
            methods.push(quote!(#sig { #body }));
            continue;
        }

        if !field.vis.is_public() {
            continue;
        }

        if field.getter {
            let sig = util::getter_signature(&field.name.ident, field)?;
            let body = util::getter_body(field);
            methods.push(quote!(#sig { #body }));
        }

        if field.setter {
            let sig = util::setter_signature(&field.name.setter_ident(), field)?;
            let body = util::setter_body(field);
            methods.push(quote!(#sig { #body }));
        }

        for alias in &field.aliases {
            if alias.getter {
                let sig = util::getter_signature(&alias.name.ident, field)?;
                let body = util::getter_body(field);
                methods.push(quote!(#sig { #body }));
            }

            if alias.setter {
                let sig = util::setter_signature(&alias.name.setter_ident(), field)?;
                let body = util::setter_body(field);
                methods.push(quote!(#sig { #body }));
            }
        }
    }

    Ok(quote! {
        impl #trait_ident for #impl_ident {
            #(#methods)*
        }
    })
}

fn is_float(field: &Field) -> bool {
    field.ty.as_primitive().is_some_and(|p| p.is_float())
}
