use super::util;
use crate::schema::{Element, Error, Field};

use proc_macro2::TokenStream;
use quote::quote;

/// Emits the persistence handler: a store-generic type that saves elements
/// into a fixed collection and queries them back by field value.
pub(super) fn expand(element: &Element, collection: &str) -> Result<TokenStream, Error> {
    let vis = &element.vis;
    let handler = &element.handler_ident;
    let impl_ident = &element.impl_ident;
    let rt = util::runtime();

    let finders = element
        .fields
        .iter()
        .map(|field| {
            if is_identity_lookup(field) {
                find_one_by(element, field)
            } else {
                find_by(element, field)
            }
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let doc = format!(
        " Stores `{impl_ident}` elements in the `{collection}` collection of a\n document store."
    );

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug)]
        #vis struct #handler<S> {
            store: S,
        }

        impl<S> #handler<S>
        where
            S: #rt::DocumentStore,
        {
            #vis const COLLECTION: &'static str = #collection;

            #vis fn new(store: S) -> Self {
                Self { store }
            }

            /// Inserts the element, replacing any previously saved state
            /// under the same identity.
            #vis fn save(&self, element: &#impl_ident) -> Result<(), #rt::PersistenceError> {
                let key = element.uuid().to_string();
                let doc = #rt::serde_json::to_value(element)
                    .map_err(#rt::PersistenceError::Encode)?;
                self.store.upsert(Self::COLLECTION, &key, doc)
            }

            /// Removes every element from the collection.
            #vis fn clear(&self) -> Result<(), #rt::PersistenceError> {
                self.store.clear(Self::COLLECTION)
            }

            /// Streams every element in the collection.
            #vis fn find_all(
                &self,
            ) -> Result<
                impl Iterator<Item = Result<#impl_ident, #rt::PersistenceError>>,
                #rt::PersistenceError,
            > {
                Ok(self.store.scan(Self::COLLECTION)?.map(|item| {
                    item.and_then(|doc| {
                        #rt::serde_json::from_value(doc)
                            .map_err(#rt::PersistenceError::Decode)
                    })
                }))
            }

            #(#finders)*
        }
    })
}

/// The identity fields get single-result lookups instead of the streaming
/// form: `uuid` is unique by construction and `id` names one element in
/// practice, so callers want the hit, not a sequence.
fn is_identity_lookup(field: &Field) -> bool {
    matches!(field.name.raw.as_str(), "uuid" | "id")
}

/// Single-result identity lookup: the first stored element whose attribute
/// equals the given value, or `None`.
fn find_one_by(element: &Element, field: &Field) -> Result<TokenStream, Error> {
    let vis = &element.vis;
    let impl_ident = &element.impl_ident;
    let rt = util::runtime();

    let name = field.name.find_by_ident();
    let key = field.name.ident.to_string();
    let (param, probe) = probe_input(field)?;

    let doc = format!(
        " Looks up the element whose `{}` equals the given value.",
        field.name.raw
    );

    Ok(quote! {
        #[doc = #doc]
        #vis fn #name(
            &self,
            value: #param,
        ) -> Result<Option<#impl_ident>, #rt::PersistenceError> {
            let probe = #rt::serde_json::to_value(#probe)
                .map_err(#rt::PersistenceError::Encode)?;

            for item in self.store.scan(Self::COLLECTION)? {
                let doc = item?;
                if doc.get(#key) == Some(&probe) {
                    return #rt::serde_json::from_value(doc)
                        .map(Some)
                        .map_err(#rt::PersistenceError::Decode);
                }
            }

            Ok(None)
        }
    })
}

/// Streaming lookup over every matching element.
fn find_by(element: &Element, field: &Field) -> Result<TokenStream, Error> {
    let vis = &element.vis;
    let impl_ident = &element.impl_ident;
    let rt = util::runtime();

    let name = field.name.find_by_ident();
    let key = field.name.ident.to_string();
    let (param, probe) = probe_input(field)?;

    let doc = format!(
        " Streams every element whose `{}` equals the given value.",
        field.name.raw
    );

    Ok(quote! {
        #[doc = #doc]
        #vis fn #name(
            &self,
            value: #param,
        ) -> Result<
            impl Iterator<Item = Result<#impl_ident, #rt::PersistenceError>>,
            #rt::PersistenceError,
        > {
            let probe = #rt::serde_json::to_value(#probe)
                .map_err(#rt::PersistenceError::Encode)?;

            Ok(self
                .store
                .scan(Self::COLLECTION)?
                .filter_map(move |item| match item {
                    Ok(doc) => {
                        if doc.get(#key) == Some(&probe) {
                            Some(
                                #rt::serde_json::from_value(doc)
                                    .map_err(#rt::PersistenceError::Decode),
                            )
                        } else {
                            None
                        }
                    }
                    Err(err) => Some(Err(err)),
                }))
        }
    })
}

/// Parameter type and probe expression for a query method. Queries compare
/// serialized attribute values, so the parameter only has to serialize the
/// same way the slot does.
fn probe_input(field: &Field) -> Result<(TokenStream, TokenStream), Error> {
    let ty = field.ty.to_type()?;

    Ok(if field.nullable {
        (quote!(Option<&#ty>), quote!(value))
    } else if field.is_primitive() {
        (quote!(#ty), quote!(value))
    } else {
        (quote!(&#ty), quote!(value))
    })
}
