use super::{ElementAttr, ElementDoc, Error, ErrorSet, Field, Fields};

use proc_macro2::Span;
use quote::format_ident;

/// A data element to generate artifacts for, independent of whether it was
/// collected from an annotated struct or a schema document.
///
/// `fields` holds the spec-declared fields only; callers run the resolver to
/// fold in the baseline before handing the element to the writers.
#[derive(Debug)]
pub(crate) struct Element {
    /// Visibility of the generated items
    pub(crate) vis: syn::Visibility,

    /// Interface trait name
    pub(crate) ident: syn::Ident,

    /// Implementation struct name
    pub(crate) impl_ident: syn::Ident,

    /// Persistence handler name; generated only when a collection is set
    pub(crate) handler_ident: syn::Ident,

    /// Document-store collection backing the persistence handler
    pub(crate) collection: Option<String>,

    /// Spec-declared fields, in declaration order
    pub(crate) fields: Fields,
}

impl Element {
    /// Collects an element from an annotated spec struct.
    ///
    /// Field errors accumulate so one pass reports every invalid field
    /// rather than stopping at the first.
    pub(crate) fn from_ast(attr: &ElementAttr, item: &syn::ItemStruct) -> syn::Result<Self> {
        let Some((name, name_span)) = &attr.name else {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "missing a value for the element `name`",
            ));
        };

        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "data element specs cannot be generic",
            ));
        }

        let mut fields = Fields::new();
        let mut errs = ErrorSet::new();

        match &item.fields {
            syn::Fields::Named(named) => {
                for field in &named.named {
                    match Field::from_ast(field) {
                        Ok(collected) => {
                            let span = collected.name.ident.span();
                            if let Err(err) = fields.push(collected) {
                                errs.push(syn::Error::new(span, err.to_string()));
                            }
                        }
                        Err(err) => errs.push(err),
                    }
                }
            }
            // A unit spec declares no fields of its own and relies entirely
            // on the baseline.
            syn::Fields::Unit => {}
            syn::Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "data element spec fields must be named",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Self::named(
            item.vis.clone(),
            name,
            *name_span,
            attr.implementation.as_deref(),
            attr.collection.clone(),
            fields,
        )
        .map_err(|err| syn::Error::new(*name_span, err.to_string()))
    }

    /// Collects an element from a parsed schema document.
    pub(crate) fn from_doc(doc: &ElementDoc) -> Result<Self, Error> {
        Self::named(
            syn::Visibility::Public(Default::default()),
            &doc.element,
            Span::call_site(),
            doc.implementation.as_deref(),
            doc.collection.clone(),
            doc.to_fields()?,
        )
    }

    fn named(
        vis: syn::Visibility,
        name: &str,
        span: Span,
        implementation: Option<&str>,
        collection: Option<String>,
        fields: Fields,
    ) -> Result<Self, Error> {
        let ident = type_ident(name, span)?;

        let impl_ident = match implementation {
            Some(name) => type_ident(name, span)?,
            None => format_ident!("{}Implementation", ident),
        };

        let handler_ident = format_ident!("{}PersistenceHandler", ident);

        Ok(Self {
            vis,
            ident,
            impl_ident,
            handler_ident,
            collection,
            fields,
        })
    }
}

fn type_ident(name: &str, span: Span) -> Result<syn::Ident, Error> {
    syn::parse_str::<syn::Ident>(name)
        .map(|ident| syn::Ident::new(&ident.to_string(), span))
        .map_err(|_| Error::Spec(format!("invalid element name `{name}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(attr: proc_macro2::TokenStream, item: proc_macro2::TokenStream) -> syn::Result<Element> {
        let attr: ElementAttr = syn::parse2(attr)?;
        let item: syn::ItemStruct = syn::parse2(item)?;
        Element::from_ast(&attr, &item)
    }

    #[test]
    fn derives_companion_names() {
        let element = element(
            quote::quote!(name = "Person", collection = "people"),
            quote::quote! {
                pub struct PersonSpec {
                    pub test: String,
                }
            },
        )
        .unwrap();

        assert_eq!(element.ident, "Person");
        assert_eq!(element.impl_ident, "PersonImplementation");
        assert_eq!(element.handler_ident, "PersonPersistenceHandler");
        assert_eq!(element.collection.as_deref(), Some("people"));
        assert_eq!(element.fields.len(), 1);
    }

    #[test]
    fn explicit_implementation_name_wins() {
        let element = element(
            quote::quote!(name = "Person", implementation = "PersonData"),
            quote::quote!(pub struct PersonSpec;),
        )
        .unwrap();

        assert_eq!(element.impl_ident, "PersonData");
    }

    #[test]
    fn unit_specs_are_allowed() {
        let element = element(
            quote::quote!(name = "Empty"),
            quote::quote!(pub struct EmptySpec;),
        )
        .unwrap();

        assert!(element.fields.is_empty());
        assert!(element.collection.is_none());
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = element(
            quote::quote!(collection = "people"),
            quote::quote!(pub struct PersonSpec;),
        )
        .unwrap_err();

        assert!(err
            .to_string()
            .contains("missing a value for the element `name`"));
    }

    #[test]
    fn tuple_specs_are_rejected() {
        let err = element(
            quote::quote!(name = "Point"),
            quote::quote!(pub struct PointSpec(f64, f64);),
        )
        .unwrap_err();

        assert!(err.to_string().contains("must be named"));
    }

    #[test]
    fn field_errors_accumulate() {
        let err = element(
            quote::quote!(name = "Broken"),
            quote::quote! {
                pub struct BrokenSpec {
                    pub a: Option<i64>,
                    pub b: Option<bool>,
                }
            },
        )
        .unwrap_err();

        assert_eq!(err.into_iter().count(), 2);
    }
}
