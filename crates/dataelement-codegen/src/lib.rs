//! Code generation for data elements.
//!
//! Two front ends feed one pipeline. The marker front end collects a field
//! model from an annotated spec struct and expands in place; the schema
//! front end collects the same model from a JSON document and renders
//! stand-alone source files. Both resolve the spec against the default
//! baseline before the writers run.

mod expand;
mod schema;

pub use expand::Artifact;
pub use schema::{ElementDoc, Error};

use schema::{resolve, Element, ElementAttr};

use proc_macro2::TokenStream;
use quote::quote;

/// Build-time driver: expands an annotated spec struct into the spec struct
/// itself (stripped of helper attributes) plus the generated interface,
/// implementation, and optional persistence handler.
pub fn generate(args: TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    let attr: ElementAttr = syn::parse2(args)?;
    let item: syn::Item = syn::parse2(input)?;

    let item = match item {
        syn::Item::Struct(item) => item,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "data element specs must be structs",
            ));
        }
    };

    let mut element = Element::from_ast(&attr, &item)?;
    element.fields = resolve(&element.fields)
        .map_err(|err| syn::Error::new_spanned(&item.ident, err.to_string()))?;

    let spec = strip_field_attrs(item);
    let generated = expand::expand(&element)
        .map_err(|err| syn::Error::new_spanned(&spec.ident, err.to_string()))?;

    Ok(quote! {
        #spec
        #generated
    })
}

/// Parses a schema document.
pub fn parse_document(src: &str) -> Result<ElementDoc, Error> {
    Ok(serde_json::from_str(src)?)
}

/// Validates a document by building its field model and serializing the
/// model back out, with every implicit attribute made explicit. Reparsing
/// the result reproduces an equal model.
pub fn normalize_document(doc: &ElementDoc) -> Result<ElementDoc, Error> {
    let fields = doc.to_fields()?;

    ElementDoc::from_fields(
        &doc.package,
        &doc.element,
        doc.implementation.as_deref(),
        doc.collection.as_deref(),
        &fields,
    )
}

/// Standalone driver: renders a schema document into one source file per
/// generated surface.
pub fn generate_artifacts(doc: &ElementDoc) -> Result<Vec<Artifact>, Error> {
    let mut element = Element::from_doc(doc)?;
    element.fields = resolve(&element.fields)?;
    expand::artifacts(&element)
}

/// Drops the `#[field(...)]` helper attributes so the re-emitted spec
/// struct compiles without the macro in scope.
fn strip_field_attrs(mut item: syn::ItemStruct) -> syn::ItemStruct {
    if let syn::Fields::Named(named) = &mut item.fields {
        for field in &mut named.named {
            field.attrs.retain(|attr| !attr.path().is_ident("field"));
        }
    }

    item
}
