use crate::schema::{Error, Field, Primitive};

use proc_macro2::TokenStream;
use quote::quote;

/// Path the generated code reaches the runtime crate through.
pub(super) fn runtime() -> TokenStream {
    quote!(::dataelement)
}

/// The baseline identity field gets fixed treatment everywhere: a by-value
/// getter on the interface and the public implementation surface, no setter,
/// no constructor parameter.
pub(super) fn is_identity(field: &Field) -> bool {
    field.name.raw == "uuid"
}

/// `#[doc = ...]` attribute carrying the field's documentation, if any.
pub(super) fn doc_attr(field: &Field) -> TokenStream {
    match &field.doc {
        Some(doc) => quote!(#[doc = #doc]),
        None => quote!(),
    }
}

/// Getter signature, without body. Primitives return by value, reference
/// types by shared borrow, nullable fields as `Option<&T>`.
pub(super) fn getter_signature(name: &syn::Ident, field: &Field) -> Result<TokenStream, Error> {
    let ty = field.ty.to_type()?;

    Ok(if is_identity(field) {
        quote!(fn #name(&self) -> #ty)
    } else if field.nullable {
        quote!(fn #name(&self) -> Option<&#ty>)
    } else if field.is_primitive() {
        quote!(fn #name(&self) -> #ty)
    } else {
        quote!(fn #name(&self) -> &#ty)
    })
}

/// Getter body matching [`getter_signature`].
pub(super) fn getter_body(field: &Field) -> TokenStream {
    let ident = &field.name.ident;

    if is_identity(field) {
        quote!(self.#ident.clone())
    } else if field.nullable {
        quote!(self.#ident.as_ref())
    } else if field.is_primitive() {
        quote!(self.#ident)
    } else {
        quote!(&self.#ident)
    }
}

/// Setter signature, without body.
pub(super) fn setter_signature(name: &syn::Ident, field: &Field) -> Result<TokenStream, Error> {
    let ty = field.ty.to_type()?;

    Ok(if field.nullable {
        quote!(fn #name(&mut self, value: Option<#ty>))
    } else {
        quote!(fn #name(&mut self, value: #ty))
    })
}

/// Setter body matching [`setter_signature`].
pub(super) fn setter_body(field: &Field) -> TokenStream {
    let ident = &field.name.ident;
    quote!(self.#ident = value;)
}

/// Initializer used by the no-argument constructor: the declared default,
/// `None` for nullable fields, a zero value for primitives, and
/// `Default::default()` for everything else.
pub(super) fn default_init(field: &Field) -> Result<TokenStream, Error> {
    if let Some(value) = &field.default_value {
        let tokens = value.to_tokens_for(&field.ty)?;
        return Ok(if field.nullable {
            quote!(Some(#tokens))
        } else {
            tokens
        });
    }

    Ok(if field.nullable {
        quote!(None)
    } else {
        match field.ty.as_primitive() {
            Some(primitive) => zero_value(primitive),
            None => quote!(::core::default::Default::default()),
        }
    })
}

fn zero_value(primitive: Primitive) -> TokenStream {
    match primitive {
        Primitive::Bool => quote!(false),
        Primitive::Char => quote!('\0'),
        Primitive::F32 | Primitive::F64 => quote!(0.0),
        _ => quote!(0),
    }
}
