use super::Error;

use heck::ToSnakeCase;
use proc_macro2::Span;
use quote::format_ident;

/// A declared name plus the snake_case identifier derived from it.
///
/// The raw spelling is what the spec author wrote (a struct member or a
/// schema document entry); the identifier is what accessor and query
/// methods are named after.
#[derive(Debug, Clone)]
pub(crate) struct Name {
    /// Name as declared on the specification input
    pub(crate) raw: String,

    /// snake_case identifier used for generated methods and slots
    pub(crate) ident: syn::Ident,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident) -> syn::Result<Self> {
        Self::from_str(&ident.to_string(), ident.span())
            .map_err(|err| syn::Error::new(ident.span(), err.to_string()))
    }

    pub(crate) fn from_str(src: &str, span: Span) -> Result<Self, Error> {
        let snake = src.trim_start_matches("r#").to_snake_case();

        // Names that collide with keywords become raw identifiers. Spellings
        // with no identifier form at all (empty, `self`, `crate`, ...) are
        // spec errors rather than valid field names.
        let mut ident = syn::parse_str::<syn::Ident>(&snake)
            .or_else(|_| syn::parse_str::<syn::Ident>(&format!("r#{snake}")))
            .map_err(|_| Error::Spec(format!("invalid field name `{src}`")))?;
        ident.set_span(span);

        Ok(Self {
            raw: src.to_string(),
            ident,
        })
    }

    /// Names fixed by the generator itself, spelled as plain identifiers.
    pub(crate) fn fixed(src: &str) -> Self {
        Self {
            raw: src.to_string(),
            ident: format_ident!("{}", src),
        }
    }

    pub(crate) fn setter_ident(&self) -> syn::Ident {
        format_ident!("set_{}", self.ident)
    }

    pub(crate) fn find_by_ident(&self) -> syn::Ident {
        format_ident!("find_by_{}", self.ident)
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.ident == other.ident
    }
}

impl Eq for Name {}
