use super::Error;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

/// Declared visibility of a specification member.
///
/// Carried on every field from the first parse step so the writers never
/// have to infer it; the generated storage slot and accessor pair reuse it
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Visibility {
    #[default]
    Public,
    Crate,
    Super,
    Private,
}

impl Visibility {
    pub(crate) fn from_ast(vis: &syn::Visibility) -> Self {
        match vis {
            syn::Visibility::Public(_) => Self::Public,
            syn::Visibility::Restricted(restricted) => {
                if restricted.path.is_ident("crate") {
                    Self::Crate
                } else if restricted.path.is_ident("super") {
                    Self::Super
                } else {
                    // pub(self) and pub(in ...) restrict at least as far as
                    // the defining module.
                    Self::Private
                }
            }
            syn::Visibility::Inherited => Self::Private,
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Result<Self, Error> {
        match keyword {
            "public" => Ok(Self::Public),
            "crate" => Ok(Self::Crate),
            "super" => Ok(Self::Super),
            "private" => Ok(Self::Private),
            other => Err(Error::Spec(format!(
                "unknown visibility `{other}`; expected one of public, crate, super, private"
            ))),
        }
    }

    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Crate => "crate",
            Self::Super => "super",
            Self::Private => "private",
        }
    }

    pub(crate) fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl ToTokens for Visibility {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Public => quote!(pub),
            Self::Crate => quote!(pub(crate)),
            Self::Super => quote!(pub(super)),
            Self::Private => quote!(),
        });
    }
}
