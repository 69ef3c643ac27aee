use super::{Error, FieldTy};

use proc_macro2::{Literal, TokenStream};
use quote::quote;

/// Closed form of a default-value expression.
///
/// Default values are literals or a constructor call, never opaque source
/// text, so the writers can validate and re-render them without parsing
/// arbitrary code.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueExpr {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Construct { path: String, args: Vec<ValueExpr> },
}

impl ValueExpr {
    /// Classifies a `#[field(default = ...)]` expression (marker front end).
    pub(crate) fn from_ast(expr: &syn::Expr) -> Result<Self, Error> {
        match expr {
            syn::Expr::Lit(lit) => Self::from_lit(&lit.lit),
            syn::Expr::Unary(unary) if matches!(unary.op, syn::UnOp::Neg(_)) => {
                match Self::from_ast(&unary.expr)? {
                    Self::Int(value) => Ok(Self::Int(-value)),
                    Self::Float(value) => Ok(Self::Float(-value)),
                    _ => Err(unsupported(expr)),
                }
            }
            syn::Expr::Call(call) => {
                let syn::Expr::Path(func) = &*call.func else {
                    return Err(unsupported(expr));
                };

                let args = call
                    .args
                    .iter()
                    .map(Self::from_ast)
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(Self::Construct {
                    path: quote!(#func).to_string().replace(' ', ""),
                    args,
                })
            }
            _ => Err(unsupported(expr)),
        }
    }

    /// Parses a schema-document constructor spelling, e.g.
    /// `"::dataelement::Uuid::new_v4"`.
    pub(crate) fn from_call(path: &str) -> Result<Self, Error> {
        syn::parse_str::<syn::Path>(path)
            .map_err(|_| Error::InvalidFieldSpec(format!("`{path}` is not a constructor path")))?;

        Ok(Self::Construct {
            path: path.to_string(),
            args: vec![],
        })
    }

    /// Renders the expression as an initializer for a field of type `ty`.
    pub(crate) fn to_tokens_for(&self, ty: &FieldTy) -> Result<TokenStream, Error> {
        match self {
            Self::Str(value) if !ty.is_primitive() => {
                // Reference targets convert from the literal (String and
                // friends); the struct-literal position pins the type.
                Ok(quote!(#value.into()))
            }
            Self::Int(value) if ty.as_primitive().is_some_and(|p| p.is_float()) => {
                let lit = Literal::f64_unsuffixed(*value as f64);
                Ok(quote!(#lit))
            }
            _ => self.render(),
        }
    }

    /// Plain rendering, used for constructor arguments.
    fn render(&self) -> Result<TokenStream, Error> {
        Ok(match self {
            Self::Bool(value) => quote!(#value),
            Self::Int(value) => {
                let lit = Literal::i64_unsuffixed(*value);
                quote!(#lit)
            }
            Self::Float(value) => {
                let lit = Literal::f64_unsuffixed(*value);
                quote!(#lit)
            }
            Self::Str(value) => quote!(#value),
            Self::Construct { path, args } => {
                let path: syn::Path = syn::parse_str(path).map_err(|_| {
                    Error::InvalidFieldSpec(format!("`{path}` is not a constructor path"))
                })?;
                let args = args
                    .iter()
                    .map(Self::render)
                    .collect::<Result<Vec<_>, _>>()?;

                quote!(#path(#(#args),*))
            }
        })
    }

    fn from_lit(lit: &syn::Lit) -> Result<Self, Error> {
        match lit {
            syn::Lit::Bool(value) => Ok(Self::Bool(value.value)),
            syn::Lit::Int(value) => value
                .base10_parse()
                .map(Self::Int)
                .map_err(|_| Error::InvalidFieldSpec("integer default out of range".to_string())),
            syn::Lit::Float(value) => value
                .base10_parse()
                .map(Self::Float)
                .map_err(|_| Error::InvalidFieldSpec("float default out of range".to_string())),
            syn::Lit::Str(value) => Ok(Self::Str(value.value())),
            _ => Err(Error::InvalidFieldSpec(
                "unsupported default value literal".to_string(),
            )),
        }
    }
}

fn unsupported(expr: &syn::Expr) -> Error {
    Error::InvalidFieldSpec(format!(
        "unsupported default value expression `{}`; expected a literal or constructor call",
        quote!(#expr)
    ))
}
