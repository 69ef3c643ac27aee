use super::{Alias, Error, FieldTy, Name, ValueExpr, Visibility};

/// One property of a generated data element.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Field {
    /// Field name
    pub(crate) name: Name,

    /// Semantic type descriptor
    pub(crate) ty: FieldTy,

    /// Documentation attached to the originating member, preserved verbatim
    pub(crate) doc: Option<String>,

    /// Initializer applied by the no-argument constructor
    pub(crate) default_value: Option<ValueExpr>,

    /// True if the storage slot is `Option<T>`
    pub(crate) nullable: bool,

    /// False excludes the field from generated equality and hashing
    pub(crate) matched: bool,

    /// Emit a getter
    pub(crate) getter: bool,

    /// Emit a setter
    pub(crate) setter: bool,

    /// Declared visibility of the originating member
    pub(crate) vis: Visibility,

    /// Additional accessor names over the same slot
    pub(crate) aliases: Vec<Alias>,
}

impl Field {
    pub(crate) fn new(name: Name, ty: FieldTy) -> Self {
        Self {
            name,
            ty,
            doc: None,
            default_value: None,
            nullable: false,
            matched: true,
            getter: true,
            setter: true,
            vis: Visibility::Public,
            aliases: vec![],
        }
    }

    pub(crate) fn is_primitive(&self) -> bool {
        self.ty.is_primitive()
    }

    /// Checks the cross-attribute invariants. Runs on construction for the
    /// marker path and again on every resolved field.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.nullable && self.is_primitive() {
            return Err(Error::InvalidFieldSpec(format!(
                "field `{}` cannot be both nullable and primitive",
                self.name.raw
            )));
        }

        Ok(())
    }

    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "data element spec fields must be named",
            ));
        };

        let (ty, mut nullable) = match option_inner(&field.ty) {
            Some(inner) => (FieldTy::from_ast(inner), true),
            None => (FieldTy::from_ast(&field.ty), false),
        };

        let mut out = Self::new(Name::from_ident(ident)?, ty);
        out.vis = Visibility::from_ast(&field.vis);
        out.doc = doc_string(&field.attrs);

        let mut alias_specs = vec![];

        for attr in &field.attrs {
            if !attr.path().is_ident("field") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    let expr: syn::Expr = meta.value()?.parse()?;
                    let value = ValueExpr::from_ast(&expr)
                        .map_err(|err| syn::Error::new_spanned(&expr, err.to_string()))?;
                    out.default_value = Some(value);
                    Ok(())
                } else if meta.path.is_ident("nullable") {
                    nullable = true;
                    Ok(())
                } else if meta.path.is_ident("no_match") {
                    out.matched = false;
                    Ok(())
                } else if meta.path.is_ident("getter") {
                    let lit: syn::LitBool = meta.value()?.parse()?;
                    out.getter = lit.value;
                    Ok(())
                } else if meta.path.is_ident("setter") {
                    let lit: syn::LitBool = meta.value()?.parse()?;
                    out.setter = lit.value;
                    Ok(())
                } else if meta.path.is_ident("alias") {
                    if let Ok(value) = meta.value() {
                        let lit: syn::LitStr = value.parse()?;
                        let name = Name::from_str(&lit.value(), lit.span())
                            .map_err(|err| syn::Error::new(lit.span(), err.to_string()))?;
                        alias_specs.push(AliasSpec {
                            name,
                            getter: None,
                            setter: None,
                        });
                        return Ok(());
                    }

                    let mut spec = AliasSpec {
                        name: Name::from_ident(ident)?,
                        getter: None,
                        setter: None,
                    };
                    let mut named = false;

                    meta.parse_nested_meta(|nested| {
                        if nested.path.is_ident("name") {
                            let lit: syn::LitStr = nested.value()?.parse()?;
                            spec.name = Name::from_str(&lit.value(), lit.span())
                                .map_err(|err| syn::Error::new(lit.span(), err.to_string()))?;
                            named = true;
                            Ok(())
                        } else if nested.path.is_ident("getter") {
                            let lit: syn::LitBool = nested.value()?.parse()?;
                            spec.getter = Some(lit.value);
                            Ok(())
                        } else if nested.path.is_ident("setter") {
                            let lit: syn::LitBool = nested.value()?.parse()?;
                            spec.setter = Some(lit.value);
                            Ok(())
                        } else {
                            Err(nested.error("unknown alias attribute"))
                        }
                    })?;

                    if !named {
                        return Err(meta.error("alias requires a `name`"));
                    }

                    alias_specs.push(spec);
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute"))
                }
            })?;
        }

        out.nullable = nullable;

        // Alias mutability defaults to mirroring the primary field, which
        // is only known once every attribute is parsed.
        out.aliases = alias_specs
            .into_iter()
            .map(|spec| Alias {
                name: spec.name,
                getter: spec.getter.unwrap_or(out.getter),
                setter: spec.setter.unwrap_or(out.setter),
            })
            .collect();

        out.validate()
            .map_err(|err| syn::Error::new_spanned(field, err.to_string()))?;

        Ok(out)
    }
}

struct AliasSpec {
    name: Name,
    getter: Option<bool>,
    setter: Option<bool>,
}

/// Unwraps `Option<T>`, the marker spelling for a nullable field.
fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first() {
        Some(syn::GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Collects `///` comments into a single verbatim doc string.
fn doc_string(attrs: &[syn::Attribute]) -> Option<String> {
    let mut lines = vec![];

    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }

        if let syn::Meta::NameValue(meta) = &attr.meta {
            if let syn::Expr::Lit(lit) = &meta.value {
                if let syn::Lit::Str(lit) = &lit.lit {
                    lines.push(lit.value());
                }
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
