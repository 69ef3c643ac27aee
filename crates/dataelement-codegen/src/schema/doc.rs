use super::{Alias, Error, Field, FieldTy, Fields, Name, ValueExpr, Visibility};

use proc_macro2::Span;
use serde::{Deserialize, Serialize};

/// Wire shape of a structured schema document.
///
/// This is the schema front end's input and output: a document maps 1:1
/// onto the same field model the marker front end produces, so the resolver
/// and writers never branch on input origin. Parsing a serialized document
/// reproduces an equal model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDoc {
    /// Namespace the artifacts belong to; the standalone driver maps it to
    /// a directory path.
    pub package: String,

    /// Name of the generated interface type.
    pub element: String,

    /// Name of the generated implementation type; defaults to
    /// `{element}Implementation`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,

    /// Document-store collection; presence requests the persistence handler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDoc {
    pub(crate) name: String,

    #[serde(rename = "type")]
    pub(crate) ty: String,

    #[serde(rename = "docString", default, skip_serializing_if = "Option::is_none")]
    pub(crate) doc_string: Option<String>,

    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub(crate) matched: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) primitive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) nullable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) getter: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) setter: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) default: Option<ValueDoc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) visibility: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) alias: Vec<AliasDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasDoc {
    pub(crate) name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) getter: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) setter: Option<bool>,
}

/// JSON form of a default-value expression: a literal, or a constructor
/// path under a `call` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueDoc {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Call { call: String },
}

impl ElementDoc {
    /// Builds the field model described by the document.
    pub(crate) fn to_fields(&self) -> Result<Fields, Error> {
        let mut fields = Fields::new();

        for entry in &self.fields {
            fields.push(entry.to_field()?)?;
        }

        Ok(fields)
    }

    /// Serializes a field model back into document form. Reparsing the
    /// result reproduces an equal model.
    pub(crate) fn from_fields(
        package: &str,
        element: &str,
        implementation: Option<&str>,
        collection: Option<&str>,
        fields: &Fields,
    ) -> Result<Self, Error> {
        Ok(Self {
            package: package.to_string(),
            element: element.to_string(),
            implementation: implementation.map(str::to_string),
            collection: collection.map(str::to_string),
            fields: fields
                .iter()
                .map(FieldDoc::from_field)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl FieldDoc {
    fn to_field(&self) -> Result<Field, Error> {
        let ty = FieldTy::from_name(&self.ty);

        // An explicit primitive flag must agree with the parsed type; the
        // flag distinguishes storage kinds, it does not coerce them.
        if let Some(primitive) = self.primitive {
            if primitive != ty.is_primitive() {
                return Err(Error::InvalidFieldSpec(format!(
                    "field `{}` is marked primitive={primitive} but has type `{}`",
                    self.name, self.ty
                )));
            }
        }

        let mut field = Field::new(Name::from_str(&self.name, Span::call_site())?, ty);
        field.doc = self.doc_string.clone();
        field.matched = self.matched.unwrap_or(true);
        field.nullable = self.nullable.unwrap_or(false);
        field.getter = self.getter.unwrap_or(true);
        field.setter = self.setter.unwrap_or(true);

        if let Some(keyword) = &self.visibility {
            field.vis = Visibility::from_keyword(keyword)?;
        }

        if let Some(default) = &self.default {
            field.default_value = Some(default.to_value()?);
        }

        for alias in &self.alias {
            field.aliases.push(Alias {
                name: Name::from_str(&alias.name, Span::call_site())?,
                getter: alias.getter.unwrap_or(field.getter),
                setter: alias.setter.unwrap_or(field.setter),
            });
        }

        field.validate()?;
        Ok(field)
    }

    fn from_field(field: &Field) -> Result<Self, Error> {
        let default = field
            .default_value
            .as_ref()
            .map(|value| ValueDoc::from_value(&field.name.raw, value))
            .transpose()?;

        Ok(Self {
            name: field.name.raw.clone(),
            ty: field.ty.display_name().to_string(),
            doc_string: field.doc.clone(),
            matched: Some(field.matched),
            primitive: Some(field.is_primitive()),
            nullable: Some(field.nullable),
            getter: Some(field.getter),
            setter: Some(field.setter),
            default,
            visibility: Some(field.vis.keyword().to_string()),
            alias: field
                .aliases
                .iter()
                .map(|alias| AliasDoc {
                    name: alias.name.raw.clone(),
                    getter: Some(alias.getter),
                    setter: Some(alias.setter),
                })
                .collect(),
        })
    }
}

impl ValueDoc {
    fn to_value(&self) -> Result<ValueExpr, Error> {
        match self {
            Self::Bool(value) => Ok(ValueExpr::Bool(*value)),
            Self::Int(value) => Ok(ValueExpr::Int(*value)),
            Self::Float(value) => Ok(ValueExpr::Float(*value)),
            Self::Str(value) => Ok(ValueExpr::Str(value.clone())),
            Self::Call { call } => ValueExpr::from_call(call),
        }
    }

    fn from_value(field: &str, value: &ValueExpr) -> Result<Self, Error> {
        match value {
            ValueExpr::Bool(value) => Ok(Self::Bool(*value)),
            ValueExpr::Int(value) => Ok(Self::Int(*value)),
            ValueExpr::Float(value) => Ok(Self::Float(*value)),
            ValueExpr::Str(value) => Ok(Self::Str(value.clone())),
            // Documents carry argument-less constructor paths only; a
            // constructor call with arguments has no document form, and
            // dropping the arguments would change the default.
            ValueExpr::Construct { path, args } if args.is_empty() => {
                Ok(Self::Call { call: path.clone() })
            }
            ValueExpr::Construct { path, .. } => Err(Error::InvalidFieldSpec(format!(
                "default `{path}(...)` of field `{field}` takes arguments, \
                 which a schema document cannot express"
            ))),
        }
    }
}
