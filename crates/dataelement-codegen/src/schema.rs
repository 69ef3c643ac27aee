mod alias;
pub(crate) use alias::Alias;

mod defaults;
pub(crate) use defaults::default_fields;

mod doc;
pub use doc::{AliasDoc, ElementDoc, FieldDoc, ValueDoc};

mod element;
pub(crate) use element::Element;

mod element_attr;
pub(crate) use element_attr::ElementAttr;

mod error;
pub use error::Error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod fields;
pub(crate) use fields::Fields;

mod name;
pub(crate) use name::Name;

mod resolver;
pub(crate) use resolver::resolve;

mod ty;
pub(crate) use ty::{FieldTy, Primitive};

mod value;
pub(crate) use value::ValueExpr;

mod visibility;
pub(crate) use visibility::Visibility;
