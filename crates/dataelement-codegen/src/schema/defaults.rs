use super::{Field, FieldTy, Fields, Name, Primitive, ValueExpr, Visibility};

/// The fixed baseline every generated element receives.
///
/// The baseline gives every element a uniform identity and metadata surface
/// without requiring the spec author to declare it. A spec field sharing a
/// name with a baseline entry replaces it wholesale during resolution.
pub(crate) fn default_fields() -> Fields {
    let mut fields = Fields::new();

    let mut uuid = named(
        "uuid",
        "::dataelement::Uuid",
        " A unique private identifier assigned to the element when it is\n constructed. It can be read but never reassigned.",
    );
    uuid.setter = false;
    uuid.matched = false;
    uuid.vis = Visibility::Crate;
    uuid.default_value = Some(ValueExpr::Construct {
        path: "::dataelement::Uuid::new_v4".to_string(),
        args: vec![],
    });
    push(&mut fields, uuid);

    let mut id = primitive(
        "id",
        Primitive::I64,
        " A public identifier for the element. This is a common id that may\n or may not be unique to this element.",
    );
    id.default_value = Some(ValueExpr::Int(0));
    push(&mut fields, id);

    let mut name = named("name", "String", " A simple name for the data.");
    name.default_value = Some(ValueExpr::Str("name".to_string()));
    push(&mut fields, name);

    let mut description = named(
        "description",
        "String",
        " A simple description of the data.",
    );
    description.default_value = Some(ValueExpr::Str("description".to_string()));
    push(&mut fields, description);

    let mut comment = named(
        "comment",
        "String",
        " A comment that annotates the data in a meaningful way.",
    );
    comment.default_value = Some(ValueExpr::Str("no comment".to_string()));
    push(&mut fields, comment);

    let mut context = named(
        "context",
        "String",
        " The context (a tag) in which the data should be considered.",
    );
    context.default_value = Some(ValueExpr::Str("default".to_string()));
    push(&mut fields, context);

    let mut required = primitive(
        "required",
        Primitive::Bool,
        " True if the element should be regarded by clients as required.",
    );
    required.default_value = Some(ValueExpr::Bool(false));
    push(&mut fields, required);

    let mut secret = primitive(
        "secret",
        Primitive::Bool,
        " True if the element should be regarded by clients as secret, such\n as for passwords.",
    );
    secret.default_value = Some(ValueExpr::Bool(false));
    push(&mut fields, secret);

    let mut validator = named(
        "validator",
        "::dataelement::Validator",
        " The validator used to check the correctness of the data. Not set\n by default.",
    );
    validator.nullable = true;
    push(&mut fields, validator);

    fields
}

fn named(name: &str, ty: &str, doc: &str) -> Field {
    let mut field = Field::new(Name::fixed(name), FieldTy::Named(ty.to_string()));
    field.doc = Some(doc.to_string());
    field
}

fn primitive(name: &str, kind: Primitive, doc: &str) -> Field {
    let mut field = Field::new(Name::fixed(name), FieldTy::Primitive(kind));
    field.doc = Some(doc.to_string());
    field
}

fn push(fields: &mut Fields, field: Field) {
    // Baseline names are fixed and unique; a collision here is a bug in the
    // baseline itself.
    fields
        .push(field)
        .expect("default field names must be unique");
}
