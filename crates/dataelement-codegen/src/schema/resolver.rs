use super::{default_fields, Error, Fields, Name};

use indexmap::IndexMap;

/// Merges the default baseline with the spec-declared fields.
///
/// A spec field that shares a name with a baseline entry replaces it
/// wholesale (type, default, visibility and all), keeping the baseline's
/// position; names the baseline does not know append in declaration order.
/// There is no attribute-level merging.
pub(crate) fn resolve(spec: &Fields) -> Result<Fields, Error> {
    let mut resolved = default_fields();

    // Overrides first, so a replaced field keeps its baseline position;
    // the remaining spec fields then append in declaration order.
    for field in spec.iter() {
        if resolved.get(&field.name.raw).is_some() {
            resolved.substitute(field.clone());
        }
    }
    resolved.collect(spec);

    let mut idents = IndexMap::new();
    for field in resolved.iter() {
        field.validate()?;

        claim_ident(&mut idents, &field.name)?;
        for alias in &field.aliases {
            claim_ident(&mut idents, &alias.name)?;
        }
    }

    Ok(resolved)
}

/// Name uniqueness alone does not guarantee unique generated code: two
/// distinct spellings (or an alias) can snake_case to the same identifier,
/// which would emit colliding slots and accessors.
fn claim_ident(taken: &mut IndexMap<String, String>, name: &Name) -> Result<(), Error> {
    let ident = name.ident.to_string();

    if let Some(prior) = taken.insert(ident.clone(), name.raw.clone()) {
        return Err(Error::Spec(format!(
            "field names `{prior}` and `{}` both map to the identifier `{ident}`",
            name.raw
        )));
    }

    Ok(())
}
