use super::{Error, Field};

use indexmap::IndexMap;

/// Ordered, name-unique collection of [`Field`].
///
/// Insertion order is significant: it determines emitted member order, which
/// must be stable for reproducible output. Lookup by name is O(1).
#[derive(Debug, Clone, Default)]
pub(crate) struct Fields {
    entries: IndexMap<String, Field>,
}

impl Fields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Field> {
        self.entries.get(name)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Field> {
        self.entries.values()
    }

    /// Appends a newly collected field; duplicate names in one source are a
    /// spec error.
    pub(crate) fn push(&mut self, field: Field) -> Result<(), Error> {
        if self.entries.contains_key(&field.name.raw) {
            return Err(Error::Spec(format!(
                "duplicate field `{}`",
                field.name.raw
            )));
        }

        self.entries.insert(field.name.raw.clone(), field);
        Ok(())
    }

    /// Appends every field of `other` whose name is not already present,
    /// preserving `other`'s relative order for the new entries.
    ///
    /// No per-attribute merging happens here; a name collision leaves the
    /// existing entry untouched (override is the resolver's job). Calling
    /// twice with the same `other` is a no-op the second time.
    pub(crate) fn collect(&mut self, other: &Fields) {
        for field in other.iter() {
            if !self.entries.contains_key(&field.name.raw) {
                self.entries.insert(field.name.raw.clone(), field.clone());
            }
        }
    }

    /// Replaces the same-named entry wholesale, keeping its position, or
    /// appends when the name is new. Used by the resolver's override step.
    pub(crate) fn substitute(&mut self, field: Field) {
        self.entries.insert(field.name.raw.clone(), field);
    }
}

impl PartialEq for Fields {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order; member order is part of the model.
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}
