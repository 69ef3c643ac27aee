/// Generator-time failure taxonomy.
///
/// Every variant is fatal to the generation run it occurs in; the drivers
/// surface it as a diagnostic attributed to the offending specification or
/// document and write no artifacts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or incomplete specification input.
    #[error("{0}")]
    Spec(String),

    /// Contradictory field attributes.
    #[error("invalid field spec: {0}")]
    InvalidFieldSpec(String),

    /// A field type that could not be resolved at emission time.
    #[error("unresolved field type `{0}`")]
    UnresolvedFieldType(String),

    /// Schema document syntax errors.
    #[error("malformed schema document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Accumulates marker-path parse errors so a single run reports every
/// problem in the spec, not just the first.
#[derive(Debug)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self { errors: vec![] }
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    pub(crate) fn collect(self) -> Option<syn::Error> {
        self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
    }
}
