/// Failures in the element runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON conversion of an element failed.
    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while moving elements to or from a document store.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The store itself could not be reached or is unusable.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// An element could not be encoded into a document.
    #[error("failed to encode element: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored document could not be decoded back into an element.
    #[error("failed to decode element: {0}")]
    Decode(#[source] serde_json::Error),
}
