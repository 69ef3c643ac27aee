//! Runtime support for generated data elements.
//!
//! Generated code reaches everything it needs through this crate: the
//! identity type, the validator, the document store abstraction, and the
//! serialization machinery.

mod error;
pub use error::{Error, PersistenceError};

mod store;
pub use store::{DocumentStore, MemoryStore};

mod validator;
pub use validator::Validator;

pub use dataelement_macros::data_element;

pub use uuid::Uuid;

// Re-exported so generated code never depends on the caller's own
// serde version.
pub use serde;
pub use serde_json;
