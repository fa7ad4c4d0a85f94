//! Typed errors surfaced by normalization and single-entity lookups.
//!
//! Malformed rows (missing fields, unparseable numerics) are NOT errors:
//! they are silently dropped during cleaning as a global policy. Only
//! structural problems reach the caller.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A code column carried a value with no entry in its lookup table.
    ///
    /// Not recoverable locally: the invocation's normalization aborts
    /// rather than silently defaulting or dropping the row.
    #[error("data integrity error: column '{column}' has unmapped value '{value}'")]
    DataIntegrity { column: &'static str, value: String },

    /// An expected column is absent from the input table.
    #[error("missing column '{name}' in input table")]
    MissingColumn { name: String },

    /// A single-entity lookup matched no rows under the active filter.
    #[error("no restaurant found for cuisine '{cuisine}'")]
    NotFound { cuisine: String },
}
