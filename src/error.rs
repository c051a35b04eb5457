//! Error types for representation

use thiserror::Error;

/// Errors that abort a `represent` call
///
/// A failed call never yields a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepresentError {
    /// No exact or fallback converter accepts the value's runtime type
    #[error("no converter is registered for values of type `{type_name}`")]
    NotRepresentable { type_name: String },
}

impl RepresentError {
    pub fn not_representable(type_name: impl Into<String>) -> Self {
        RepresentError::NotRepresentable {
            type_name: type_name.into(),
        }
    }
}

pub type RepresentResult<T> = Result<T, RepresentError>;
