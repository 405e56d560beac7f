//! Error types for Collection+JSON decoding, encoding and lookup.

use thiserror::Error;

/// Broad classification of every error this crate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input text is not JSON or lacks the expected top-level key.
    Format,
    /// A value could not be coerced into the expected entity.
    Type,
    /// `get` found no matching element.
    NotFound,
    /// Property-style lookup named a field that does not exist.
    Attribute,
}

impl ErrorKind {
    /// Returns a short stable label (e.g., "format").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::Type => "type",
            ErrorKind::NotFound => "not-found",
            ErrorKind::Attribute => "attribute",
        }
    }
}

/// Error while turning JSON text or raw JSON values into entities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === Format ===
    #[error("Not a valid Collection+JSON document.")]
    InvalidDocument,

    #[error("Not valid Collection+JSON template data.")]
    InvalidTemplate,

    #[error("document length {len} exceeds maximum {max}")]
    DocumentTooLarge { len: usize, max: usize },

    // === Type ===
    #[error("Invalid value '{found}', expected an object or '{expected}'")]
    InvalidEntity {
        expected: &'static str,
        found: String,
    },

    #[error("{entity} is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}.{field} must be {expected}, found {found}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl DecodeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::InvalidDocument
            | DecodeError::InvalidTemplate
            | DecodeError::DocumentTooLarge { .. } => ErrorKind::Format,
            _ => ErrorKind::Type,
        }
    }
}

/// Error while rendering a document as JSON text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("failed to write JSON text: {0}")]
    Json(String),
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        EncodeError::Json(err.to_string())
    }
}

/// Error from `name`/`rel` lookups on a named array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No matching item found.")]
    NotFound,

    #[error("no property named '{name}'")]
    NoSuchProperty { name: String },
}

impl LookupError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::NotFound => ErrorKind::NotFound,
            LookupError::NoSuchProperty { .. } => ErrorKind::Attribute,
        }
    }
}
