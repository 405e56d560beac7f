//! Format constants and decoding limits.

/// Version written when a document does not declare one.
pub const DEFAULT_VERSION: &str = "1.0";

/// Registered media type for Collection+JSON documents.
pub const MEDIA_TYPE: &str = "application/vnd.collection+json";

/// Maximum accepted document text length in bytes (16 MiB).
pub const MAX_DOCUMENT_SIZE: usize = 16 * 1024 * 1024;

/// Top-level key of a full document.
pub const COLLECTION_KEY: &str = "collection";

/// Top-level key of a standalone write template.
pub const TEMPLATE_KEY: &str = "template";
