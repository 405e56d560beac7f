//! Document-level decoding and encoding.
//!
//! A full document wraps a [`Collection`] under the `collection` key; a write
//! response may carry only a [`Template`] under the `template` key.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::entity::Entity;
use crate::error::{DecodeError, EncodeError};
use crate::limits::{COLLECTION_KEY, MAX_DOCUMENT_SIZE, TEMPLATE_KEY};
use crate::model::{Collection, Template};

/// Options for decoding document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Longest accepted input, in bytes.
    pub max_document_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_document_size: MAX_DOCUMENT_SIZE,
        }
    }
}

impl DecodeOptions {
    /// Creates options with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the longest accepted input, in bytes.
    pub fn max_document_size(mut self, max: usize) -> Self {
        self.max_document_size = max;
        self
    }
}

/// Options for encoding documents as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent the output for humans instead of writing it compactly.
    pub pretty: bool,
}

impl EncodeOptions {
    /// Creates options for compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables indented output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Parses a Collection+JSON document.
///
/// Fails with [`DecodeError::InvalidDocument`] when the text is not JSON or
/// its `collection` member is missing or empty. Errors in the nested
/// entities are reported as they are found.
pub fn parse_collection(text: &str) -> Result<Collection, DecodeError> {
    parse_collection_with_options(text, &DecodeOptions::default())
}

/// Parses a Collection+JSON document with explicit options.
pub fn parse_collection_with_options(
    text: &str,
    options: &DecodeOptions,
) -> Result<Collection, DecodeError> {
    let body = document_body(text, COLLECTION_KEY, options, DecodeError::InvalidDocument)?;
    let collection = Collection::from_value(&body)?;
    trace!(
        href = %collection.href,
        links = collection.links.len(),
        items = collection.items.len(),
        queries = collection.queries.len(),
        "decoded collection"
    );
    Ok(collection)
}

/// Parses a standalone template document (`{"template": {...}}`).
///
/// Fails with [`DecodeError::InvalidTemplate`] when the text is not JSON or
/// its `template` member is missing or empty.
pub fn parse_template(text: &str) -> Result<Template, DecodeError> {
    parse_template_with_options(text, &DecodeOptions::default())
}

/// Parses a standalone template document with explicit options.
pub fn parse_template_with_options(
    text: &str,
    options: &DecodeOptions,
) -> Result<Template, DecodeError> {
    let body = document_body(text, TEMPLATE_KEY, options, DecodeError::InvalidTemplate)?;
    let template = Template::from_value(&body)?;
    trace!(fields = template.data.len(), "decoded template");
    Ok(template)
}

/// Extracts the member under `key` from the top-level object of `text`.
fn document_body(
    text: &str,
    key: &'static str,
    options: &DecodeOptions,
    invalid: DecodeError,
) -> Result<Value, DecodeError> {
    if text.len() > options.max_document_size {
        return Err(DecodeError::DocumentTooLarge {
            len: text.len(),
            max: options.max_document_size,
        });
    }

    let document: Value = match serde_json::from_str(text) {
        Ok(document) => document,
        Err(err) => {
            debug!(error = %err, "rejected document: malformed JSON");
            return Err(invalid);
        }
    };

    let body = match document {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    };
    match body {
        Some(body) if !is_blank(&body) => Ok(body),
        _ => {
            debug!(key, "rejected document: missing or empty top-level member");
            Err(invalid)
        }
    }
}

/// Returns true for values that cannot carry a document body:
/// `null`, `false`, zero, and empty strings, arrays and objects.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Builds the JSON tree of a full document: `{"collection": {...}}`.
pub fn collection_document(collection: &Collection) -> Value {
    wrap(COLLECTION_KEY, collection.to_value())
}

/// Builds the JSON tree of a standalone template: `{"template": {...}}`.
pub fn template_document(template: &Template) -> Value {
    wrap(TEMPLATE_KEY, template.to_value())
}

fn wrap(key: &str, body: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), body);
    Value::Object(map)
}

/// Encodes a collection as compact document text.
pub fn encode_collection(collection: &Collection) -> Result<String, EncodeError> {
    encode_collection_with_options(collection, &EncodeOptions::default())
}

/// Encodes a collection as document text with explicit options.
pub fn encode_collection_with_options(
    collection: &Collection,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    let text = to_text(&collection_document(collection), options)?;
    trace!(len = text.len(), pretty = options.pretty, "encoded collection");
    Ok(text)
}

/// Encodes a standalone template as compact document text.
pub fn encode_template(template: &Template) -> Result<String, EncodeError> {
    encode_template_with_options(template, &EncodeOptions::default())
}

/// Encodes a standalone template as document text with explicit options.
pub fn encode_template_with_options(
    template: &Template,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    let text = to_text(&template_document(template), options)?;
    trace!(len = text.len(), pretty = options.pretty, "encoded template");
    Ok(text)
}

fn to_text(document: &Value, options: &EncodeOptions) -> Result<String, EncodeError> {
    if options.pretty {
        Ok(serde_json::to_string_pretty(document)?)
    } else {
        Ok(serde_json::to_string(document)?)
    }
}
