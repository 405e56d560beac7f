//! JSON decoding and encoding for Collection+JSON.
//!
//! Decoding goes text → `serde_json::Value` → entities; encoding reverses it.
//! Entity-level conversion lives in [`entity`], field handling in
//! [`primitives`], and the document envelope in [`document`].

pub mod document;
pub mod entity;
pub mod primitives;

pub use document::{
    collection_document, encode_collection, encode_collection_with_options, encode_template,
    encode_template_with_options, parse_collection, parse_collection_with_options,
    parse_template, parse_template_with_options, template_document, DecodeOptions, EncodeOptions,
};
pub use entity::{Entity, EntityInput};
pub use primitives::{Reader, Writer};
