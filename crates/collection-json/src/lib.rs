//! Collection+JSON: typed model for hypermedia collection documents.
//!
//! This crate parses, inspects and writes documents in the Collection+JSON
//! format (`application/vnd.collection+json`): a collection of items with
//! named data fields and hyperlinks, plus optional queries, a write template
//! and an error body.
//!
//! # Overview
//!
//! - **Typed entities**: every object on the wire maps to a struct with
//!   structural equality
//! - **Named arrays**: items, links, queries and data fields can be searched
//!   by `name` and/or `rel`
//! - **Canonical output**: absent optional members are left out and members
//!   are written in a fixed order
//!
//! # Quick Start
//!
//! ```rust
//! use collection_json::Collection;
//!
//! let text = r#"{"collection": {
//!     "version": "1.0",
//!     "href": "/notes/",
//!     "items": [{"href": "/notes/1", "data": [{"name": "title", "value": "Hello"}]}]
//! }}"#;
//!
//! let collection = Collection::parse(text).unwrap();
//! assert_eq!(collection.href, "/notes/");
//!
//! let item = &collection.items[0];
//! assert_eq!(item.value("title").and_then(|v| v.as_str()), Some("Hello"));
//!
//! // Empty links, queries, template and error are not written back.
//! assert_eq!(
//!     collection.to_json().unwrap(),
//!     r#"{"collection":{"version":"1.0","href":"/notes/","items":[{"href":"/notes/1","data":[{"name":"title","value":"Hello"}]}]}}"#
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Entities (Collection, Item, Link, Query, Data, Template, Error)
//!   and the [`NamedArray`] container
//! - [`codec`]: JSON decoding/encoding and raw-value coercion
//! - [`error`]: Error types
//! - [`limits`]: Format constants and decoding limits
//!
//! # Errors
//!
//! Every failure carries an [`ErrorKind`]:
//! - `Format`: the text is not a Collection+JSON document
//! - `Type`: a value cannot become the entity expected at that position
//! - `NotFound`: [`NamedArray::get`] found nothing
//! - `Attribute`: a field lookup by name found nothing

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    encode_collection, encode_collection_with_options, encode_template, parse_collection,
    parse_collection_with_options, parse_template, DecodeOptions, EncodeOptions, Entity,
    EntityInput,
};
pub use error::{DecodeError, EncodeError, ErrorKind, LookupError};
pub use model::{
    Collection, CollectionBuilder, Data, Error, Item, ItemBuilder, Link, Lookup, Named,
    NamedArray, Query, QueryBuilder, Template, TemplateBuilder,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
