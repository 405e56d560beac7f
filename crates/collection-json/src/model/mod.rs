//! Data model types for Collection+JSON.
//!
//! This module contains the typed entities of a document:
//! - Named arrays with `name`/`rel` lookup
//! - Data fields, links and queries
//! - Items and write templates
//! - The collection root and its error body
//! - Builders (ergonomic construction)

pub mod array;
pub mod builder;
pub mod collection;
pub mod data;
pub mod item;
pub mod link;

pub use array::{Lookup, Matches, Named, NamedArray};
pub use builder::{CollectionBuilder, ItemBuilder, QueryBuilder, TemplateBuilder};
pub use collection::{Collection, Error};
pub use data::Data;
pub use item::{Item, Template};
pub use link::{Link, Query};
