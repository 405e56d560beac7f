//! Items and write templates: bags of named data fields.
//!
//! Both types answer `field(name)` by searching their `data` array, so a
//! caller can read `item.field("title")` without walking the array.

use std::fmt;

use serde_json::Value;

use crate::codec::document;
use crate::error::{DecodeError, EncodeError, LookupError};
use crate::model::{Data, Link, Lookup, NamedArray, Named};

/// A member of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub href: Option<String>,
    pub data: NamedArray<Data>,
    pub links: NamedArray<Link>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            href: None,
            data: NamedArray::new("data"),
            links: NamedArray::new("links"),
        }
    }
}

impl Item {
    /// Creates an item with no href, fields or links.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Replaces the data fields.
    pub fn with_data(mut self, data: Vec<Data>) -> Self {
        self.data = NamedArray::from_vec("data", data);
        self
    }

    /// Replaces the links.
    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = NamedArray::from_vec("links", links);
        self
    }

    /// Names of the data fields, in order.
    pub fn properties(&self) -> Vec<&str> {
        self.data.iter().map(|d| d.name.as_str()).collect()
    }

    /// Looks up data fields by name.
    ///
    /// Returns the single field when one matches, every match when several
    /// share the name, and [`LookupError::NoSuchProperty`] when none does.
    pub fn field(&self, name: &str) -> Result<Lookup<'_, Data>, LookupError> {
        self.data.lookup(name)
    }

    /// Value of the first data field called `name`.
    ///
    /// `None` when no such field exists or it carries no value; use
    /// [`Item::field`] to tell the two apart.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.data
            .find(Some(name), None)
            .next()
            .and_then(|d| d.value.as_ref())
    }
}

/// Items expose neither `name` nor `rel`, so they never match an array search.
impl Named for Item {}

/// A write template: the fields a client fills in to create or update an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub data: NamedArray<Data>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            data: NamedArray::new("data"),
        }
    }
}

impl Template {
    /// Creates a template with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fields.
    pub fn with_data(mut self, data: Vec<Data>) -> Self {
        self.data = NamedArray::from_vec("data", data);
        self
    }

    /// Parses a standalone `{"template": {...}}` document.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        document::parse_template(text)
    }

    /// Builds the `{"template": {...}}` document tree.
    pub fn to_document(&self) -> Value {
        document::template_document(self)
    }

    /// Encodes the standalone document as compact JSON text.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        document::encode_template(self)
    }

    /// Names of the fields, in order.
    pub fn properties(&self) -> Vec<&str> {
        self.data.iter().map(|d| d.name.as_str()).collect()
    }

    /// Looks up fields by name; see [`Item::field`].
    pub fn field(&self, name: &str) -> Result<Lookup<'_, Data>, LookupError> {
        self.data.lookup(name)
    }

    /// Value of the first field called `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.data
            .find(Some(name), None)
            .next()
            .and_then(|d| d.value.as_ref())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_document())
    }
}
