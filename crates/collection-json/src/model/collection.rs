//! The document root and its error body.

use std::fmt;

use serde_json::Value;

use crate::codec::document;
use crate::codec::entity::{Entity, EntityInput};
use crate::error::{DecodeError, EncodeError};
use crate::limits::DEFAULT_VERSION;
use crate::model::{Item, Link, NamedArray, Query, Template};

/// Root of a Collection+JSON document.
///
/// Array members are always present in the model, empty when the wire
/// omitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub version: String,
    pub href: String,
    pub links: NamedArray<Link>,
    pub items: NamedArray<Item>,
    pub queries: NamedArray<Query>,
    pub template: Option<Template>,
    pub error: Option<Error>,
}

impl Collection {
    /// Creates an empty version "1.0" collection at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            href: href.into(),
            links: NamedArray::new("links"),
            items: NamedArray::new("items"),
            queries: NamedArray::new("queries"),
            template: None,
            error: None,
        }
    }

    /// Parses a `{"collection": {...}}` document.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        document::parse_collection(text)
    }

    /// Builds the `{"collection": {...}}` document tree.
    pub fn to_document(&self) -> Value {
        document::collection_document(self)
    }

    /// Encodes the document as compact JSON text.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        document::encode_collection(self)
    }

    /// Encodes the document as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, EncodeError> {
        document::encode_collection_with_options(
            self,
            &document::EncodeOptions::new().pretty(true),
        )
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.queries.push(query);
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    /// Replaces the links, converting raw JSON objects. `None` clears them.
    pub fn set_links(&mut self, links: Option<Vec<EntityInput<Link>>>) -> Result<(), DecodeError> {
        self.links = NamedArray::from_raw("links", links)?;
        Ok(())
    }

    /// Replaces the items, converting raw JSON objects. `None` clears them.
    pub fn set_items(&mut self, items: Option<Vec<EntityInput<Item>>>) -> Result<(), DecodeError> {
        self.items = NamedArray::from_raw("items", items)?;
        Ok(())
    }

    /// Replaces the queries, converting raw JSON objects. `None` clears them.
    pub fn set_queries(
        &mut self,
        queries: Option<Vec<EntityInput<Query>>>,
    ) -> Result<(), DecodeError> {
        self.queries = NamedArray::from_raw("queries", queries)?;
        Ok(())
    }

    /// Replaces the template, converting a raw JSON object.
    ///
    /// On error the current template is left untouched.
    pub fn set_template(
        &mut self,
        template: Option<EntityInput<Template>>,
    ) -> Result<(), DecodeError> {
        self.template = template.map(Template::coerce).transpose()?;
        Ok(())
    }

    /// Replaces the error body, converting a raw JSON object.
    ///
    /// On error the current error body is left untouched.
    pub fn set_error(&mut self, error: Option<EntityInput<Error>>) -> Result<(), DecodeError> {
        self.error = error.map(Error::coerce).transpose()?;
        Ok(())
    }
}

/// Renders the document as compact JSON text.
impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_document())
    }
}

/// Error body of a document (`{"code"?, "message"?, "title"?}`).
///
/// Not to be confused with this crate's failure types in [`crate::error`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Error {
    pub code: Option<String>,
    pub message: Option<String>,
    pub title: Option<String>,
}

impl Error {
    /// Creates an error body with no members.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns true if no member is set.
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.message.is_none() && self.title.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Data;

    #[test]
    fn test_new_defaults() {
        let collection = Collection::new("/c");
        assert_eq!(collection.version, "1.0");
        assert!(collection.links.is_empty());
        assert!(collection.items.is_empty());
        assert!(collection.queries.is_empty());
        assert_eq!(collection.to_document(), json!({"collection": {"version": "1.0", "href": "/c"}}));
    }

    #[test]
    fn test_set_error_from_raw() {
        let mut collection = Collection::new("/c");
        collection
            .set_error(Some(json!({"code": "404", "title": "Not found"}).into()))
            .unwrap();
        assert_eq!(
            collection.error,
            Some(Error::new().with_code("404").with_title("Not found"))
        );

        collection.set_error(None).unwrap();
        assert!(collection.error.is_none());
    }

    #[test]
    fn test_set_template_rejects_non_object() {
        let mut collection = Collection::new("/c").with_template(Template::new());
        let err = collection
            .set_template(Some(json!("template").into()))
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidEntity {
                expected: "Template",
                ..
            }
        ));
        assert_eq!(collection.template, Some(Template::new()));
    }

    #[test]
    fn test_set_items_rejects_scalar_element() {
        let mut collection = Collection::new("/c");
        let err = collection
            .set_items(Some(vec![Item::new().into(), json!(5).into()]))
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidEntity {
                expected: "Item",
                found: "5".to_string(),
            }
        );
    }

    #[test]
    fn test_set_links_and_queries() {
        let mut collection = Collection::new("/c");
        collection
            .set_links(Some(vec![json!({"href": "/a", "rel": "self"}).into()]))
            .unwrap();
        collection
            .set_queries(Some(vec![Query::new("/s", "search").into()]))
            .unwrap();
        assert_eq!(collection.links[0], Link::new("/a", "self"));
        assert_eq!(collection.queries.len(), 1);

        collection.set_links(None).unwrap();
        assert!(collection.links.is_empty());
        assert_eq!(collection.links.wire_name(), "links");
    }

    #[test]
    fn test_structural_equality() {
        let a = Collection::new("/c").with_item(Item::new().with_data(vec![Data::new("x")]));
        let b = Collection::new("/c").with_item(Item::new().with_data(vec![Data::new("x")]));
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_version("1.1"));
        assert_ne!(a, Collection::new("/c"));
    }

    #[test]
    fn test_display_is_json() {
        let collection = Collection::new("/c").with_error(Error::new());
        assert_eq!(
            collection.to_string(),
            r#"{"collection":{"version":"1.0","href":"/c","error":{}}}"#
        );
    }

    #[test]
    fn test_error_is_empty() {
        assert!(Error::new().is_empty());
        assert!(!Error::new().with_message("boom").is_empty());
    }
}
