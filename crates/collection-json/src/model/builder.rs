//! Builder API for ergonomic document construction.
//!
//! Provides a fluent interface for building a [`Collection`] to send.
//!
//! # Example
//!
//! ```rust
//! use collection_json::model::builder::CollectionBuilder;
//!
//! let collection = CollectionBuilder::new("/friends/")
//!     .link_to("/friends/rss", "feed")
//!     .item(|i| i
//!         .href("/friends/jdoe")
//!         .data("full-name", "J. Doe")
//!         .data("email", "jdoe@example.org")
//!         .link("/blogs/jdoe", "blog")
//!     )
//!     .query("/friends/search", "search", |q| q
//!         .prompt("Search")
//!         .param("search")
//!     )
//!     .template(|t| t
//!         .field("full-name", "Full Name")
//!         .field("email", "Email")
//!     )
//!     .build();
//!
//! assert_eq!(collection.items.len(), 1);
//! let template = collection.template.as_ref().unwrap();
//! assert_eq!(template.properties(), vec!["full-name", "email"]);
//! ```

use serde_json::Value;

use crate::limits::DEFAULT_VERSION;
use crate::model::{Collection, Data, Error, Item, Link, NamedArray, Query, Template};

/// Builder for constructing a Collection.
#[derive(Debug, Clone)]
pub struct CollectionBuilder {
    version: String,
    href: String,
    links: Vec<Link>,
    items: Vec<Item>,
    queries: Vec<Query>,
    template: Option<Template>,
    error: Option<Error>,
}

impl CollectionBuilder {
    /// Creates a new CollectionBuilder for the collection at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            href: href.into(),
            links: Vec::new(),
            items: Vec::new(),
            queries: Vec::new(),
            template: None,
            error: None,
        }
    }

    /// Sets the document version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    // =========================================================================
    // Links
    // =========================================================================

    /// Adds a link.
    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Adds a link with only `href` and `rel`.
    pub fn link_to(self, href: impl Into<String>, rel: impl Into<String>) -> Self {
        self.link(Link::new(href, rel))
    }

    // =========================================================================
    // Items and queries
    // =========================================================================

    /// Adds an item using a builder function.
    pub fn item<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ItemBuilder) -> ItemBuilder,
    {
        self.items.push(f(ItemBuilder::new()).build());
        self
    }

    /// Adds an already-built item.
    pub fn push_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Adds a query using a builder function.
    pub fn query<F>(mut self, href: impl Into<String>, rel: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.queries.push(f(QueryBuilder::new(href, rel)).build());
        self
    }

    // =========================================================================
    // Template and error
    // =========================================================================

    /// Sets the write template using a builder function.
    pub fn template<F>(mut self, f: F) -> Self
    where
        F: FnOnce(TemplateBuilder) -> TemplateBuilder,
    {
        self.template = Some(f(TemplateBuilder::new()).build());
        self
    }

    /// Sets the error body.
    pub fn error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    /// Builds the Collection.
    pub fn build(self) -> Collection {
        Collection {
            version: self.version,
            href: self.href,
            links: NamedArray::from_vec("links", self.links),
            items: NamedArray::from_vec("items", self.items),
            queries: NamedArray::from_vec("queries", self.queries),
            template: self.template,
            error: self.error,
        }
    }
}

/// Builder for an item's href, data fields and links.
#[derive(Debug, Clone, Default)]
pub struct ItemBuilder {
    href: Option<String>,
    data: Vec<Data>,
    links: Vec<Link>,
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item's href.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Adds a data field with a value.
    pub fn data(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.push(Data::new(name).with_value(value));
        self
    }

    /// Adds a prepared data field.
    pub fn datum(mut self, data: Data) -> Self {
        self.data.push(data);
        self
    }

    /// Adds a link with only `href` and `rel`.
    pub fn link(mut self, href: impl Into<String>, rel: impl Into<String>) -> Self {
        self.links.push(Link::new(href, rel));
        self
    }

    /// Adds a prepared link.
    pub fn push_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn build(self) -> Item {
        Item {
            href: self.href,
            data: NamedArray::from_vec("data", self.data),
            links: NamedArray::from_vec("links", self.links),
        }
    }
}

/// Builder for a query and its parameters.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    query: Query,
    data: Vec<Data>,
}

impl QueryBuilder {
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            query: Query::new(href, rel),
            data: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.query.name = Some(name.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.query.prompt = Some(prompt.into());
        self
    }

    /// Adds an empty parameter.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.data.push(Data::new(name));
        self
    }

    /// Adds a parameter with a default value.
    pub fn param_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.push(Data::new(name).with_value(value));
        self
    }

    pub fn build(self) -> Query {
        Query {
            data: NamedArray::from_vec("data", self.data),
            ..self.query
        }
    }
}

/// Builder for a write template's fields.
#[derive(Debug, Clone, Default)]
pub struct TemplateBuilder {
    data: Vec<Data>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty field with a prompt.
    pub fn field(mut self, name: impl Into<String>, prompt: impl Into<String>) -> Self {
        self.data.push(Data::new(name).with_prompt(prompt));
        self
    }

    /// Adds a field pre-filled with a value.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.push(Data::new(name).with_value(value));
        self
    }

    /// Adds a prepared field.
    pub fn datum(mut self, data: Data) -> Self {
        self.data.push(data);
        self
    }

    pub fn build(self) -> Template {
        Template {
            data: NamedArray::from_vec("data", self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_collection_builder() {
        let collection = CollectionBuilder::new("/c")
            .version("1.0")
            .link(Link::new("/c/rss", "feed").with_render("link"))
            .item(|i| i.href("/c/1").data("title", "One").link("/c/1/author", "author"))
            .push_item(Item::new().with_href("/c/2"))
            .query("/c/search", "search", |q| q.name("s").param("q").param_value("limit", 10))
            .template(|t| t.field("title", "Title").value("status", "draft"))
            .error(Error::new().with_title("warning"))
            .build();

        assert_eq!(collection.links.len(), 1);
        assert_eq!(collection.items.len(), 2);
        assert_eq!(collection.items[0].value("title"), Some(&json!("One")));
        assert_eq!(collection.queries[0].properties(), vec!["q", "limit"]);
        assert_eq!(collection.queries[0].name.as_deref(), Some("s"));
        let template = collection.template.as_ref().unwrap();
        assert_eq!(template.properties(), vec!["title", "status"]);
        assert_eq!(collection.error.as_ref().unwrap().title.as_deref(), Some("warning"));
    }

    #[test]
    fn test_builder_matches_manual_construction() {
        let built = CollectionBuilder::new("/c")
            .item(|i| i.href("/c/1").data("a", 1))
            .build();
        let manual = Collection::new("/c").with_item(
            Item::new()
                .with_href("/c/1")
                .with_data(vec![Data::new("a").with_value(1)]),
        );
        assert_eq!(built, manual);
    }

    #[test]
    fn test_item_builder_datum() {
        let item = ItemBuilder::new()
            .datum(Data::new("a").with_prompt("A"))
            .push_link(Link::new("/x", "related").with_name("x"))
            .build();
        assert_eq!(item.properties(), vec!["a"]);
        assert_eq!(item.links.get(Some("x"), None).unwrap().href, "/x");
    }
}
