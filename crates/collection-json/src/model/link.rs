//! Hyperlinks and query templates.

use crate::model::{Data, NamedArray, Named};

/// A hyperlink (`{"href", "rel", "name"?, "render"?, "prompt"?}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    /// Relation type (e.g., "self", "alternate").
    pub rel: String,
    pub name: Option<String>,
    /// Rendering hint, such as "image" or "link".
    pub render: Option<String>,
    pub prompt: Option<String>,
}

impl Link {
    /// Creates a link with only the required members.
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            name: None,
            render: None,
            prompt: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_render(mut self, render: impl Into<String>) -> Self {
        self.render = Some(render.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

impl Named for Link {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn rel(&self) -> Option<&str> {
        Some(&self.rel)
    }
}

/// A query template: a link whose `data` fields describe URI parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub href: String,
    pub rel: String,
    pub name: Option<String>,
    pub prompt: Option<String>,
    pub data: NamedArray<Data>,
}

impl Query {
    /// Creates a query with no parameters.
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            name: None,
            prompt: None,
            data: NamedArray::new("data"),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Replaces the query parameters.
    pub fn with_data(mut self, data: Vec<Data>) -> Self {
        self.data = NamedArray::from_vec("data", data);
        self
    }

    /// Names of the query parameters, in order.
    pub fn properties(&self) -> Vec<&str> {
        self.data.iter().map(|d| d.name.as_str()).collect()
    }
}

impl Named for Query {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn rel(&self) -> Option<&str> {
        Some(&self.rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builder() {
        let link = Link::new("/p.png", "avatar")
            .with_name("photo")
            .with_render("image")
            .with_prompt("Photo");
        assert_eq!(Named::name(&link), Some("photo"));
        assert_eq!(Named::rel(&link), Some("avatar"));
        assert_eq!(link.render.as_deref(), Some("image"));
    }

    #[test]
    fn test_query_properties() {
        let query = Query::new("/search", "search")
            .with_prompt("Search")
            .with_data(vec![Data::new("q"), Data::new("page").with_value(1)]);
        assert_eq!(query.properties(), vec!["q", "page"]);
        assert_eq!(query.data.wire_name(), "data");
    }

    #[test]
    fn test_queries_found_by_rel() {
        let queries = NamedArray::from_vec(
            "queries",
            vec![
                Query::new("/a", "search").with_name("by-title"),
                Query::new("/b", "search"),
                Query::new("/c", "filter").with_name("by-title"),
            ],
        );
        assert_eq!(queries.find(None, Some("search")).count(), 2);
        assert_eq!(
            queries.get(Some("by-title"), Some("filter")).unwrap().href,
            "/c"
        );
    }
}
