//! Conversion between raw JSON objects and typed entities.
//!
//! Every entity implements [`Entity`]: how to build it from the keyword map
//! found on the wire, and how to write it back. Anything accepted where an
//! entity is expected goes through [`EntityInput`], so a caller hands over
//! either a typed value or raw JSON and gets one coercion rule for both.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::primitives::{Reader, Writer};
use crate::error::DecodeError;
use crate::limits::DEFAULT_VERSION;
use crate::model::{Collection, Data, Error, Item, Link, Query, Template};

/// A value offered where an entity of type `T` is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityInput<T> {
    /// Raw JSON; only an object is convertible.
    Raw(Value),
    /// An already-built entity, used as is.
    Typed(T),
}

/// An entity of the Collection+JSON object model.
pub trait Entity: Sized {
    /// Name of the entity kind, used in error messages (e.g., "Item").
    const KIND: &'static str;

    /// Builds the entity from its wire object.
    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError>;

    /// Writes the entity as its wire object.
    fn to_value(&self) -> Value;

    /// Builds the entity from any raw JSON value.
    ///
    /// Only JSON objects convert; every other value fails with
    /// [`DecodeError::InvalidEntity`] naming [`Self::KIND`].
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(DecodeError::InvalidEntity {
                expected: Self::KIND,
                found: other.to_string(),
            }),
        }
    }

    /// Resolves an input: typed values pass through, raw values convert.
    fn coerce(input: EntityInput<Self>) -> Result<Self, DecodeError> {
        match input {
            EntityInput::Typed(entity) => Ok(entity),
            EntityInput::Raw(value) => Self::from_value(&value),
        }
    }
}

impl Entity for Data {
    const KIND: &'static str = "Data";

    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let r = Reader::new(Self::KIND, map);
        Ok(Data {
            name: r.read_required_str("name")?,
            value: r.read_value("value"),
            prompt: r.read_str("prompt")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut w = Writer::new();
        w.write_str("name", &self.name);
        w.write_opt_value("value", self.value.as_ref());
        w.write_opt_str("prompt", self.prompt.as_deref());
        w.finish()
    }
}

impl Entity for Link {
    const KIND: &'static str = "Link";

    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let r = Reader::new(Self::KIND, map);
        Ok(Link {
            href: r.read_required_str("href")?,
            rel: r.read_required_str("rel")?,
            name: r.read_str("name")?,
            render: r.read_str("render")?,
            prompt: r.read_str("prompt")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut w = Writer::new();
        w.write_str("href", &self.href);
        w.write_str("rel", &self.rel);
        w.write_opt_str("name", self.name.as_deref());
        w.write_opt_str("render", self.render.as_deref());
        w.write_opt_str("prompt", self.prompt.as_deref());
        w.finish()
    }
}

impl Entity for Query {
    const KIND: &'static str = "Query";

    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let r = Reader::new(Self::KIND, map);
        Ok(Query {
            href: r.read_required_str("href")?,
            rel: r.read_required_str("rel")?,
            name: r.read_str("name")?,
            prompt: r.read_str("prompt")?,
            data: r.read_array("data")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut w = Writer::new();
        w.write_str("href", &self.href);
        w.write_str("rel", &self.rel);
        w.write_opt_str("name", self.name.as_deref());
        w.write_opt_str("prompt", self.prompt.as_deref());
        w.write_array(&self.data);
        w.finish()
    }
}

impl Entity for Item {
    const KIND: &'static str = "Item";

    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let r = Reader::new(Self::KIND, map);
        Ok(Item {
            href: r.read_str("href")?,
            data: r.read_array("data")?,
            links: r.read_array("links")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut w = Writer::new();
        w.write_opt_str("href", self.href.as_deref());
        w.write_array(&self.data);
        w.write_array(&self.links);
        w.finish()
    }
}

impl Entity for Template {
    const KIND: &'static str = "Template";

    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let r = Reader::new(Self::KIND, map);
        Ok(Template {
            data: r.read_array("data")?,
        })
    }

    /// Always carries `data`, even when the template has no fields.
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        self.data.encode_into(&mut map);
        Value::Object(map)
    }
}

impl Entity for Error {
    const KIND: &'static str = "Error";

    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let r = Reader::new(Self::KIND, map);
        Ok(Error {
            code: r.read_str("code")?,
            message: r.read_str("message")?,
            title: r.read_str("title")?,
        })
    }

    fn to_value(&self) -> Value {
        let mut w = Writer::new();
        w.write_opt_str("code", self.code.as_deref());
        w.write_opt_str("message", self.message.as_deref());
        w.write_opt_str("title", self.title.as_deref());
        w.finish()
    }
}

impl Entity for Collection {
    const KIND: &'static str = "Collection";

    fn from_map(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        let r = Reader::new(Self::KIND, map);
        Ok(Collection {
            version: r
                .read_str("version")?
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            href: r.read_required_str("href")?,
            links: r.read_array("links")?,
            items: r.read_array("items")?,
            queries: r.read_array("queries")?,
            template: r.read_entity("template")?,
            error: r.read_entity("error")?,
        })
    }

    /// Writes the body of the `collection` key.
    ///
    /// Arrays appear only when non-empty; `template` and `error` whenever
    /// they are set.
    fn to_value(&self) -> Value {
        let mut w = Writer::new();
        w.write_str("version", &self.version);
        w.write_str("href", &self.href);
        w.write_array(&self.links);
        w.write_array(&self.items);
        w.write_array(&self.queries);
        w.write_entity("template", self.template.as_ref());
        w.write_entity("error", self.error.as_ref());
        w.finish()
    }
}

/// Implements `From` conversions into [`EntityInput`] and serde support in
/// terms of [`Entity`].
macro_rules! entity_glue {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for EntityInput<$ty> {
            fn from(entity: $ty) -> Self {
                EntityInput::Typed(entity)
            }
        }

        impl From<Value> for EntityInput<$ty> {
            fn from(value: Value) -> Self {
                EntityInput::Raw(value)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                Entity::to_value(self).serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                <$ty as Entity>::from_value(&value).map_err(de::Error::custom)
            }
        }
    )*};
}

entity_glue!(Collection, Data, Error, Item, Link, Query, Template);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_data_value_kept_when_falsy() {
        let data = Data::from_value(&json!({"name": "a", "value": ""})).unwrap();
        assert_eq!(data.value, Some(json!("")));
        assert_eq!(data.to_value(), json!({"name": "a", "value": ""}));

        let data = Data::from_value(&json!({"name": "a", "value": 0})).unwrap();
        assert_eq!(data.to_value(), json!({"name": "a", "value": 0}));
    }

    #[test]
    fn test_data_requires_name() {
        assert_eq!(
            Data::from_value(&json!({"value": 1})),
            Err(DecodeError::MissingField {
                entity: "Data",
                field: "name",
            })
        );
    }

    #[test]
    fn test_link_roundtrip_fields() {
        let raw = json!({
            "href": "/a", "rel": "alternate", "name": "n",
            "render": "image", "prompt": "p"
        });
        let link = Link::from_value(&raw).unwrap();
        assert_eq!(link.render.as_deref(), Some("image"));
        assert_eq!(link.to_value(), raw);
    }

    #[test]
    fn test_link_missing_rel() {
        let err = Link::from_value(&json!({"href": "/a"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                entity: "Link",
                field: "rel",
            }
        );
    }

    #[test]
    fn test_query_omits_empty_data() {
        let query = Query::from_value(&json!({"href": "/s", "rel": "search"})).unwrap();
        assert!(query.data.is_empty());
        assert_eq!(query.to_value(), json!({"href": "/s", "rel": "search"}));
    }

    #[test]
    fn test_item_serialization_order() {
        let item = Item::from_value(&json!({
            "links": [{"href": "/l", "rel": "r"}],
            "data": [{"name": "a"}],
            "href": "/i"
        }))
        .unwrap();
        let keys: Vec<String> = match item.to_value() {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => unreachable!(),
        };
        assert_eq!(keys, vec!["href", "data", "links"]);
    }

    #[test]
    fn test_empty_template_keeps_data_key() {
        assert_eq!(Template::new().to_value(), json!({"data": []}));
    }

    #[test]
    fn test_empty_error() {
        let error = Error::from_value(&json!({})).unwrap();
        assert!(error.is_empty());
        assert_eq!(error.to_value(), json!({}));
    }

    #[test]
    fn test_collection_defaults() {
        let collection = Collection::from_value(&json!({"href": "/c", "version": null})).unwrap();
        assert_eq!(collection.version, "1.0");
        assert!(collection.items.is_empty());
        assert_eq!(collection.items.wire_name(), "items");
        assert!(collection.template.is_none());
    }

    #[test]
    fn test_collection_requires_href() {
        assert_eq!(
            Collection::from_value(&json!({"version": "1.0"})),
            Err(DecodeError::MissingField {
                entity: "Collection",
                field: "href",
            })
        );
    }

    #[test]
    fn test_coerce() {
        let typed = Link::new("/a", "r");
        assert_eq!(Link::coerce(typed.clone().into()).unwrap(), typed);
        assert_eq!(
            Link::coerce(json!({"href": "/a", "rel": "r"}).into()).unwrap(),
            typed
        );
        assert!(matches!(
            Template::coerce(json!([1, 2]).into()),
            Err(DecodeError::InvalidEntity {
                expected: "Template",
                ..
            })
        ));
    }

    #[test]
    fn test_serde_glue() {
        let link: Link = serde_json::from_value(json!({"href": "/a", "rel": "r"})).unwrap();
        assert_eq!(serde_json::to_value(&link).unwrap(), json!({"href": "/a", "rel": "r"}));

        let err = serde_json::from_value::<Item>(json!(5)).unwrap_err();
        assert!(err.to_string().contains("'Item'"));
    }
}
