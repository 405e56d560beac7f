//! Named arrays: the repeating sub-collections of a document.
//!
//! Items, links, queries and data fields all share one container type,
//! [`NamedArray`], which remembers the key it is written under and offers
//! lookup by `name` and/or `rel`.

use std::ops::Index;
use std::slice;

use serde_json::{Map, Value};

use crate::codec::entity::{Entity, EntityInput};
use crate::error::{DecodeError, LookupError};

/// Access to the `name` and `rel` attributes used by array lookups.
///
/// Entities without one of these attributes keep the default `None`, which
/// never equals a search term.
pub trait Named {
    /// The element's `name`, if the entity kind has one and it is set.
    fn name(&self) -> Option<&str> {
        None
    }

    /// The element's `rel`, if the entity kind has one.
    fn rel(&self) -> Option<&str> {
        None
    }
}

/// An ordered, homogeneous sequence of entities tagged with its wire key.
///
/// Element order is significant: it is the display and serialization order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArray<T> {
    wire_name: &'static str,
    items: Vec<T>,
}

impl<T> NamedArray<T> {
    /// Creates an empty array written under `wire_name`.
    pub fn new(wire_name: &'static str) -> Self {
        Self {
            wire_name,
            items: Vec::new(),
        }
    }

    /// Creates an array from already-typed elements.
    pub fn from_vec(wire_name: &'static str, items: Vec<T>) -> Self {
        Self { wire_name, items }
    }

    /// The key this array serializes under (e.g., "items").
    pub fn wire_name(&self) -> &'static str {
        self.wire_name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the element at `index` in array order.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Appends an element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Entity> NamedArray<T> {
    /// Builds an array from raw or typed inputs.
    ///
    /// `None` yields an empty array. Every raw element must be a JSON object
    /// convertible to `T`; anything else fails with
    /// [`DecodeError::InvalidEntity`] naming `T`.
    pub fn from_raw(
        wire_name: &'static str,
        inputs: Option<Vec<EntityInput<T>>>,
    ) -> Result<Self, DecodeError> {
        let items = inputs
            .unwrap_or_default()
            .into_iter()
            .map(T::coerce)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { wire_name, items })
    }

    /// Serializes the elements, in order, as a JSON array.
    pub fn to_value(&self) -> Value {
        Value::Array(self.items.iter().map(Entity::to_value).collect())
    }

    /// Inserts `{wire_name: [...]}` into a parent object.
    pub fn encode_into(&self, map: &mut Map<String, Value>) {
        map.insert(self.wire_name.to_string(), self.to_value());
    }
}

impl<T: Named> NamedArray<T> {
    /// Returns the elements matching `name` and/or `rel`, in array order.
    ///
    /// - only `name`: the element's `name` must equal it; `rel` is ignored
    /// - only `rel`: the element's `rel` must equal it; `name` is ignored
    /// - both: both must be equal
    /// - neither: nothing matches
    ///
    /// The iterator is lazy; call `find` again to rescan.
    pub fn find<'a, 'q>(
        &'a self,
        name: Option<&'q str>,
        rel: Option<&'q str>,
    ) -> Matches<'a, 'q, T> {
        Matches {
            iter: self.items.iter(),
            name,
            rel,
        }
    }

    /// Returns the first element matching `name` and/or `rel`.
    pub fn get(&self, name: Option<&str>, rel: Option<&str>) -> Result<&T, LookupError> {
        self.find(name, rel).next().ok_or(LookupError::NotFound)
    }

    /// Property-style lookup: `find(name)` collapsed to a single element
    /// when exactly one matches.
    pub fn lookup(&self, name: &str) -> Result<Lookup<'_, T>, LookupError> {
        let mut found: Vec<&T> = self.find(Some(name), None).collect();
        match found.len() {
            0 => Err(LookupError::NoSuchProperty {
                name: name.to_string(),
            }),
            1 => Ok(Lookup::One(found.remove(0))),
            _ => Ok(Lookup::Many(found)),
        }
    }
}

impl<T> Index<usize> for NamedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a NamedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for NamedArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> Extend<T> for NamedArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Lazy iterator over the elements of a [`NamedArray`] matching a search.
#[derive(Debug, Clone)]
pub struct Matches<'a, 'q, T> {
    iter: slice::Iter<'a, T>,
    name: Option<&'q str>,
    rel: Option<&'q str>,
}

impl<'a, T: Named> Iterator for Matches<'a, '_, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (name, rel) = (self.name, self.rel);
        self.iter.by_ref().find(|item| matches(*item, name, rel))
    }
}

fn matches<T: Named>(item: &T, name: Option<&str>, rel: Option<&str>) -> bool {
    match (name, rel) {
        (Some(name), None) => item.name() == Some(name),
        (None, Some(rel)) => item.rel() == Some(rel),
        (Some(name), Some(rel)) => item.name() == Some(name) && item.rel() == Some(rel),
        // TODO: revisit whether an unfiltered search should return every element.
        (None, None) => false,
    }
}

/// Result of a property-style lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a, T> {
    /// Exactly one element has the name.
    One(&'a T),
    /// Several elements share the name; all are returned in array order.
    Many(Vec<&'a T>),
}

impl<'a, T> Lookup<'a, T> {
    /// The first matching element.
    pub fn first(&self) -> &'a T {
        match self {
            Lookup::One(item) => *item,
            Lookup::Many(items) => items[0],
        }
    }

    /// The single match, or `None` when several elements matched.
    pub fn one(&self) -> Option<&'a T> {
        match self {
            Lookup::One(item) => Some(*item),
            Lookup::Many(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Lookup::One(_) => 1,
            Lookup::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// All matches in array order.
    pub fn to_vec(&self) -> Vec<&'a T> {
        match self {
            Lookup::One(item) => vec![*item],
            Lookup::Many(items) => items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{Data, Item, Link};

    fn links() -> NamedArray<Link> {
        NamedArray::from_vec(
            "links",
            vec![
                Link::new("/1", "x").with_name("a"),
                Link::new("/2", "y").with_name("a"),
                Link::new("/3", "x").with_name("b"),
            ],
        )
    }

    fn hrefs<'a>(found: impl Iterator<Item = &'a Link>) -> Vec<&'a str> {
        found.map(|link| link.href.as_str()).collect()
    }

    #[test]
    fn test_find_by_name_ignores_rel() {
        let links = links();
        assert_eq!(hrefs(links.find(Some("a"), None)), vec!["/1", "/2"]);
    }

    #[test]
    fn test_find_by_rel_ignores_name() {
        let links = links();
        assert_eq!(hrefs(links.find(None, Some("x"))), vec!["/1", "/3"]);
    }

    #[test]
    fn test_find_by_name_and_rel() {
        let links = links();
        assert_eq!(hrefs(links.find(Some("a"), Some("y"))), vec!["/2"]);
        assert_eq!(links.find(Some("b"), Some("y")).count(), 0);
    }

    #[test]
    fn test_find_without_criteria_is_empty() {
        let links = links();
        assert_eq!(links.find(None, None).count(), 0);
    }

    #[test]
    fn test_find_is_restartable() {
        let links = links();
        let search = links.find(None, Some("x"));
        assert_eq!(search.clone().count(), 2);
        assert_eq!(hrefs(search), vec!["/1", "/3"]);
        assert_eq!(links.find(None, Some("x")).count(), 2);
    }

    #[test]
    fn test_find_unnamed_link_by_name() {
        let links = NamedArray::from_vec("links", vec![Link::new("/1", "x")]);
        assert_eq!(links.find(Some("x"), None).count(), 0);
        assert_eq!(links.find(None, Some("x")).count(), 1);
    }

    #[test]
    fn test_get() {
        let links = links();
        assert_eq!(links.get(Some("a"), None).unwrap().href, "/1");
        assert_eq!(links.get(None, Some("x")).unwrap().href, "/1");
        assert_eq!(links.get(Some("c"), None), Err(LookupError::NotFound));
    }

    #[test]
    fn test_lookup_collapses_single_match() {
        let links = links();
        match links.lookup("b").unwrap() {
            Lookup::One(link) => assert_eq!(link.href, "/3"),
            other => panic!("expected one match, got {other:?}"),
        }

        let many = links.lookup("a").unwrap();
        assert_eq!(many.len(), 2);
        assert!(many.one().is_none());
        assert_eq!(many.first().href, "/1");

        assert_eq!(
            links.lookup("c"),
            Err(LookupError::NoSuchProperty { name: "c".into() })
        );
    }

    #[test]
    fn test_items_never_match_by_name() {
        let items = NamedArray::from_vec(
            "items",
            vec![Item::new().with_data(vec![Data::new("name").with_value("a")])],
        );
        assert_eq!(items.find(Some("a"), None).count(), 0);
        assert!(items.get(Some("name"), None).is_err());
    }

    #[test]
    fn test_from_raw_mixes_typed_and_raw() {
        let inputs = vec![
            EntityInput::Typed(Data::new("a")),
            EntityInput::Raw(json!({"name": "b", "value": 2})),
        ];
        let data = NamedArray::from_raw("data", Some(inputs)).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1], Data::new("b").with_value(2));
    }

    #[test]
    fn test_from_raw_absent_is_empty() {
        let data: NamedArray<Data> = NamedArray::from_raw("data", None).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.wire_name(), "data");
    }

    #[test]
    fn test_from_raw_rejects_non_object() {
        let result: Result<NamedArray<Item>, _> =
            NamedArray::from_raw("items", Some(vec![EntityInput::Raw(json!(5))]));
        assert_eq!(
            result,
            Err(DecodeError::InvalidEntity {
                expected: "Item",
                found: "5".to_string(),
            })
        );
    }

    #[test]
    fn test_encode_into() {
        let mut map = Map::new();
        NamedArray::from_vec("data", vec![Data::new("a")]).encode_into(&mut map);
        assert_eq!(Value::Object(map), json!({"data": [{"name": "a"}]}));
    }

    #[test]
    fn test_equality_includes_wire_name() {
        let a: NamedArray<Link> = NamedArray::new("links");
        let b: NamedArray<Link> = NamedArray::new("other");
        assert_ne!(a, b);
        assert_eq!(a, NamedArray::new("links"));
    }
}
