//! Field-level reading and writing of Collection+JSON objects.
//!
//! [`Reader`] pulls typed fields out of a raw JSON object and reports
//! failures against the entity being built; [`Writer`] assembles an object,
//! leaving out absent optional fields.

use serde_json::{Map, Value};

use crate::codec::entity::{Entity, EntityInput};
use crate::error::DecodeError;
use crate::model::NamedArray;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for the fields of one raw JSON object.
///
/// Unknown keys are never looked at, so extension fields on the wire are
/// silently dropped.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Reader<'a> {
    /// Creates a reader for the fields of `entity`.
    pub fn new(entity: &'static str, map: &'a Map<String, Value>) -> Self {
        Self { entity, map }
    }

    /// The entity kind this reader reports errors against.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Returns the field, treating JSON `null` as absent.
    fn field(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    /// Reads a string that must be present and non-null.
    pub fn read_required_str(&self, field: &'static str) -> Result<String, DecodeError> {
        self.read_str(field)?.ok_or(DecodeError::MissingField {
            entity: self.entity,
            field,
        })
    }

    /// Reads an optional string; absent and `null` both yield `None`.
    pub fn read_str(&self, field: &'static str) -> Result<Option<String>, DecodeError> {
        match self.field(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(DecodeError::InvalidField {
                entity: self.entity,
                field,
                expected: "a string",
                found: other.to_string(),
            }),
        }
    }

    /// Reads an arbitrary JSON value; `null` yields `None`.
    pub fn read_value(&self, field: &'static str) -> Option<Value> {
        self.field(field).cloned()
    }

    /// Reads a nested array of entities.
    ///
    /// Absent or `null` gives an empty array. A value that is not a JSON
    /// array, or an element that is not an object, fails naming `T`.
    pub fn read_array<T: Entity>(
        &self,
        field: &'static str,
    ) -> Result<NamedArray<T>, DecodeError> {
        match self.field(field) {
            None => Ok(NamedArray::new(field)),
            Some(Value::Array(elements)) => {
                let inputs = elements.iter().cloned().map(EntityInput::Raw).collect();
                NamedArray::from_raw(field, Some(inputs))
            }
            Some(other) => Err(DecodeError::InvalidEntity {
                expected: T::KIND,
                found: other.to_string(),
            }),
        }
    }

    /// Reads an optional nested entity.
    pub fn read_entity<T: Entity>(&self, field: &'static str) -> Result<Option<T>, DecodeError> {
        self.field(field).map(T::from_value).transpose()
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer assembling one JSON object in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    map: Map<String, Value>,
}

impl Writer {
    /// Creates a new empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a string field.
    pub fn write_str(&mut self, field: &str, value: &str) {
        self.map
            .insert(field.to_string(), Value::String(value.to_string()));
    }

    /// Writes a string field only when it is present.
    pub fn write_opt_str(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.write_str(field, value);
        }
    }

    /// Writes a JSON value only when it is present.
    pub fn write_opt_value(&mut self, field: &str, value: Option<&Value>) {
        if let Some(value) = value {
            self.map.insert(field.to_string(), value.clone());
        }
    }

    /// Writes an array under its wire name when it has elements.
    pub fn write_array<T: Entity>(&mut self, array: &NamedArray<T>) {
        if !array.is_empty() {
            array.encode_into(&mut self.map);
        }
    }

    /// Writes a nested entity only when it is present.
    pub fn write_entity<T: Entity>(&mut self, field: &str, entity: Option<&T>) {
        if let Some(entity) = entity {
            self.map.insert(field.to_string(), entity.to_value());
        }
    }

    /// Consumes the writer and returns the object as a map.
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    /// Consumes the writer and returns the object as a JSON value.
    pub fn finish(self) -> Value {
        Value::Object(self.map)
    }
}
