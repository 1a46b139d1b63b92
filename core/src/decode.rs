//! Generic JSON decoding into caller-chosen types.
//!
//! # Design
//! Bytes are parsed once into a `serde_json::Value`, then mapped field by
//! field through the target's `Decode` impl. Each impl spells out its own
//! source-key table through `Fields`, so the wire names live next to the
//! struct they fill and every failure knows the JSON path it happened at.
//! Unknown keys are never looked at.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeErrorKind};

/// Location of a value inside a JSON document, rendered as `$.Key[0].Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A type that can be built from a JSON value.
pub trait Decode: Sized {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError>;
}

/// Parse `bytes` as JSON and decode the document root into `T`.
pub fn from_slice<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::syntax)?;
    T::decode(&value, &FieldPath::root())
}

/// Name of a JSON value's kind, as used in type-mismatch errors.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(path: &FieldPath, expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::new(
        path.clone(),
        DecodeErrorKind::Type {
            expected,
            found: kind_of(found),
        },
    )
}

impl Decode for String {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(path, "string", value))
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => T::decode(other, path).map(Some),
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let items = value.as_array().ok_or_else(|| mismatch(path, "array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode(item, &path.index(i)))
            .collect()
    }
}

/// Keyed access to a JSON object while decoding one struct.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: &'a FieldPath,
}

impl<'a> Fields<'a> {
    /// Fails unless `value` is a JSON object.
    pub fn of(value: &'a Value, path: &'a FieldPath) -> Result<Self, DecodeError> {
        let map = value.as_object().ok_or_else(|| mismatch(path, "object", value))?;
        Ok(Self { map, path })
    }

    /// The key must be present. A present `null` is handed to `T`, so only
    /// `Option<T>` accepts it.
    pub fn required<T: Decode>(&self, key: &str) -> Result<T, DecodeError> {
        let path = self.path.key(key);
        match self.map.get(key) {
            Some(value) => T::decode(value, &path),
            None => Err(DecodeError::new(path, DecodeErrorKind::MissingField)),
        }
    }

    /// Missing and `null` both yield `None`.
    pub fn optional<T: Decode>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::decode(value, &self.path.key(key)).map(Some),
        }
    }

    /// Missing and `null` both yield `T::default()`.
    pub fn or_default<T: Decode + Default>(&self, key: &str) -> Result<T, DecodeError> {
        Ok(self.optional(key)?.unwrap_or_default())
    }
}
