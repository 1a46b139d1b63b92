//! JSON encoding with the same source-key tables the decoders use.

use serde_json::Value;

/// A type that can be written back to its wire JSON shape.
pub trait Encode {
    fn encode(&self) -> Value;
}

/// Encode `value` to JSON bytes.
pub fn to_vec<T: Encode>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&value.encode())
}

impl Encode for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Value {
        self.as_ref().map_or(Value::Null, Encode::encode)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> Value {
        Value::Array(self.iter().map(Encode::encode).collect())
    }
}
