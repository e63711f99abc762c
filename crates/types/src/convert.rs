//! Conversion between JSON documents and the data model.
//!
//! JSON numbers become `Int` when they fit in 32 bits, `Long` when they fit in 64
//! bits and `Double` when they carry a fraction or exponent. Unsigned integers
//! beyond `i64::MAX` have no representation and are rejected instead of being
//! coerced to a float.
use crate::error::DataError;
use crate::value::{DataMap, DataValue};
use serde::Serialize;
use serde_json::{Number, Value};

impl DataValue {
    /// Parses a single JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(json)?;
        DataValue::try_from(value)
    }

    /// Converts any serializable Rust value through its JSON form.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, DataError> {
        let json =
            serde_json::to_value(value).map_err(|e| DataError::Serialize(e.to_string()))?;
        DataValue::try_from(json)
    }

    /// Renders the value as JSON. Bytes become a string with one character per
    /// byte (U+0000..=U+00FF); non-finite floats become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            DataValue::Null => Value::Null,
            DataValue::Boolean(b) => Value::Bool(*b),
            DataValue::Int(n) => Value::from(*n),
            DataValue::Long(n) => Value::from(*n),
            DataValue::Float(n) => Number::from_f64(f64::from(*n)).map_or(Value::Null, Value::Number),
            DataValue::Double(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            DataValue::String(s) => Value::String(s.clone()),
            DataValue::Bytes(bytes) => Value::String(bytes.iter().map(|&b| char::from(b)).collect()),
            DataValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            DataValue::List(list) => Value::Array(list.iter().map(DataValue::to_json).collect()),
        }
    }
}

fn convert_number(n: &Number) -> Result<DataValue, DataError> {
    if let Some(i) = n.as_i64() {
        return Ok(match i32::try_from(i) {
            Ok(small) => DataValue::Int(small),
            Err(_) => DataValue::Long(i),
        });
    }
    if n.is_u64() {
        return Err(DataError::UnsupportedNumber(n.to_string()));
    }
    n.as_f64()
        .map(DataValue::Double)
        .ok_or_else(|| DataError::UnsupportedNumber(n.to_string()))
}

impl TryFrom<&Value> for DataValue {
    type Error = DataError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => DataValue::Null,
            Value::Bool(b) => DataValue::Boolean(*b),
            Value::Number(n) => convert_number(n)?,
            Value::String(s) => DataValue::String(s.clone()),
            Value::Array(items) => DataValue::List(
                items
                    .iter()
                    .map(DataValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(members) => {
                let mut map = DataMap::with_capacity(members.len());
                for (key, member) in members {
                    map.insert(key.clone(), DataValue::try_from(member)?);
                }
                DataValue::Map(map)
            }
        })
    }
}

impl TryFrom<Value> for DataValue {
    type Error = DataError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        DataValue::try_from(&value)
    }
}

/// Parses a stream of concatenated or whitespace separated JSON documents.
pub fn objects_from_str(input: &str) -> Result<Vec<DataValue>, DataError> {
    serde_json::Deserializer::from_str(input)
        .into_iter::<Value>()
        .map(|document| DataValue::try_from(document?))
        .collect()
}
