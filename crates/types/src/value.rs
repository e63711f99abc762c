//! The dynamically typed value wrapped by every data element.
use indexmap::IndexMap;
use std::fmt;

/// An insertion-ordered mapping from string keys to values.
pub type DataMap = IndexMap<String, DataValue>;

/// An ordered sequence of values.
pub type DataList = Vec<DataValue>;

/// A dynamically typed value: a map, a list, or a scalar.
///
/// Equality is value based. Maps and lists compare structurally, scalars compare
/// exactly, and numeric variants never compare equal across types, so
/// `Int(1) != Long(1)`. Floating point values compare by bit pattern, which makes
/// `NaN` equal to itself and keeps `0.0` and `-0.0` apart.
#[derive(Debug, Clone, Default)]
pub enum DataValue {
    #[default]
    Null,
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    Map(DataMap),
    List(DataList),
}

/// The variant of a [`DataValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
    Map,
    List,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Bytes => "bytes",
            ValueKind::Map => "map",
            ValueKind::List => "list",
        }
    }

    /// Maps and lists are complex; everything else is a scalar.
    pub fn is_complex(&self) -> bool {
        matches!(self, ValueKind::Map | ValueKind::List)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DataValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            DataValue::Null => ValueKind::Null,
            DataValue::Boolean(_) => ValueKind::Boolean,
            DataValue::Int(_) => ValueKind::Int,
            DataValue::Long(_) => ValueKind::Long,
            DataValue::Float(_) => ValueKind::Float,
            DataValue::Double(_) => ValueKind::Double,
            DataValue::String(_) => ValueKind::String,
            DataValue::Bytes(_) => ValueKind::Bytes,
            DataValue::Map(_) => ValueKind::Map,
            DataValue::List(_) => ValueKind::List,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    pub fn is_complex(&self) -> bool {
        self.kind().is_complex()
    }

    pub fn as_map(&self) -> Option<&DataMap> {
        match self {
            DataValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&DataList> {
        match self {
            DataValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number of direct children: entries for a map or list, zero for scalars.
    pub fn child_count(&self) -> usize {
        match self {
            DataValue::Map(map) => map.len(),
            DataValue::List(list) => list.len(),
            _ => 0,
        }
    }
}

impl PartialEq for DataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DataValue::Null, DataValue::Null) => true,
            (DataValue::Boolean(a), DataValue::Boolean(b)) => a == b,
            (DataValue::Int(a), DataValue::Int(b)) => a == b,
            (DataValue::Long(a), DataValue::Long(b)) => a == b,
            (DataValue::Float(a), DataValue::Float(b)) => a.to_bits() == b.to_bits(),
            (DataValue::Double(a), DataValue::Double(b)) => a.to_bits() == b.to_bits(),
            (DataValue::String(a), DataValue::String(b)) => a == b,
            (DataValue::Bytes(a), DataValue::Bytes(b)) => a == b,
            (DataValue::Map(a), DataValue::Map(b)) => a == b,
            (DataValue::List(a), DataValue::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for DataValue {}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Boolean(b)
    }
}

impl From<i32> for DataValue {
    fn from(n: i32) -> Self {
        DataValue::Int(n)
    }
}

impl From<i64> for DataValue {
    fn from(n: i64) -> Self {
        DataValue::Long(n)
    }
}

impl From<f32> for DataValue {
    fn from(n: f32) -> Self {
        DataValue::Float(n)
    }
}

impl From<f64> for DataValue {
    fn from(n: f64) -> Self {
        DataValue::Double(n)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<Vec<u8>> for DataValue {
    fn from(bytes: Vec<u8>) -> Self {
        DataValue::Bytes(bytes)
    }
}

impl From<DataMap> for DataValue {
    fn from(map: DataMap) -> Self {
        DataValue::Map(map)
    }
}

impl From<DataList> for DataValue {
    fn from(list: DataList) -> Self {
        DataValue::List(list)
    }
}

impl<V: Into<DataValue>> FromIterator<V> for DataValue {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        DataValue::List(iter.into_iter().map(Into::into).collect())
    }
}
