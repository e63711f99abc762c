pub mod convert;
pub mod error;
pub mod path;
pub mod value;

pub use convert::objects_from_str;
pub use error::DataError;
pub use path::{DataPath, PathSegment};
pub use value::{DataList, DataMap, DataValue, ValueKind};
