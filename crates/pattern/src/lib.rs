//! A small pattern language for matching element paths.
//!
//! Patterns are `/`-separated components. A component is either a literal name or a
//! wildcard: `*` matches exactly one name, `?` zero or one, `+` one or more and `**`
//! zero or more. Literals containing reserved characters can be quoted, as in
//! `/'a/b'/*`, with `''` standing for a quote inside a quoted literal. A pattern always matches the whole path, so `/` (or the empty
//! pattern) matches only the root.

pub mod ast;
pub mod error;
mod matcher;
mod parser;

pub use ast::{PathPattern, PatternComponent, Wildcard};
pub use error::PatternError;
pub use parser::parse_pattern;
