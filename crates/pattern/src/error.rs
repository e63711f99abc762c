use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("Path pattern parse error in '{0}': {1}")]
    Parse(String, String),
}
