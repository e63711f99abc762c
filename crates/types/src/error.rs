use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Malformed JSON input. Rendered with the location first so that every
    /// line of a report starts with `line,column:`.
    #[error("{line},{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unsupported number '{0}': integers must fit in a signed 64-bit value")]
    UnsupportedNumber(String),

    #[error("Value cannot be represented as data: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        let (line, column) = (e.line(), e.column());
        let rendered = e.to_string();
        // serde_json appends its own location; it is already rendered up front
        let suffix = format!(" at line {} column {}", line, column);
        let message = rendered.strip_suffix(suffix.as_str()).unwrap_or(&rendered).to_string();
        DataError::Syntax { line, column, message }
    }
}
