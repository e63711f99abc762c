pub mod fixtures;

use dataiter::{DataMap, DataPath, DataValue, Matches};
use regex::Regex;
use std::sync::OnceLock;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a JSON object, failing if the document is anything else.
pub fn data_map_from_str(json: &str) -> Result<DataMap, Box<dyn std::error::Error>> {
    match DataValue::from_json_str(json)? {
        DataValue::Map(map) => Ok(map),
        other => Err(format!("expected a JSON object, found {}", other.kind()).into()),
    }
}

/// Renders match paths as strings, in walk order.
pub fn path_strings(matches: &Matches<'_>) -> Vec<String> {
    matches.iter().map(|e| e.path_string()).collect()
}

/// Joins paths with `:` the way a search path is written.
pub fn paths_to_string<'a>(paths: impl IntoIterator<Item = &'a DataPath>) -> String {
    paths
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(":")
}

fn location_regex() -> &'static Regex {
    static LOCATION: OnceLock<Regex> = OnceLock::new();
    LOCATION.get_or_init(|| Regex::new(r"^\d+,\d+: .*$").expect("valid location regex"))
}

/// Asserts that every line of `message` starts with a `line,column:` location.
pub fn assert_each_line_starts_with_location(message: &str) {
    for line in message.split('\n') {
        assert!(
            location_regex().is_match(line),
            "\"{}\" does not start with location",
            line
        );
    }
}
