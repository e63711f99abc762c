//! Defines the parsed form of a path pattern.
use std::fmt;

/// A wildcard component and how many names it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `*`: exactly one name.
    AnyOne,
    /// `?`: zero or one name.
    AnyZeroOrOne,
    /// `+`: one or more names.
    AnyOneOrMore,
    /// `**`: zero or more names.
    AnyZeroOrMore,
}

impl Wildcard {
    pub fn symbol(&self) -> &'static str {
        match self {
            Wildcard::AnyOne => "*",
            Wildcard::AnyZeroOrOne => "?",
            Wildcard::AnyOneOrMore => "+",
            Wildcard::AnyZeroOrMore => "**",
        }
    }
}

/// One `/`-separated component of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternComponent {
    /// Matches a single name equal to the literal.
    Name(String),
    Wildcard(Wildcard),
}

/// A parsed path pattern, anchored at both ends of the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathPattern {
    components: Vec<PatternComponent>,
}

impl PathPattern {
    pub fn new(components: Vec<PatternComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[PatternComponent] {
        &self.components
    }
}

fn needs_quotes(literal: &str) -> bool {
    literal.is_empty()
        || literal
            .chars()
            .any(|c| matches!(c, '/' | '\'' | '*' | '+' | '?') || c.is_whitespace())
}

impl fmt::Display for PatternComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternComponent::Name(name) if needs_quotes(name) => {
                write!(f, "'{}'", name.replace('\'', "''"))
            }
            PatternComponent::Name(name) => f.write_str(name),
            PatternComponent::Wildcard(w) => f.write_str(w.symbol()),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("/");
        }
        for component in &self.components {
            write!(f, "/{}", component)?;
        }
        Ok(())
    }
}
