//! A `nom`-based parser for path patterns.
use super::ast::{PathPattern, PatternComponent, Wildcard};
use crate::error::PatternError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{map, opt, value},
    multi::{fold_many0, separated_list0},
    sequence::{delimited, preceded},
};
use std::str::FromStr;

// --- Main Public Parser ---

pub fn parse_pattern(input: &str) -> Result<PathPattern, PatternError> {
    match pattern(input.trim()) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rem, _)) => Err(PatternError::Parse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(PatternError::Parse(input.to_string(), e.to_string())),
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}

// --- Combinators ---

fn pattern(input: &str) -> IResult<&str, PathPattern> {
    map(
        preceded(opt(char('/')), separated_list0(char('/'), component)),
        PathPattern::new,
    )
    .parse(input)
}

fn component(input: &str) -> IResult<&str, PatternComponent> {
    alt((
        map(wildcard, PatternComponent::Wildcard),
        map(quoted_literal, PatternComponent::Name),
        map(bare_literal, |s: &str| PatternComponent::Name(s.to_string())),
    ))
    .parse(input)
}

fn wildcard(input: &str) -> IResult<&str, Wildcard> {
    alt((
        // `**` must be tried before `*`
        value(Wildcard::AnyZeroOrMore, tag("**")),
        value(Wildcard::AnyOne, char('*')),
        value(Wildcard::AnyZeroOrOne, char('?')),
        value(Wildcard::AnyOneOrMore, char('+')),
    ))
    .parse(input)
}

/// A literal between single quotes; `''` inside the quotes stands for one quote.
fn quoted_literal(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        fold_many0(
            alt((take_while1(|c: char| c != '\''), value("'", tag("''")))),
            String::new,
            |mut literal, part| {
                literal.push_str(part);
                literal
            },
        ),
        char('\''),
    )
    .parse(input)
}

fn bare_literal(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !matches!(c, '/' | '\'' | '*' | '+' | '?') && !c.is_whitespace())
        .parse(input)
}
