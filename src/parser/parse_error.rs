use std::fmt::{self, Display};

use crate::{diagnostics::{QueryError, SourcePosition}, parser::{QueryParser, SyntaxHints}};

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    Select,
    From,
    Property,
    Collection,
    Comparator,
    Literal,
    Clause,
    On,
}

impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Expected::Select => "'SELECT'",
            Expected::From => "'FROM'",
            Expected::Property => "a property",
            Expected::Collection => "a collection name",
            Expected::Comparator => "a comparison",
            Expected::Literal => "a value",
            Expected::Clause => "a clause",
            Expected::On => "'ON'",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: Expected,
    /// Offending token, empty at end of input
    pub token: String,
    pub start: usize,
    pub end: usize,
    pub position: SourcePosition,
}

impl ParseError {
    pub fn new(expected: Expected, pivot: usize, parser: &QueryParser) -> Self {
        let token = parser.token_at(pivot);
        Self {
            expected,
            start: pivot,
            end: pivot + token.chars().count(),
            token,
            position: parser.source_position(pivot),
        }
    }

    pub fn err<T>(self) -> Result<T, ParseError> {
        Err(self)
    }

    pub fn message(&self) -> String {
        SyntaxHints::message_for(self.expected, &self.token)
    }

    pub fn to_query_error(&self) -> QueryError {
        QueryError::error(self.message(), Some(self.position))
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParseError: {}\n  at [{}] -> '{}'",
            self.message(),
            self.position,
            self.token
        )
    }
}

impl std::error::Error for ParseError {}
