use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The query still compiles and runs
    Warning,
    /// The query produces no usable pipeline
    Error,
}

/// Location in the query text. Lines start at 1, characters at 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: usize,
    pub character: usize,
}

impl SourcePosition {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    pub severity: Severity,
    pub message: String,
    pub position: Option<SourcePosition>,
}

impl QueryError {
    pub fn error(message: impl Into<String>, position: Option<SourcePosition>) -> Self {
        Self { severity: Severity::Error, message: message.into(), position }
    }

    pub fn warning(message: impl Into<String>, position: Option<SourcePosition>) -> Self {
        Self { severity: Severity::Warning, message: message.into(), position }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match self.position {
            Some(position) => write!(f, "{} at [{}]: {}", label, position, self.message),
            None => write!(f, "{}: {}", label, self.message),
        }
    }
}
