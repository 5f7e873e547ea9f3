use crate::diagnostics::{QueryError, Severity, SourcePosition};

/// Collects the diagnostics raised while compiling or running one query.
///
/// Errors reported twice at the same position are kept once; errors without
/// a position and warnings are always kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorManager {
    errors: Vec<QueryError>,
}

impl ErrorManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: QueryError) {
        if error.is_error() && self.has_error_at(error.position) {
            return;
        }
        self.errors.push(error);
    }

    pub fn add_error(&mut self, message: impl Into<String>, position: Option<SourcePosition>) {
        self.add(QueryError::error(message, position));
    }

    pub fn add_warning(&mut self, message: impl Into<String>, position: Option<SourcePosition>) {
        self.add(QueryError::warning(message, position));
    }

    fn has_error_at(&self, position: Option<SourcePosition>) -> bool {
        match position {
            Some(position) => self.errors.iter().any(|e| e.is_error() && e.position == Some(position)),
            None => false,
        }
    }

    /// True when nothing with `Error` severity was reported.
    pub fn can_execute(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| e.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.errors.iter().any(|e| e.severity == Severity::Warning)
    }

    pub fn has_any_issues(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_error()).count()
    }

    pub fn errors(&self) -> &[QueryError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<QueryError> {
        self.errors
    }
}
