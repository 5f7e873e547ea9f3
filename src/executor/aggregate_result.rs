use serde::{Deserialize, Serialize};

use crate::diagnostics::QueryError;

/// A flat table built from the documents an `aggregate` command returned.
/// Every row has one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub errors: Vec<QueryError>,
}

impl AggregateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row.get(index).map(String::as_str).unwrap_or_default()).collect())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(QueryError::is_error)
    }
}
