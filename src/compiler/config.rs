use serde::Deserialize;

pub const DEFAULT_MAX_UNINDEXED_ROWS: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Collections with at least this many rows refuse WHERE and GROUP BY
    /// clauses that no index covers. Smaller ones only get a warning.
    pub max_unindexed_rows: u64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self { max_unindexed_rows: DEFAULT_MAX_UNINDEXED_ROWS }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_unindexed_rows(mut self, max_unindexed_rows: u64) -> Self {
        self.max_unindexed_rows = max_unindexed_rows;
        self
    }
}
