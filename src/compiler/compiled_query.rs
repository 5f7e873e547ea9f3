use std::sync::Arc;

use crate::{
    catalog::Collection,
    diagnostics::{ErrorManager, QueryError},
    parser::ast::Query,
    planner::{Pipeline, PipelineBuilder},
};

/// Outcome of one [`Compiler::compile`](crate::compiler::Compiler::compile).
///
/// Always carries the diagnostics. The analyzed query and its collection are
/// present whenever parsing succeeded and the collection was found, even when
/// later checks reported errors, so callers can inspect what was understood.
#[derive(Debug, Clone, Default)]
pub struct CompiledQuery {
    query: Option<Query>,
    collection: Option<Arc<Collection>>,
    errors: ErrorManager,
}

impl CompiledQuery {
    pub fn new(query: Option<Query>, collection: Option<Arc<Collection>>, errors: ErrorManager) -> Self {
        Self { query, collection, errors }
    }

    pub fn failed(errors: ErrorManager) -> Self {
        Self { errors, ..Default::default() }
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn collection(&self) -> Option<&Arc<Collection>> {
        self.collection.as_ref()
    }

    /// The pipeline for this query, `None` when any error was reported.
    pub fn pipeline(&self) -> Option<Pipeline> {
        if self.has_errors() {
            return None;
        }
        let query = self.query.as_ref()?;
        let collection = self.collection.as_ref()?;
        Some(PipelineBuilder::from_analyzed(query, collection))
    }

    /// The `aggregate` command text sent to the database.
    pub fn command_text(&self) -> Option<String> {
        self.pipeline().map(|p| p.to_string())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn has_warnings(&self) -> bool {
        self.errors.has_warnings()
    }

    pub fn diagnostics(&self) -> &[QueryError] {
        self.errors.errors()
    }

    pub fn error_manager(&self) -> &ErrorManager {
        &self.errors
    }
}
