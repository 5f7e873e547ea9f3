use std::sync::Arc;

use crate::{
    catalog::Collection,
    diagnostics::ErrorManager,
    parser::{
        analyzer::{GroupByResolver, HavingResolver, SelectResolver, UnwindResolver, WhereResolver, WithResolver},
        ast::Query,
    },
};

/// State shared by the resolvers while one query is analyzed.
pub struct AnalysisContext<'a> {
    /// The collection named after `FROM`
    pub collection: &'a Collection,
    pub errors: &'a mut ErrorManager,
    /// Collections with at least this many rows refuse un-indexed access
    pub max_unindexed_rows: u64,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(collection: &'a Collection, errors: &'a mut ErrorManager, max_unindexed_rows: u64) -> Self {
        Self { collection, errors, max_unindexed_rows }
    }

    /// Resolve and validate `query` in place against `collections`.
    ///
    /// Returns the target collection, or `None` when it is unknown or its index
    /// list is missing; in that case no clause is analyzed. Every other problem
    /// is reported to `errors` and only stops the clause it was found in.
    pub fn analyze_query(
        query: &mut Query,
        collections: &[Arc<Collection>],
        errors: &mut ErrorManager,
        max_unindexed_rows: u64,
    ) -> Option<Arc<Collection>> {
        let position = query.collection.as_ref().map(|c| c.position);
        let name = query.collection_name();

        let Some(collection) = collections.iter().find(|c| c.is_named(name)) else {
            errors.add_error(format!("Unknown collection: {}", name), position);
            return None;
        };

        if collection.indices.is_none() {
            errors.add_error(format!("Invalid collection {}, its indices are unknown", collection.name), position);
            return None;
        }

        let mut ctx = AnalysisContext::new(collection, errors, max_unindexed_rows);

        SelectResolver::resolve(query, &mut ctx);
        WhereResolver::resolve(query, &mut ctx);
        UnwindResolver::resolve(query, &mut ctx);
        GroupByResolver::resolve(query, &mut ctx);
        HavingResolver::resolve(query, &mut ctx);
        WithResolver::resolve(query, &mut ctx);

        tracing::debug!(collection = %collection.name, issues = ctx.errors.errors().len(), "query analyzed");

        Some(Arc::clone(collection))
    }
}
