use crate::{
    catalog::Collection,
    diagnostics::ErrorManager,
    executor::AggregateResult,
    parser::ast::PropertyReference,
};

/// In-memory join behind a `WITH <collection> ON <property>` clause.
///
/// The executor hands every plugin that supports the joined collection the
/// primary collection, the join property and the joined columns the query
/// selected (`init`), lets it report unsupported columns (`verify_selected_columns`)
/// and then passes the mapped result through `run_join`. Plugins run in the
/// order they were registered, each on the previous one's output.
pub trait JoinPlugin {
    fn is_column_supported(&self, column: &str) -> bool;

    fn is_collection_supported(&self, collection: &str) -> bool;

    fn verify_selected_columns(&self, errors: &mut ErrorManager);

    fn init(&mut self, collection: &Collection, join_property: &PropertyReference, selected_columns: Vec<String>);

    fn run_join(&self, input: AggregateResult) -> AggregateResult;
}
