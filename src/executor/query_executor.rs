use crate::{
    catalog::Collection,
    compiler::CompiledQuery,
    diagnostics::ErrorManager,
    executor::{AggregateResult, CommandRunner, ExecutionError, JoinPlugin, ResultMapper},
    parser::ast::Query,
};

/// Runs compiled queries and turns the replies into tables.
#[derive(Default)]
pub struct QueryExecutor {
    plugins: Vec<Box<dyn JoinPlugin>>,
}

impl QueryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugins(plugins: Vec<Box<dyn JoinPlugin>>) -> Self {
        Self { plugins }
    }

    pub fn register(&mut self, plugin: impl JoinPlugin + 'static) -> &mut Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run `compiled` through `runner`.
    ///
    /// The result always carries the compile diagnostics. A query with errors
    /// is not sent; a failed command adds one error and yields no rows.
    pub fn run(&mut self, compiled: &CompiledQuery, runner: &dyn CommandRunner) -> AggregateResult {
        let mut errors = compiled.error_manager().clone();

        let (Some(query), Some(collection), Some(command)) =
            (compiled.query(), compiled.collection(), compiled.command_text())
        else {
            return Self::finish(AggregateResult::new(), errors);
        };

        let reply = match runner.run_command(&collection.database, &command) {
            Ok(reply) => reply,
            Err(ExecutionError::Document(message)) => {
                tracing::warn!(collection = %collection.name, %message, "command document rejected");
                errors.add_error(format!("Error parsing document. {}", message), None);
                return Self::finish(AggregateResult::new(), errors);
            },
            Err(e) => {
                tracing::warn!(collection = %collection.name, error = %e, "command failed");
                errors.add_error(format!("Error running database command. {}", e), None);
                return Self::finish(AggregateResult::new(), errors);
            },
        };

        if !reply.ok {
            tracing::warn!(collection = %collection.name, "command answered not ok");
            errors.add_error("Error running database command.", None);
            return Self::finish(AggregateResult::new(), errors);
        }

        let mut result = ResultMapper::map_documents(query, collection, &reply.result);
        // plugins see the group key under its long name
        ResultMapper::rename_group_key(query, &mut result);
        let mut result = self.run_plugins(query, collection, result, &mut errors);
        ResultMapper::resolve_long_names(collection, &mut result);

        tracing::debug!(collection = %collection.name, rows = result.rows.len(), "query executed");

        Self::finish(result, errors)
    }

    fn run_plugins(
        &mut self,
        query: &Query,
        collection: &Collection,
        mut result: AggregateResult,
        errors: &mut ErrorManager,
    ) -> AggregateResult {
        let Some(with) = &query.with else {
            return result;
        };
        let join_property = query.property(with.join_property);
        let selected: Vec<String> = with.selected_columns.iter()
            .map(|id| query.property(*id).path.clone())
            .collect();

        for plugin in self.plugins.iter_mut() {
            if !plugin.is_collection_supported(&with.collection.name) {
                continue;
            }

            plugin.init(collection, join_property, selected.clone());

            let before = errors.error_count();
            plugin.verify_selected_columns(errors);
            if errors.error_count() > before {
                tracing::warn!(join = %with.collection.name, "join plugin skipped, selected columns rejected");
                continue;
            }

            result = plugin.run_join(result);
        }

        result
    }

    fn finish(mut result: AggregateResult, mut errors: ErrorManager) -> AggregateResult {
        for error in std::mem::take(&mut result.errors) {
            errors.add(error);
        }
        result.errors = errors.into_errors();
        result
    }
}
