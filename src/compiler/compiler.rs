use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{
    catalog::{Collection, CollectionFinder, SchemaError},
    compiler::{CompiledQuery, CompilerConfig},
    diagnostics::ErrorManager,
    parser::{analyzer::AnalysisContext, ast::Query},
};

pub type SharedFinder = Box<dyn CollectionFinder + Send + Sync>;

/// Compiles query text against the collections its finder reports.
///
/// The finder is asked once, on the first compile, and the catalog is shared
/// by every later compile. Each compile owns its own AST and diagnostics, so a
/// compiler can be used from several threads at once.
pub struct Compiler {
    finder: SharedFinder,
    collections: OnceCell<Vec<Arc<Collection>>>,
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(finder: impl CollectionFinder + Send + Sync + 'static) -> Self {
        Self::with_config(finder, CompilerConfig::default())
    }

    pub fn with_config(finder: impl CollectionFinder + Send + Sync + 'static, config: CompilerConfig) -> Self {
        Self {
            finder: Box::new(finder),
            collections: OnceCell::new(),
            config,
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// The memoized catalog. A failed load is not cached and is retried on
    /// the next call.
    pub fn collections(&self) -> Result<&[Arc<Collection>], SchemaError> {
        self.collections
            .get_or_try_init(|| -> Result<Vec<Arc<Collection>>, SchemaError> {
                let collections = self.finder.find_all_collections()?;
                tracing::debug!(count = collections.len(), "schema catalog loaded");
                Ok(collections.into_iter().map(Arc::new).collect())
            })
            .map(Vec::as_slice)
    }

    pub fn compile(&self, text: &str) -> CompiledQuery {
        let mut errors = ErrorManager::new();

        let collections = match self.collections() {
            Ok(collections) => collections,
            Err(e) => {
                tracing::warn!(error = %e, "schema catalog could not be loaded");
                errors.add_error(format!("Error loading the schema catalog: {}", e), None);
                return CompiledQuery::failed(errors);
            },
        };

        let mut query = match Query::try_from(text) {
            Ok(query) => query,
            Err(e) => {
                tracing::debug!(error = %e, "query rejected by the parser");
                errors.add(e.to_query_error());
                return CompiledQuery::failed(errors);
            },
        };

        let collection = AnalysisContext::analyze_query(
            &mut query,
            collections,
            &mut errors,
            self.config.max_unindexed_rows,
        );

        tracing::debug!(
            collection = query.collection_name(),
            errors = errors.error_count(),
            warnings = errors.errors().len() - errors.error_count(),
            "query compiled"
        );

        CompiledQuery::new(Some(query), collection, errors)
    }
}
