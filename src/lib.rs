pub mod catalog;
pub use catalog::{Collection, CollectionFinder, Index, Property, SchemaDescriptor, SchemaError};

pub mod diagnostics;
pub use diagnostics::{ErrorManager, QueryError, Severity, SourcePosition};

pub mod parser;

pub mod planner;
pub use planner::Pipeline;

pub mod compiler;
pub use compiler::{CompiledQuery, Compiler, CompilerConfig};

pub mod executor;
pub use executor::{AggregateResult, CommandReply, CommandRunner, DocumentJoinPlugin, ExecutionError, JoinPlugin, QueryExecutor};
