pub mod aggregate_result;
pub use aggregate_result::*;

pub mod cell_text;
pub use cell_text::*;

pub mod command_runner;
pub use command_runner::*;

pub mod join_plugin;
pub use join_plugin::*;

pub mod document_join;
pub use document_join::*;

pub mod result_mapper;
pub use result_mapper::*;

pub mod query_executor;
pub use query_executor::*;
