pub mod config;
pub use config::*;

pub mod compiled_query;
pub use compiled_query::*;

pub mod compiler;
pub use compiler::*;
