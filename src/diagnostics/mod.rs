pub mod query_error;
pub use query_error::*;

pub mod error_manager;
pub use error_manager::*;
