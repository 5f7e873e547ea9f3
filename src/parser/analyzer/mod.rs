pub mod analysis_context;
pub use analysis_context::*;

pub mod resolvers;
pub use resolvers::*;
