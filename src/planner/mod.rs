pub mod pipeline;
pub use pipeline::*;

pub mod pipeline_builder;
pub use pipeline_builder::*;
