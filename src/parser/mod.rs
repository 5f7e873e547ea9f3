pub mod query_parser;
pub use query_parser::*;

pub mod phase;
pub use phase::*;

pub mod ast;

pub mod parse_error;
pub use parse_error::*;

pub mod syntax_hints;
pub use syntax_hints::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod query_comparers;
pub use query_comparers::*;

pub mod analyzer;
