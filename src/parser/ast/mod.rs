pub mod query;
pub use query::*;

pub mod property_reference;
pub use property_reference::*;

pub mod property_table;
pub use property_table::*;

pub mod property_parser;
pub use property_parser::*;

pub mod text_collector;
pub use text_collector::*;

pub mod literal;
pub use literal::*;

pub mod operators;
pub use operators::*;

pub mod comparison;
pub use comparison::*;

pub mod projection_parser;
pub use projection_parser::*;

pub mod collection_parser;
pub use collection_parser::*;

pub mod where_parser;
pub use where_parser::*;

pub mod unwind_parser;
pub use unwind_parser::*;

pub mod group_by;
pub use group_by::*;

pub mod having_parser;
pub use having_parser::*;

pub mod with_parser;
pub use with_parser::*;
