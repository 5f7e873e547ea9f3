pub mod property;
pub use property::*;

pub mod property_set;
pub use property_set::*;

pub mod index;
pub use index::*;

pub mod collection;
pub use collection::*;

pub mod schema_error;
pub use schema_error::*;

pub mod collection_finder;
pub use collection_finder::*;

pub mod schema_descriptor;
pub use schema_descriptor::*;
