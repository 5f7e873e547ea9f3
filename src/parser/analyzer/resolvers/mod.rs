pub mod index_admission;
pub use index_admission::*;

pub mod literal_resolver;
pub use literal_resolver::*;

pub mod select_resolver;
pub use select_resolver::*;

pub mod where_resolver;
pub use where_resolver::*;

pub mod unwind_resolver;
pub use unwind_resolver::*;

pub mod group_by_resolver;
pub use group_by_resolver::*;

pub mod having_resolver;
pub use having_resolver::*;

pub mod with_resolver;
pub use with_resolver::*;
