use crate::catalog::{Collection, SchemaError};

/// Source of the collections a compiler can query.
///
/// A compiler asks its finder once, on first use, and keeps the answer.
pub trait CollectionFinder {
    fn find_all_collections(&self) -> Result<Vec<Collection>, SchemaError>;
}

impl CollectionFinder for Vec<Collection> {
    fn find_all_collections(&self) -> Result<Vec<Collection>, SchemaError> {
        Ok(self.clone())
    }
}
