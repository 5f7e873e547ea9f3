use std::ops::{Index, IndexMut};

use indexmap::IndexMap;

use crate::{diagnostics::SourcePosition, parser::ast::PropertyReference};

/// Handle to a reference stored in a [`PropertyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub usize);

/// Arena of the property references of one query.
///
/// The same `collection.path` text always yields the same id, so an
/// annotation made through one clause is visible from every other clause
/// naming that property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    references: Vec<PropertyReference>,
    interned: IndexMap<String, PropertyId>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, collection: &str, path: &str, position: SourcePosition) -> PropertyId {
        let key = format!("{}.{}", collection, path);
        if let Some(id) = self.interned.get(&key) {
            return *id;
        }

        let id = self.push(PropertyReference::new(collection, path, position));
        self.interned.insert(key, id);
        id
    }

    /// Store a reference without interning it.
    pub fn push(&mut self, reference: PropertyReference) -> PropertyId {
        let id = PropertyId(self.references.len());
        self.references.push(reference);
        id
    }

    pub fn get(&self, id: PropertyId) -> Option<&PropertyReference> {
        self.references.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &PropertyReference)> {
        self.references.iter().enumerate().map(|(i, r)| (PropertyId(i), r))
    }
}

impl Index<PropertyId> for PropertyTable {
    type Output = PropertyReference;

    fn index(&self, id: PropertyId) -> &Self::Output {
        &self.references[id.0]
    }
}

impl IndexMut<PropertyId> for PropertyTable {
    fn index_mut(&mut self, id: PropertyId) -> &mut Self::Output {
        &mut self.references[id.0]
    }
}

#[cfg(test)]
mod tests {
    use crate::{diagnostics::SourcePosition, parser::ast::{PropertyReference, PropertyTable}};

    #[test]
    pub fn test_intern_returns_same_id() {
        let mut table = PropertyTable::new();
        let first = table.intern("foo", "Name", SourcePosition::new(1, 7));
        let second = table.intern("foo", "Name", SourcePosition::new(1, 40));
        let other = table.intern("foo", "DateCreated", SourcePosition::new(1, 17));

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(table.len(), 2);
        assert_eq!(table[first].position, SourcePosition::new(1, 7));
    }

    #[test]
    pub fn test_annotation_is_shared() {
        let mut table = PropertyTable::new();
        let select = table.intern("foo", "Name", SourcePosition::default());
        let group = table.intern("foo", "Name", SourcePosition::default());

        table[group].alias = Some("_id".into());

        assert_eq!(table[select].alias.as_deref(), Some("_id"));
    }

    #[test]
    pub fn test_push_skips_interning() {
        let mut table = PropertyTable::new();
        let interned = table.intern("foo", "Name", SourcePosition::default());
        let pushed = table.push(PropertyReference::resolved("foo", "Name", "n", SourcePosition::default()));

        assert_ne!(interned, pushed);
        assert_eq!(table.get(pushed).and_then(|r| r.resolved_name()), Some("n"));
        assert!(table.get(interned).and_then(|r| r.resolved_name()).is_none());
    }
}
