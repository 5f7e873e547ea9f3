use std::fmt;

use indexmap::IndexMap;

use crate::catalog::{Index, Property, PropertySet};

/// A property reached through a wildcard, with both spellings of its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub long_path: String,
    pub short_path: String,
}

/// Schema metadata for one storage collection.
///
/// Paths are dotted; every segment is matched case-insensitively against the
/// property set active at that depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub database: String,
    /// Top-level properties in catalog order
    pub properties: PropertySet,
    /// Declared indices. `None` marks a collection whose index list could not
    /// be discovered; the analyzer refuses to compile against it.
    pub indices: Option<Vec<Index>>,
    /// Approximate number of stored documents
    pub row_count: u64,
}

impl Collection {
    pub fn new(database: &str, name: &str, properties: Vec<Property>) -> Self {
        Self {
            name: name.to_string(),
            database: database.to_string(),
            properties: PropertySet::new(properties),
            indices: Some(vec![]),
            row_count: 0,
        }
    }

    pub fn with_indices(mut self, indices: Vec<Index>) -> Self { self.indices = Some(indices); self }
    pub fn with_row_count(mut self, row_count: u64) -> Self { self.row_count = row_count; self }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn short_name_of(&self, long_name: &str) -> Option<&str> {
        self.properties.by_long_name(long_name).map(|p| p.short_name.as_str())
    }

    pub fn long_name_of(&self, short_name: &str) -> Option<&str> {
        self.properties.by_short_name(short_name).map(|p| p.long_name.as_str())
    }

    pub fn long_to_short(&self) -> IndexMap<String, String> {
        self.properties.long_to_short()
    }

    pub fn short_to_long(&self) -> IndexMap<String, String> {
        self.properties.short_to_long()
    }

    /// True when some index leads with `short_segment`.
    pub fn is_indexed(&self, short_segment: &str) -> bool {
        self.indices.iter()
            .flatten()
            .any(|index| index.first_property() == Some(short_segment))
    }

    /// Translate a dotted long path into its stored short path.
    ///
    /// Returns `None` as soon as one segment cannot be resolved, including a
    /// segment that tries to descend below a scalar property.
    pub fn resolve_short(&self, long_path: &str) -> Option<String> {
        let mut level = Some(&self.properties);
        let mut segments = Vec::new();

        for piece in long_path.split('.') {
            let property = level?.by_long_name(piece)?;
            segments.push(property.short_name.as_str());
            level = property.has_sub_properties().then_some(&property.sub_properties);
        }

        Some(segments.join("."))
    }

    /// Translate a dotted short path into its long path.
    ///
    /// Unlike [`Collection::resolve_short`] this never fails: when the first
    /// segment is unknown the input comes back unchanged, so result columns the
    /// catalog knows nothing about (join plugin output) survive the mapping.
    /// Segments past the last resolvable one are kept as written.
    pub fn resolve_long(&self, short_path: &str) -> String {
        let pieces: Vec<&str> = short_path.split('.').collect();
        let mut level = Some(&self.properties);
        let mut segments: Vec<&str> = Vec::new();

        for piece in &pieces {
            let Some(property) = level.and_then(|l| l.by_short_name(piece)) else {
                break;
            };
            segments.push(property.long_name.as_str());
            level = property.has_sub_properties().then_some(&property.sub_properties);
        }

        if segments.is_empty() {
            return short_path.to_string();
        }

        let resolved = segments.len();
        segments.extend(pieces.iter().skip(resolved));
        segments.join(".")
    }

    /// Find the property node a long path points at.
    pub fn resolve_property(&self, long_path: &str) -> Option<&Property> {
        let mut level = Some(&self.properties);
        let mut current = None;

        for piece in long_path.split('.') {
            let property = level?.by_long_name(piece)?;
            level = property.has_sub_properties().then_some(&property.sub_properties);
            current = Some(property);
        }

        current
    }

    /// Expand `Parent.Child.*` (or a bare `*`) into the leaf properties sitting
    /// directly under the parent, in catalog order. Nested properties at that
    /// level are left out.
    pub fn expand_wildcard(&self, long_path: &str) -> Option<Vec<ResolvedPath>> {
        let pieces: Vec<&str> = long_path.split('.').collect();
        let (last, parents) = pieces.split_last()?;
        if *last != "*" {
            return None;
        }

        let mut level = &self.properties;
        let mut long_prefix = String::new();
        let mut short_prefix = String::new();
        for piece in parents {
            let property = level.by_long_name(piece)?;
            if !property.has_sub_properties() {
                return None;
            }
            long_prefix.push_str(&property.long_name);
            long_prefix.push('.');
            short_prefix.push_str(&property.short_name);
            short_prefix.push('.');
            level = &property.sub_properties;
        }

        Some(level.iter()
            .filter(|p| !p.has_sub_properties())
            .map(|p| ResolvedPath {
                long_path: format!("{}{}", long_prefix, p.long_name),
                short_path: format!("{}{}", short_prefix, p.short_name),
            })
            .collect())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
pub mod test_collections {
    use crate::catalog::{Collection, Index, Property};

    /// `foo` with an id, a string and a date; no indices, empty.
    pub fn foo() -> Collection {
        Collection::new("foo", "foo", vec![
            Property::scalar("FooId", "_id", "BsonObjectId"),
            Property::scalar("Name", "n", "String"),
            Property::scalar("DateCreated", "dc", "DateTime"),
        ])
    }

    /// `people` with nested, list-valued and indexed properties.
    pub fn people() -> Collection {
        Collection::new("crm", "people", vec![
            Property::nested("Address", "a", "Address", vec![
                Property::scalar("City", "c", "String"),
                Property::nested("Geo", "g", "Geo", vec![
                    Property::scalar("Lat", "la", "Double"),
                    Property::scalar("Lng", "ln", "Double"),
                ]),
                Property::scalar("Street", "s", "String"),
            ]),
            Property::scalar("Age", "ag", "Int32"),
            Property::scalar("Email", "e", "String"),
            Property::scalar("IsActive", "ia", "Boolean"),
            Property::scalar("PersonId", "_id", "ObjectId"),
            Property::nested("Pets", "p", "Pet", vec![
                Property::scalar("Kind", "k", "String"),
                Property::scalar("Name", "n", "String"),
            ]).with_list(),
            Property::scalar("SignedUp", "su", "DateTime"),
            Property::scalar("Tags", "t", "String").with_list(),
        ])
        .with_indices(vec![
            Index::new("email_1", vec!["e".into()], vec!["Email".into()]),
            Index::new("city_age", vec!["a.c".into(), "ag".into()], vec!["Address.City".into(), "Age".into()]),
        ])
        .with_row_count(2_500_000)
    }
}
