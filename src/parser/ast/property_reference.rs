use std::fmt;

use crate::diagnostics::SourcePosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AggregateKind {
    #[default]
    None,
    Count,
    Sum,
    Average,
}

impl AggregateKind {
    /// Aggregates are spelled as a trailing, upper-case path segment.
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "COUNT" => AggregateKind::Count,
            "SUM" => AggregateKind::Sum,
            "AVG" => AggregateKind::Average,
            _ => AggregateKind::None,
        }
    }

    pub fn alias_suffix(&self) -> &'static str {
        match self {
            AggregateKind::None => "",
            AggregateKind::Count => "_count",
            AggregateKind::Sum => "_sum",
            AggregateKind::Average => "_avg",
        }
    }
}

/// A `collection.path` reference found in the query text.
///
/// `path` is kept as written, aggregate suffix included. The analyzer fills
/// `resolved` with the stored short path and may overwrite `alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyReference {
    pub collection: String,
    pub path: String,
    pub position: SourcePosition,
    pub aggregate: AggregateKind,
    pub alias: Option<String>,
    pub resolved: Option<String>,
}

impl PropertyReference {
    pub fn new(collection: &str, path: &str, position: SourcePosition) -> Self {
        let last_segment = path.rsplit('.').next().unwrap_or(path);
        let aggregate = AggregateKind::from_segment(last_segment);
        let alias = match aggregate {
            AggregateKind::None => None,
            kind => Some(format!("{}{}", collection, kind.alias_suffix())),
        };

        Self {
            collection: collection.to_string(),
            path: path.to_string(),
            position,
            aggregate,
            alias,
            resolved: None,
        }
    }

    /// A reference whose short path is already known (wildcard expansion).
    pub fn resolved(collection: &str, long_path: &str, short_path: &str, position: SourcePosition) -> Self {
        let mut reference = Self::new(collection, long_path, position);
        reference.resolved = Some(short_path.to_string());
        reference
    }

    pub fn is_aggregate(&self) -> bool {
        self.aggregate != AggregateKind::None
    }

    pub fn is_wildcard(&self) -> bool {
        self.path == "*" || self.path.ends_with(".*")
    }

    pub fn belongs_to(&self, collection: &str) -> bool {
        self.collection.eq_ignore_ascii_case(collection)
    }

    /// The path an aggregate accumulates over, without its suffix. Empty for
    /// a whole-collection aggregate such as `foo.COUNT`.
    pub fn value_path(&self) -> &str {
        if !self.is_aggregate() {
            return &self.path;
        }
        match self.path.rfind('.') {
            Some(dot) => &self.path[..dot],
            None => "",
        }
    }

    pub fn resolved_name(&self) -> Option<&str> {
        self.resolved.as_deref().filter(|name| !name.is_empty())
    }

    /// Column header used for this reference in a tabular result.
    pub fn display_name(&self) -> &str {
        match (&self.alias, self.is_aggregate()) {
            (Some(alias), true) => alias,
            _ => &self.path,
        }
    }
}

impl fmt::Display for PropertyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.collection, self.path)
    }
}

#[cfg(test)]
mod tests {
    use crate::{diagnostics::SourcePosition, parser::ast::{AggregateKind, PropertyReference}};

    #[test]
    pub fn test_plain_reference() {
        let reference = PropertyReference::new("foo", "Address.City", SourcePosition::new(1, 7));

        assert_eq!(reference.aggregate, AggregateKind::None);
        assert_eq!(reference.alias, None);
        assert_eq!(reference.value_path(), "Address.City");
        assert_eq!(reference.display_name(), "Address.City");
        assert_eq!(reference.to_string(), "foo.Address.City");
    }

    #[test]
    pub fn test_count_reference() {
        let reference = PropertyReference::new("foo", "COUNT", SourcePosition::default());

        assert_eq!(reference.aggregate, AggregateKind::Count);
        assert_eq!(reference.alias.as_deref(), Some("foo_count"));
        assert_eq!(reference.value_path(), "");
        assert_eq!(reference.display_name(), "foo_count");
    }

    #[test]
    pub fn test_sum_and_avg_references() {
        let sum = PropertyReference::new("Donations", "Amount.SUM", SourcePosition::default());
        assert_eq!(sum.aggregate, AggregateKind::Sum);
        assert_eq!(sum.alias.as_deref(), Some("Donations_sum"));
        assert_eq!(sum.value_path(), "Amount");

        let avg = PropertyReference::new("people", "Age.AVG", SourcePosition::default());
        assert_eq!(avg.aggregate, AggregateKind::Average);
        assert_eq!(avg.alias.as_deref(), Some("people_avg"));
    }

    #[test]
    pub fn test_aggregate_suffix_is_case_sensitive() {
        let reference = PropertyReference::new("foo", "Count", SourcePosition::default());
        assert!(!reference.is_aggregate());
    }

    #[test]
    pub fn test_wildcard() {
        assert!(PropertyReference::new("foo", "*", SourcePosition::default()).is_wildcard());
        assert!(PropertyReference::new("foo", "Address.*", SourcePosition::default()).is_wildcard());
        assert!(!PropertyReference::new("foo", "Name", SourcePosition::default()).is_wildcard());
    }
}
