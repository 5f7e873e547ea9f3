use serde::{Deserialize, Serialize};

use crate::catalog::PropertySet;

/// Coarse classification of a declared property type, used to decide how a
/// literal compared against the property must be written in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Calendar date/time values, compared through a date constructor
    DateTime,
    /// Booleans, written in queries as `1` / `0`
    Boolean,
    /// Document identifiers, compared through an id constructor
    ObjectId,
    /// Anything else; literals pass through untouched
    Other,
}

impl ValueKind {
    /// Classify a declared type name. Matching is case-insensitive and accepts
    /// the usual spellings used by document mappers.
    pub fn of_type_name(type_name: &str) -> ValueKind {
        match type_name.to_ascii_lowercase().as_str() {
            "datetime" | "date" | "datetimeoffset" => ValueKind::DateTime,
            "boolean" | "bool" => ValueKind::Boolean,
            "objectid" | "bsonobjectid" | "oid" => ValueKind::ObjectId,
            _ => ValueKind::Other,
        }
    }
}

/// Metadata for one persisted property of a document type.
///
/// A property is either a scalar leaf or a nested document, in which case
/// `sub_properties` holds its own properties together with their name maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    /// Business-facing name as declared on the modeled entity
    pub long_name: String,
    /// Field name used in the stored documents
    pub short_name: String,
    /// Declared type name (e.g. `String`, `DateTime`, `ObjectId`)
    pub type_name: String,
    pub is_list: bool,
    pub is_nullable: bool,
    pub is_enum: bool,
    /// Names of the enum members when `is_enum` is set
    pub enum_values: Vec<String>,
    /// Nested properties; empty for scalar leaves
    pub sub_properties: PropertySet,
}

impl Property {
    /// Create a scalar property.
    pub fn scalar(long_name: &str, short_name: &str, type_name: &str) -> Self {
        Self {
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            type_name: type_name.to_string(),
            ..Default::default()
        }
    }

    /// Create a nested property holding `properties` in the given order.
    pub fn nested(long_name: &str, short_name: &str, type_name: &str, properties: Vec<Property>) -> Self {
        Self {
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            type_name: type_name.to_string(),
            sub_properties: PropertySet::new(properties),
            ..Default::default()
        }
    }

    pub fn with_list(mut self) -> Self { self.is_list = true; self }
    pub fn with_nullable(mut self) -> Self { self.is_nullable = true; self }
    pub fn with_enum_values(mut self, values: Vec<String>) -> Self {
        self.is_enum = true;
        self.enum_values = values;
        self
    }

    pub fn has_sub_properties(&self) -> bool {
        !self.sub_properties.is_empty()
    }

    pub fn value_kind(&self) -> ValueKind {
        ValueKind::of_type_name(&self.type_name)
    }
}
