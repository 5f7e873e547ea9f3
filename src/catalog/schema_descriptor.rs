use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::catalog::{Collection, CollectionFinder, Index, Property, PropertySet, SchemaError};

/// Declarative description of the document types stored in a database.
///
/// This is what a document mapper would expose about its annotated types:
/// each property declares its business name, and it is only considered
/// persisted when it carries a stored `element` name or is the document `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    pub collections: Vec<CollectionDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
    pub name: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub row_count: u64,
    #[serde(default)]
    pub indices: Vec<IndexDescriptor>,
    pub properties: Vec<PropertyDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub name: String,
    /// Indexed properties by long path
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    /// Stored field name
    #[serde(default)]
    pub element: Option<String>,
    /// Marks the document identifier, stored as `_id`
    #[serde(default)]
    pub id: bool,
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub list: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub enum_values: Option<Vec<String>>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

const ID_ELEMENT: &str = "_id";

impl SchemaDescriptor {
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Build one [`Collection`] per described collection, with every property
    /// level sorted alphabetically by long name.
    pub fn to_collections(&self) -> Result<Vec<Collection>, SchemaError> {
        self.collections.iter().map(CollectionDescriptor::to_collection).collect()
    }
}

impl CollectionDescriptor {
    pub fn to_collection(&self) -> Result<Collection, SchemaError> {
        let mut collection = Collection::new(&self.database, &self.name, PropertyDescriptor::inspect(&self.properties))
            .with_row_count(self.row_count);

        let mut indices = Vec::with_capacity(self.indices.len());
        for index in &self.indices {
            let mut short_properties = Vec::with_capacity(index.properties.len());
            for long in &index.properties {
                let short = collection.resolve_short(long).ok_or_else(|| SchemaError::UnknownIndexProperty {
                    collection: self.name.clone(),
                    index: index.name.clone(),
                    property: long.clone(),
                })?;
                short_properties.push(short);
            }
            indices.push(Index::new(&index.name, short_properties, index.properties.clone()));
        }

        collection.indices = Some(indices);
        Ok(collection)
    }
}

impl PropertyDescriptor {
    fn stored_name(&self) -> Option<&str> {
        match (&self.element, self.id) {
            (Some(element), _) => Some(element.as_str()),
            (None, true) => Some(ID_ELEMENT),
            (None, false) => None,
        }
    }

    /// Turn the persisted descriptors of one level into catalog properties.
    fn inspect(descriptors: &[PropertyDescriptor]) -> Vec<Property> {
        let mut persisted: Vec<&PropertyDescriptor> = descriptors.iter()
            .filter(|d| d.stored_name().is_some())
            .collect();
        persisted.sort_by(|a, b| a.name.to_ascii_lowercase().cmp(&b.name.to_ascii_lowercase())
            .then_with(|| a.name.cmp(&b.name)));

        persisted.into_iter()
            .filter_map(|d| d.to_property())
            .collect()
    }

    fn to_property(&self) -> Option<Property> {
        let short_name = self.stored_name()?;
        let enum_values = self.enum_values.clone().unwrap_or_default();
        Some(Property {
            long_name: self.name.clone(),
            short_name: short_name.to_string(),
            type_name: self.type_name.clone(),
            is_list: self.list,
            is_nullable: self.nullable,
            is_enum: self.enum_values.is_some(),
            enum_values,
            sub_properties: PropertySet::new(Self::inspect(&self.properties)),
        })
    }
}

impl CollectionFinder for SchemaDescriptor {
    fn find_all_collections(&self) -> Result<Vec<Collection>, SchemaError> {
        self.to_collections()
    }
}

/// Finder that reads a JSON descriptor from disk the first time it is asked.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    pub path: std::path::PathBuf,
}

impl SchemaFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl CollectionFinder for SchemaFile {
    fn find_all_collections(&self) -> Result<Vec<Collection>, SchemaError> {
        SchemaDescriptor::from_path(&self.path)?.to_collections()
    }
}
