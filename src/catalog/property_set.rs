use indexmap::IndexMap;

use crate::catalog::Property;

/// One nesting level of a property tree.
///
/// Properties keep their catalog order; the two indices map lowercased long
/// and short names back to positions so every lookup is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    properties: Vec<Property>,
    by_long: IndexMap<String, usize>,
    by_short: IndexMap<String, usize>,
}

impl PropertySet {
    pub fn new(properties: Vec<Property>) -> Self {
        let mut by_long = IndexMap::new();
        let mut by_short = IndexMap::new();
        for (position, property) in properties.iter().enumerate() {
            by_long.insert(property.long_name.to_ascii_lowercase(), position);
            by_short.insert(property.short_name.to_ascii_lowercase(), position);
        }

        Self { properties, by_long, by_short }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn by_long_name(&self, long_name: &str) -> Option<&Property> {
        self.by_long.get(&long_name.to_ascii_lowercase())
            .map(|position| &self.properties[*position])
    }

    pub fn by_short_name(&self, short_name: &str) -> Option<&Property> {
        self.by_short.get(&short_name.to_ascii_lowercase())
            .map(|position| &self.properties[*position])
    }

    /// Long name -> short name, in catalog order.
    pub fn long_to_short(&self) -> IndexMap<String, String> {
        self.properties.iter()
            .map(|p| (p.long_name.clone(), p.short_name.clone()))
            .collect()
    }

    /// Short name -> long name, in catalog order.
    pub fn short_to_long(&self) -> IndexMap<String, String> {
        self.properties.iter()
            .map(|p| (p.short_name.clone(), p.long_name.clone()))
            .collect()
    }
}
