use std::fmt;

/// A declared index over a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub name: String,
    /// Indexed fields, as stored (short names)
    pub short_properties: Vec<String>,
    /// Indexed fields, as declared (long names)
    pub long_properties: Vec<String>,
}

impl Index {
    pub fn new(name: &str, short_properties: Vec<String>, long_properties: Vec<String>) -> Self {
        Self { name: name.to_string(), short_properties, long_properties }
    }

    /// Leading field of the index. Admission checks only look at this one.
    pub fn first_property(&self) -> Option<&str> {
        self.short_properties.first().map(String::as_str)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.long_properties.join(", "))
    }
}
