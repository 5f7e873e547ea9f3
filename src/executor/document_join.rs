use std::collections::HashMap;

use serde_json::Value;

use crate::{
    catalog::Collection,
    diagnostics::{ErrorManager, QueryError},
    executor::{AggregateResult, CellText, JoinPlugin},
    parser::ast::PropertyReference,
};

/// Joins a fixed set of JSON documents onto query results.
///
/// Rows are matched when the cell of the join property equals the document's
/// key field, compared as rendered text. `WITH donors ON people.PersonId` with
/// a plugin keyed on `PersonId` appends the selected `donors` columns to every
/// row; rows without a matching document get empty cells.
pub struct DocumentJoinPlugin {
    collection: String,
    key_field: String,
    documents: Vec<Value>,
    known_columns: Vec<String>,
    join_column: Option<String>,
    selected_columns: Vec<String>,
}

impl DocumentJoinPlugin {
    pub fn new(collection: &str, key_field: &str, documents: Vec<Value>) -> Self {
        let mut known_columns: Vec<String> = Vec::new();
        for key in documents.iter().filter_map(Value::as_object).flat_map(|d| d.keys()) {
            if !known_columns.iter().any(|c| c.eq_ignore_ascii_case(key)) {
                known_columns.push(key.clone());
            }
        }

        Self {
            collection: collection.to_string(),
            key_field: key_field.to_string(),
            documents,
            known_columns,
            join_column: None,
            selected_columns: vec![],
        }
    }

    pub fn selected_columns(&self) -> &[String] {
        &self.selected_columns
    }

    fn field<'v>(document: &'v Value, name: &str) -> Option<&'v Value> {
        document.as_object()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }
}

impl JoinPlugin for DocumentJoinPlugin {
    fn is_column_supported(&self, column: &str) -> bool {
        self.known_columns.iter().any(|c| c.eq_ignore_ascii_case(column))
    }

    fn is_collection_supported(&self, collection: &str) -> bool {
        self.collection.eq_ignore_ascii_case(collection)
    }

    fn verify_selected_columns(&self, errors: &mut ErrorManager) {
        for column in self.selected_columns.iter().filter(|c| !self.is_column_supported(c)) {
            errors.add_error(format!("The '{}' collection has no column {}", self.collection, column), None);
        }
    }

    fn init(&mut self, _collection: &Collection, join_property: &PropertyReference, selected_columns: Vec<String>) {
        self.join_column = Some(join_property.path.clone());
        self.selected_columns = selected_columns.into_iter()
            .flat_map(|column| match column.as_str() {
                "*" => self.known_columns.clone(),
                _ => vec![column],
            })
            .collect();
    }

    fn run_join(&self, mut input: AggregateResult) -> AggregateResult {
        let Some(join_column) = &self.join_column else {
            return input;
        };
        let Some(join_index) = input.column_index(join_column) else {
            input.errors.push(QueryError::error(
                format!("The join property ({}) must be selected to join '{}'", join_column, self.collection),
                None,
            ));
            return input;
        };

        let by_key: HashMap<String, &Value> = self.documents.iter()
            .filter_map(|d| Self::field(d, &self.key_field).map(|key| (CellText::render(key), d)))
            .collect();

        for row in input.rows.iter_mut() {
            let document = row.get(join_index).and_then(|cell| by_key.get(cell));
            for column in &self.selected_columns {
                let cell = document
                    .and_then(|d| Self::field(d, column))
                    .map(CellText::render)
                    .unwrap_or_default();
                row.push(cell);
            }
        }
        input.columns.extend(self.selected_columns.iter().cloned());

        input
    }
}
