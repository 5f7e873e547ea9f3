use serde_json::Value;

use crate::{
    catalog::Collection,
    executor::{AggregateResult, CellText},
    parser::{analyzer::GROUP_ID, ast::Query},
};

/// A result column: its header and the document field it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSource {
    pub name: String,
    pub key: String,
}

pub struct ResultMapper;

impl ResultMapper {
    /// Columns for the select entries of the queried collection, in select
    /// order. Plain entries are headed by their long path and read their short
    /// path, aggregates read and are headed by their alias. Under a group-by the
    /// key entry reads the group id and keeps that name until
    /// [`ResultMapper::rename_group_key`] runs.
    pub fn columns(query: &Query, collection: &Collection) -> Vec<ColumnSource> {
        let group_key = query.group_by.and_then(|g| query.property(g.key).resolved_name());

        query.selected()
            .filter(|p| p.belongs_to(&collection.name))
            .map(|p| {
                if p.is_aggregate() {
                    let alias = p.display_name().to_string();
                    return ColumnSource { name: alias.clone(), key: alias };
                }

                let short = p.resolved_name().unwrap_or(&p.path);
                if group_key == Some(short) {
                    return ColumnSource { name: GROUP_ID.to_string(), key: GROUP_ID.to_string() };
                }
                ColumnSource { name: p.path.clone(), key: short.to_string() }
            })
            .collect()
    }

    pub fn map_documents(query: &Query, collection: &Collection, documents: &[Value]) -> AggregateResult {
        let columns = Self::columns(query, collection);

        let rows = documents.iter()
            .map(|document| columns.iter().map(|c| Self::extract(document, &c.key)).collect())
            .collect();

        AggregateResult {
            columns: columns.into_iter().map(|c| c.name).collect(),
            rows,
            errors: vec![],
        }
    }

    /// Read one cell. A dotted key walks nested documents and fans out over
    /// every array on the way; several hits render as `[a, b]`.
    pub fn extract(document: &Value, key: &str) -> String {
        if !key.contains('.') {
            return document.get(key).map(CellText::render).unwrap_or_default();
        }

        let segments: Vec<&str> = key.split('.').collect();
        let mut found = Vec::new();
        Self::drill(document, &segments, &mut found);

        if found.len() < 2 {
            return found.concat();
        }
        format!("[{}]", found.join(", "))
    }

    fn drill(document: &Value, segments: &[&str], found: &mut Vec<String>) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        let Some(value) = document.get(*first) else {
            return;
        };

        let items = match value {
            Value::Array(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        for item in items {
            if rest.is_empty() {
                found.push(CellText::render(item));
            } else {
                Self::drill(item, rest, found);
            }
        }
    }

    /// Give the group id column the long path of the group key.
    pub fn rename_group_key(query: &Query, result: &mut AggregateResult) {
        let Some(group) = query.group_by else {
            return;
        };
        if let Some(index) = result.column_index(GROUP_ID) {
            result.columns[index] = query.property(group.key).path.clone();
        }
    }

    /// Turn short column names back into long ones. Names the collection does
    /// not know, such as join plugin columns, are kept.
    pub fn resolve_long_names(collection: &Collection, result: &mut AggregateResult) {
        for column in result.columns.iter_mut() {
            *column = collection.resolve_long(column);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::{
        catalog::{test_collections, Collection},
        diagnostics::ErrorManager,
        executor::ResultMapper,
        parser::{analyzer::AnalysisContext, ast::Query},
    };

    fn analyzed(collection: Collection, text: &str) -> (Query, Arc<Collection>) {
        let mut errors = ErrorManager::new();
        let mut query = Query::try_from(text).expect("Failed to parse query");
        let collection = AnalysisContext::analyze_query(&mut query, &[Arc::new(collection)], &mut errors, 100_000)
            .expect("known collection");
        (query, collection)
    }

    #[test]
    pub fn test_extract_plain_values() {
        let document = json!({ "n": "bob", "t": ["a", "b"], "z": null });

        assert_eq!(ResultMapper::extract(&document, "n"), "bob");
        assert_eq!(ResultMapper::extract(&document, "t"), "a,b");
        assert_eq!(ResultMapper::extract(&document, "z"), "");
        assert_eq!(ResultMapper::extract(&document, "missing"), "");
    }

    #[test]
    pub fn test_extract_drills_through_arrays() {
        let document = json!({
            "a": { "c": "Porto", "g": { "la": 41.15 } },
            "p": [ { "k": "dog", "n": "Rex" }, { "k": "cat" }, { "n": "Tom" } ],
        });

        assert_eq!(ResultMapper::extract(&document, "a.c"), "Porto");
        assert_eq!(ResultMapper::extract(&document, "a.g.la"), "41.15");
        assert_eq!(ResultMapper::extract(&document, "p.k"), "[dog, cat]");
        assert_eq!(ResultMapper::extract(&document, "p.n"), "[Rex, Tom]");
        assert_eq!(ResultMapper::extract(&document, "a.zip"), "");
        assert_eq!(ResultMapper::extract(&document, "x.y"), "");
    }

    #[test]
    pub fn test_extract_single_hit_inside_array_is_bare() {
        let document = json!({ "p": [ { "k": "dog" } ] });
        assert_eq!(ResultMapper::extract(&document, "p.k"), "dog");
    }

    #[test]
    pub fn test_map_projection() {
        let (query, people) = analyzed(test_collections::people(), "SELECT people.Email, people.Address.City, donors.Total FROM people WHERE people.Email = 'x'");
        let documents = vec![
            json!({ "_id": { "$oid": "1" }, "e": "ann@x.pt", "a": { "c": "Porto" } }),
            json!({ "_id": { "$oid": "2" }, "e": "bob@x.pt" }),
        ];

        let result = ResultMapper::map_documents(&query, &people, &documents);

        assert_eq!(result.columns, vec!["Email", "Address.City"]);
        assert_eq!(result.rows, vec![vec!["ann@x.pt", "Porto"], vec!["bob@x.pt", ""]]);
    }

    #[test]
    pub fn test_map_group_by() {
        let (query, foo) = analyzed(test_collections::foo(), "SELECT foo.Name, foo.COUNT FROM foo GROUP BY foo.Name");
        let documents = vec![json!({ "_id": "bob", "foo_count": 2 }), json!({ "_id": "ann", "foo_count": 1 })];

        let mut result = ResultMapper::map_documents(&query, &foo, &documents);
        assert_eq!(result.columns, vec!["_id", "foo_count"]);
        assert_eq!(result.rows, vec![vec!["bob", "2"], vec!["ann", "1"]]);

        ResultMapper::rename_group_key(&query, &mut result);
        assert_eq!(result.columns, vec!["Name", "foo_count"]);
    }

    #[test]
    pub fn test_columns_without_rows() {
        let (query, foo) = analyzed(test_collections::foo(), "SELECT foo.* FROM foo");

        let result = ResultMapper::map_documents(&query, &foo, &[]);

        assert_eq!(result.columns, vec!["FooId", "Name", "DateCreated"]);
        assert!(result.rows.is_empty());
    }

    #[test]
    pub fn test_resolve_long_names_keeps_unknown_columns() {
        let people = test_collections::people();
        let mut result = crate::executor::AggregateResult {
            columns: vec!["a.c".into(), "people_count".into(), "Total".into()],
            ..Default::default()
        };

        ResultMapper::resolve_long_names(&people, &mut result);

        assert_eq!(result.columns, vec!["Address.City", "people_count", "Total"]);
    }
}
