use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Renders one result value as table cell text.
pub struct CellText;

impl CellText {
    pub fn render(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(items) => items.iter().map(Self::render).collect::<Vec<_>>().join(","),
            Value::Object(map) => Self::render_extended(map).unwrap_or_else(|| value.to_string()),
        }
    }

    // {"$oid": ..}, {"$date": ..} and the typed number wrappers
    fn render_extended(map: &Map<String, Value>) -> Option<String> {
        if map.len() != 1 {
            return None;
        }
        let (key, inner) = map.iter().next()?;

        match key.as_str() {
            "$oid" | "$numberLong" | "$numberInt" | "$numberDouble" | "$numberDecimal" => Some(Self::render(inner)),
            "$date" => Some(Self::render_date(inner)),
            _ => None,
        }
    }

    fn render_date(inner: &Value) -> String {
        let parsed = match inner {
            Value::String(text) => DateTime::parse_from_rfc3339(text).ok().map(|d| d.with_timezone(&Utc)),
            Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
            Value::Object(map) => map.get("$numberLong")
                .and_then(Value::as_str)
                .and_then(|ms| ms.parse::<i64>().ok())
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        };

        match parsed {
            Some(date) => date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            None => Self::render(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::CellText;

    #[test]
    fn test_plain_values() {
        assert_eq!(CellText::render(&json!(null)), "");
        assert_eq!(CellText::render(&json!("Porto")), "Porto");
        assert_eq!(CellText::render(&json!(30)), "30");
        assert_eq!(CellText::render(&json!(30.5)), "30.5");
        assert_eq!(CellText::render(&json!(true)), "true");
        assert_eq!(CellText::render(&json!(["a", 1, null])), "a,1,");
    }

    #[test]
    fn test_extended_json_values() {
        assert_eq!(CellText::render(&json!({ "$oid": "521d67620e281a036092ea7e" })), "521d67620e281a036092ea7e");
        assert_eq!(CellText::render(&json!({ "$numberLong": "9007199254740993" })), "9007199254740993");
        assert_eq!(CellText::render(&json!({ "$numberDouble": "1.5" })), "1.5");
    }

    #[test]
    fn test_dates() {
        assert_eq!(CellText::render(&json!({ "$date": "2013-04-11T02:00:00+02:00" })), "2013-04-11T00:00:00Z");
        assert_eq!(CellText::render(&json!({ "$date": 1365638400000i64 })), "2013-04-11T00:00:00Z");
        assert_eq!(CellText::render(&json!({ "$date": { "$numberLong": "1365638400123" } })), "2013-04-11T00:00:00.123Z");
        assert_eq!(CellText::render(&json!({ "$date": "yesterday" })), "yesterday");
    }

    #[test]
    fn test_other_documents_render_as_json() {
        assert_eq!(CellText::render(&json!({ "c": "Porto", "s": "Rua" })), r#"{"c":"Porto","s":"Rua"}"#);
    }
}
