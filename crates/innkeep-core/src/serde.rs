use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a list of strings without ever failing on shape.
///
/// Arrays keep their string elements and drop everything else. Missing
/// values, `null`, and any non-array value become an empty list.
pub fn deserialize_lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Lists {
        #[serde(default, deserialize_with = "deserialize_lenient_string_list")]
        add: Vec<String>,
    }

    fn parse(json: &str) -> Vec<String> {
        serde_json::from_str::<Lists>(json).unwrap().add
    }

    #[test]
    fn test_array_of_strings() {
        assert_eq!(parse(r#"{"add": ["a", "b"]}"#), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_and_null() {
        assert!(parse("{}").is_empty());
        assert!(parse(r#"{"add": null}"#).is_empty());
    }

    #[test]
    fn test_non_array_values() {
        assert!(parse(r#"{"add": "reports.view"}"#).is_empty());
        assert!(parse(r#"{"add": 7}"#).is_empty());
        assert!(parse(r#"{"add": {"k": "v"}}"#).is_empty());
    }

    #[test]
    fn test_non_string_elements_are_dropped() {
        assert_eq!(parse(r#"{"add": ["a", 1, null, "b"]}"#), vec!["a", "b"]);
    }
}
