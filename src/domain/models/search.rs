use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /api/elasticsearch/indices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexList {
    #[serde(default)]
    pub indices: Vec<String>,
}

impl IndexList {
    /// Index names without the dot-prefixed system indices
    pub fn visible_indices(self) -> Vec<String> {
        self.indices
            .into_iter()
            .filter(|name| is_visible_index(name))
            .collect()
    }
}

/// System indices start with a dot and are hidden from the selector
pub fn is_visible_index(name: &str) -> bool {
    !name.starts_with('.')
}

/// A single hit: opaque identifier plus opaque JSON body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub source: Value,
}

impl Document {
    /// Body rendered as indented JSON for display
    pub fn pretty_source(&self) -> String {
        serde_json::to_string_pretty(&self.source).unwrap_or_else(|_| self.source.to_string())
    }
}

/// Response of `GET /api/elasticsearch/search/{index}?size=N`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Response of `POST /api/elasticsearch/index/{index}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument {
    pub id: String,
    #[serde(default)]
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visible_drops_system_indices() {
        let list: IndexList = serde_json::from_value(json!({
            "indices": [".kibana_1", "logs-2024.12.01", ".security", "users"]
        }))
        .unwrap();

        assert_eq!(list.visible_indices(), vec!["logs-2024.12.01", "users"]);
    }

    #[test]
    fn test_search_result_parses_documents() {
        let result: SearchResult = serde_json::from_value(json!({
            "total": 42,
            "documents": [
                { "id": "a1", "source": { "level": "INFO", "msg": "started" } },
                { "id": "a2", "source": null }
            ]
        }))
        .unwrap();

        assert_eq!(result.total, 42);
        assert_eq!(result.documents.len(), 2);
        assert_eq!(result.documents[0].id, "a1");
        assert_eq!(result.documents[1].source, Value::Null);
    }

    #[test]
    fn test_pretty_source_is_indented() {
        let doc = Document {
            id: "1".to_string(),
            source: json!({ "name": "Alice" }),
        };
        assert_eq!(doc.pretty_source(), "{\n  \"name\": \"Alice\"\n}");
    }

    #[test]
    fn test_empty_search_body_defaults() {
        let result: SearchResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, SearchResult::default());
    }
}
