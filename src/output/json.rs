//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    use agrohub::models::{FollowStats, PagedData};

    #[test]
    fn test_envelope_fields() {
        let stats = FollowStats {
            followers_count: 12,
            following_count: 3,
        };
        let result = format_json(&stats).unwrap();

        assert!(result.contains("\"followers_count\": 12"));
        assert!(result.contains("\"meta\""));
        assert!(result.contains(&format!("\"version\": \"{}\"", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_empty_page() {
        let page: PagedData<FollowStats> = PagedData {
            items: vec![],
            current_page: 0,
            page_size: 20,
            total_elements: 0,
            total_pages: 0,
            is_last_page: true,
        };
        let value: serde_json::Value = serde_json::from_str(&format_json(&page).unwrap()).unwrap();

        assert_eq!(value["data"]["items"], serde_json::json!([]));
        assert_eq!(value["data"]["is_last_page"], true);
        assert!(value["meta"]["timestamp"].is_string());
    }
}
