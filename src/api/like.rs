//! Like DTOs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusDto {
    pub is_liked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikeCountDto {
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchLikeCountRequest {
    pub post_ids: Vec<i64>,
}

/// Counts keyed by post id; JSON object keys arrive as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchLikeCountResponse {
    #[serde(default)]
    pub counts: HashMap<String, u32>,
}

impl BatchLikeCountResponse {
    /// Convert keys to post ids, skipping any that are not numeric.
    pub fn into_counts(self) -> HashMap<i64, u32> {
        self.counts
            .into_iter()
            .filter_map(|(key, count)| match key.trim().parse::<i64>() {
                Ok(id) => Some((id, count)),
                Err(_) => {
                    log::warn!("Ignoring like count for non-numeric post id {key:?}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_counts_skip_invalid_keys() {
        let json = r#"{ "counts": { "1": 4, "22": 0, "abc": 9 } }"#;
        let counts = serde_json::from_str::<BatchLikeCountResponse>(json)
            .unwrap()
            .into_counts();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&1], 4);
        assert_eq!(counts[&22], 0);
    }
}
