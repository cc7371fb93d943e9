//! Feed item model

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Stable identity of a feed item
pub type ItemId = String;

/// One video in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: ItemId,

    /// Location of the media, usually a URL
    pub path: String,

    /// Creation time in seconds since the Unix epoch
    pub created_at: f64,
}

impl VideoRecord {
    pub fn new(id: impl Into<ItemId>, path: impl Into<String>, created_at: f64) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            created_at,
        }
    }

    /// Creation time as a UTC timestamp, if it is representable
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if !self.created_at.is_finite() {
            return None;
        }
        let secs = self.created_at.floor();
        let nanos = ((self.created_at - secs) * 1e9).round() as u32;
        Utc.timestamp_opt(secs as i64, nanos.min(999_999_999)).single()
    }
}

/// An ordered list of feed items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    items: Vec<VideoRecord>,
}

impl Feed {
    pub fn new(items: Vec<VideoRecord>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VideoRecord> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[VideoRecord] {
        &self.items
    }

    /// Item identities in feed order
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Position of the item with the given id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl From<Vec<VideoRecord>> for Feed {
    fn from(items: Vec<VideoRecord>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case() {
        let json = r#"{"id":"a1","path":"http://localhost/a1.mp4","createdAt":1692172800.5}"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, VideoRecord::new("a1", "http://localhost/a1.mp4", 1692172800.5));

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_created_at_utc() {
        let record = VideoRecord::new("a", "p", 1692172800.5);
        let time = record.created_at_utc().unwrap();
        assert_eq!(time.timestamp(), 1692172800);
        assert_eq!(time.timestamp_subsec_millis(), 500);

        assert!(VideoRecord::new("b", "p", f64::NAN).created_at_utc().is_none());
    }

    #[test]
    fn test_feed_lookup() {
        let feed = Feed::new(vec![
            VideoRecord::new("a", "a.mp4", 0.0),
            VideoRecord::new("b", "b.mp4", 1.0),
        ]);
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.ids(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(feed.position_of("b"), Some(1));
        assert_eq!(feed.position_of("c"), None);
        assert_eq!(feed.get(0).map(|item| item.path.as_str()), Some("a.mp4"));
    }
}
