//! JSON feed listing source

use std::path::{Path, PathBuf};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fv_core::{Feed, VideoRecord};
use crate::{FeedError, Result};

/// The `{ "data": [...] }` envelope a video listing arrives in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedListing {
    pub data: Vec<VideoRecord>,
}

impl FeedListing {
    /// Check the listing and turn it into a feed
    pub fn into_feed(self) -> Result<Feed> {
        {
            let mut seen = AHashSet::with_capacity(self.data.len());
            for record in &self.data {
                if !seen.insert(record.id.as_str()) {
                    return Err(FeedError::DuplicateId(record.id.clone()));
                }
            }
        }
        Ok(Feed::new(self.data))
    }
}

/// Feed source backed by a JSON document on disk
#[derive(Debug, Clone)]
pub struct FeedSource {
    path: PathBuf,
}

impl FeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the source name
    pub fn source_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    /// Read and parse the feed
    pub fn load(&self) -> Result<Feed> {
        let contents = std::fs::read_to_string(&self.path)?;
        let feed = Self::parse(&contents)?;
        info!(source = %self.source_name(), items = feed.len(), "feed loaded");
        Ok(feed)
    }

    /// Parse a feed listing document
    pub fn parse(json: &str) -> Result<Feed> {
        let listing: FeedListing = serde_json::from_str(json)?;
        debug!(items = listing.data.len(), "parsed feed listing");
        listing.into_feed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "data": [
            {"id": "v1", "path": "http://localhost:8080/media/v1.mp4", "createdAt": 1692172800},
            {"id": "v2", "path": "http://localhost:8080/media/v2.mp4", "createdAt": 1692176400.25}
        ]
    }"#;

    #[test]
    fn test_parse_listing() {
        let feed = FeedSource::parse(LISTING).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.get(0).unwrap().id, "v1");
        assert_eq!(feed.get(1).unwrap().created_at, 1692176400.25);
    }

    #[test]
    fn test_empty_listing() {
        let feed = FeedSource::parse(r#"{"data": []}"#).unwrap();
        assert!(feed.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"data": [
            {"id": "v1", "path": "a.mp4", "createdAt": 1},
            {"id": "v1", "path": "b.mp4", "createdAt": 2}
        ]}"#;
        match FeedSource::parse(json) {
            Err(FeedError::DuplicateId(id)) => assert_eq!(id, "v1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_listing() {
        assert!(matches!(FeedSource::parse("[]"), Err(FeedError::Json(_))));
        assert!(matches!(
            FeedSource::parse(r#"{"data": [{"id": "v1"}]}"#),
            Err(FeedError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        std::fs::write(&path, LISTING).unwrap();

        let source = FeedSource::new(&path);
        let feed = source.load().unwrap();
        assert_eq!(feed.ids(), vec!["v1".to_string(), "v2".to_string()]);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(source.load(), Err(FeedError::Io(_))));
    }
}
