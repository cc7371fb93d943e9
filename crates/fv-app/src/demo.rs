//! Demo feed for running the viewer without a listing file

use fv_core::{Feed, VideoRecord};

/// Number of placeholder videos in the demo feed
const DEMO_ITEMS: usize = 8;

/// Generate a feed of placeholder videos, newest first
pub fn demo_feed() -> Feed {
    let now = chrono::Utc::now().timestamp() as f64;

    (0..DEMO_ITEMS)
        .map(|index| {
            let id = uuid::Uuid::new_v4().to_string();
            let path = format!("http://localhost:8080/media/{}.mp4", id);
            VideoRecord::new(id, path, now - (index as f64) * 3600.0)
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_feed_has_unique_ids() {
        let feed = demo_feed();
        assert_eq!(feed.len(), DEMO_ITEMS);

        let mut ids = feed.ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DEMO_ITEMS);
    }
}
