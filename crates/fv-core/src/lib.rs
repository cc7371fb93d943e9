//! Core functionality for the feed viewer
//! 
//! This crate provides the feed navigator that turns drag gestures into
//! page transitions, the feed item model, and the playback controller
//! that follows the active page.

pub mod feed;
pub mod navigation;
pub mod playback;

// Re-export commonly used types
pub use feed::{Feed, ItemId, VideoRecord};
pub use navigation::{
    DragOutcome, FeedNavigator, NavigatorConfig, NavigatorState,
    PageChange, PageSubscriber, FnSubscriber, subscriber_from_fn,
    DEFAULT_SWIPE_THRESHOLD,
};
pub use playback::PlaybackController;
