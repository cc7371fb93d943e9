use serde::{Serialize, Deserialize};

mod engine;
mod subscriber;

pub use engine::FeedNavigator;
pub use subscriber::{PageSubscriber, FnSubscriber, subscriber_from_fn};

/// Drag distance (in the caller's units) a gesture has to exceed to turn a page
pub const DEFAULT_SWIPE_THRESHOLD: u32 = 20;

/// Tunables for the feed navigator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// A gesture whose rounded distance is at most this many units is ignored
    pub swipe_threshold: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Snapshot of the navigator state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigatorState {
    /// Zero-based index of the active page
    pub current_index: usize,

    /// Presentation offset of the drag in progress, 0 when idle
    pub pending_offset: f32,

    /// Whether a drag gesture is in progress
    pub dragging: bool,
}

/// A committed page transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub previous: usize,
    pub current: usize,
}

/// What a finished drag gesture did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The gesture moved the feed by one page
    Committed(PageChange),
    /// The gesture was too short to count as a swipe
    BelowThreshold,
    /// The gesture pointed past the first or last page (or the feed is empty)
    AtEdge,
    /// The gesture delta was NaN or infinite
    Rejected,
}

impl DragOutcome {
    /// The page change, if the gesture committed one
    pub fn change(&self) -> Option<PageChange> {
        match self {
            DragOutcome::Committed(change) => Some(*change),
            _ => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, DragOutcome::Committed(_))
    }
}
