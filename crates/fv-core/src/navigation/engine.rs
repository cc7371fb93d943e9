//! Feed navigator implementation

use super::{DragOutcome, NavigatorConfig, NavigatorState, PageChange, PageSubscriber};
use std::sync::{Arc, Weak};
use parking_lot::RwLock;
use tracing::{debug, trace};

/// Internal navigator state
#[derive(Debug, Clone)]
struct PagerState {
    current_index: usize,
    pending_offset: f32,
    dragging: bool,
    page_count: usize,
}

/// Maps vertical drag gestures onto a zero-based page index over a feed
///
/// The index only moves when a gesture ends: a drag whose rounded distance
/// exceeds the swipe threshold moves exactly one page in the opposite
/// direction of the finger (dragging up advances). Moves past either end of
/// the feed are dropped. Every committed move is pushed to the subscribers
/// once.
pub struct FeedNavigator {
    config: NavigatorConfig,
    state: RwLock<PagerState>,
    subscribers: RwLock<Vec<Weak<dyn PageSubscriber>>>,
}

impl FeedNavigator {
    /// Create a navigator over a feed of `page_count` items
    pub fn new(page_count: usize) -> Self {
        Self::with_config(page_count, NavigatorConfig::default())
    }

    /// Create a navigator with custom tunables
    pub fn with_config(page_count: usize, config: NavigatorConfig) -> Self {
        Self {
            config,
            state: RwLock::new(PagerState {
                current_index: 0,
                pending_offset: 0.0,
                dragging: false,
                page_count,
            }),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// Update the number of pages (e.g. after the feed was reloaded)
    ///
    /// Clamps the current index into the new range. Returns the page change
    /// if the clamp moved the index.
    pub fn set_page_count(&self, page_count: usize) -> Option<PageChange> {
        let mut state = self.state.write();
        state.page_count = page_count;

        let max_index = page_count.saturating_sub(1);
        if state.current_index <= max_index {
            return None;
        }

        let change = PageChange {
            previous: state.current_index,
            current: max_index,
        };
        state.current_index = max_index;
        drop(state);

        debug!(previous = change.previous, current = change.current, page_count, "page index clamped to shrunken feed");
        if page_count > 0 {
            self.notify_subscribers(change);
            Some(change)
        } else {
            None
        }
    }

    /// Mark the start of a drag gesture
    pub fn begin_drag(&self) {
        let mut state = self.state.write();
        state.dragging = true;
        state.pending_offset = 0.0;
        trace!(index = state.current_index, "drag started");
    }

    /// Record the current drag translation
    ///
    /// Only affects the presentation offset, never the page index.
    pub fn update_drag(&self, delta: f32) {
        if !delta.is_finite() {
            trace!(delta, "ignoring non-finite drag sample");
            return;
        }

        let mut state = self.state.write();
        state.dragging = true;
        state.pending_offset = delta;
    }

    /// Finish a drag gesture with its total translation and decide whether
    /// to turn the page
    pub fn end_drag(&self, delta: f32) -> DragOutcome {
        let mut state = self.state.write();
        state.pending_offset = 0.0;
        state.dragging = false;

        if !delta.is_finite() {
            debug!(delta, "drag ended with a non-finite delta");
            return DragOutcome::Rejected;
        }

        // Dragging towards negative Y advances the feed
        let offset = (-delta).round() as i64;
        if offset.unsigned_abs() <= u64::from(self.config.swipe_threshold) {
            trace!(offset, "drag below swipe threshold");
            return DragOutcome::BelowThreshold;
        }

        let step = offset.clamp(-1, 1);
        let candidate = state.current_index as i64 + step;
        if candidate < 0 || candidate >= state.page_count as i64 {
            trace!(candidate, page_count = state.page_count, "drag past the edge of the feed");
            return DragOutcome::AtEdge;
        }

        let change = PageChange {
            previous: state.current_index,
            current: candidate as usize,
        };
        state.current_index = change.current;
        drop(state);

        debug!(previous = change.previous, current = change.current, "page committed");
        self.notify_subscribers(change);
        DragOutcome::Committed(change)
    }

    /// Abort the drag in progress without turning the page
    pub fn cancel_drag(&self) {
        let outcome = self.end_drag(0.0);
        debug_assert!(!outcome.is_committed());
    }

    pub fn current_index(&self) -> usize {
        self.state.read().current_index
    }

    pub fn pending_offset(&self) -> f32 {
        self.state.read().pending_offset
    }

    pub fn page_count(&self) -> usize {
        self.state.read().page_count
    }

    pub fn is_dragging(&self) -> bool {
        self.state.read().dragging
    }

    /// Offset a renderer should apply to the page strip
    pub fn visual_offset(&self, page_extent: f32) -> f32 {
        let state = self.state.read();
        -(state.current_index as f32) * page_extent + state.pending_offset
    }

    /// Get the current navigator state
    pub fn snapshot(&self) -> NavigatorState {
        let state = self.state.read();
        NavigatorState {
            current_index: state.current_index,
            pending_offset: state.pending_offset,
            dragging: state.dragging,
        }
    }

    /// Add a subscriber
    ///
    /// The navigator only keeps a weak reference; dropping the last `Arc`
    /// unsubscribes.
    pub fn add_subscriber<S: PageSubscriber + 'static>(&self, subscriber: &Arc<S>) {
        let weak = Arc::downgrade(subscriber);
        let weak: Weak<dyn PageSubscriber> = weak;
        self.subscribers.write().push(weak);
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Notify all subscribers of a committed page change
    fn notify_subscribers(&self, change: PageChange) {
        let live: Vec<Arc<dyn PageSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_page_change(change);
        }
    }
}

impl std::fmt::Debug for FeedNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedNavigator")
            .field("config", &self.config)
            .field("state", &*self.state.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
