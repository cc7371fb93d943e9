//! Per-item playback state that follows the active page

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::feed::ItemId;
use crate::navigation::{PageChange, PageSubscriber};

#[derive(Debug, Default)]
struct PlaybackState {
    /// Item ids in feed order, used to resolve page indices
    order: Vec<ItemId>,

    /// Play state keyed by item identity
    playing: AHashMap<ItemId, bool>,
}

/// Tracks which feed item is playing
///
/// Subscribe it to a [`FeedNavigator`](crate::FeedNavigator): every committed
/// page change pauses all items and resumes the one on the new page.
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: RwLock<PlaybackState>,
}

impl PlaybackController {
    /// Create a controller for the given items; the first one starts playing
    pub fn new(ids: Vec<ItemId>) -> Self {
        let controller = Self::default();
        controller.load(ids, true);
        controller
    }

    /// Replace the tracked items
    pub fn load(&self, ids: Vec<ItemId>, autoplay_first: bool) {
        let mut state = self.state.write();
        state.playing = ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), autoplay_first && index == 0))
            .collect();
        state.order = ids;
        debug!(items = state.order.len(), "playback state loaded");
    }

    /// Play only the item at `index`
    pub fn activate(&self, index: usize) {
        let mut state = self.state.write();
        let PlaybackState { order, playing } = &mut *state;

        let active = order.get(index);
        for (id, is_playing) in playing.iter_mut() {
            *is_playing = Some(id) == active;
        }
        trace!(index, active = ?active, "playback switched");
    }

    /// Flip the play state of one item; unknown ids are ignored
    pub fn toggle(&self, id: &str) -> Option<bool> {
        let mut state = self.state.write();
        let is_playing = state.playing.get_mut(id)?;
        *is_playing = !*is_playing;
        Some(*is_playing)
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.state.read().playing.get(id).copied().unwrap_or(false)
    }

    /// The first item in feed order that is playing
    pub fn playing_id(&self) -> Option<ItemId> {
        let state = self.state.read();
        state
            .order
            .iter()
            .find(|id| state.playing.get(*id).copied().unwrap_or(false))
            .cloned()
    }
}

impl PageSubscriber for PlaybackController {
    fn on_page_change(&self, change: PageChange) {
        self.activate(change.current);
    }
}
