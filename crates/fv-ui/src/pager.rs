//! Vertical pager widget
//! Forwards drag gestures to a [`FeedNavigator`] and lays pages out from its offset

use std::sync::Arc;
use egui::{Id, Layout, Align, Rect, Response, Sense, Ui, Vec2};
use fv_core::{DragOutcome, FeedNavigator, PageChange};
use tracing::debug;

/// Time constant of the settle animation after a page change (seconds)
const SETTLE_TIME_CONSTANT: f32 = 0.075;

/// Distance (points) under which the settle animation snaps to its target
const SETTLE_EPSILON: f32 = 0.5;

/// Result of showing the pager for one frame
pub struct PagerResponse {
    pub response: Response,

    /// Page that was tapped this frame
    pub tapped: Option<usize>,

    /// Page change committed this frame
    pub committed: Option<PageChange>,
}

/// A full-height, one-page-at-a-time vertical pager
pub struct VerticalPager {
    id: Id,

    navigator: Arc<FeedNavigator>,

    /// Fixed page height, otherwise the height of the available rect
    page_extent: Option<f32>,

    /// Total vertical translation of the drag in progress
    translation: f32,

    /// Set when the host cancelled the drag before the pointer was released
    cancelled: bool,

    /// Offset currently on screen, eased towards the navigator's offset
    display_offset: Option<f32>,
}

impl VerticalPager {
    pub fn new(id_source: impl std::hash::Hash, navigator: Arc<FeedNavigator>) -> Self {
        Self {
            id: Id::new(id_source),
            navigator,
            page_extent: None,
            translation: 0.0,
            cancelled: false,
            display_offset: None,
        }
    }

    /// Use a fixed page height instead of the viewport height
    pub fn with_page_extent(mut self, page_extent: Option<f32>) -> Self {
        self.page_extent = page_extent;
        self
    }

    pub fn navigator(&self) -> &Arc<FeedNavigator> {
        &self.navigator
    }

    /// Show the pager filling the available space
    ///
    /// `add_page` is called for every page that is at least partly visible,
    /// with a child `Ui` covering exactly that page.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        page_count: usize,
        mut add_page: impl FnMut(&mut Ui, usize),
    ) -> PagerResponse {
        if self.navigator.page_count() != page_count {
            self.navigator.set_page_count(page_count);
        }

        let rect = ui.available_rect_before_wrap();
        let response = ui.interact(rect, self.id, Sense::click_and_drag());
        let committed = self.handle_drag(ui, &response);

        let extent = self.page_extent.unwrap_or(rect.height()).max(1.0);
        let offset = self.animate_offset(ui, extent);

        let first_visible = ((-offset) / extent).floor().max(0.0) as usize;
        let last_visible = ((rect.height() - offset) / extent).ceil().max(0.0) as usize;
        for index in first_visible..last_visible.min(page_count) {
            let top = rect.top() + offset + index as f32 * extent;
            let page_rect = Rect::from_min_size(
                egui::pos2(rect.left(), top),
                Vec2::new(rect.width(), extent),
            );
            if page_rect.bottom() <= rect.top() || page_rect.top() >= rect.bottom() {
                continue;
            }

            let mut page_ui = ui.child_ui(page_rect, Layout::top_down(Align::Center));
            page_ui.set_clip_rect(rect.intersect(ui.clip_rect()));
            add_page(&mut page_ui, index);
        }

        ui.advance_cursor_after_rect(rect);

        let tapped = (response.clicked() && page_count > 0)
            .then(|| self.navigator.current_index());

        PagerResponse {
            response,
            tapped,
            committed,
        }
    }

    fn handle_drag(&mut self, ui: &Ui, response: &Response) -> Option<PageChange> {
        if response.drag_started() {
            self.translation = 0.0;
            self.cancelled = false;
            self.navigator.begin_drag();
        }

        if response.dragged() && !self.cancelled {
            let interrupted = ui.input(|i| i.key_pressed(egui::Key::Escape) || !i.focused);
            if interrupted {
                debug!("drag cancelled by host");
                self.cancelled = true;
                self.translation = 0.0;
                self.navigator.cancel_drag();
            } else {
                self.translation += response.drag_delta().y;
                self.navigator.update_drag(self.translation);
            }
        }

        if response.drag_released() {
            let cancelled = std::mem::take(&mut self.cancelled);
            let translation = std::mem::take(&mut self.translation);
            if !cancelled {
                if let DragOutcome::Committed(change) = self.navigator.end_drag(translation) {
                    return Some(change);
                }
            }
        }

        None
    }

    /// Follow the finger while dragging, ease into place otherwise
    fn animate_offset(&mut self, ui: &Ui, extent: f32) -> f32 {
        let target = self.navigator.visual_offset(extent);

        let current = match self.display_offset {
            Some(current) if !self.navigator.is_dragging() => current,
            _ => target,
        };

        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let blend = 1.0 - (-dt / SETTLE_TIME_CONSTANT).exp();
        let mut next = current + (target - current) * blend;
        if (target - next).abs() < SETTLE_EPSILON {
            next = target;
        } else {
            ui.ctx().request_repaint();
        }

        self.display_offset = Some(next);
        next
    }
}

impl std::fmt::Debug for VerticalPager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerticalPager")
            .field("id", &self.id)
            .field("navigator", &self.navigator)
            .field("translation", &self.translation)
            .finish()
    }
}
