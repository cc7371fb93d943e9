//! Main application entry point

use std::path::{Path, PathBuf};
use std::sync::Arc;
use eframe::egui::{self, Color32, RichText, Ui};
use anyhow::Result;
use tracing::{info, error};

use fv_core::{Feed, FeedNavigator, PlaybackController, VideoRecord};
use fv_data::{FeedSource, ViewerConfig};
use fv_ui::{icons, VerticalPager};

mod demo;

/// Configuration file read when `FEEDVIEW_CONFIG` is not set
const DEFAULT_CONFIG_FILE: &str = "feedview.json";

/// Page background colors, cycled through by page index
const PAGE_COLORS: [Color32; 5] = [
    Color32::from_rgb(36, 52, 71),
    Color32::from_rgb(64, 40, 74),
    Color32::from_rgb(28, 70, 60),
    Color32::from_rgb(82, 52, 36),
    Color32::from_rgb(48, 48, 90),
];

/// Main application state
struct FeedViewerApp {
    /// Pager driving the shared navigator
    pager: VerticalPager,

    /// Play state of the feed items, subscribed to the navigator
    playback: Arc<PlaybackController>,

    /// The loaded feed
    feed: Feed,

    config: ViewerConfig,

    /// Listing the feed was loaded from, if any
    feed_path: Option<PathBuf>,

    /// Last load error to show on top of the feed
    status: Option<String>,
}

impl FeedViewerApp {
    fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig, feed_path: Option<PathBuf>) -> Self {
        let (feed, status) = load_feed(feed_path.as_deref());

        let navigator = Arc::new(FeedNavigator::with_config(feed.len(), config.navigator_config()));
        let playback = Arc::new(PlaybackController::default());
        playback.load(feed.ids(), config.autoplay_first);
        navigator.add_subscriber(&playback);

        let pager = VerticalPager::new("feed_pager", navigator)
            .with_page_extent(config.page_extent);

        Self {
            pager,
            playback,
            feed,
            config,
            feed_path,
            status,
        }
    }

    /// Load the feed again, keeping the current page where possible
    ///
    /// Playback restarts from the first item, as after startup.
    fn reload(&mut self) {
        let (feed, status) = load_feed(self.feed_path.as_deref());
        self.feed = feed;
        self.status = status;

        sync_reloaded_feed(
            self.pager.navigator(),
            &self.playback,
            &self.feed,
            self.config.autoplay_first,
        );
    }

    fn top_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let navigator = self.pager.navigator();
            let position = if self.feed.is_empty() {
                "0 / 0".to_string()
            } else {
                format!("{} / {}", navigator.current_index() + 1, self.feed.len())
            };
            ui.label(RichText::new(position).strong());

            if self.feed_path.is_some() && ui.button("⟳ Reload").clicked() {
                self.reload();
            }

            if let Some(status) = &self.status {
                ui.colored_label(Color32::from_rgb(230, 120, 100), status);
            }
        });
    }
}

impl eframe::App for FeedViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.top_bar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let Self { pager, playback, feed, .. } = self;

                if feed.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label("No videos yet");
                    });
                    return;
                }

                let response = pager.show(ui, feed.len(), |ui, index| {
                    if let Some(item) = feed.get(index) {
                        video_page(ui, index, item, playback.is_playing(&item.id));
                    }
                });

                if let Some(change) = response.committed {
                    info!(page = change.current, "showing page");
                }

                if let Some(index) = response.tapped {
                    if let Some(item) = feed.get(index) {
                        playback.toggle(&item.id);
                    }
                }
            });
    }
}

/// Draw a placeholder for one video
fn video_page(ui: &mut Ui, index: usize, item: &VideoRecord, playing: bool) {
    let rect = ui.max_rect();
    ui.painter().rect_filled(rect, 0.0, PAGE_COLORS[index % PAGE_COLORS.len()]);

    ui.add_space(rect.height() * 0.35);

    let icon = if playing { icons::PAUSE } else { icons::PLAY };
    ui.label(RichText::new(icon).size(56.0).color(Color32::WHITE));

    ui.add_space(16.0);
    ui.label(RichText::new(&item.id).monospace().color(Color32::LIGHT_GRAY));
    ui.label(RichText::new(&item.path).small().color(Color32::GRAY));

    if let Some(created) = item.created_at_utc() {
        ui.label(
            RichText::new(created.format("%Y-%m-%d %H:%M UTC").to_string())
                .small()
                .color(Color32::GRAY),
        );
    }
}

/// Point the navigator and playback state at a freshly loaded feed
fn sync_reloaded_feed(
    navigator: &FeedNavigator,
    playback: &PlaybackController,
    feed: &Feed,
    autoplay_first: bool,
) {
    // Clamping may notify playback, so the fresh load has to come after it
    navigator.set_page_count(feed.len());
    playback.load(feed.ids(), autoplay_first);
}

/// Load a feed listing, falling back to the demo feed
fn load_feed(path: Option<&Path>) -> (Feed, Option<String>) {
    let Some(path) = path else {
        info!("no feed listing given, using demo feed");
        return (demo::demo_feed(), None);
    };

    match FeedSource::new(path).load() {
        Ok(feed) => (feed, None),
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to load feed");
            (demo::demo_feed(), Some(format!("Failed to load {}: {}", path.display(), e)))
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config_path = std::env::var_os("FEEDVIEW_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = ViewerConfig::load_or_default(&config_path);

    let feed_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.feed_path.clone());

    info!(config = %config_path.display(), feed = ?feed_path, "Starting feed viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([320.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Feed Viewer",
        options,
        Box::new(move |cc| {
            Box::new(FeedViewerApp::new(cc, config, feed_path))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_of(ids: &[&str]) -> Feed {
        ids.iter()
            .map(|id| VideoRecord::new(*id, format!("{}.mp4", id), 0.0))
            .collect::<Vec<_>>()
            .into()
    }

    fn subscribed(page_count: usize) -> (FeedNavigator, Arc<PlaybackController>) {
        let navigator = FeedNavigator::new(page_count);
        let playback = Arc::new(PlaybackController::default());
        navigator.add_subscriber(&playback);
        (navigator, playback)
    }

    #[test]
    fn test_shrinking_reload_respects_disabled_autoplay() {
        let (navigator, playback) = subscribed(4);
        for _ in 0..3 {
            navigator.end_drag(-40.0);
        }

        sync_reloaded_feed(&navigator, &playback, &feed_of(&["a", "b"]), false);
        assert_eq!(navigator.current_index(), 1);
        assert_eq!(playback.playing_id(), None);
    }

    #[test]
    fn test_reload_autoplays_first_item() {
        let (navigator, playback) = subscribed(4);
        for _ in 0..3 {
            navigator.end_drag(-40.0);
        }

        sync_reloaded_feed(&navigator, &playback, &feed_of(&["a", "b"]), true);
        assert_eq!(playback.playing_id().as_deref(), Some("a"));
        assert!(!playback.is_playing("b"));
    }
}
