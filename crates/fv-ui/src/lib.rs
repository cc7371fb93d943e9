//! User interface components for the feed viewer
//! 
//! This crate provides the egui adapter that turns pointer drags into
//! feed navigator calls and positions feed pages on screen.

pub mod pager;

/// Re-export commonly used types
pub use pager::{PagerResponse, VerticalPager};

// Common icon definitions
pub mod icons {
    pub const PLAY: &str = "▶";
    pub const PAUSE: &str = "⏸";
}
