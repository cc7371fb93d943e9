//! Feed sources

pub mod json_source;

pub use json_source::{FeedListing, FeedSource};
