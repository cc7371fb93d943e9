//! Feed loading and configuration for the feed viewer

pub mod config;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use config::ViewerConfig;
pub use sources::{FeedListing, FeedSource};

/// Errors that can occur while loading feeds or configuration
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    
    #[error("Duplicate feed item id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
