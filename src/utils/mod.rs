//! Utility modules for error handling, configuration and formatting

pub mod config;
pub mod error;
pub mod format;

// Re-export for convenience
pub use config::AppSettings;
pub use error::VidfetchError;
pub use format::{format_view_count, sanitize_filename};
