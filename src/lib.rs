//! Vidfetch library

pub mod api;
pub mod gui;
pub mod session;
pub mod utils;

// Re-export main types for easier use
pub use api::{ApiClient, FormatOption, SavedFile, VideoDescriptor, VideoService};
pub use gui::{Message, VidfetchApp};
pub use session::Session;
pub use utils::{AppSettings, VidfetchError};
