pub mod client;
pub mod models;
pub mod traits;

pub use client::ApiClient;
pub use models::{FormatOption, SavedFile, VideoDescriptor};
pub use traits::VideoService;
