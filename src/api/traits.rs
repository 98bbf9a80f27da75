use crate::api::models::{SavedFile, VideoDescriptor};
use crate::utils::VidfetchError;
use async_trait::async_trait;
use std::path::Path;

/// Core trait for the resolution/download backend
///
/// This trait isolates the application from the transport so the UI and
/// session logic can be exercised against mock backends in tests.
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Resolve a user-supplied URL into a video descriptor
    ///
    /// The URL is trimmed first; an empty result fails with
    /// [`VidfetchError::EmptyUrl`] before any network traffic.
    async fn resolve(&self, url: &str) -> Result<VideoDescriptor, VidfetchError>;

    /// Download one format of a previously resolved video to `dest`
    ///
    /// `format_id` must come from the descriptor's format list; the server
    /// is the authority and may reject unknown ids.
    async fn download(
        &self,
        url: &str,
        format_id: &str,
        dest: &Path,
    ) -> Result<SavedFile, VidfetchError>;
}
