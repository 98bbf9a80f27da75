//! Data structures for resolved video metadata

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::format::sanitize_filename;

/// Metadata the server resolved for one video URL
///
/// A descriptor is immutable once received; a new resolution replaces it
/// wholesale. Nothing here is persisted client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDescriptor {
    pub title: String,
    #[serde(default)]
    pub uploader: String,
    /// Pre-formatted, human-readable duration (e.g. "03:12"), not seconds
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    /// Server order is the order options are shown to the user
    #[serde(default)]
    pub formats: Vec<FormatOption>,
}

/// One selectable quality/container combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOption {
    /// Opaque token, unique within one descriptor, passed back verbatim
    pub format_id: String,
    pub quality: String,
    /// Lowercase canonical container extension
    pub ext: String,
    /// Pre-formatted human-readable size (may be an estimate or "unknown")
    #[serde(default)]
    pub filesize: String,
    #[serde(default)]
    pub fps: Option<f32>,
}

impl VideoDescriptor {
    /// Look up a format by its id
    pub fn format(&self, format_id: &str) -> Option<&FormatOption> {
        self.formats.iter().find(|f| f.format_id == format_id)
    }

    /// Filename a download of `format` should be saved under
    ///
    /// The stem is the sanitized title; the extension comes from the chosen
    /// format's container rather than a hardcoded one.
    pub fn filename_for(&self, format: &FormatOption) -> String {
        format!("{}.{}", sanitize_filename(&self.title), format.ext)
    }
}

impl FormatOption {
    /// Secondary label shown under the quality ("Size: 12.3 MB • FPS: 30")
    pub fn detail_label(&self) -> String {
        let fps = self
            .fps
            .map(|f| f.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        format!("Size: {} • FPS: {}", self.filesize, fps)
    }
}

/// A download persisted to disk
#[derive(Debug, Clone)]
pub struct SavedFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Envelope the resolution endpoint wraps its result in
#[derive(Debug, Deserialize)]
pub(crate) struct InfoEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<VideoDescriptor>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Structured body the download endpoint returns on failure
#[derive(Debug, Deserialize)]
pub(crate) struct DownloadErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
