//! Error handling for Vidfetch

use thiserror::Error;

/// Main error type for Vidfetch
///
/// Each variant maps to one user-visible outcome. Variants carrying a
/// `String` surface the server's own text; the rest render a fixed message
/// so transport problems are never confused with server-reported ones.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VidfetchError {
    #[error("Please enter a video link")]
    EmptyUrl,

    #[error("{0}")]
    ServerReported(String),

    #[error("Could not reach the server. Please try again.")]
    ConnectionFailed,

    #[error("{0}")]
    DownloadRejected(String),

    #[error("The download failed. Please try again.")]
    DownloadFailed,
}

impl VidfetchError {
    /// Fallback text when the server signals failure without a message
    pub fn server_fallback() -> Self {
        VidfetchError::ServerReported("The server reported an error".to_string())
    }
}
