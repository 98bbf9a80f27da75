//! HTTP client for the resolution/download server
//!
//! Talks to two endpoints at a configurable base address:
//! `POST /get_video_info` and `POST /download_video`. Everything below the
//! application protocol (unreachable host, timeout, malformed body) is
//! collapsed into a generic connectivity error so the UI never shows raw
//! transport noise.

use crate::api::models::{DownloadErrorBody, InfoEnvelope, SavedFile, VideoDescriptor};
use crate::api::traits::VideoService;
use crate::utils::{AppSettings, VidfetchError};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde_json::json;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Client for the video resolution/download server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    resolve_http: Client,
    download_http: Client,
}

impl ApiClient {
    /// Create a client from application settings
    pub fn new(settings: &AppSettings) -> Result<Self, VidfetchError> {
        let resolve_http = Client::builder()
            .timeout(settings.resolve_timeout())
            .build()
            .map_err(|_| VidfetchError::ConnectionFailed)?;

        // Downloads can legitimately run much longer than a metadata call.
        let download_http = Client::builder()
            .timeout(settings.download_timeout())
            .build()
            .map_err(|_| VidfetchError::ConnectionFailed)?;

        Ok(Self {
            base_url: settings.server_url.trim_end_matches('/').to_string(),
            resolve_http,
            download_http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch thumbnail bytes for display
    ///
    /// Runs on the same bounded client as resolution; any failure yields
    /// `None` so the caller keeps its placeholder.
    pub async fn fetch_thumbnail(&self, url: &str) -> Option<Vec<u8>> {
        let response = self.resolve_http.get(url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.bytes().await.ok().map(|b| b.to_vec())
    }
}

#[async_trait]
impl VideoService for ApiClient {
    async fn resolve(&self, url: &str) -> Result<VideoDescriptor, VidfetchError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(VidfetchError::EmptyUrl);
        }

        debug!("Resolving video info for URL: {}", url);

        let response = self
            .resolve_http
            .post(self.endpoint("get_video_info"))
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(|e| {
                warn!("Resolution request failed: {}", e);
                VidfetchError::ConnectionFailed
            })?;

        let envelope: InfoEnvelope = response.json().await.map_err(|e| {
            warn!("Resolution response was not valid JSON: {}", e);
            VidfetchError::ConnectionFailed
        })?;

        if !envelope.success {
            return Err(envelope
                .error
                .map(VidfetchError::ServerReported)
                .unwrap_or_else(VidfetchError::server_fallback));
        }

        // A success flag without a payload is a malformed response, not a
        // server-reported failure.
        envelope.data.ok_or(VidfetchError::ConnectionFailed)
    }

    async fn download(
        &self,
        url: &str,
        format_id: &str,
        dest: &Path,
    ) -> Result<SavedFile, VidfetchError> {
        debug!("Downloading format {} to {:?}", format_id, dest);

        let response = self
            .download_http
            .post(self.endpoint("download_video"))
            .json(&json!({ "url": url.trim(), "format_id": format_id }))
            .send()
            .await
            .map_err(|e| {
                warn!("Download request failed: {}", e);
                VidfetchError::DownloadFailed
            })?;

        // The status decides whether the body is a file or a structured
        // error; it must never be written to disk before this check.
        if !response.status().is_success() {
            let body: DownloadErrorBody = response
                .json()
                .await
                .unwrap_or(DownloadErrorBody { error: None });
            return Err(body
                .error
                .map(VidfetchError::DownloadRejected)
                .unwrap_or(VidfetchError::DownloadFailed));
        }

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| VidfetchError::DownloadFailed)?;
        }

        let mut file = File::create(dest)
            .await
            .map_err(|_| VidfetchError::DownloadFailed)?;
        let mut written = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(c) => c,
                Err(e) => {
                    warn!("Download stream interrupted: {}", e);
                    drop(file);
                    remove_partial(dest).await;
                    return Err(VidfetchError::DownloadFailed);
                }
            };
            if let Err(e) = file.write_all(&chunk).await {
                warn!("Failed writing download chunk: {}", e);
                drop(file);
                remove_partial(dest).await;
                return Err(VidfetchError::DownloadFailed);
            }
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|_| VidfetchError::DownloadFailed)?;

        debug!("Saved {} bytes to {:?}", written, dest);
        Ok(SavedFile {
            path: dest.to_path_buf(),
            bytes: written,
        })
    }
}

async fn remove_partial(dest: &Path) {
    if let Err(e) = tokio::fs::remove_file(dest).await {
        warn!("Failed to remove partial file {:?}: {}", dest, e);
    }
}
