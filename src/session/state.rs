//! Resolution/download session state
//!
//! Single holder of the "current" descriptor, error and in-flight download
//! set. All mutation goes through the transition functions below; in
//! particular, every resolution attempt is tagged with a monotonically
//! increasing sequence number and a completion is only applied if it belongs
//! to the most recently issued attempt. The displayed state therefore always
//! reflects the last request the user *initiated*, never a late-arriving
//! response for a superseded one.

use crate::api::VideoDescriptor;
use std::collections::HashSet;

/// Sequence number identifying one resolution attempt
pub type ResolveSeq = u64;

/// State for one resolve-then-download session
#[derive(Debug, Default)]
pub struct Session {
    next_seq: ResolveSeq,
    active_seq: ResolveSeq,
    loading: bool,
    descriptor: Option<VideoDescriptor>,
    error: Option<String>,
    downloading: HashSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new resolution attempt, superseding any pending one
    ///
    /// Clears the previous descriptor, error and in-flight set and returns
    /// the sequence number the caller must hand back to [`apply_resolve`].
    ///
    /// [`apply_resolve`]: Session::apply_resolve
    pub fn begin_resolve(&mut self) -> ResolveSeq {
        self.next_seq += 1;
        self.active_seq = self.next_seq;
        self.loading = true;
        self.descriptor = None;
        self.error = None;
        self.downloading.clear();
        self.active_seq
    }

    /// Apply a completed resolution
    ///
    /// Returns false (and changes nothing) when `seq` is not the most
    /// recently issued attempt; the underlying transport call is never
    /// aborted, its result is simply discarded here.
    pub fn apply_resolve(
        &mut self,
        seq: ResolveSeq,
        result: Result<VideoDescriptor, String>,
    ) -> bool {
        if seq != self.active_seq {
            return false;
        }

        self.loading = false;
        match result {
            Ok(descriptor) => self.descriptor = Some(descriptor),
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Mark a format download as in flight
    ///
    /// Returns false when that format already has an outstanding download;
    /// other formats are unaffected either way.
    pub fn begin_download(&mut self, format_id: &str) -> bool {
        self.error = None;
        self.downloading.insert(format_id.to_string())
    }

    /// Apply a completed download for one format
    ///
    /// A failure surfaces its message but keeps the descriptor so the other
    /// options stay actionable.
    pub fn apply_download(&mut self, format_id: &str, result: Result<(), String>) {
        self.downloading.remove(format_id);
        if let Err(message) = result {
            self.error = Some(message);
        }
    }

    /// Whether `seq` identifies the most recently issued attempt
    pub fn is_current(&self, seq: ResolveSeq) -> bool {
        seq == self.active_seq
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn descriptor(&self) -> Option<&VideoDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_downloading(&self, format_id: &str) -> bool {
        self.downloading.contains(format_id)
    }

    pub fn has_downloads_in_flight(&self) -> bool {
        !self.downloading.is_empty()
    }

    /// Surface a locally detected error without disturbing anything else
    ///
    /// Used for input validation that never becomes a resolution attempt;
    /// the current descriptor and in-flight downloads stay as they are.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clear the visible error without touching anything else
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FormatOption, VideoDescriptor};

    fn descriptor(title: &str) -> VideoDescriptor {
        VideoDescriptor {
            title: title.to_string(),
            uploader: "Uploader".to_string(),
            duration: "03:12".to_string(),
            thumbnail: String::new(),
            description: None,
            view_count: Some(1_500),
            formats: vec![
                FormatOption {
                    format_id: "22".to_string(),
                    quality: "720p".to_string(),
                    ext: "mp4".to_string(),
                    filesize: "12.3 MB".to_string(),
                    fps: Some(30.0),
                },
                FormatOption {
                    format_id: "18".to_string(),
                    quality: "360p".to_string(),
                    ext: "webm".to_string(),
                    filesize: "4.1 MB".to_string(),
                    fps: None,
                },
            ],
        }
    }

    #[test]
    fn resolve_success_installs_descriptor() {
        let mut session = Session::new();
        let seq = session.begin_resolve();
        assert!(session.is_loading());

        assert!(session.apply_resolve(seq, Ok(descriptor("A"))));
        assert!(!session.is_loading());
        assert_eq!(session.descriptor().unwrap().title, "A");
        assert!(session.error().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut session = Session::new();
        let seq_a = session.begin_resolve();
        let seq_b = session.begin_resolve();

        // B completes first, then A arrives late.
        assert!(session.apply_resolve(seq_b, Ok(descriptor("B"))));
        assert!(!session.apply_resolve(seq_a, Ok(descriptor("A"))));

        assert_eq!(session.descriptor().unwrap().title, "B");
        assert!(!session.is_loading());
    }

    #[test]
    fn stale_error_cannot_clobber_fresh_result() {
        let mut session = Session::new();
        let seq_a = session.begin_resolve();
        let seq_b = session.begin_resolve();

        assert!(session.apply_resolve(seq_b, Ok(descriptor("B"))));
        assert!(!session.apply_resolve(seq_a, Err("boom".to_string())));
        assert!(session.error().is_none());
        assert_eq!(session.descriptor().unwrap().title, "B");
    }

    #[test]
    fn new_resolve_clears_previous_state() {
        let mut session = Session::new();
        let seq = session.begin_resolve();
        session.apply_resolve(seq, Ok(descriptor("A")));
        session.begin_download("22");

        session.begin_resolve();
        assert!(session.descriptor().is_none());
        assert!(session.error().is_none());
        assert!(!session.is_downloading("22"));
        assert!(session.is_loading());
    }

    #[test]
    fn resolve_failure_surfaces_message() {
        let mut session = Session::new();
        let seq = session.begin_resolve();
        assert!(session.apply_resolve(seq, Err("Video unavailable".to_string())));
        assert_eq!(session.error(), Some("Video unavailable"));
        assert!(session.descriptor().is_none());
    }

    #[test]
    fn local_error_keeps_descriptor_and_downloads() {
        let mut session = Session::new();
        let seq = session.begin_resolve();
        session.apply_resolve(seq, Ok(descriptor("A")));
        session.begin_download("22");

        // An input-validation error must not supersede the session.
        session.set_error("Please enter a video link");

        assert_eq!(session.error(), Some("Please enter a video link"));
        assert_eq!(session.descriptor().unwrap().title, "A");
        assert!(session.is_downloading("22"));
        assert!(!session.is_loading());
    }

    #[test]
    fn downloads_are_independent_per_format() {
        let mut session = Session::new();
        let seq = session.begin_resolve();
        session.apply_resolve(seq, Ok(descriptor("A")));

        assert!(session.begin_download("22"));
        assert!(session.is_downloading("22"));
        assert!(!session.is_downloading("18"));

        // A second trigger for the same format is refused, another format
        // can still start.
        assert!(!session.begin_download("22"));
        assert!(session.begin_download("18"));

        session.apply_download("22", Ok(()));
        assert!(!session.is_downloading("22"));
        assert!(session.is_downloading("18"));
    }

    #[test]
    fn failed_download_keeps_descriptor() {
        let mut session = Session::new();
        let seq = session.begin_resolve();
        session.apply_resolve(seq, Ok(descriptor("A")));

        session.begin_download("22");
        session.apply_download("22", Err("bad format".to_string()));

        assert_eq!(session.error(), Some("bad format"));
        assert!(session.descriptor().is_some());
        assert!(!session.is_downloading("22"));
    }
}
