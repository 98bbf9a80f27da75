//! End-to-end session flows against a scripted backend: the staleness
//! guarantee for superseded resolutions and the independence of concurrent
//! format downloads.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use vidfetch::api::{FormatOption, SavedFile, VideoDescriptor, VideoService};
use vidfetch::session::Session;
use vidfetch::utils::VidfetchError;

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

/// Backend that answers after a fixed delay with a fixed title
struct ScriptedService {
    delay: Duration,
    title: String,
}

#[async_trait]
impl VideoService for ScriptedService {
    async fn resolve(&self, _url: &str) -> Result<VideoDescriptor, VidfetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(descriptor(&self.title))
    }

    async fn download(
        &self,
        _url: &str,
        _format_id: &str,
        dest: &Path,
    ) -> Result<SavedFile, VidfetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(SavedFile {
            path: dest.to_path_buf(),
            bytes: 0,
        })
    }
}

#[tokio::test]
async fn later_request_wins_even_when_it_completes_first() {
    let mut session = Session::new();
    let (tx, mut rx) = mpsc::channel(2);

    // Request A is slow, request B is issued afterwards and completes first.
    let seq_a = session.begin_resolve();
    let tx_a = tx.clone();
    tokio::spawn(async move {
        let service = ScriptedService {
            delay: Duration::from_millis(150),
            title: "A".to_string(),
        };
        let result = service.resolve("https://example.com/a").await;
        let _ = tx_a.send((seq_a, result)).await;
    });

    let seq_b = session.begin_resolve();
    let tx_b = tx.clone();
    tokio::spawn(async move {
        let service = ScriptedService {
            delay: Duration::from_millis(10),
            title: "B".to_string(),
        };
        let result = service.resolve("https://example.com/b").await;
        let _ = tx_b.send((seq_b, result)).await;
    });

    // Apply both completions in whatever order they arrive.
    for _ in 0..2 {
        let (seq, result) = rx.recv().await.expect("completion");
        session.apply_resolve(seq, result.map_err(|e| e.to_string()));
    }

    let info = session.descriptor().expect("descriptor");
    assert_eq!(info.title, "B", "stale response for A must be discarded");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn earlier_completion_of_a_stale_request_is_ignored_too() {
    let mut session = Session::new();
    let (tx, mut rx) = mpsc::channel(2);

    // Here the superseded request A completes before B does.
    let seq_a = session.begin_resolve();
    let tx_a = tx.clone();
    tokio::spawn(async move {
        let service = ScriptedService {
            delay: Duration::from_millis(10),
            title: "A".to_string(),
        };
        let result = service.resolve("https://example.com/a").await;
        let _ = tx_a.send((seq_a, result)).await;
    });

    let seq_b = session.begin_resolve();
    let tx_b = tx.clone();
    tokio::spawn(async move {
        let service = ScriptedService {
            delay: Duration::from_millis(100),
            title: "B".to_string(),
        };
        let result = service.resolve("https://example.com/b").await;
        let _ = tx_b.send((seq_b, result)).await;
    });

    for _ in 0..2 {
        let (seq, result) = rx.recv().await.expect("completion");
        let applied = session.apply_resolve(seq, result.map_err(|e| e.to_string()));
        if seq == seq_a {
            assert!(!applied, "superseded request must not be applied");
        }
    }

    assert_eq!(session.descriptor().unwrap().title, "B");
}

#[tokio::test]
async fn concurrent_downloads_of_different_formats_do_not_interfere() {
    let mut session = Session::new();
    let seq = session.begin_resolve();
    session.apply_resolve(seq, Ok(descriptor("A")));

    let service = ScriptedService {
        delay: Duration::from_millis(30),
        title: "A".to_string(),
    };

    assert!(session.begin_download("22"));
    // While format 22 is in flight, format 18 is still available.
    assert!(session.is_downloading("22"));
    assert!(!session.is_downloading("18"));
    assert!(session.begin_download("18"));

    let first = service
        .download("https://example.com/a", "22", Path::new("/tmp/a.mp4"))
        .await;
    session.apply_download("22", first.map(|_| ()).map_err(|e| e.to_string()));

    // 22 finished; 18 is still outstanding and untouched.
    assert!(!session.is_downloading("22"));
    assert!(session.is_downloading("18"));

    let second = service
        .download("https://example.com/a", "18", Path::new("/tmp/a.webm"))
        .await;
    session.apply_download("18", second.map(|_| ()).map_err(|e| e.to_string()));
    assert!(!session.has_downloads_in_flight());
    assert!(session.error().is_none());
}
