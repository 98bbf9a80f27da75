//! Vidfetch - Video Downloader Client
//!
//! A desktop client for a video resolution/download server: paste a URL,
//! fetch its metadata and available formats, and save a chosen format
//! locally. Runs a GUI by default, or headless with `--info`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use iced::Application;
use std::path::PathBuf;
use vidfetch::api::{ApiClient, VideoService};
use vidfetch::gui::VidfetchApp;
use vidfetch::utils::{format_view_count, AppSettings};

#[derive(Parser)]
#[command(name = "vidfetch", about = "Video downloader client")]
struct Args {
    /// Base URL of the resolution/download server
    #[arg(long)]
    server: Option<String>,

    /// Directory downloads are saved into
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Resolve the given URL and print its metadata instead of starting the GUI
    #[arg(long)]
    info: Option<String>,

    /// With --info, also download the given format id
    #[arg(long, requires = "info")]
    format: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::default();
    if let Some(server) = args.server {
        settings.server_url = server;
    }
    if let Some(dir) = args.output_dir {
        settings.download_dir = dir;
    }

    if let Some(url) = args.info {
        // Headless mode inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(run_headless(settings, url, args.format));
    }

    // Start the GUI application (synchronous entrypoint)
    VidfetchApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(900.0, 640.0),
            min_size: Some(iced::Size::new(720.0, 480.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..iced::Settings::with_flags(settings)
    })?;

    Ok(())
}

async fn run_headless(settings: AppSettings, url: String, format_id: Option<String>) -> Result<()> {
    let client = ApiClient::new(&settings).context("Failed to build HTTP client")?;

    let info = match client.resolve(&url).await {
        Ok(info) => info,
        Err(e) => bail!("Resolution failed: {}", e),
    };

    println!("Title:    {}", info.title);
    println!("Uploader: {}", info.uploader);
    println!("Duration: {}", info.duration);
    println!("Views:    {}", format_view_count(info.view_count));
    println!("Formats:");
    for format in &info.formats {
        println!(
            "  {:>8}  {} {}  ({})",
            format.format_id,
            format.quality,
            format.ext.to_uppercase(),
            format.filesize
        );
    }

    if let Some(id) = format_id {
        let Some(format) = info.format(&id) else {
            bail!("Format '{}' is not in the list above", id);
        };
        let dest = settings.download_dir.join(info.filename_for(format));

        println!("Downloading {} to {} ...", id, dest.display());
        match client.download(&url, &id, &dest).await {
            Ok(saved) => println!("Saved {} bytes to {}", saved.bytes, saved.path.display()),
            Err(e) => bail!("Download failed: {}", e),
        }
    }

    Ok(())
}
