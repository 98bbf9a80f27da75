//! Main GUI application

use crate::api::{ApiClient, SavedFile, VideoDescriptor, VideoService};
use crate::gui::clipboard;
use crate::gui::components::{format_row, url_input, video_card};
use crate::gui::theme;
use crate::session::{ResolveSeq, Session};
use crate::utils::{AppSettings, VidfetchError};
use iced::widget::{column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Application, Command, Element, Length, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Main application state
pub struct VidfetchApp {
    service: Arc<ApiClient>,
    settings: AppSettings,

    // UI state
    url_input: String,
    session: Session,
    /// URL the current descriptor was resolved from; download requests
    /// must use this, not whatever is in the input box by then.
    resolved_url: String,
    thumbnail: Option<image::Handle>,
    last_saved: Option<PathBuf>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,

    // Resolution events
    FetchPressed,
    ResolveFinished(ResolveSeq, Result<VideoDescriptor, String>),
    ThumbnailLoaded(ResolveSeq, Option<Vec<u8>>),

    // Download events
    DownloadPressed(String), // format_id
    DownloadFinished(String, Result<SavedFile, String>),
    ShowInFolder,
}

impl Application for VidfetchApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(settings: Self::Flags) -> (Self, Command<Message>) {
        let service = ApiClient::new(&settings).expect("Failed to build HTTP client");

        let app = Self {
            service: Arc::new(service),
            settings,
            url_input: String::new(),
            session: Session::new(),
            resolved_url: String::new(),
            thumbnail: None,
            last_saved: None,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Vidfetch - Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                self.session.dismiss_error();
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => self.url_input = content,
                    Err(e) => warn!("Clipboard paste failed: {}", e),
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                Command::none()
            }

            Message::FetchPressed => {
                let url = self.url_input.trim().to_string();

                // Empty input never reaches the network and never starts a
                // resolution; the current descriptor and any downloads in
                // flight stay untouched.
                if url.is_empty() {
                    self.session.set_error(VidfetchError::EmptyUrl.to_string());
                    return Command::none();
                }

                let seq = self.session.begin_resolve();
                self.thumbnail = None;
                self.last_saved = None;
                self.resolved_url = url.clone();
                let service = Arc::clone(&self.service);
                Command::perform(
                    async move { service.resolve(&url).await.map_err(|e| e.to_string()) },
                    move |result| Message::ResolveFinished(seq, result),
                )
            }

            Message::ResolveFinished(seq, result) => {
                if !self.session.apply_resolve(seq, result) {
                    // A newer request superseded this one; drop the result.
                    return Command::none();
                }

                if let Some(info) = self.session.descriptor() {
                    let thumbnail_url = info.thumbnail.clone();
                    if !thumbnail_url.is_empty() {
                        let service = Arc::clone(&self.service);
                        return Command::perform(
                            async move { service.fetch_thumbnail(&thumbnail_url).await },
                            move |bytes| Message::ThumbnailLoaded(seq, bytes),
                        );
                    }
                }
                Command::none()
            }

            Message::ThumbnailLoaded(seq, bytes) => {
                // Same staleness rule as the descriptor itself.
                if self.session.is_current(seq) {
                    self.thumbnail = bytes.map(image::Handle::from_memory);
                }
                Command::none()
            }

            Message::DownloadPressed(format_id) => {
                let Some(info) = self.session.descriptor() else {
                    return Command::none();
                };
                let Some(format) = info.format(&format_id) else {
                    return Command::none();
                };
                let dest = self.settings.download_dir.join(info.filename_for(format));

                if !self.session.begin_download(&format_id) {
                    // Already in flight for this format.
                    return Command::none();
                }

                let service = Arc::clone(&self.service);
                let url = self.resolved_url.clone();
                let id_for_result = format_id.clone();
                Command::perform(
                    async move {
                        service
                            .download(&url, &format_id, &dest)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::DownloadFinished(id_for_result.clone(), result),
                )
            }

            Message::DownloadFinished(format_id, result) => {
                match result {
                    Ok(saved) => {
                        self.session.apply_download(&format_id, Ok(()));
                        self.last_saved = Some(saved.path);
                    }
                    Err(message) => {
                        self.session.apply_download(&format_id, Err(message));
                    }
                }
                Command::none()
            }

            Message::ShowInFolder => {
                if let Some(dir) = self.last_saved.as_ref().and_then(|p| p.parent()) {
                    if let Err(e) = open::that(dir) {
                        warn!("Failed to open download folder: {}", e);
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let header = column![
            text("Vidfetch").size(28).style(theme::TEXT_PRIMARY),
            text("Paste a video link, pick a format, download")
                .size(14)
                .style(theme::TEXT_SECONDARY),
        ]
        .spacing(4);

        let mut content = column![
            header,
            url_input(
                &self.url_input,
                self.session.error().is_some(),
                self.session.is_loading(),
            ),
        ]
        .spacing(16)
        .padding(24)
        .max_width(900);

        if let Some(error) = self.session.error() {
            content = content.push(
                container(text(error.to_string()).size(14))
                    .padding(12)
                    .width(Length::Fill)
                    .style(iced::theme::Container::Custom(Box::new(theme::ErrorBanner))),
            );
        }

        if let Some(info) = self.session.descriptor() {
            content = content.push(video_card(info, self.thumbnail.as_ref()));

            let mut options = column![text("Download options").size(18).style(theme::TEXT_PRIMARY)]
                .spacing(8);
            for format in &info.formats {
                options = options.push(format_row(
                    format,
                    self.session.is_downloading(&format.format_id),
                ));
            }
            content = content.push(options);
        }

        if let Some(saved) = &self.last_saved {
            content = content.push(
                row![
                    text(format!("Saved: {}", saved.display()))
                        .size(14)
                        .style(theme::SUCCESS),
                    Space::with_width(Length::Fixed(12.0)),
                    iced::widget::button(text("Show in folder").size(13))
                        .padding([6, 10])
                        .style(iced::theme::Button::Custom(Box::new(theme::IconButton)))
                        .on_press(Message::ShowInFolder),
                ]
                .align_items(Alignment::Center),
            );
        }

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(),
        )
        .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}
