//! Resolved video metadata card

use crate::api::VideoDescriptor;
use crate::gui::app::Message;
use crate::gui::theme;
use crate::utils::format_view_count;
use iced::widget::{column, container, image, row, text, Space};
use iced::{Element, Length};

/// Render the card shown once a URL has been resolved
pub fn video_card<'a>(
    info: &'a VideoDescriptor,
    thumbnail: Option<&image::Handle>,
) -> Element<'a, Message> {
    let badges = row![
        text(&info.uploader).size(14).style(theme::TEXT_SECONDARY),
        text(format!("{} views", format_view_count(info.view_count)))
            .size(14)
            .style(theme::TEXT_SECONDARY),
        text(&info.duration).size(14).style(theme::TEXT_SECONDARY),
    ]
    .spacing(16);

    let mut details = column![
        text(&info.title).size(20).style(theme::TEXT_PRIMARY),
        badges,
    ]
    .spacing(8)
    .width(Length::Fill);

    // An absent or empty description is simply not shown.
    if let Some(description) = info.description.as_deref().filter(|d| !d.is_empty()) {
        details = details.push(text(description).size(14).style(theme::TEXT_SECONDARY));
    }

    let thumb: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone()).width(Length::Fixed(220.0)).into(),
        None => Space::new(Length::Fixed(220.0), Length::Fixed(124.0)).into(),
    };

    container(row![thumb, details].spacing(16))
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::CardContainer,
        )))
        .into()
}
