//! One download option row

use crate::api::FormatOption;
use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// Render a single format option with its download trigger
///
/// Only this row's button is disabled while its download is in flight;
/// sibling rows keep their own state.
pub fn format_row(format: &FormatOption, downloading: bool) -> Element<'static, Message> {
    let labels = column![
        row![
            text(format.quality.clone()).size(16).style(theme::TEXT_PRIMARY),
            text(format.ext.to_uppercase()).size(12).style(theme::TEXT_SECONDARY),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
        text(format.detail_label()).size(13).style(theme::TEXT_SECONDARY),
    ]
    .spacing(4);

    let mut download_button = button(
        text(if downloading { "Downloading..." } else { "Download" }).size(14),
    )
    .padding([10, 20])
    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));
    if !downloading {
        download_button = download_button.on_press(Message::DownloadPressed(format.format_id.clone()));
    }

    container(
        row![labels, Space::with_width(Length::Fill), download_button]
            .align_items(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::FormatRow)))
    .into()
}
