//! URL input component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// Create the URL input field with paste/clear buttons and the fetch trigger
pub fn url_input(value: &str, has_error: bool, fetching: bool) -> Element<'static, Message> {
    let input = text_input("https://www.youtube.com/watch?v=...", value)
        .on_input(Message::UrlInputChanged)
        .on_submit(Message::FetchPressed)
        .padding(12)
        .width(Length::Fill)
        .style(if has_error {
            iced::theme::TextInput::Custom(Box::new(theme::InputErrorStyle))
        } else {
            iced::theme::TextInput::Custom(Box::new(theme::InputStyle))
        });

    let mut fetch_button = button(text(if fetching { "Fetching..." } else { "Fetch info" }).size(14))
        .padding([10, 20])
        .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));
    if !fetching {
        fetch_button = fetch_button.on_press(Message::FetchPressed);
    }

    row![
        input,
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([10, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([10, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
        fetch_button,
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
