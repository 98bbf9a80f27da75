//! Reusable GUI components

pub mod format_row;
pub mod url_input;
pub mod video_card;

pub use format_row::format_row;
pub use url_input::url_input;
pub use video_card::video_card;
