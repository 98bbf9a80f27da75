//! Custom theme definitions for the application - Light Theme

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Light Color Palette ---

// Red accent scale
pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // Primary actions
pub const RED_200: Color = Color::from_rgb(0.996, 0.792, 0.792); // Borders
pub const RED_100: Color = Color::from_rgb(0.996, 0.886, 0.886); // Subtle backgrounds
pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949); // Banner background

// Gray scale for text and borders
pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // Headings
pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // Body text
pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // Secondary text
pub const GRAY_400: Color = Color::from_rgb(0.616, 0.639, 0.667); // Placeholder
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // Light borders
pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // Row background

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

// Text colors for compatibility
pub const TEXT_PRIMARY: Color = GRAY_900;
pub const TEXT_SECONDARY: Color = GRAY_600;
pub const DANGER: Color = RED_600;
pub const SUCCESS: Color = Color::from_rgb(0.063, 0.725, 0.506);

// --- Container Styles ---

pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_700),
            background: Some(Background::Color(WHITE)),
            border: Border {
                color: RED_100,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

pub struct ErrorBanner;

impl container::StyleSheet for ErrorBanner {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(DANGER),
            background: Some(Background::Color(RED_50)),
            border: Border {
                color: RED_200,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

pub struct FormatRow;

impl container::StyleSheet for FormatRow {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_700),
            background: Some(Background::Color(GRAY_50)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_500)),
            text_color: WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(RED_600)),
            ..self.active(style)
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GRAY_200)),
            text_color: GRAY_400,
            ..self.active(style)
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GRAY_50)),
            text_color: GRAY_700,
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(GRAY_200)),
            ..self.active(style)
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                color: RED_200,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon_color: GRAY_400,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            border: Border {
                color: RED_500,
                width: 2.0,
                radius: 8.0.into(),
            },
            ..self.active(style)
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_900
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        RED_100
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(GRAY_50),
            ..self.active(style)
        }
    }
}

pub struct InputErrorStyle;

impl text_input::StyleSheet for InputErrorStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                color: RED_600,
                width: 2.0,
                radius: 8.0.into(),
            },
            icon_color: GRAY_400,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_900
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        RED_100
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }
}
