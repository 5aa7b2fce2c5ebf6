// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the storefront widgets.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Border, Color, Theme};

/// Style for the top navigation bar container.
pub fn navbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background;

    container::Style {
        background: Some(iced::Background::Color(base.weak.color)),
        shadow: shadow::SM,
        text_color: Some(base.base.text),
        ..Default::default()
    }
}

/// Style for feature and contact-channel cards.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(iced::Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Style for the panel shown in place of the contact form after a
/// successful submission.
pub fn feedback_panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(iced::Background::Color(extended.background.weak.color)),
        border: Border {
            color: palette::SUCCESS_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Style for the call-to-action and submit buttons.
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.extended_palette().primary;

    let background = match status {
        button::Status::Active => primary.base.color,
        button::Status::Hovered => primary.strong.color,
        button::Status::Pressed => primary.weak.color,
        button::Status::Disabled => Color {
            a: 0.5,
            ..primary.base.color
        },
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: primary.base.text,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for navigation links; the active page is underlined by a border.
pub fn nav_button(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let extended = theme.extended_palette();

    let text_color = if active || matches!(status, button::Status::Hovered) {
        extended.primary.base.color
    } else {
        extended.background.base.text
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: if active {
                extended.primary.base.color
            } else {
                Color::TRANSPARENT
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
