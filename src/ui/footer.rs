// SPDX-License-Identifier: MPL-2.0
//! Page footer with the copyright line.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use chrono::Datelike;
use iced::widget::{text, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Render the footer. The year is read from the wall clock so the text
/// never goes stale between releases.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let year = chrono::Local::now().year().to_string();
    let line = i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]);

    Container::new(
        Text::new(line)
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            }),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding(spacing::MD)
    .into()
}
