// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! Shows the brand name, the two page links, and the theme toggle. The
//! toggle glyph reflects the appearance the click switches to.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, space, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the contact page is the active screen.
    pub contact_active: bool,
    /// Whether the effective theme is currently dark.
    pub dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ShowHome,
    ShowContact,
    ToggleTheme,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand")).size(typography::TITLE_MD);

    let home_active = !ctx.contact_active;
    let home_button = nav_link(ctx.i18n.tr("nav-home"), Message::ShowHome, home_active);
    let contact_button = nav_link(
        ctx.i18n.tr("nav-contact"),
        Message::ShowContact,
        ctx.contact_active,
    );

    let toggle_glyph = if ctx.dark { "☀" } else { "☾" };
    let theme_button = button(Text::new(toggle_glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XXS)
        .style(|theme: &Theme, status| styles::nav_button(theme, status, false));

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(home_button)
        .push(contact_button)
        .push(space::horizontal())
        .push(theme_button);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::navbar)
        .into()
}

fn nav_link<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| styles::nav_button(theme, status, active))
        .into()
}
