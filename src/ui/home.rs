// SPDX-License-Identifier: MPL-2.0
//! Home screen: the marketing pitch and feature cards.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// One entry of the static feature list shown on the home page.
struct Feature {
    pictogram: &'static str,
    title_key: &'static str,
    description_key: &'static str,
}

// The marketing content is fixed; only its wording lives in the locale
// bundles.
const FEATURES: [Feature; 3] = [
    Feature {
        pictogram: "📱",
        title_key: "feature-devices-title",
        description_key: "feature-devices-description",
    },
    Feature {
        pictogram: "👨‍💼",
        title_key: "feature-support-title",
        description_key: "feature-support-description",
    },
    Feature {
        pictogram: "✅",
        title_key: "feature-quality-title",
        description_key: "feature-quality-description",
    },
];

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The call-to-action button was pressed.
    CatalogRequested,
}

/// Render the home screen.
pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("home-heading")).size(typography::TITLE_LG);
    let tagline = Text::new(i18n.tr("home-tagline")).size(typography::BODY_LG);

    let cards = FEATURES
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, feature| {
            row.push(feature_card(feature, i18n))
        });

    let cta = button(Text::new(i18n.tr("home-cta")).size(typography::BODY_LG))
        .on_press(Message::CatalogRequested)
        .padding([spacing::XS, spacing::LG])
        .style(styles::primary_button);

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(tagline)
        .push(cards)
        .push(cta)
        .into()
}

fn feature_card<'a>(feature: &Feature, i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(feature.pictogram).size(typography::PICTOGRAM))
        .push(Text::new(i18n.tr(feature.title_key)).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr(feature.description_key)).size(typography::BODY));

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn every_feature_key_is_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for feature in &FEATURES {
            assert!(!i18n.tr(feature.title_key).starts_with("MISSING"));
            assert!(!i18n.tr(feature.description_key).starts_with("MISSING"));
        }
    }
}
