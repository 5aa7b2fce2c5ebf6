// SPDX-License-Identifier: MPL-2.0
//! Contact screen: channel cards plus the contact form.
//!
//! The form validates locally, then hands a [`ContactSubmission`] to the
//! parent for the simulated send. While a send is in flight the submit
//! button is disabled; on success the form is cleared and replaced by a
//! thank-you panel until the user closes it.

use crate::i18n::fluent::I18n;
use crate::submission::{ContactSubmission, FieldError};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// One entry of the static contact-channel list.
struct Channel {
    pictogram: &'static str,
    title_key: &'static str,
    value_key: &'static str,
}

const CHANNELS: [Channel; 3] = [
    Channel {
        pictogram: "✉️",
        title_key: "contact-email-title",
        value_key: "contact-email-value",
    },
    Channel {
        pictogram: "📞",
        title_key: "contact-phone-title",
        value_key: "contact-phone-value",
    },
    Channel {
        pictogram: "📍",
        title_key: "contact-address-title",
        value_key: "contact-address-value",
    },
];

/// Contact form state.
#[derive(Default)]
pub struct State {
    name: String,
    email: String,
    message: text_editor::Content,
    sending: bool,
    /// Whether the thank-you panel replaces the form.
    submitted: bool,
}

/// Messages emitted by the contact screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    CloseFeedback,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A validated submission is ready to send.
    Submit(ContactSubmission),
    /// The user tried to send an incomplete form.
    Invalid(FieldError),
}

impl State {
    /// Current form contents as a submission payload.
    fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.text(),
        }
        .trimmed()
    }

    /// Marks the in-flight submission as finished. On success the form is
    /// cleared and the thank-you panel shown until closed.
    pub fn finish(&mut self, ok: bool) {
        self.sending = false;
        if ok {
            self.submitted = true;
            self.name.clear();
            self.email.clear();
            self.message = text_editor::Content::new();
        }
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }
}

/// Process a contact screen message and return the resulting event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => {
            state.name = name;
            Event::None
        }
        Message::EmailChanged(email) => {
            state.email = email;
            Event::None
        }
        Message::MessageEdited(action) => {
            state.message.perform(action);
            Event::None
        }
        Message::Submit => {
            if state.sending {
                return Event::None;
            }
            let submission = state.submission();
            match submission.validate() {
                Ok(()) => {
                    state.sending = true;
                    Event::Submit(submission)
                }
                Err(field) => Event::Invalid(field),
            }
        }
        Message::CloseFeedback => {
            state.submitted = false;
            Event::None
        }
    }
}

/// Render the contact screen.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("contact-heading")).size(typography::TITLE_LG);

    let cards = CHANNELS
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, channel| {
            row.push(channel_card(channel, i18n))
        });

    let lower: Element<'a, Message> = if state.submitted {
        feedback_panel(i18n)
    } else {
        form(state, i18n)
    };

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(cards)
        .push(lower)
        .into()
}

fn channel_card<'a>(channel: &Channel, i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(channel.pictogram).size(typography::PICTOGRAM))
        .push(Text::new(i18n.tr(channel.title_key)).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr(channel.value_key)).size(typography::BODY));

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::card)
        .into()
}

fn form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let name_input = text_input(&i18n.tr("form-name-placeholder"), &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let email_input = text_input(&i18n.tr("form-email-placeholder"), &state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let message_input = text_editor(&state.message)
        .placeholder(i18n.tr("form-message-placeholder"))
        .on_action(Message::MessageEdited)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .height(140.0);

    let submit_label = if state.sending {
        i18n.tr("form-sending")
    } else {
        i18n.tr("form-submit")
    };
    let submit = button(Text::new(submit_label).size(typography::BODY_LG))
        .on_press_maybe((!state.sending).then_some(Message::Submit))
        .padding([spacing::XS, spacing::LG])
        .style(styles::primary_button);

    let fields = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("form-heading")).size(typography::TITLE_SM))
        .push(labeled(i18n.tr("form-name-label"), name_input.into()))
        .push(labeled(i18n.tr("form-email-label"), email_input.into()))
        .push(labeled(i18n.tr("form-message-label"), message_input.into()))
        .push(submit);

    Container::new(fields)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::MD)
        .style(styles::card)
        .into()
}

fn labeled<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(input)
        .into()
}

fn feedback_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    let close = button(Text::new(i18n.tr("form-feedback-close")).size(typography::BODY))
        .on_press(Message::CloseFeedback)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::primary_button);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("form-feedback-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("form-feedback-body")).size(typography::BODY))
        .push(close);

    Container::new(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::MD)
        .style(styles::feedback_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            message: text_editor::Content::with_text("Do you stock the Model X?"),
            ..State::default()
        }
    }

    #[test]
    fn field_messages_update_state() {
        let mut state = State::default();
        update(&mut state, Message::NameChanged("Dana".to_string()));
        update(&mut state, Message::EmailChanged("dana@example.com".to_string()));

        assert_eq!(state.name, "Dana");
        assert_eq!(state.email, "dana@example.com");
    }

    #[test]
    fn submitting_an_empty_form_reports_the_first_missing_field() {
        let mut state = State::default();
        let event = update(&mut state, Message::Submit);

        assert!(matches!(event, Event::Invalid(FieldError::MissingName)));
        assert!(!state.is_sending());
    }

    #[test]
    fn submitting_a_filled_form_hands_over_the_payload() {
        let mut state = filled_state();
        let event = update(&mut state, Message::Submit);

        let Event::Submit(submission) = event else {
            panic!("expected a submission event");
        };
        assert_eq!(submission.name, "Dana");
        assert!(state.is_sending());
    }

    #[test]
    fn resubmitting_while_sending_is_ignored() {
        let mut state = filled_state();
        assert!(matches!(
            update(&mut state, Message::Submit),
            Event::Submit(_)
        ));
        assert!(matches!(update(&mut state, Message::Submit), Event::None));
    }

    #[test]
    fn successful_finish_clears_the_form_and_opens_feedback() {
        let mut state = filled_state();
        update(&mut state, Message::Submit);
        state.finish(true);

        assert!(!state.is_sending());
        assert!(state.submitted);
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.message.text().trim().is_empty());
    }

    #[test]
    fn failed_finish_keeps_the_form_contents() {
        let mut state = filled_state();
        update(&mut state, Message::Submit);
        state.finish(false);

        assert!(!state.is_sending());
        assert!(!state.submitted);
        assert_eq!(state.name, "Dana");
    }

    #[test]
    fn closing_feedback_restores_the_form() {
        let mut state = filled_state();
        update(&mut state, Message::Submit);
        state.finish(true);

        let event = update(&mut state, Message::CloseFeedback);
        assert!(matches!(event, Event::None));
        assert!(!state.submitted);
    }
}
