// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens, localization, the injected
//! preference store, and the notification manager, and translates messages
//! into side effects like preference persistence or the simulated
//! submission. This file intentionally keeps policy decisions (toast
//! durations, tick cadence, window sizing) close to the main update loop so
//! it is easy to audit user-facing behavior.

use crate::config;
use crate::error::SubmitError;
use crate::i18n::fluent::I18n;
use crate::prefs::{self, FilePreferences, MemoryPreferences, PreferenceStore};
use crate::submission::{self, ContactSubmission};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Manager, Notification, NotificationMessage, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{contact, footer, home, navbar};
use iced::widget::{scrollable, stack, Column, Container};
use iced::{alignment, time, window, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};
use tracing::warn;

/// Display time for action feedback toasts (catalog teaser, submit result).
const FEEDBACK_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Cadence of the lifecycle tick while notifications are attached.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state that bridges the screens, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    prefs: Box<dyn PreferenceStore>,
    notifications: Manager,
    contact: contact::State,
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Contact,
}

impl Screen {
    /// Parses the optional CLI start-screen argument.
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Screen::Home),
            "contact" => Some(Screen::Contact),
            _ => None,
        }
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Contact(contact::Message),
    Notification(NotificationMessage),
    SubmitFinished(Result<(), SubmitError>),
    Tick(std::time::Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional start screen (`home` or `contact`).
    pub screen: Option<String>,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            theme_mode: ThemeMode::System,
            prefs: Box::new(MemoryPreferences::default()),
            notifications: Manager::new(),
            contact: contact::State::default(),
        }
    }
}

impl App {
    /// Initializes application state from the config file, the preference
    /// store, and the CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let file_prefs = FilePreferences::open_default();
        let theme_mode = file_prefs
            .get(prefs::THEME_KEY)
            .and_then(|value| ThemeMode::from_preference(&value))
            .unwrap_or_default();

        let screen = flags
            .screen
            .as_deref()
            .and_then(Screen::from_arg)
            .unwrap_or_default();

        let app = App {
            i18n,
            screen,
            theme_mode,
            prefs: Box::new(file_prefs),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        // The tick drives auto-dismiss deadlines and exit transitions; with
        // nothing attached there is nothing to advance.
        if self.notifications.has_notifications() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => self.handle_navbar(message),
            Message::Home(home::Message::CatalogRequested) => {
                self.notifications.push(
                    Notification::info("toast-catalog-preview")
                        .auto_dismiss_after(FEEDBACK_TOAST_DURATION),
                );
                Task::none()
            }
            Message::Contact(message) => self.handle_contact(message),
            Message::SubmitFinished(result) => self.handle_submit_finished(result),
            Message::Notification(message) => {
                self.notifications.handle_message(&message, Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn handle_navbar(&mut self, message: navbar::Message) -> Task<Message> {
        match message {
            navbar::Message::ShowHome => self.screen = Screen::Home,
            navbar::Message::ShowContact => self.screen = Screen::Contact,
            navbar::Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                if let Err(err) = self.prefs.set(prefs::THEME_KEY, self.theme_mode.as_str()) {
                    warn!("failed to persist theme preference: {err}");
                }
            }
        }
        Task::none()
    }

    fn handle_contact(&mut self, message: contact::Message) -> Task<Message> {
        match contact::update(&mut self.contact, message) {
            contact::Event::None => Task::none(),
            contact::Event::Invalid(field) => {
                self.notifications.push(
                    Notification::error(field.i18n_key())
                        .auto_dismiss_after(FEEDBACK_TOAST_DURATION),
                );
                Task::none()
            }
            contact::Event::Submit(submission) => self.send_submission(submission),
        }
    }

    fn send_submission(&mut self, submission: ContactSubmission) -> Task<Message> {
        Task::perform(submission::send(submission), Message::SubmitFinished)
    }

    fn handle_submit_finished(&mut self, result: Result<(), SubmitError>) -> Task<Message> {
        self.contact.finish(result.is_ok());

        match result {
            Ok(()) => {
                self.notifications.push(
                    Notification::success("toast-submit-success")
                        .auto_dismiss_after(FEEDBACK_TOAST_DURATION),
                );
            }
            Err(err) => {
                warn!("contact submission failed: {err}");
                self.notifications.push(
                    Notification::error(err.i18n_key()).auto_dismiss_after(FEEDBACK_TOAST_DURATION),
                );
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            contact_active: self.screen == Screen::Contact,
            dark: self.theme_mode.is_dark(),
        })
        .map(Message::Navbar);

        let screen: Element<'_, Message> = match self.screen {
            Screen::Home => home::view(&self.i18n).map(Message::Home),
            Screen::Contact => contact::view(&self.contact, &self.i18n).map(Message::Contact),
        };

        let content = Container::new(screen)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG);

        let page = Column::new()
            .push(navbar)
            .push(scrollable(content).height(Length::Fill))
            .push(footer::view(&self.i18n));

        let toasts = Toast::view_overlay(&self.notifications, &self.i18n, Instant::now())
            .map(Message::Notification);

        stack![page, toasts].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Phase, Severity};

    #[test]
    fn screen_arg_parsing() {
        assert_eq!(Screen::from_arg("home"), Some(Screen::Home));
        assert_eq!(Screen::from_arg("contact"), Some(Screen::Contact));
        assert_eq!(Screen::from_arg("settings"), None);
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ShowContact));
        assert_eq!(app.screen, Screen::Contact);

        let _ = app.update(Message::Navbar(navbar::Message::ShowHome));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));

        let stored = app.prefs.get(prefs::THEME_KEY).expect("theme not stored");
        assert_eq!(stored, app.theme_mode.as_str());
        assert!(matches!(app.theme_mode, ThemeMode::Light | ThemeMode::Dark));
    }

    #[test]
    fn theme_toggle_twice_round_trips() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        let first = app.theme_mode;
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, first.toggled());
    }

    #[test]
    fn catalog_request_raises_an_info_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::CatalogRequested));

        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Info);
        assert_eq!(toast.message_key(), "toast-catalog-preview");
    }

    #[test]
    fn failed_submission_surfaces_an_error_toast() {
        let mut app = App::default();
        let _ = app.update(Message::SubmitFinished(Err(SubmitError::Transient)));

        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "toast-submit-error");
        assert!(!app.contact.is_sending());
    }

    #[test]
    fn successful_submission_surfaces_a_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::SubmitFinished(Ok(())));

        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Success);
    }

    #[test]
    fn invalid_form_raises_a_validation_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Contact(contact::Message::Submit));

        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "form-error-missing-name");
    }

    #[test]
    fn tick_advances_notification_lifecycles() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::CatalogRequested));

        let much_later = Instant::now() + FEEDBACK_TOAST_DURATION + Duration::from_secs(1);
        let _ = app.update(Message::Tick(much_later));
        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.phase(), Phase::Dismissing);
    }
}
