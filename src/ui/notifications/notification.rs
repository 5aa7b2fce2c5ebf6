// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures and lifecycle state machine.
//!
//! A notification moves through `Showing → Dismissing → removed`, where
//! "removed" means it has left the [`Manager`](super::Manager) entirely and
//! has no further identity. The transition into `Dismissing` happens exactly
//! once per notification, whether triggered by the user or by the auto-dismiss
//! deadline, and removal is gated on the exit transition completing.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Default delay before a toast dismisses itself.
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_secs(3);

/// Duration of the fade-in entry transition.
pub const ENTER_TRANSITION: Duration = Duration::from_millis(300);

/// Duration of the fade-out exit transition. A dismissing notification stays
/// attached until this much time has passed since the dismissal began.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
///
/// Doubles as the handle call sites keep to dismiss a toast early or cancel
/// its pending auto-dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level; selects visual styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Error requiring attention (red, manual dismiss by default).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the default auto-dismiss behavior for this severity.
    #[must_use]
    pub fn default_auto_dismiss(&self) -> AutoDismiss {
        match self {
            Severity::Success | Severity::Info => AutoDismiss::After(DEFAULT_AUTO_DISMISS),
            Severity::Error => AutoDismiss::Never,
        }
    }
}

/// Controls automatic dismissal of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
    /// Notification remains visible until manually dismissed.
    Never,

    /// Notification starts dismissing after the specified delay.
    After(Duration),
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self::After(DEFAULT_AUTO_DISMISS)
    }
}

/// Lifecycle stage of an attached notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Attached and visible; the entry transition plays at the start.
    #[default]
    Showing,
    /// Exit transition in progress; dismissal is final once entered.
    Dismissing,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    /// When this notification became (or will count as) visible.
    shown_at: Instant,
    auto_dismiss: AutoDismiss,
    phase: Phase,
    /// When the exit transition started; `Some` exactly in `Dismissing`.
    dismissing_since: Option<Instant>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The auto-dismiss delay defaults per severity: 3 s for success and
    /// info, manual dismiss for errors.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: Instant::now(),
            auto_dismiss: severity.default_auto_dismiss(),
            phase: Phase::Showing,
            dismissing_since: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Sets the auto-dismiss delay, overriding the severity default.
    ///
    /// A zero duration means the notification persists until the user
    /// dismisses it.
    #[must_use]
    pub fn auto_dismiss_after(mut self, delay: Duration) -> Self {
        self.auto_dismiss = if delay.is_zero() {
            AutoDismiss::Never
        } else {
            AutoDismiss::After(delay)
        };
        self
    }

    /// Keeps the notification on screen until manually dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.auto_dismiss = AutoDismiss::Never;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns the current lifecycle stage.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rendering opacity at `now`, driven by the entry/exit transitions.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Showing => ease_out_cubic(progress(self.shown_at, now, ENTER_TRANSITION)),
            Phase::Dismissing => {
                let since = self.dismissing_since.unwrap_or(now);
                1.0 - ease_out_cubic(progress(since, now, EXIT_TRANSITION))
            }
        }
    }

    /// Starts the exit transition. Returns `false` when already dismissing,
    /// making repeated dismissals a no-op.
    pub(super) fn begin_dismiss(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Dismissing {
            return false;
        }
        self.phase = Phase::Dismissing;
        self.dismissing_since = Some(now);
        true
    }

    /// Whether the exit transition has completed and the notification can be
    /// detached.
    pub(super) fn exit_complete(&self, now: Instant) -> bool {
        match self.dismissing_since {
            Some(since) => now.duration_since(since) >= EXIT_TRANSITION,
            None => false,
        }
    }

    /// Whether the auto-dismiss deadline has passed. Only ever true while
    /// `Showing`, so a stale deadline after a manual dismissal is inert.
    pub(super) fn auto_dismiss_due(&self, now: Instant) -> bool {
        if self.phase != Phase::Showing {
            return false;
        }
        match self.auto_dismiss {
            AutoDismiss::Never => false,
            AutoDismiss::After(delay) => now.duration_since(self.shown_at) >= delay,
        }
    }

    /// Invalidates a pending auto-dismiss.
    pub(super) fn clear_auto_dismiss(&mut self) {
        self.auto_dismiss = AutoDismiss::Never;
    }

    /// Restarts the visibility clock; used when a queued notification is
    /// promoted so time spent waiting does not count against its deadline.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at = now;
    }
}

fn progress(start: Instant, now: Instant, duration: Duration) -> f32 {
    let elapsed = now.duration_since(start).as_secs_f32();
    (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
