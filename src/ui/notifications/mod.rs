// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (submission success, errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels and
//!   the `Showing → Dismissing → removed` lifecycle
//! - [`manager`] - `Manager` for queuing, dismissal, and timer handling
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! // One manager per application root, owned by the app state.
//! let mut manager = Manager::new();
//!
//! // Push a notification; the returned id doubles as a dismissal handle.
//! let id = manager.push(Notification::success("toast-submit-success"));
//!
//! // Drive deferred work from the tick subscription.
//! manager.tick(std::time::Instant::now());
//!
//! // In the view function, render the overlay above the page content.
//! let overlay = Toast::view_overlay(&manager, &i18n, now).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s by default, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: top-right corner
//! - Dismissal is idempotent; a toast can never be removed twice

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{AutoDismiss, Notification, NotificationId, Phase, Severity};
pub use toast::Toast;
