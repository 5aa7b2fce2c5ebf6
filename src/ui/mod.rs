// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Marketing pitch with feature cards and the call-to-action
//! - [`contact`] - Contact channels and the contact form
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (cards, buttons, panels)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with page links and theme toggle
//! - [`footer`] - Copyright footer
//! - [`notifications`] - Toast notification system for user feedback

pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
