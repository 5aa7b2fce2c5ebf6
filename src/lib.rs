// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a small product-showcase desktop application built with
//! the Iced GUI framework.
//!
//! It renders the two pages of a mobile-phone retailer's storefront (home and
//! contact) and demonstrates internationalization with Fluent, user preference
//! management, a simulated form-submission round trip, and a reusable toast
//! notification system.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod prefs;
pub mod submission;
pub mod ui;
