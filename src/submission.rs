// SPDX-License-Identifier: MPL-2.0
//! Simulated contact form submission.
//!
//! There is no real transport. Sending waits a fixed latency and fails a
//! small fraction of the time, so both feedback paths of the contact form
//! stay exercised.

use crate::error::SubmitError;
use std::time::Duration;
use tracing::debug;

/// Simulated network round-trip time.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Fraction of submissions that fail with a transient error.
pub const FAILURE_RATE: f64 = 0.1;

/// One contact form payload, ready to send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A field the user must fix before the form can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
}

impl FieldError {
    /// Returns the i18n message key for this validation failure.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FieldError::MissingName => "form-error-missing-name",
            FieldError::MissingEmail => "form-error-missing-email",
            FieldError::InvalidEmail => "form-error-invalid-email",
            FieldError::MissingMessage => "form-error-missing-message",
        }
    }
}

impl ContactSubmission {
    /// Returns a copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Checks that every field is filled and the email looks plausible.
    ///
    /// The email check is deliberately shallow (non-empty local and host
    /// parts around a single `@`); real validation belongs to a server this
    /// application does not have.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.is_empty() {
            return Err(FieldError::MissingName);
        }
        if self.email.is_empty() {
            return Err(FieldError::MissingEmail);
        }
        match self.email.split_once('@') {
            Some((local, host)) if !local.is_empty() && !host.is_empty() => {}
            _ => return Err(FieldError::InvalidEmail),
        }
        if self.message.is_empty() {
            return Err(FieldError::MissingMessage);
        }
        Ok(())
    }
}

/// Sends a submission over the simulated transport.
///
/// Resolves after [`SIMULATED_LATENCY`]; roughly one in ten sends fails with
/// [`SubmitError::Transient`].
pub async fn send(submission: ContactSubmission) -> Result<(), SubmitError> {
    let submission = submission.trimmed();
    debug!(
        name = %submission.name,
        email = %submission.email,
        "submitting contact form"
    );

    tokio::time::sleep(SIMULATED_LATENCY).await;

    outcome(rand::random::<f64>())
}

/// Maps a uniform roll in `[0, 1)` to the simulated outcome.
fn outcome(roll: f64) -> Result<(), SubmitError> {
    if roll < FAILURE_RATE {
        Err(SubmitError::Transient)
    } else {
        Ok(())
    }
}
