//! Contact form with a simulated submission.
//!
//! Nothing is sent anywhere: a valid submission is logged, the form is
//! cleared, and a success notice is shown until it times out or is dismissed.
//! Time is passed in by the caller so the notice can be driven by any clock.

use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// `local@domain`, both parts non-empty, no whitespace, a single `@`.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Contact section state: the form being edited and the success notice.
#[derive(Debug, Clone)]
pub struct ContactSection {
    pub form: ContactForm,
    notice_duration: Duration,
    notice_shown_at: Option<Instant>,
}

impl ContactSection {
    pub fn new(notice_duration: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            notice_duration,
            notice_shown_at: None,
        }
    }

    /// Validate and "send" the form. On success the form is cleared and the
    /// notice is shown from `now`.
    pub fn submit(&mut self, now: Instant) -> Result<ContactForm, ContactError> {
        self.form.validate()?;
        let sent = std::mem::take(&mut self.form);
        tracing::info!(name = %sent.name, email = %sent.email, "contact form submitted");
        self.notice_shown_at = Some(now);
        Ok(sent)
    }

    pub fn dismiss(&mut self) {
        self.notice_shown_at = None;
    }

    pub fn notice_visible(&self, now: Instant) -> bool {
        self.notice_shown_at
            .is_some_and(|shown| now.saturating_duration_since(shown) < self.notice_duration)
    }
}
