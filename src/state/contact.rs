//! Contact form validation and submission.
//!
//! DESIGN
//! ======
//! Submission is split like playback: `begin_submit` validates, takes the
//! in-flight lock and hands back the pending relay call; `finish_submit`
//! releases the lock and records the outcome. A second submit while one is
//! pending is refused with `FormError::Busy`.
//!
//! Validation order is fixed: required fields first, then the email shape.
//! Validation problems become inline status text; relay failures are logged
//! and shown as a retry hint. Result statuses fade and clear on a timeline.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::config::{RelayConfig, Timings};
use crate::net::relay::{MailRelay, RelayRequest, TemplateParams};
use crate::util::schedule::{Scheduler, Timeline, with_timeout};

pub const MISSING_FIELDS_TEXT: &str = "Please fill in all required fields";
pub const INVALID_EMAIL_TEXT: &str = "Please enter a valid email address";
pub const SENDING_TEXT: &str = "Sending message...";
pub const SENT_TEXT: &str = "Your message has been sent successfully!";
pub const FAILED_TEXT: &str = "Failed to send message. Please try again.";

/// Required form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(Field),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("relay failure: {0}")]
    RelayFailure(String),
    #[error("a message is already being sent")]
    Busy,
}

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Danger,
}

/// Inline message shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub text: String,
    pub tone: StatusTone,
    pub faded: bool,
}

impl FormStatus {
    fn new(text: &str, tone: StatusTone) -> Self {
        Self { text: text.to_owned(), tone, faded: false }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            StatusTone::Info => "alert alert-info mt-3",
            StatusTone::Success => "alert alert-success mt-3",
            StatusTone::Danger => "alert alert-danger mt-3",
        }
    }
}

/// Steps that retire a result status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTransition {
    Fade,
    Clear,
}

/// `local@domain` with a dot somewhere, no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    email.contains('.') && !email.starts_with('.') && !email.ends_with('.') && !local.ends_with('.') && !domain.starts_with('.')
}

/// Check required fields, then the email shape.
///
/// # Errors
///
/// Returns `FormError::MissingField` for the first blank required field, or
/// `FormError::InvalidEmail` when the address is malformed.
pub fn validate(fields: &ContactFields) -> Result<TemplateParams, FormError> {
    let name = fields.name.trim();
    let email = fields.email.trim();
    let message = fields.message.trim();
    for (value, field) in [(name, Field::Name), (email, Field::Email), (message, Field::Message)] {
        if value.is_empty() {
            return Err(FormError::MissingField(field));
        }
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(TemplateParams {
        from_name: name.to_owned(),
        from_email: email.to_owned(),
        subject: fields.subject.trim().to_owned(),
        message: message.to_owned(),
    })
}

/// A relay call in flight.
pub struct PendingSend {
    pub outcome: LocalBoxFuture<'static, Result<(), String>>,
}

impl PendingSend {
    /// Await the relay, treating no answer within `timeout_ms` as a failure.
    pub async fn settle(self, scheduler: &dyn Scheduler, timeout_ms: u32) -> Result<(), String> {
        match with_timeout(scheduler, timeout_ms, self.outcome).await {
            Ok(outcome) => outcome,
            Err(elapsed) => Err(elapsed.to_string()),
        }
    }
}

pub struct ContactForm {
    relay: Rc<dyn MailRelay>,
    relay_config: RelayConfig,
    fields: ContactFields,
    status: Option<FormStatus>,
    status_generation: u64,
    in_flight: bool,
}

impl ContactForm {
    pub fn new(relay: Rc<dyn MailRelay>, relay_config: RelayConfig) -> Self {
        Self {
            relay,
            relay_config,
            fields: ContactFields::default(),
            status: None,
            status_generation: 0,
            in_flight: false,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    #[must_use]
    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    /// Changes whenever a new status is shown; timelines carry it so a stale
    /// fade never hides a newer message.
    #[must_use]
    pub fn status_generation(&self) -> u64 {
        self.status_generation
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validate and start relaying the message.
    ///
    /// # Errors
    ///
    /// `Busy` while a previous message is pending (status untouched);
    /// `MissingField` / `InvalidEmail` with the matching inline status, in
    /// which case the relay is not called.
    pub fn begin_submit(&mut self) -> Result<PendingSend, FormError> {
        if self.in_flight {
            log::debug!("contact submit ignored: message already in flight");
            return Err(FormError::Busy);
        }
        let params = match validate(&self.fields) {
            Ok(params) => params,
            Err(e) => {
                let text = if e == FormError::InvalidEmail { INVALID_EMAIL_TEXT } else { MISSING_FIELDS_TEXT };
                self.show(FormStatus::new(text, StatusTone::Danger));
                return Err(e);
            }
        };

        self.in_flight = true;
        self.show(FormStatus::new(SENDING_TEXT, StatusTone::Info));
        let request = RelayRequest {
            service_id: self.relay_config.service_id.clone(),
            template_id: self.relay_config.template_id.clone(),
            auth_token: self.relay_config.public_key.clone(),
            fields: params,
        };
        Ok(PendingSend { outcome: self.relay.send(request) })
    }

    /// Record the relay outcome and release the lock. On success the form is
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns `FormError::RelayFailure` when the relay refused the message
    /// or timed out.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) -> Result<(), FormError> {
        self.in_flight = false;
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.show(FormStatus::new(SENT_TEXT, StatusTone::Success));
                Ok(())
            }
            Err(reason) => {
                log::error!("mail relay error: {reason}");
                self.show(FormStatus::new(FAILED_TEXT, StatusTone::Danger));
                Err(FormError::RelayFailure(reason))
            }
        }
    }

    /// Fade the result status after `status_visible_ms`, then clear it.
    #[must_use]
    pub fn status_timeline(timings: &Timings) -> Timeline<StatusTransition> {
        Timeline::new()
            .then(timings.status_visible_ms, StatusTransition::Fade)
            .then(timings.status_fade_ms, StatusTransition::Clear)
    }

    /// Apply a status transition started when the status generation was
    /// `generation`. Ignored if a newer status has been shown since.
    pub fn apply_status_transition(&mut self, generation: u64, transition: StatusTransition) {
        if generation != self.status_generation {
            return;
        }
        match transition {
            StatusTransition::Fade => {
                if let Some(status) = self.status.as_mut() {
                    status.faded = true;
                }
            }
            StatusTransition::Clear => self.status = None,
        }
    }

    fn show(&mut self, status: FormStatus) {
        self.status_generation += 1;
        self.status = Some(status);
    }
}
