//! Contact form draft and submission state machine.
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting ──complete(Ok)──▶ Success
//!  ▲                          └──────complete(Err)──▶ Error
//!  └──────────────dismiss────────────────────────────┘
//! ```

use std::fmt;

use crate::error::{FormError, SendError};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

/// A form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Message]
    }

    /// The input's `name`/`id` attribute.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-progress form contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Same checks the webview applies to `required` and `type=email` inputs.
    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::all().iter().find(|f| self.get(**f).is_empty()) {
            return Err(FormError::MissingField(*field));
        }
        if !looks_like_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local@domain` with no whitespace and a non-empty part on each side.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

/// Snapshot of a draft handed to the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&FormDraft> for ContactMessage {
    fn from(draft: &FormDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
        }
    }
}

/// Submission status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Rendered state of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

/// The contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    draft: FormDraft,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Edit one field. Ignored while a submission is in flight.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        if self.status == FormStatus::Submitting {
            return;
        }
        *self.draft.get_mut(field) = value.into();
    }

    /// Validate and move to `Submitting`, returning the message to send.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.status != FormStatus::Idle {
            return Err(FormError::NotIdle(self.status));
        }
        self.draft.validate()?;
        self.status = FormStatus::Submitting;
        tracing::info!("contact form submitting");
        Ok(ContactMessage::from(&self.draft))
    }

    /// Record the outcome of the send operation.
    pub fn complete(&mut self, result: Result<(), SendError>) {
        if self.status != FormStatus::Submitting {
            tracing::warn!(status = ?self.status, "ignoring completion outside submission");
            return;
        }
        match result {
            Ok(()) => {
                self.draft = FormDraft::default();
                self.status = FormStatus::Success;
                tracing::info!("contact message sent");
            }
            Err(e) => {
                self.status = FormStatus::Error;
                tracing::warn!(error = %e, "contact message failed");
            }
        }
    }

    /// Close the success or error message and return to `Idle`.
    pub fn dismiss(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.status == FormStatus::Submitting {
            SubmitButton {
                label: BUSY_LABEL,
                disabled: true,
            }
        } else {
            SubmitButton {
                label: SUBMIT_LABEL,
                disabled: false,
            }
        }
    }

    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Success => Some(SUCCESS_MESSAGE),
            FormStatus::Error => Some(ERROR_MESSAGE),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(Field::Name, "Ada");
        form.update(Field::Email, "a@x.com");
        form.update(Field::Message, "hi");
        form
    }

    #[test]
    fn test_update_is_field_wise() {
        let mut form = ContactForm::new();
        form.update(Field::Email, "a@x.com");
        assert_eq!(form.draft().email, "a@x.com");
        assert!(form.draft().name.is_empty());
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        for missing in Field::all() {
            let mut form = filled();
            form.update(*missing, "");
            assert_eq!(form.begin_submit(), Err(FormError::MissingField(*missing)));
            assert_eq!(form.status(), FormStatus::Idle);
        }
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        for bad in ["ada", "@x.com", "a@", "a b@x.com", "a@b@c"] {
            let mut form = filled();
            form.update(Field::Email, bad);
            assert_eq!(form.begin_submit(), Err(FormError::InvalidEmail), "{bad}");
            assert_eq!(form.status(), FormStatus::Idle);
        }
    }

    #[test]
    fn test_submitting_disables_button() {
        let mut form = filled();
        assert_eq!(form.submit_button().label, SUBMIT_LABEL);
        let msg = form.begin_submit().unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(
            form.submit_button(),
            SubmitButton {
                label: "Sending...",
                disabled: true
            }
        );
        assert_eq!(form.begin_submit(), Err(FormError::NotIdle(FormStatus::Submitting)));
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.update(Field::Name, "Grace");
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn test_success_clears_draft() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Ok(()));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.draft(), &FormDraft::default());
        assert_eq!(form.status_message(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled();
        let before = form.draft().clone();
        form.begin_submit().unwrap();
        form.complete(Err(SendError::Unavailable));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.draft(), &before);
        assert_eq!(form.status_message(), Some(ERROR_MESSAGE));
    }

    #[test]
    fn test_complete_outside_submission_is_ignored() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn test_terminal_states_wait_for_dismiss() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Err(SendError::Unavailable));
        assert!(form.begin_submit().is_err());

        form.dismiss();
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.begin_submit().is_ok());

        // Dismiss does nothing mid-flight.
        form.dismiss();
        assert_eq!(form.status(), FormStatus::Submitting);
    }
}
