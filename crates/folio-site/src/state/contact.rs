use std::cell::RefCell;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{ContactForm, Mailer};

/// Somewhere a [`ContactForm`] lives between the steps of a submission.
pub trait FormCell {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormCell for Signal<ContactForm> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut self.write())
    }
}

impl FormCell for &RefCell<ContactForm> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Run one contact submission against `mailer`.
///
/// A lingering success or error message is cleared first. Validation
/// failures and submissions while a send is in flight leave the form
/// untouched.
pub async fn submit_contact(mut form: impl FormCell, mailer: Arc<dyn Mailer>) {
    let started = form.with_form(|form| {
        form.dismiss();
        form.begin_submit()
    });
    let message = match started {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(error = %e, "contact submission blocked");
            return;
        }
    };

    tracing::debug!(from = %message.email, "dispatching contact message");
    let result = mailer.send(&message).await;
    form.with_form(|form| form.complete(result));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_core::{FailingMailer, Field, FormDraft, FormStatus, SimulatedMailer};
    use tokio::time::sleep;

    use super::*;

    fn filled() -> RefCell<ContactForm> {
        let mut form = ContactForm::new();
        form.update(Field::Name, "Ada");
        form.update(Field::Email, "ada@example.com");
        form.update(Field::Message, "Hello");
        RefCell::new(form)
    }

    /// Submit while checking the form halfway through the send.
    async fn submit_and_peek(form: &RefCell<ContactForm>, mailer: Arc<dyn Mailer>) -> FormStatus {
        let peek = async {
            sleep(Duration::from_millis(500)).await;
            form.borrow().status()
        };
        let ((), during) = tokio::join!(submit_contact(form, mailer), peek);
        during
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_success_clears_draft() {
        let form = filled();
        let mailer = Arc::new(SimulatedMailer::new(Duration::from_secs(1)));

        let during = submit_and_peek(&form, mailer).await;

        assert_eq!(during, FormStatus::Submitting);
        let form = form.borrow();
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.draft(), &FormDraft::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_from_error_without_dismiss() {
        let form = filled();
        let failing: Arc<dyn Mailer> = Arc::new(FailingMailer::new(Duration::from_secs(1)));

        submit_contact(&form, failing).await;
        assert_eq!(form.borrow().status(), FormStatus::Error);
        let kept = form.borrow().draft().clone();
        assert_eq!(kept.name, "Ada");

        // Submitting again straight from the error banner goes through.
        let mailer = Arc::new(SimulatedMailer::new(Duration::from_secs(1)));
        let during = submit_and_peek(&form, mailer).await;

        assert_eq!(during, FormStatus::Submitting);
        assert_eq!(form.borrow().status(), FormStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_draft_is_not_sent() {
        let form = RefCell::new(ContactForm::new());
        form.borrow_mut().update(Field::Name, "Ada");
        let mailer = Arc::new(SimulatedMailer::new(Duration::from_secs(1)));

        submit_contact(&form, mailer).await;

        assert_eq!(form.borrow().status(), FormStatus::Idle);
        assert_eq!(form.borrow().draft().name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_sending_is_blocked() {
        let form = filled();
        let mailer: Arc<dyn Mailer> = Arc::new(SimulatedMailer::new(Duration::from_secs(1)));

        let second = async {
            sleep(Duration::from_millis(100)).await;
            submit_contact(&form, mailer.clone()).await;
            form.borrow().status()
        };
        let ((), after_second) = tokio::join!(submit_contact(&form, mailer.clone()), second);

        assert_eq!(after_second, FormStatus::Submitting);
        assert_eq!(form.borrow().status(), FormStatus::Success);
    }
}
