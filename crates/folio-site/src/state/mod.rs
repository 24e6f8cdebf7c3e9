//! Application state shared across sections.

mod contact;
mod options;

pub use contact::{submit_contact, FormCell};
pub use options::{set_site_options, site_options, SiteOptions};

use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{Mailer, RevealPolicy, SiteConfig};

/// Wrapper around `Arc<dyn Mailer>` that implements `PartialEq` via pointer
/// equality, so it can live in a signal or be passed as a prop.
#[derive(Clone)]
pub struct MailerArc(pub Arc<dyn Mailer>);

impl PartialEq for MailerArc {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Site-wide context provided by [`App`](crate::components::App).
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: Signal<SiteConfig>,
    pub reveal_policy: Signal<RevealPolicy>,
    pub mailer: Signal<MailerArc>,
}

impl SiteContext {
    pub fn new(options: &SiteOptions) -> Self {
        Self {
            config: Signal::new(options.config.clone()),
            reveal_policy: Signal::new(options.reveal_policy()),
            mailer: Signal::new(MailerArc(options.mailer())),
        }
    }

    /// Mailer handle for a background send.
    pub fn mailer(&self) -> Arc<dyn Mailer> {
        self.mailer.read().0.clone()
    }

    pub fn policy(&self) -> RevealPolicy {
        *self.reveal_policy.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SimulatedMailer;

    #[test]
    fn test_mailer_arc_pointer_equality() {
        let a: Arc<dyn Mailer> = Arc::new(SimulatedMailer::default());
        let b: Arc<dyn Mailer> = Arc::new(SimulatedMailer::default());
        assert!(MailerArc(a.clone()) == MailerArc(a.clone()));
        assert!(MailerArc(a) != MailerArc(b));
    }
}
