//! Launch options handed from `main` to the root component.

use std::sync::{Arc, OnceLock};

use folio_core::{FailingMailer, Mailer, RevealPolicy, SimulatedMailer, SiteConfig};

/// Settings resolved from the config file and command line.
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    pub config: SiteConfig,
    /// Route the contact form through a mailer that always fails.
    pub fail_submissions: bool,
}

impl SiteOptions {
    pub fn mailer(&self) -> Arc<dyn Mailer> {
        let delay = self.config.submit_delay();
        if self.fail_submissions {
            Arc::new(FailingMailer::new(delay))
        } else {
            Arc::new(SimulatedMailer::new(delay))
        }
    }

    /// Section reveal policy, falling back to the default margin when the
    /// configured one does not parse.
    pub fn reveal_policy(&self) -> RevealPolicy {
        self.config.reveal_policy().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid reveal margin, using default");
            RevealPolicy::default()
        })
    }
}

static OPTIONS: OnceLock<SiteOptions> = OnceLock::new();

/// Store the launch options. Only the first call has any effect.
pub fn set_site_options(options: SiteOptions) {
    if OPTIONS.set(options).is_err() {
        tracing::warn!("site options already set, ignoring");
    }
}

/// Launch options, or defaults if `main` never set them.
pub fn site_options() -> &'static SiteOptions {
    OPTIONS.get_or_init(SiteOptions::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ContactMessage, SendError};

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_bad_margin_falls_back_to_default_policy() {
        let options = SiteOptions {
            config: SiteConfig {
                reveal_margin: "lots".into(),
                ..SiteConfig::default()
            },
            fail_submissions: false,
        };
        assert_eq!(options.reveal_policy(), RevealPolicy::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mailer_follows_fail_flag() {
        let mut options = SiteOptions::default();
        assert!(options.mailer().send(&message()).await.is_ok());

        options.fail_submissions = true;
        assert!(matches!(
            options.mailer().send(&message()).await,
            Err(SendError::Rejected(_))
        ));
    }
}
