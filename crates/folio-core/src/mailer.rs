//! Outbound delivery of contact messages.
//!
//! The site has no backend, so the shipped mailer only waits. A real
//! deployment swaps in an implementation that talks to a mail API.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::SendError;
use crate::form::ContactMessage;

/// Delivers a contact message somewhere.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError>;
}

/// Waits for a fixed delay and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedMailer {
    delay: Duration,
}

impl SimulatedMailer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl Mailer for SimulatedMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        tracing::debug!(from = %message.email, delay_ms = self.delay.as_millis() as u64, "simulating send");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Waits like [`SimulatedMailer`] and then rejects every message.
#[derive(Debug, Clone)]
pub struct FailingMailer {
    delay: Duration,
}

impl FailingMailer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), SendError> {
        tracing::debug!(from = %message.email, "rejecting send");
        tokio::time::sleep(self.delay).await;
        Err(SendError::Rejected("delivery disabled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_mailer_waits_then_succeeds() {
        let mailer = SimulatedMailer::default();
        let start = tokio::time::Instant::now();
        assert_eq!(mailer.send(&message()).await, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_mailer_rejects() {
        let mailer = FailingMailer::new(Duration::from_millis(10));
        assert!(matches!(
            mailer.send(&message()).await,
            Err(SendError::Rejected(_))
        ));
    }

    #[test]
    fn test_mailers_are_object_safe() {
        let mailers: Vec<Box<dyn Mailer>> = vec![
            Box::new(SimulatedMailer::new(Duration::ZERO)),
            Box::new(FailingMailer::new(Duration::ZERO)),
        ];
        for m in &mailers {
            tokio_test::block_on(async {
                let _ = m.send(&message()).await;
            });
        }
    }
}
