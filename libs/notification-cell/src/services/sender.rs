// libs/notification-cell/src/services/sender.rs
use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::{EmailMessage, NotificationError};

/// Delivers one email. Implementations report failures; they never retry.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), NotificationError>;
}

/// Sends `message` and swallows any failure.
///
/// Returns whether the relay accepted the message. Errors are logged here so
/// workflows can ignore the outcome.
pub async fn deliver_best_effort(sender: &dyn NotificationSender, message: EmailMessage) -> bool {
    let to = message.to.clone();
    let subject = message.subject.clone();

    match sender.send(message).await {
        Ok(()) => {
            info!("Email '{}' sent to {}", subject, to);
            true
        }
        Err(e) => {
            warn!("Email '{}' to {} not delivered: {}", subject, to, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Sender {}

        #[async_trait]
        impl NotificationSender for Sender {
            async fn send(&self, message: EmailMessage) -> Result<(), NotificationError>;
        }
    }

    fn message() -> EmailMessage {
        EmailMessage::new("patient@example.com", "Appointment Confirmed", "<p>hi</p>")
    }

    #[tokio::test]
    async fn test_delivery_success_reports_true() {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .withf(|m| m.to == "patient@example.com")
            .times(1)
            .returning(|_| Ok(()));

        assert!(deliver_best_effort(&sender, message()).await);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_swallowed() {
        let mut sender = MockSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(NotificationError::NotConfigured));

        assert!(!deliver_best_effort(&sender, message()).await);
    }
}
