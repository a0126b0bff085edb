// libs/notification-cell/src/services/smtp.rs
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use shared_config::AppConfig;

use crate::models::{EmailMessage, NotificationError};
use crate::services::sender::NotificationSender;

/// SMTP relay client. Opens a fresh STARTTLS connection for every message.
#[derive(Clone)]
pub struct SmtpNotificationSender {
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl SmtpNotificationSender {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            host: config.email_host.clone(),
            port: config.email_port,
            username: config.email_user.clone(),
            password: config.email_password.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }

    fn build_message(&self, message: EmailMessage) -> Result<Message, NotificationError> {
        let from: Mailbox = self.username.parse()?;
        let to: Mailbox = message.to.parse()?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject)
            .header(ContentType::TEXT_HTML)
            .body(message.html_body)?;

        Ok(email)
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send(&self, message: EmailMessage) -> Result<(), NotificationError> {
        if !self.is_configured() {
            return Err(NotificationError::NotConfigured);
        }

        let email = self.build_message(message)?;

        debug!("Connecting to mail relay {}:{}", self.host, self.port);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(self.username.clone(), self.password.clone()))
            .build();

        transport.send(email).await?;
        Ok(())
    }
}
