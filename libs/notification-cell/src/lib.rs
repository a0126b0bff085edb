// libs/notification-cell/src/lib.rs
//! # Notification Cell
//!
//! Transactional email delivery over an authenticated SMTP relay.
//!
//! ```text
//! +-----------------------------------------------------+
//! |                Notification Cell                    |
//! +-----------------------------------------------------+
//! |  models.rs      |  EmailMessage & NotificationError |
//! |  services/      |                                   |
//! |    sender.rs    |  NotificationSender trait,        |
//! |                 |  best-effort delivery             |
//! |    smtp.rs      |  STARTTLS relay implementation    |
//! |    html.rs      |  escaping for interpolated text   |
//! +-----------------------------------------------------+
//! ```
//!
//! Callers that must not fail because of email go through
//! [`deliver_best_effort`], which logs the error and reports `false`.
//!
//! ## Configuration
//!
//! - `EMAIL_HOST` / `EMAIL_PORT` - relay address (defaults `smtp.gmail.com:587`)
//! - `EMAIL_USER` / `EMAIL_PASSWORD` - relay credentials; the user is also the sender address

pub mod models;
pub mod services;

pub use models::{EmailMessage, NotificationError};
pub use services::{deliver_best_effort, escape_html, NotificationSender, SmtpNotificationSender};
