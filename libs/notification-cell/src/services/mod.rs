pub mod html;
pub mod sender;
pub mod smtp;

pub use html::escape_html;
pub use sender::{deliver_best_effort, NotificationSender};
pub use smtp::SmtpNotificationSender;
