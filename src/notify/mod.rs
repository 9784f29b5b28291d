//! Notifier trait definition and shared error types.

mod dry_run;
pub mod smtp;

pub use dry_run::DryRunNotifier;
pub use smtp::SmtpNotifier;

/// Errors that can occur during notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not build message: {0}")]
    Message(String),

    #[error("SMTP delivery failed: {0}")]
    Smtp(String),
}

/// Confirmation returned by a notifier after a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub channel: String,
    pub recipients: usize,
}

/// A delivery channel for plain-text reminders.
///
/// Implementations send one message to one fixed recipient and report failure
/// through [`NotifyError`] instead of panicking.
pub trait Notifier {
    fn send(&self, subject: &str, body: &str) -> Result<Ack, NotifyError>;

    /// Short name used in logs.
    fn channel_name(&self) -> &str;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn send(&self, subject: &str, body: &str) -> Result<Ack, NotifyError> {
        (**self).send(subject, body)
    }

    fn channel_name(&self) -> &str {
        (**self).channel_name()
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn send(&self, subject: &str, body: &str) -> Result<Ack, NotifyError> {
        (**self).send(subject, body)
    }

    fn channel_name(&self) -> &str {
        (**self).channel_name()
    }
}
