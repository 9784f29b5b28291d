use super::{Ack, Notifier, NotifyError};
use crate::ui::messages::header;

/// Prints the message instead of sending it.
#[derive(Debug, Default)]
pub struct DryRunNotifier;

impl Notifier for DryRunNotifier {
    fn send(&self, subject: &str, body: &str) -> Result<Ack, NotifyError> {
        header(format!("[dry-run] {subject}"));
        println!("{body}\n");

        tracing::info!(channel = "dry-run", subject, "notification printed");

        Ok(Ack {
            channel: self.channel_name().to_string(),
            recipients: 0,
        })
    }

    fn channel_name(&self) -> &str {
        "dry-run"
    }
}
