//! SMTP email notifier via `lettre`.
//!
//! Delivers the reminder as a single plain-text email to one recipient.
//! Port 465 uses implicit TLS, other ports use STARTTLS unless TLS is disabled.

use super::{Ack, Notifier, NotifyError};
use crate::config::Config;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the SMTP password (never stored in the config file).
pub const PASSWORD_ENV: &str = "GEARMINDER_SMTP_PASSWORD";

/// Sends reminders as emails via SMTP.
pub struct SmtpNotifier {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("from", &self.from.email)
            .field("to", &self.to.email)
            .finish_non_exhaustive()
    }
}

impl SmtpNotifier {
    /// Build a notifier from explicit settings.
    ///
    /// - `port`: 465 selects implicit TLS.
    /// - `tls`: `false` disables encryption entirely (local relays only).
    /// - `credentials`: `(username, password)`; `None` connects unauthenticated.
    pub fn new(
        host: &str,
        port: u16,
        tls: bool,
        timeout: Duration,
        from: &str,
        to: &str,
        credentials: Option<(String, String)>,
    ) -> Result<Self, NotifyError> {
        let from: Mailbox = from
            .parse()
            .map_err(|e: lettre::address::AddressError| {
                NotifyError::Config(format!("invalid sender '{from}': {e}"))
            })?;

        let to: Mailbox = to.parse().map_err(|e: lettre::address::AddressError| {
            NotifyError::Config(format!("invalid recipient '{to}': {e}"))
        })?;

        if host.trim().is_empty() {
            return Err(NotifyError::Config("SMTP host is empty".to_string()));
        }

        let mut builder = if !tls {
            SmtpTransport::builder_dangerous(host)
        } else if port == 465 {
            SmtpTransport::relay(host).map_err(|e| NotifyError::Config(e.to_string()))?
        } else {
            SmtpTransport::starttls_relay(host).map_err(|e| NotifyError::Config(e.to_string()))?
        };

        builder = builder.port(port).timeout(Some(timeout));

        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            to,
        })
    }

    /// Build a notifier from the loaded configuration.
    ///
    /// Sender and recipient are mandatory. The password comes from
    /// `GEARMINDER_SMTP_PASSWORD`; the username defaults to the sender address.
    pub fn from_config(cfg: &Config) -> Result<Self, NotifyError> {
        let from = cfg
            .email_from
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| NotifyError::Config("sender address (email_from) is not set".into()))?;

        let to = cfg
            .email_to
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| NotifyError::Config("recipient address (email_to) is not set".into()))?;

        let credentials = std::env::var(PASSWORD_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(|password| {
                let username = cfg
                    .smtp_username
                    .clone()
                    .unwrap_or_else(|| from.to_string());
                (username, password)
            });

        if credentials.is_none() {
            tracing::debug!("{PASSWORD_ENV} not set, connecting without authentication");
        }

        Self::new(
            &cfg.smtp_host,
            cfg.smtp_port,
            cfg.smtp_tls,
            Duration::from_secs(cfg.smtp_timeout_secs),
            from,
            to,
            credentials,
        )
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, subject: &str, body: &str) -> Result<Ack, NotifyError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError::Message(e.to_string()))?;

        self.transport
            .send(&email)
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;

        tracing::info!(
            channel = "email",
            subject,
            recipient = %self.to.email,
            "notification delivered"
        );

        Ok(Ack {
            channel: self.channel_name().to_string(),
            recipients: 1,
        })
    }

    fn channel_name(&self) -> &str {
        "email"
    }
}
