// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Email delivery of the daily summary
//!
//! Delivery is best effort: [`notify`] logs the outcome and reports it as a
//! boolean, so a mail failure never stops the run.

use lettre::address::AddressError;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, error, info};

use crate::config::MailSettings;

/// A plain-text email ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl Email {
    /// Create a new email
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Something that can deliver an [`Email`]
pub trait Mailer {
    /// Deliver `email` to the configured recipient
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the email cannot be built or delivered.
    fn send(&self, email: &Email) -> Result<(), MailError>;
}

impl<T: Mailer + ?Sized> Mailer for &T {
    fn send(&self, email: &Email) -> Result<(), MailError> {
        (**self).send(email)
    }
}

/// SMTP delivery over a STARTTLS relay with username/password login
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    settings: MailSettings,
}

impl SmtpMailer {
    /// Create a mailer from mail settings
    ///
    /// Missing credentials are only reported when sending.
    #[must_use]
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    /// Get the mail settings
    pub fn settings(&self) -> &MailSettings {
        &self.settings
    }

    fn message(&self, email: &Email) -> Result<Message, MailError> {
        let sender = required(self.settings.sender.as_deref(), "SENDER_EMAIL")?;
        let recipient = required(self.settings.recipient.as_deref(), "SLACK_EMAIL")?;

        Message::builder()
            .from(mailbox(sender)?)
            .to(mailbox(recipient)?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(MailError::Message)
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = self.message(email)?;
        let sender = required(self.settings.sender.as_deref(), "SENDER_EMAIL")?;
        let password = required(self.settings.password.as_deref(), "SENDER_PASSWORD")?;

        debug!(
            host = %self.settings.host,
            port = self.settings.port,
            "Connecting to SMTP relay"
        );
        let transport = SmtpTransport::starttls_relay(&self.settings.host)?
            .port(self.settings.port)
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();

        transport.send(&message)?;
        Ok(())
    }
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, MailError> {
    value.ok_or(MailError::MissingSetting(key))
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

/// Send `email`, logging the outcome
///
/// Returns `true` if the email was delivered. Failures are logged and never
/// propagated.
pub fn notify<M: Mailer>(mailer: &M, email: &Email) -> bool {
    match mailer.send(email) {
        Ok(()) => {
            info!(subject = %email.subject, "Email sent successfully");
            true
        }
        Err(e) => {
            error!(error = %e, "Error sending email");
            false
        }
    }
}

/// Errors building or delivering an email
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A required mail setting is absent
    #[error("Missing mail setting: {0}")]
    MissingSetting(&'static str),

    /// An address could not be parsed
    #[error("Invalid email address '{address}': {source}")]
    Address {
        /// Rejected address
        address: String,
        /// Parse error
        #[source]
        source: AddressError,
    },

    /// The message could not be built
    #[error("Failed to build message: {0}")]
    Message(#[source] lettre::error::Error),

    /// Connecting, authenticating or sending failed
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
