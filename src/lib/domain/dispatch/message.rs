//! Outgoing email message

use std::fmt;

use super::email_address::EmailAddress;

/// Delivery priority hint forwarded to the transport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Priority {
    /// Deliver ahead of normal traffic
    High,

    /// Default priority
    #[default]
    Normal,

    /// Deliver behind normal traffic
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Normal => write!(f, "normal"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A fully-addressed email message, ready for a [`Mailer`] transport.
///
/// [`Mailer`]: super::Mailer
#[derive(Clone, Debug)]
pub struct OutgoingEmail {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The sender of the email, injected by the gateway from process-wide
    /// configuration
    pub from: Option<EmailAddress>,

    /// The reply-to address
    pub reply_to: Option<EmailAddress>,

    /// Delivery priority hint
    pub priority: Priority,

    /// The subject of the email
    pub subject: String,

    /// The HTML body of the email
    pub html_body: String,

    /// The plain text body of the email
    pub plain_body: String,
}
