//! Error types for the dispatch module

use lettre::{address::AddressError, error::Error as LettreError, transport::smtp};
use thiserror::Error;

use super::email_address::EmailAddressError;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// One or more required transport settings are absent or blank
    #[error("missing environment variables for mail: {}", .0.join(", "))]
    MissingConfiguration(Vec<String>),

    /// A recipient, sender or reply-to address failed validation
    #[error("invalid email address")]
    InvalidAddress,

    /// The transport rejected or failed to deliver the message
    #[error("an error occurred while sending the email")]
    SendError,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<EmailAddressError> for MailerError {
    fn from(_err: EmailAddressError) -> Self {
        MailerError::InvalidAddress
    }
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidAddress
    }
}

impl From<LettreError> for MailerError {
    fn from(err: LettreError) -> Self {
        MailerError::UnknownError(err.into())
    }
}

impl From<smtp::Error> for MailerError {
    fn from(err: smtp::Error) -> Self {
        MailerError::UnknownError(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_names_all_values() {
        let error = MailerError::MissingConfiguration(vec![
            "MAIL_HOST".to_string(),
            "MAIL_USER".to_string(),
            "MAIL_PASSWORD".to_string(),
        ]);

        assert_eq!(
            error.to_string(),
            "missing environment variables for mail: MAIL_HOST, MAIL_USER, MAIL_PASSWORD"
        );
    }
}
