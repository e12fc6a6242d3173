//! Mailer transport trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use super::{errors::MailerError, message::OutgoingEmail};

/// An email transport.
///
/// Implementations are constructed explicitly and injected into the
/// [`DispatchGateway`], which keeps the transport swappable for test doubles
/// and allows multiple configurations per process.
///
/// [`DispatchGateway`]: super::DispatchGateway
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `email` - The fully-addressed [`OutgoingEmail`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError>;
    }
}
