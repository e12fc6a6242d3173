//! Dispatch gateway

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, error, info};

use crate::domain::mail::MailBuild;

use super::{
    email_address::EmailAddress,
    errors::MailerError,
    mailer::Mailer,
    message::{OutgoingEmail, Priority},
};

/// Addresses composed mail and hands it to an injected [`Mailer`] transport.
///
/// Sending is fire-and-forget: the transport call runs on a background task
/// and its outcome feeds log output only, unless the caller chooses to await
/// the returned [`DispatchReceipt`].
#[derive(Clone, Debug)]
pub struct DispatchGateway<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    sender: EmailAddress,
    reply_to: Option<EmailAddress>,
}

impl<M> DispatchGateway<M>
where
    M: Mailer,
{
    /// Creates a new gateway.
    ///
    /// # Arguments
    /// * `mailer` - The transport to deliver through.
    /// * `sender` - The process-wide sender address, injected into every
    ///   outgoing message.
    /// * `reply_to` - Optional reply-to override; defaults to the sender
    ///   address when absent.
    pub fn new(mailer: Arc<M>, sender: EmailAddress, reply_to: Option<EmailAddress>) -> Self {
        Self {
            mailer,
            sender,
            reply_to,
        }
    }

    /// Sends a fully specified email without blocking.
    ///
    /// The configured sender address overrides any `from` already present.
    /// Transport errors are logged and never propagate back through this
    /// call; awaiting the returned receipt is the only way to observe them.
    pub fn send(&self, mut email: OutgoingEmail) -> DispatchReceipt {
        email.from = Some(self.sender.clone());

        let mailer = Arc::clone(&self.mailer);
        let (completion, receipt) = oneshot::channel();

        tokio::spawn(async move {
            debug!(to = %email.to, subject = %email.subject, "sending email");

            let outcome = mailer.send(&email).await;

            match &outcome {
                Ok(()) => info!(to = %email.to, "email sent"),
                Err(e) => error!(error = %e, to = %email.to, "error sending email"),
            }

            // The receipt may have been dropped; that is the default
            // fire-and-forget path.
            let _ = completion.send(outcome);
        });

        DispatchReceipt { completion: receipt }
    }

    /// Sends a prebuilt [`MailBuild`] to a bare recipient address.
    ///
    /// The address is trimmed and validated before use. Reply-to falls back
    /// to the configured override or the sender address, and priority is
    /// fixed at [`Priority::Normal`].
    pub fn send_default(
        &self,
        recipient: &str,
        build: &MailBuild,
    ) -> Result<DispatchReceipt, MailerError> {
        let to = EmailAddress::new(recipient)?;

        let email = OutgoingEmail {
            to,
            from: None,
            reply_to: Some(self.reply_to.clone().unwrap_or_else(|| self.sender.clone())),
            priority: Priority::Normal,
            subject: build.subject.clone(),
            html_body: build.html.clone(),
            plain_body: build.text.clone(),
        };

        Ok(self.send(email))
    }
}

/// Completion handle for a dispatched email.
///
/// Dropping the receipt keeps the send fire-and-forget; awaiting
/// [`DispatchReceipt::outcome`] surfaces the transport result.
#[derive(Debug)]
pub struct DispatchReceipt {
    completion: oneshot::Receiver<Result<(), MailerError>>,
}

impl DispatchReceipt {
    /// Waits for the transport to report success or failure.
    pub async fn outcome(self) -> Result<(), MailerError> {
        self.completion
            .await
            .map_err(|_| MailerError::SendError)?
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::domain::{dispatch::tests::MockMailer, mail::MailBuilder};

    use super::*;

    fn gateway(mailer: MockMailer, reply_to: Option<&str>) -> DispatchGateway<MockMailer> {
        DispatchGateway::new(
            Arc::new(mailer),
            EmailAddress::new_unchecked("sender@example.com"),
            reply_to.map(EmailAddress::new_unchecked),
        )
    }

    fn outgoing(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: EmailAddress::new_unchecked(to),
            from: None,
            reply_to: None,
            priority: Priority::Normal,
            subject: "Hi".to_string(),
            html_body: "<p>Hi</p>".to_string(),
            plain_body: "Hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_injects_configured_sender() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|email| {
                email.from == Some(EmailAddress::new_unchecked("sender@example.com"))
            })
            .returning(|_| Ok(()));

        let gateway = gateway(mailer, None);

        gateway.send(outgoing("user@example.com")).outcome().await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_default_trims_recipient() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|email| email.to.to_string() == "user@example.com")
            .returning(|_| Ok(()));

        let gateway = gateway(mailer, None);
        let build = MailBuilder::new().subject("S").paragraph("P").get();

        gateway
            .send_default(" user@example.com ", &build)?
            .outcome()
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_default_fills_defaults_from_build() -> TestResult {
        let build = MailBuilder::new().subject("S").paragraph("P").get();
        let expected = build.clone();

        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(move |email| {
                email.subject == expected.subject
                    && email.html_body == expected.html
                    && email.plain_body == expected.text
                    && email.priority == Priority::Normal
                    && email.reply_to == Some(EmailAddress::new_unchecked("sender@example.com"))
            })
            .returning(|_| Ok(()));

        let gateway = gateway(mailer, None);

        gateway
            .send_default("user@example.com", &build)?
            .outcome()
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_default_prefers_configured_reply_to() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .withf(|email| {
                email.reply_to == Some(EmailAddress::new_unchecked("replies@example.com"))
            })
            .returning(|_| Ok(()));

        let gateway = gateway(mailer, Some("replies@example.com"));
        let build = MailBuilder::new().subject("S").get();

        gateway
            .send_default("user@example.com", &build)?
            .outcome()
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_send_default_rejects_invalid_recipient() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(0);

        let gateway = gateway(mailer, None);
        let build = MailBuilder::new().subject("S").get();

        let result = gateway.send_default("not an address", &build);

        assert!(matches!(result, Err(MailerError::InvalidAddress)));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_only_through_receipt() {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailerError::SendError));

        let gateway = gateway(mailer, None);

        // `send` itself cannot fail; the error is only observable here.
        let receipt = gateway.send(outgoing("user@example.com"));

        assert!(matches!(
            receipt.outcome().await,
            Err(MailerError::SendError)
        ));
    }
}
