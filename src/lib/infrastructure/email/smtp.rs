//! SMTP mailer implementation

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::MultiPart,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::domain::dispatch::{Mailer, MailerError, OutgoingEmail};

/// SMTP transport configuration, read from the environment at startup
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "MAIL_HOST")]
    pub host: Option<String>,

    /// The SMTP port
    #[clap(long, env = "MAIL_PORT", default_value = "25")]
    pub port: u16,

    /// Use implicit TLS instead of STARTTLS
    #[clap(long, env = "MAIL_SECURE", default_value = "false")]
    pub secure: bool,

    /// The SMTP username, doubling as the sender address
    #[clap(long, env = "MAIL_USER")]
    pub username: Option<String>,

    /// The SMTP password
    #[clap(long, env = "MAIL_PASSWORD")]
    pub password: Option<String>,

    /// Optional reply-to override for default sends
    #[clap(long, env = "MAIL_REPLYTO")]
    pub reply_to: Option<String>,
}

/// SMTP-backed [`Mailer`]
#[derive(Clone, Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Creates an SMTP mailer from the given configuration.
    ///
    /// Fails fast with [`MailerError::MissingConfiguration`] naming every
    /// required setting that is absent or blank; the transport is built once
    /// here so no send can be attempted against an unconfigured process.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let host = present(&config.host);
        let username = present(&config.username);
        let password = present(&config.password);

        let (host, username, password) = match (host, username, password) {
            (Some(host), Some(username), Some(password)) => (host, username, password),
            (host, username, password) => {
                let mut missing = Vec::new();
                if host.is_none() {
                    missing.push("MAIL_HOST".to_string());
                }
                if username.is_none() {
                    missing.push("MAIL_USER".to_string());
                }
                if password.is_none() {
                    missing.push("MAIL_PASSWORD".to_string());
                }

                return Err(MailerError::MissingConfiguration(missing));
            }
        };

        let credentials = Credentials::new(username.to_string(), password.to_string());

        let transport = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
                .credentials(credentials)
                .port(config.port)
                .build()
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
                .credentials(credentials)
                .port(config.port)
                .tls(Tls::Opportunistic(TlsParameters::new(host.to_string())?))
                .build()
        };

        Ok(Self { transport })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailerError> {
        let from = email
            .from
            .as_ref()
            .ok_or(MailerError::InvalidAddress)?;

        let mut builder = Message::builder()
            .from(from.to_string().parse()?)
            .to(email.to.to_string().parse()?)
            .subject(email.subject.clone());

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.to_string().parse()?);
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(
            email.plain_body.clone(),
            email.html_body.clone(),
        ))?;

        match self.transport.send(message).await {
            Ok(_) => Ok(()),
            Err(e) => Err(MailerError::UnknownError(e.into())),
        }
    }
}
