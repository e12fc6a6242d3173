#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends a styled test email through the configured SMTP transport

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use mailcraft::{
    domain::{
        dispatch::{DispatchGateway, EmailAddress},
        mail::{paragraph, MailBuilder},
    },
    infrastructure::email::smtp::{SmtpConfig, SmtpMailer},
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The SMTP transport configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,

    /// The recipient address
    #[clap(long)]
    pub to: String,

    /// Logo displayed at the top of the email
    #[clap(long, default_value = "https://example.com/logo.png")]
    pub logo: String,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mailer = Arc::new(SmtpMailer::new(&args.smtp)?);

    let sender = EmailAddress::new(args.smtp.username.as_deref().unwrap_or_default())?;
    let reply_to = args
        .smtp
        .reply_to
        .as_deref()
        .map(EmailAddress::new)
        .transpose()?;

    let gateway = DispatchGateway::new(mailer, sender, reply_to);

    let build = MailBuilder::with_defaults(&args.logo)
        .subject("mailcraft test email")
        .heading("Hello!", None)
        .paragraph("This message was composed with the mailcraft builder.")
        .card(&[paragraph("Card content renders inside a styled container.")])
        .quote("Both renderings always carry the same content.")
        .link("https://example.com", "Learn more")
        .signature("The postmaster", "Example Corp", None)
        .get();

    let receipt = gateway.send_default(&args.to, &build)?;

    receipt.outcome().await?;

    Ok(())
}
