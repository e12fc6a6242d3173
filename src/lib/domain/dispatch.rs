//! Mail dispatch module.
//!
//! The [`DispatchGateway`] addresses a finalized [`MailBuild`] and hands it
//! to an injected [`Mailer`] transport, fire-and-forget.
//!
//! [`MailBuild`]: super::mail::MailBuild

mod email_address;
mod errors;
mod gateway;
mod mailer;
mod message;

pub use email_address::{EmailAddress, EmailAddressError};
pub use errors::MailerError;
pub use gateway::{DispatchGateway, DispatchReceipt};
pub use mailer::Mailer;
pub use message::{OutgoingEmail, Priority};
