//! Mail composition module.
//!
//! Pure element functions produce [`MailElement`] values pairing an HTML
//! fragment with its plain-text equivalent; [`MailBuilder`] accumulates them
//! in lockstep and finalizes into a [`MailBuild`].

mod builder;
mod element;
mod style;

pub use builder::{MailBuild, MailBuilder};
pub use element::{card, heading, image, link, paragraph, quote, MailElement, BLOCK_SEPARATOR};
pub use style::DEFAULT_MAIL_STYLE;
