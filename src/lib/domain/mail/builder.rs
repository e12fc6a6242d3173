//! Fluent mail builder

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::{
    element::{self, MailElement, BLOCK_SEPARATOR},
    style::DEFAULT_MAIL_STYLE,
};

/// A complete, render-ready email payload produced by [`MailBuilder::get`].
///
/// Plain, serializable data; transport-agnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailBuild {
    /// The email subject line
    pub subject: String,

    /// The full HTML document
    pub html: String,

    /// The plain-text body
    pub text: String,
}

/// Fluent builder for composing styled email content and metadata.
///
/// Every append method grows the HTML and plain-text buffers by the two
/// renderings of the same element, so the representations never diverge in
/// content. The builder is single-owner and not thread-safe; concurrent
/// composition requires independent instances.
///
/// Typical usage:
/// ```
/// use mailcraft::domain::mail::MailBuilder;
///
/// let mail = MailBuilder::with_defaults("https://example.com/logo.png")
///     .subject("Welcome")
///     .heading("Hello!", None)
///     .paragraph("Thanks for joining.")
///     .get();
/// ```
#[derive(Clone, Debug, Default)]
pub struct MailBuilder {
    subject_line: String,
    head: String,
    body: String,
    text: String,
}

impl MailBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-seeded with the default style sheet and a
    /// 32×32 logo image as the first body content.
    pub fn with_defaults(logo_url: &str) -> Self {
        Self::new()
            .style(DEFAULT_MAIL_STYLE)
            .image(logo_url, "Logo", 32, 32)
    }

    /// Sets the email subject line, replacing any previous value.
    pub fn subject(mut self, text: &str) -> Self {
        self.subject_line = text.to_string();

        self
    }

    /// Appends a heading. `level` defaults to 1.
    pub fn heading(self, text: &str, level: impl Into<Option<u8>>) -> Self {
        self.push(element::heading(text, level))
    }

    /// Appends a paragraph.
    pub fn paragraph(self, text: &str) -> Self {
        self.push(element::paragraph(text))
    }

    /// Appends a link. The visible label defaults to the URL.
    pub fn link<'a>(self, url: &'a str, label: impl Into<Option<&'a str>>) -> Self {
        self.push(element::link(url, label))
    }

    /// Appends a block-level image.
    pub fn image(self, url: &str, alt: &str, width: u32, height: u32) -> Self {
        self.push(element::image(url, alt, width, height))
    }

    /// Appends a card container wrapping the given elements.
    pub fn card(self, content: &[MailElement]) -> Self {
        self.push(element::card(content))
    }

    /// Appends a blockquote.
    pub fn quote(self, text: &str) -> Self {
        self.push(element::quote(text))
    }

    /// Appends a signature block with sender, company and the current local
    /// date, captured at call time.
    ///
    /// When `settings_link` is given, an extra sentence links to it with the
    /// literal label "settings".
    pub fn signature<'a>(
        mut self,
        sender: &str,
        company: &str,
        settings_link: impl Into<Option<&'a str>>,
    ) -> Self {
        let current_date = Local::now().format("%m/%d/%Y");

        self.body.push_str(&format!(
            r#"<span>Kind regards,<br>{sender}</span><br><span class="small-text grey">{company}, {current_date}</span>"#
        ));
        self.text.push_str(&format!(
            "Kind regards,{BLOCK_SEPARATOR}{sender}{BLOCK_SEPARATOR}{company}, {current_date}{BLOCK_SEPARATOR}"
        ));

        if let Some(url) = settings_link.into() {
            let settings = element::link(url, "settings");

            self.body.push_str(&format!(
                "<br><span>You've enabled getting notifications for this in your {}</span>",
                settings.html
            ));
            self.text.push_str(&format!(
                "You've enabled getting notifications for this here {}",
                settings.text
            ));
        }

        self
    }

    /// Appends a style block to the document head.
    ///
    /// Multiple calls accumulate in document order; later rules override
    /// earlier ones per normal cascade rules.
    pub fn style(mut self, css: &str) -> Self {
        self.head.push_str(&format!("<style>{css}</style>"));

        self
    }

    /// Finalizes the accumulated content into a [`MailBuild`], wrapping the
    /// body in a full document shell.
    ///
    /// The builder is left untouched, so repeated calls are idempotent and
    /// further appends afterwards remain legal.
    pub fn get(&self) -> MailBuild {
        MailBuild {
            subject: self.subject_line.clone(),
            html: format!(
                r#"<html><head>{}</head><body><div class="root">{}</div></body></html>"#,
                self.head, self.body
            ),
            text: self.text.clone(),
        }
    }

    fn push(mut self, element: MailElement) -> Self {
        self.body.push_str(&element.html);
        self.text.push_str(&element.text);

        self
    }
}
