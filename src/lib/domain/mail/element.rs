//! Mail content elements

use serde::{Deserialize, Serialize};

/// Separator appended after most content blocks, used as a paragraph-like
/// spacer in the plain-text rendering.
pub const BLOCK_SEPARATOR: &str = "\r\n\r\n";

/// A piece of email content rendered as both HTML and plain text.
///
/// The two fields are always semantically equivalent renderings of the same
/// logical content; they differ in markup only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailElement {
    /// HTML representation, suitable for rich emails
    pub html: String,

    /// Plain-text representation, suitable as a text-only fallback
    pub text: String,
}

/// Creates an anchor element opening in a new browsing context.
///
/// `url` defaults to `"/"` when omitted and `label` defaults to the URL.
/// The plain-text rendering is the bare URL.
pub fn link<'a>(
    url: impl Into<Option<&'a str>>,
    label: impl Into<Option<&'a str>>,
) -> MailElement {
    let url = url.into().unwrap_or("/");
    let label = label.into().unwrap_or(url);

    MailElement {
        html: format!(r#"<a href="{url}" target="_blank">{label}</a>{BLOCK_SEPARATOR}"#),
        text: format!("{url}{BLOCK_SEPARATOR}"),
    }
}

/// Creates a paragraph element.
pub fn paragraph(text: &str) -> MailElement {
    MailElement {
        html: format!("<p>{text}</p>{BLOCK_SEPARATOR}"),
        text: format!("{text}{BLOCK_SEPARATOR}"),
    }
}

/// Creates a heading element.
///
/// `level` defaults to 1 and is expected to be in the range 1–6; values
/// outside that range are passed through unchecked and produce a
/// non-standard tag.
pub fn heading(text: &str, level: impl Into<Option<u8>>) -> MailElement {
    let level = level.into().unwrap_or(1);

    MailElement {
        html: format!("<h{level}>{text}</h{level}>{BLOCK_SEPARATOR}"),
        text: format!("{text}{BLOCK_SEPARATOR}"),
    }
}

/// Creates a block-level image element.
///
/// The `alt` text doubles as the `title` attribute and is the plain-text
/// rendering, since the image itself has no text-mode representation.
pub fn image(url: &str, alt: &str, width: u32, height: u32) -> MailElement {
    MailElement {
        html: format!(
            r#"<img src="{url}" alt="{alt}" title="{alt}" width="{width}" height="{height}" style="display:block"/>{BLOCK_SEPARATOR}"#
        ),
        text: format!("{alt}{BLOCK_SEPARATOR}"),
    }
}

/// Wraps the given elements in a card container.
///
/// Child HTML is concatenated inside a `card`-classed div; child texts are
/// concatenated as-is, so spacing comes from each element's own trailing
/// separator.
pub fn card(content: &[MailElement]) -> MailElement {
    let mut html = String::from(r#"<div class="card">"#);
    let mut text = String::new();

    for element in content {
        html.push_str(&element.html);
        text.push_str(&element.text);
    }

    html.push_str("</div>");

    MailElement { html, text }
}

/// Creates a blockquote element.
///
/// The plain-text rendering wraps the quote in double quotes.
pub fn quote(text: &str) -> MailElement {
    MailElement {
        html: format!("<blockquote>{text}</blockquote>"),
        text: format!("\"{text}\"{BLOCK_SEPARATOR}"),
    }
}
