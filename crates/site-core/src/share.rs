//! Share and contact link construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown share platform `{0}`")]
pub struct UnknownPlatform(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    WhatsApp,
    LinkedIn,
}

impl FromStr for SharePlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(SharePlatform::Facebook),
            "twitter" => Ok(SharePlatform::Twitter),
            "whatsapp" => Ok(SharePlatform::WhatsApp),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SharePlatform::Facebook => "facebook",
            SharePlatform::Twitter => "twitter",
            SharePlatform::WhatsApp => "whatsapp",
            SharePlatform::LinkedIn => "linkedin",
        };
        f.write_str(name)
    }
}

// `encodeURIComponent` leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode like `encodeURIComponent`, over UTF-8 bytes.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Sharer URL for `page_url` on `platform`.
pub fn share_url(platform: SharePlatform, page_url: &str, title: &str) -> String {
    match platform {
        SharePlatform::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            encode_uri_component(page_url)
        ),
        SharePlatform::Twitter => format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            encode_uri_component(page_url),
            encode_uri_component(title)
        ),
        SharePlatform::WhatsApp => format!(
            "https://wa.me/?text={}",
            encode_uri_component(&format!("{} {}", title, page_url))
        ),
        SharePlatform::LinkedIn => format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode_uri_component(page_url)
        ),
    }
}

/// Click-to-chat link with a prefilled message.
pub fn whatsapp_chat_url(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        encode_uri_component(message)
    )
}

/// Only links already pointing at WhatsApp get rewritten.
#[inline]
pub fn is_whatsapp_link(href: &str) -> bool {
    href.contains("wa.me")
}
