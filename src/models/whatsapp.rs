use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::intake::Navigator;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_DESTINATION: &str = "5582994318109";

/// Characters left untouched by URI-component encoding: alphanumerics and `-_.!~*'()`.
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

/// Fixed WhatsApp recipient, digits only, no country-code formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(String);

impl Destination {
    /// Accepts a non-empty all-digit string.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self(DEFAULT_DESTINATION.to_string())
    }
}

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn build_whatsapp_url(destination: &Destination, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}/{}?text={}",
        destination.as_str(),
        encode_uri_component(message)
    )
}

/// Decode the `text` query parameter of a WhatsApp link.
pub fn text_param(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("text="))
        .and_then(|encoded| percent_decode_str(encoded).decode_utf8().ok())
        .map(|decoded| decoded.into_owned())
}

/// Build the link and open it in a new, isolated browsing context.
pub fn open_whatsapp_with_message(
    navigator: &mut impl Navigator,
    destination: &Destination,
    message: &str,
) -> String {
    let url = build_whatsapp_url(destination, message);
    navigator.open(&url, "_blank", "noopener,noreferrer");
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("há\n"), "h%C3%A1%0A");
        assert_eq!(encode_uri_component("*ok*"), "*ok*");
    }

    #[test]
    fn destination_rejects_non_digits() {
        assert!(Destination::parse("+55 82 9999").is_none());
        assert!(Destination::parse("").is_none());
        assert_eq!(Destination::parse(" 123 ").unwrap().as_str(), "123");
        assert_eq!(Destination::default().as_str(), DEFAULT_DESTINATION);
    }

    #[test]
    fn text_param_missing_query() {
        assert_eq!(text_param("https://wa.me/123"), None);
        assert_eq!(text_param("https://wa.me/123?foo=bar"), None);
    }
}
