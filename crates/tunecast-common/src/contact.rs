/// WhatsApp deep link for the floating contact button

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Everything except the RFC 3986 unreserved characters gets escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub const SUPPORT_WHATSAPP_NUMBER: &str = "+917742789827";
pub const SUPPORT_GREETING: &str = "Hi! I'm interested in music distribution services.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub whatsapp_number: &'static str,
    pub greeting: &'static str,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            whatsapp_number: SUPPORT_WHATSAPP_NUMBER,
            greeting: SUPPORT_GREETING,
        }
    }
}

impl ContactDetails {
    pub fn link(&self) -> String {
        whatsapp_link(self.whatsapp_number, self.greeting)
    }
}

/// Build `https://wa.me/<digits>?text=<message>`.
///
/// wa.me only accepts the bare international number, so `+`, spaces and
/// dashes are dropped.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        digits,
        utf8_percent_encode(message, QUERY_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_support_link() {
        assert_eq!(
            ContactDetails::default().link(),
            "https://wa.me/917742789827?text=Hi%21%20I%27m%20interested%20in%20music%20distribution%20services."
        );
    }

    #[test]
    fn test_number_formatting_is_stripped() {
        assert_eq!(whatsapp_link("+91 77427-89827", "hi"), "https://wa.me/917742789827?text=hi");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(
            whatsapp_link("123", "a&b=c?d#e/f+g"),
            "https://wa.me/123?text=a%26b%3Dc%3Fd%23e%2Ff%2Bg"
        );
    }

    #[test]
    fn test_non_ascii_message() {
        assert_eq!(whatsapp_link("1", "olá"), "https://wa.me/1?text=ol%C3%A1");
    }

    #[test]
    fn test_link_is_deterministic() {
        let details = ContactDetails::default();
        assert_eq!(details.link(), details.link());
    }
}
