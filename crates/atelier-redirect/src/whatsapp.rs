//! `wa.me` deep links for Indonesian phone numbers.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const COUNTRY_CODE: &str = "62";

/// Everything except RFC 3986 unreserved characters is escaped, so a space
/// becomes `%20`, never `+`.
const MESSAGE_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Message used for brand-level inquiries when a product has no template.
pub const DEFAULT_MESSAGE_TEMPLATE: &str =
    "Hi {brand_name}, I'm interested in {product_name}. Is it still available?";

/// Digits of `raw` in international form, or `None` if it has no digits.
///
/// Non-digits are dropped. A number that does not already start with `62`
/// loses one leading `0` and gains the `62` prefix.
///
/// ```rust
/// use atelier_redirect::whatsapp::normalize_phone;
///
/// assert_eq!(normalize_phone("0812-3456-7890").as_deref(), Some("6281234567890"));
/// assert_eq!(normalize_phone("+62 812 3456").as_deref(), Some("628123456"));
/// ```
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    if digits.starts_with(COUNTRY_CODE) {
        return Some(digits);
    }

    let local = digits.strip_prefix('0').unwrap_or(&digits);
    Some(format!("{COUNTRY_CODE}{local}"))
}

/// Substitute `{product_name}` and `{brand_name}` in `template`.
pub fn render_message(template: &str, product_name: &str, brand_name: &str) -> String {
    template
        .replace("{product_name}", product_name)
        .replace("{brand_name}", brand_name)
}

/// `https://wa.me/<digits>?text=<encoded message>`, or `None` if the phone
/// number contains no digits.
pub fn build_link(phone: &str, message: &str) -> Option<String> {
    let number = normalize_phone(phone)?;
    let text = utf8_percent_encode(message, MESSAGE_ESCAPE);
    Some(format!("https://wa.me/{number}?text={text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_number_gets_country_code() {
        assert_eq!(normalize_phone("081234567890").as_deref(), Some("6281234567890"));
    }

    #[test]
    fn only_one_leading_zero_is_dropped() {
        assert_eq!(normalize_phone("00812").as_deref(), Some("620812"));
    }

    #[test]
    fn number_without_zero_is_prefixed() {
        assert_eq!(normalize_phone("81234").as_deref(), Some("6281234"));
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(normalize_phone("n/a"), None);
        assert_eq!(build_link("", "hi"), None);
    }

    #[test]
    fn message_is_percent_encoded() {
        let link = build_link("0812", "Hi Brand X, is Tee & Co. in stock?").unwrap();
        assert_eq!(
            link,
            "https://wa.me/62812?text=Hi%20Brand%20X%2C%20is%20Tee%20%26%20Co.%20in%20stock%3F"
        );
    }

    #[test]
    fn renders_all_placeholders() {
        let rendered = render_message(
            "{brand_name}: {product_name} / {product_name}",
            "Linen Shirt",
            "Kain",
        );
        assert_eq!(rendered, "Kain: Linen Shirt / Linen Shirt");
    }
}
