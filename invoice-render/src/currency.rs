use tracing::warn;

/// Display prefixes by ISO 4217 code.
///
/// Symbols here are what the currency conventionally uses, independent
/// of any output backend. The PDF backend's built-in faces are limited
/// to WinAnsi, so symbols outside it (₹, ₩, ₽, ₺, ฿, ₪, ł, č) show as
/// `?` there; other canvases can render them fully.
const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "$"),
    ("BRL", "R$"),
    ("CAD", "$"),
    ("CHF", "fr"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "$"),
    ("IDR", "Rp"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "$"),
    ("NOK", "kr"),
    ("NZD", "$"),
    ("PLN", "zł"),
    ("RUB", "₽"),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("ZAR", "R"),
];

/// Look up the display symbol for a currency code.
pub fn symbol(code: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, sym)| *sym)
}

/// Symbol for `code`, falling back to the code itself when unknown.
/// The miss is surfaced as a diagnostic rather than silently
/// prefixing nothing.
pub fn symbol_or_code(code: &str) -> &str {
    match symbol(code) {
        Some(sym) => sym,
        None => {
            warn!(code, "no symbol for currency code, using the code itself");
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(symbol("USD"), Some("$"));
        assert_eq!(symbol("EUR"), Some("€"));
        assert_eq!(symbol("SEK"), Some("kr"));
    }

    #[test]
    fn unknown_code_has_no_symbol() {
        assert_eq!(symbol("XTS"), None);
        assert_eq!(symbol("usd"), None);
    }

    #[test]
    fn fallback_is_the_code_itself() {
        assert_eq!(symbol_or_code("USD"), "$");
        assert_eq!(symbol_or_code("XTS"), "XTS");
    }
}
