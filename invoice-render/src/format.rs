//! Display formatting for quantities and money. These rules shape the
//! rendered text only; monetary arithmetic always uses the raw values.

/// Whole quantities render without decimals, fractional ones with
/// exactly one decimal place. The sign rides along unchanged.
pub fn format_quantity(n: f64) -> String {
    if n == n.trunc() {
        format!("{:.0}", n)
    } else {
        format!("{:.1}", n)
    }
}

/// `<symbol><grouped units>.<2 digits>`, with commas every three
/// digits. Cents are rounded half away from zero. The sign stays with
/// the number, so -1234.5 with "$" renders as "$-1,234.50".
pub fn format_money(amount: f64, symbol: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();

    let units = (magnitude / 100).to_string();
    let grouped = units
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",");

    format!("{}{}{}.{:02}", symbol, sign, grouped, magnitude % 100)
}
