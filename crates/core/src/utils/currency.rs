//! Currency string helpers using Indonesian digit grouping (`1.234.567`).

const GROUP_SEPARATOR: char = '.';

/// Keeps only the digits of `input` and groups them in thousands.
///
/// Returns an empty string when `input` has no digits. Leading zeros are
/// dropped, so `"000"` becomes `"0"`. Input length is not limited.
pub fn format_currency_digits(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_string();
    }
    group_thousands(trimmed)
}

/// Inverse of [`format_currency_digits`]: `"Rp 1.234.567"` gives `Some(1234567)`.
pub fn parse_currency_digits(input: &str) -> Option<u64> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Formats a rounded amount as rupiah, e.g. `Rp 1.234.567` or `-Rp 5.000`.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_string();
    }
    let rounded = amount.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
