//! Property-based tests for the formatting helpers.
//!
//! These check that the total functions stay total over arbitrary input.

use finmate_core::transactions::{classify, FALLBACK_STYLE};
use finmate_core::utils::{format_currency_digits, parse_currency_digits};
use proptest::prelude::*;

proptest! {
    /// Any code outside 1..=4 maps to the fallback style.
    #[test]
    fn prop_classify_unknown_is_fallback(code in "\\PC*") {
        let style = classify(&code);
        if !matches!(code.as_str(), "1" | "2" | "3" | "4") {
            prop_assert_eq!(style, FALLBACK_STYLE);
        }
    }

    /// Formatting keeps every significant digit and only adds separators.
    #[test]
    fn prop_format_keeps_digits(input in "\\PC{0,64}") {
        let formatted = format_currency_digits(&input);
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.is_empty() {
            prop_assert_eq!(formatted, "");
        } else {
            let stripped: String = formatted.chars().filter(|c| *c != '.').collect();
            let expected = digits.trim_start_matches('0');
            let expected = if expected.is_empty() { "0" } else { expected };
            prop_assert_eq!(stripped.as_str(), expected);
            prop_assert!(formatted.split('.').skip(1).all(|group| group.len() == 3));
        }
    }

    /// Parsing a formatted number gives the number back.
    #[test]
    fn prop_parse_inverts_format(value in any::<u64>()) {
        let formatted = format_currency_digits(&value.to_string());
        prop_assert_eq!(parse_currency_digits(&formatted), Some(value));
    }
}
