//! Indian digit grouping.
//!
//! The last three integer digits form one group and every earlier pair of
//! digits forms another, so one crore renders as `1,00,00,000.00`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{LoanError, Result};
use crate::loan::{round, DISPLAY_DP};

const SEPARATOR: char = ',';

/// Renders `amount` with two fraction digits and 3-2-2 grouping.
///
/// A negative amount keeps its sign in front of the grouped digits.
pub fn format_inr(amount: Decimal) -> String {
    let plain = round(amount, DISPLAY_DP).to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer_part, fraction_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{}{}.{}", sign, group_digits(integer_part), fraction_part)
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut rest, last_three) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    while rest.len() > 2 {
        let (head, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = head;
    }

    let mut grouped = String::with_capacity(digits.len() + pairs.len() + 1);
    grouped.push_str(rest);
    for pair in pairs.iter().rev() {
        grouped.push(SEPARATOR);
        grouped.push_str(pair);
    }
    grouped.push(SEPARATOR);
    grouped.push_str(last_three);
    grouped
}

/// Parses a user-typed amount, ignoring grouping separators in any position
/// so that both `100,000` and `1,00,000` are accepted.
pub fn parse_amount(field: &'static str, input: &str) -> Result<Decimal> {
    let cleaned: String = input.trim().chars().filter(|c| *c != SEPARATOR).collect();
    Decimal::from_str(&cleaned).map_err(|_| LoanError::InvalidNumber {
        field,
        input: input.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{format_inr, group_digits, parse_amount};
    use crate::error::LoanError;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_log::test;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_inr(Decimal::ZERO), "0.00");
        assert_eq!(format_inr(dec!(7)), "7.00");
        assert_eq!(format_inr(dec!(83.333)), "83.33");
        assert_eq!(format_inr(dec!(999.99)), "999.99");
    }

    #[test]
    fn test_format_grouped_amounts() {
        assert_eq!(format_inr(dec!(1000)), "1,000.00");
        assert_eq!(format_inr(dec!(12345.6)), "12,345.60");
        assert_eq!(format_inr(dec!(100000)), "1,00,000.00");
        assert_eq!(format_inr(dec!(1234567.89)), "12,34,567.89");
        assert_eq!(format_inr(dec!(10000000)), "1,00,00,000.00");
        assert_eq!(format_inr(dec!(123456789012.34)), "1,23,45,67,89,012.34");
    }

    #[test]
    fn test_format_rounds_half_to_even() {
        assert_eq!(format_inr(dec!(1000.125)), "1,000.12");
        assert_eq!(format_inr(dec!(1000.135)), "1,000.14");
        assert_eq!(format_inr(dec!(999.995)), "1,000.00");
    }

    #[test]
    fn test_format_negative_amounts() {
        assert_eq!(format_inr(dec!(-1234567.89)), "-12,34,567.89");
        assert_eq!(format_inr(dec!(-999.5)), "-999.50");
        assert_eq!(format_inr(dec!(-0.001)), "0.00");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "1,23,456");
        assert_eq!(group_digits("1234567"), "12,34,567");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("amount", "1,00,000").unwrap(), dec!(100000));
        assert_eq!(parse_amount("amount", " 250,000.50 ").unwrap(), dec!(250000.50));
        assert_eq!(parse_amount("rate", "8.5").unwrap(), dec!(8.5));
        assert!(matches!(
            parse_amount("amount", "ten lakh"),
            Err(LoanError::InvalidNumber { field: "amount", .. })
        ));
        assert!(parse_amount("amount", "").is_err());
    }
}
