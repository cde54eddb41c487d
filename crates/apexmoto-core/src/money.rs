//! Price display helpers.

use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRange {
    pub start: Option<Money>,
    pub stop: Option<Money>,
}

/// Symbol and fraction digits for the currencies the shop sells in.
/// Anything else renders as `"CODE 1,234.00"`.
fn currency_style(code: &str) -> (Option<&'static str>, u32) {
    match code {
        "USD" => (Some("$"), 2),
        "EUR" => (Some("€"), 2),
        "GBP" => (Some("£"), 2),
        "JPY" => (Some("¥"), 0),
        "CAD" => (Some("CA$"), 2),
        "AUD" => (Some("A$"), 2),
        _ => (None, 2),
    }
}

/// Formats an amount in en-US style, e.g. `$1,299.00`.
#[must_use]
pub fn format_money(money: &Money) -> String {
    let (symbol, fraction_digits) = currency_style(&money.currency);
    let rounded = money.amount.abs().round_dp(fraction_digits);
    let plain = format!("{rounded:.prec$}", prec = fraction_digits as usize);
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut number = int_part
        .parse::<u128>()
        .map_or_else(|_| int_part.to_owned(), |n| n.to_formatted_string(&Locale::en));
    if let Some(frac) = frac_part {
        number.push('.');
        number.push_str(frac);
    }

    let sign = if money.amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match symbol {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{} {number}", money.currency),
    }
}

/// Formats a price range: a single price when both ends match, otherwise
/// `"{start} - {stop}"`. A missing range renders as an empty string.
#[must_use]
pub fn format_money_range(range: Option<&MoneyRange>) -> String {
    let Some(range) = range else {
        return String::new();
    };
    let start = range.start.as_ref().map(format_money);
    let stop = range.stop.as_ref().map(format_money);
    match (start, stop) {
        (Some(start), Some(stop)) if start == stop => start,
        (Some(start), Some(stop)) => format!("{start} - {stop}"),
        (Some(one), None) | (None, Some(one)) => one,
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(amount: &str, currency: &str) -> Money {
        Money {
            amount: Decimal::from_str(amount).unwrap(),
            currency: currency.to_owned(),
        }
    }

    #[test]
    fn formats_usd_with_grouping_and_cents() {
        assert_eq!(format_money(&money("1299", "USD")), "$1,299.00");
        assert_eq!(format_money(&money("49.5", "USD")), "$49.50");
        assert_eq!(format_money(&money("1234567.891", "USD")), "$1,234,567.89");
    }

    #[test]
    fn formats_unknown_currency_with_code() {
        assert_eq!(format_money(&money("10", "PLN")), "PLN 10.00");
    }

    #[test]
    fn formats_zero_decimal_currency() {
        assert_eq!(format_money(&money("15000", "JPY")), "¥15,000");
        assert_eq!(format_money(&money("999", "JPY")), "¥999");
    }

    #[test]
    fn negative_amounts_keep_sign_before_symbol() {
        assert_eq!(format_money(&money("-5", "EUR")), "-€5.00");
    }

    #[test]
    fn range_collapses_equal_ends() {
        let range = MoneyRange {
            start: Some(money("199", "USD")),
            stop: Some(money("199.00", "USD")),
        };
        assert_eq!(format_money_range(Some(&range)), "$199.00");
    }

    #[test]
    fn range_joins_distinct_ends() {
        let range = MoneyRange {
            start: Some(money("99", "USD")),
            stop: Some(money("149", "USD")),
        };
        assert_eq!(format_money_range(Some(&range)), "$99.00 - $149.00");
    }

    #[test]
    fn missing_range_is_empty() {
        assert_eq!(format_money_range(None), "");
        let empty = MoneyRange {
            start: None,
            stop: None,
        };
        assert_eq!(format_money_range(Some(&empty)), "");
    }
}
