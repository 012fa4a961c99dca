//! Explicit number and timestamp formatting
//!
//! Report text must come out the same on every machine, so the locale used
//! for grouping digits and printing dates is a value passed in, never read
//! from the environment. Defaults reproduce en-US output.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::Amount;

/// Digit grouping and fraction rules for rendering amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Fraction digits kept after rounding; trailing zeros are dropped
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            max_fraction_digits: 3,
        }
    }
}

impl NumberFormat {
    /// Format a value with grouped thousands and no forced decimals.
    ///
    /// Rounding works on the shortest decimal form of the value, with
    /// halves going away from zero: 0.0625 prints as "0.063".
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let (int_part, frac_part) = round_half_away(value.abs(), self.max_fraction_digits);
        let frac_part = frac_part.trim_end_matches('0');

        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
        let mut out = String::with_capacity(int_part.len() * 2 + frac_part.len() + 2);
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&group_digits(&int_part, self.grouping_separator));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

/// Integer and fraction digits of a non-negative value, rounded to at most
/// `fraction_digits` places
fn round_half_away(value: f64, fraction_digits: usize) -> (String, String) {
    // f64 Display never uses exponent notation
    let shortest = value.to_string();
    let (int_digits, frac_digits) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    if frac_digits.len() <= fraction_digits {
        return (int_digits.to_string(), frac_digits.to_string());
    }

    let round_up = frac_digits.as_bytes()[fraction_digits] >= b'5';
    let mut digits: Vec<u8> = int_digits
        .bytes()
        .chain(frac_digits[..fraction_digits].bytes())
        .collect();
    let mut int_len = int_digits.len();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let frac = digits.split_off(int_len);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Everything needed to render money and timestamps in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFormat {
    /// Label printed before every amount, e.g. "KES"
    pub currency_label: String,
    pub number: NumberFormat,
    /// strftime pattern for the date part
    pub date_format: String,
    /// strftime pattern for the time part
    pub time_format: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            currency_label: "KES".to_string(),
            number: NumberFormat::default(),
            date_format: "%-m/%-d/%Y".to_string(),
            time_format: "%-I:%M:%S %p".to_string(),
        }
    }
}

impl ReportFormat {
    /// "KES 1,000"
    pub fn format_money(&self, amount: Amount) -> String {
        format!("{} {}", self.currency_label, self.number.format(amount.value()))
    }

    /// Date and time separated by a space
    pub fn format_timestamp(&self, at: NaiveDateTime) -> String {
        format!(
            "{} {}",
            at.format(&self.date_format),
            at.format(&self.time_format)
        )
    }
}
