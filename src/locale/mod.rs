//! Locale formatting for Arabic number, currency, date and time display.
//!
//! Output follows the CLDR conventions for Arabic with Arabic-Indic digits:
//! `١٬٢٣٤٫٥` for numbers, `٧٥٫٥٪؜` for percentages and
//! `‏١٬٠٠٠٫٠٠ ر.س.‏` for currency. Dates use the Gregorian calendar.

pub mod data;

use crate::core::digits::{arabic_digit_value, to_arabic_indic_char};
use crate::error::{ArabicError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use data::LocaleData;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "ar-SA";
pub const DEFAULT_CURRENCY: &str = "SAR";

const MAX_NUMBER_FRACTION_DIGITS: usize = 3;
const PERCENT_FRACTION_DIGITS: usize = 1;
const RLM: char = '\u{200F}';
const NBSP: char = '\u{00A0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    #[default]
    Long,
    Short,
}

/// Formats values for a fixed Arabic locale.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    data: &'static LocaleData,
    default_currency: String,
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self {
            data: data::default_locale(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl LocaleFormatter {
    pub fn new(tag: &str) -> Result<Self> {
        let data = data::lookup(tag).ok_or_else(|| ArabicError::UnsupportedLocale(tag.to_string()))?;
        Ok(Self {
            data,
            default_currency: DEFAULT_CURRENCY.to_string(),
        })
    }

    pub fn with_default_currency(mut self, code: &str) -> Result<Self> {
        self.default_currency = validate_currency(code)?;
        Ok(self)
    }

    pub fn tag(&self) -> &'static str {
        self.data.tag
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Grouped number with up to three fraction digits.
    pub fn format_number(&self, value: f64) -> String {
        self.format_decimal(value, 0, MAX_NUMBER_FRACTION_DIGITS)
    }

    /// `value` is on a 0–100 scale and is shown with one fraction digit.
    pub fn format_percent(&self, value: f64) -> String {
        if value.is_nan() {
            return self.data.not_a_number.to_string();
        }
        // Scaled back to 0–100 on the decimal digits, not in floating point.
        let fraction = value / 100.0;
        let number = self.format_scaled(fraction, 2, PERCENT_FRACTION_DIGITS, PERCENT_FRACTION_DIGITS);
        format!("{number}{}", self.data.percent_sign)
    }

    /// Currency amount in the formatter's default currency.
    pub fn format_default_currency(&self, amount: f64) -> String {
        // The default code was validated on construction.
        self.format_currency(amount, &self.default_currency)
            .unwrap_or_else(|_| self.format_number(amount))
    }

    pub fn format_currency(&self, amount: f64, code: &str) -> Result<String> {
        let code = validate_currency(code)?;
        let digits = data::currency_fraction_digits(&code);
        let number = self.format_decimal(amount, digits, digits);
        let symbol = self.data.currency_symbol(&code).unwrap_or(code.as_str());
        Ok(format!("{RLM}{number}{NBSP}{symbol}"))
    }

    /// Day, month name and year.
    pub fn format_date<D: Datelike>(&self, date: &D, style: DateStyle) -> String {
        let months = match style {
            DateStyle::Long => &self.data.months,
            DateStyle::Short => &self.data.short_months,
        };
        let month = months[date.month0() as usize];
        format!(
            "{} {} {}",
            self.digits(&date.day().to_string()),
            month,
            self.digits(&date.year().to_string())
        )
    }

    /// `hh:mm` on a 12-hour clock followed by the AM/PM marker.
    pub fn format_time<T: Timelike>(&self, time: &T) -> String {
        let (is_pm, hour) = time.hour12();
        let marker = if is_pm { self.data.pm } else { self.data.am };
        format!(
            "{} {}",
            self.digits(&format!("{:02}:{:02}", hour, time.minute())),
            marker
        )
    }

    fn digits(&self, ascii: &str) -> String {
        if self.data.native_digits {
            ascii.chars().map(to_arabic_indic_char).collect()
        } else {
            ascii.to_string()
        }
    }

    fn format_decimal(&self, value: f64, min_fraction: usize, max_fraction: usize) -> String {
        self.format_scaled(value, 0, min_fraction, max_fraction)
    }

    /// Formats `value × 10^scale`. Negative values keep their sign even when
    /// they round to zero.
    fn format_scaled(&self, value: f64, scale: usize, min_fraction: usize, max_fraction: usize) -> String {
        if value.is_nan() {
            return self.data.not_a_number.to_string();
        }
        if value.is_infinite() {
            let sign = if value < 0.0 { self.data.minus_sign } else { "" };
            return format!("{sign}∞");
        }

        let (int_part, mut frac) = round_half_expand(value.abs(), scale, max_fraction);
        while frac.len() < min_fraction {
            frac.push('0');
        }
        while frac.len() > min_fraction && frac.ends_with('0') {
            frac.pop();
        }

        let mut out = String::new();
        if value.is_sign_negative() {
            out.push_str(self.data.minus_sign);
        }
        out.push_str(&self.digits(&group_thousands(&int_part, self.data.group_separator)));
        if !frac.is_empty() {
            out.push(self.data.decimal_separator);
            out.push_str(&self.digits(&frac));
        }
        out
    }
}

/// Rounds the shortest decimal form of `magnitude × 10^scale` to at most
/// `max_fraction` digits, ties away from zero. Returns the integer and
/// fraction digits.
fn round_half_expand(magnitude: f64, scale: usize, max_fraction: usize) -> (String, String) {
    let shortest = magnitude.to_string();
    let (int_digits, frac_digits) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_digits.bytes().chain(frac_digits.bytes()).collect();
    let point = int_digits.len() + scale;
    if digits.len() < point {
        digits.resize(point, b'0');
    }

    let kept = (point + max_fraction).min(digits.len());
    let round_up = digits.get(kept).map(|&d| d >= b'5').unwrap_or(false);
    digits.truncate(kept);

    let mut point = point;
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            point += 1;
        }
    }

    let (int_part, frac_part) = digits.split_at(point);
    let int_part = String::from_utf8_lossy(int_part);
    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    (int_part.to_string(), String::from_utf8_lossy(frac_part).into_owned())
}

fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

fn validate_currency(code: &str) -> Result<String> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(ArabicError::InvalidCurrency(code.to_string()))
    }
}

/// Parses a date or date-time string.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` and
/// `YYYY-MM-DD`. Offsets are honoured by keeping the wall-clock time of the
/// given offset.
pub fn parse_date_input(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ArabicError::InvalidDate(input.to_string()))
}

/// Reads the numeric value back out of a formatted string.
///
/// Takes the first run of digits (ASCII or Arabic-Indic) with its group and
/// decimal separators and ignores everything around it, such as direction
/// marks and currency symbols.
pub fn parse_number(formatted: &str) -> Option<f64> {
    let mut out = String::new();
    let mut started = false;
    for c in formatted.chars() {
        match c {
            '0'..='9' => {
                out.push(c);
                started = true;
            }
            c if arabic_digit_value(c).is_some() => {
                out.extend(arabic_digit_value(c).and_then(|d| char::from_digit(d, 10)));
                started = true;
            }
            '\u{066B}' | '.' if started => out.push('.'),
            '\u{066C}' | ',' if started => {}
            '-' | '\u{2212}' if !started => out.push('-'),
            _ if started => break,
            _ => {}
        }
    }
    out.parse().ok()
}

/// Short English-style magnitude (`1.5K`, `2.0M`, `3.1B`).
pub fn format_compact(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{:.1}B", num / 1_000_000_000.0)
    } else if num >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else if num.fract() == 0.0 && num.is_finite() {
        format!("{}", num as i64)
    } else {
        num.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn formatter() -> LocaleFormatter {
        LocaleFormatter::new("ar-SA").unwrap()
    }

    #[test]
    fn test_format_number() {
        let f = formatter();
        assert_eq!(f.format_number(1234567.0), "١٬٢٣٤٬٥٦٧");
        assert_eq!(f.format_number(1234.5), "١٬٢٣٤٫٥");
        assert_eq!(f.format_number(0.12345), "٠٫١٢٣");
        assert_eq!(f.format_number(0.0), "٠");
    }

    #[test]
    fn test_format_negative_number() {
        let f = formatter();
        assert_eq!(parse_number(&f.format_number(-42.5)), Some(-42.5));
        assert_eq!(f.format_number(-0.0001), "\u{061C}-٠");
    }

    #[test]
    fn test_format_percent() {
        let f = formatter();
        assert_eq!(f.format_percent(75.5), "٧٥٫٥٪؜");
        assert_eq!(f.format_percent(100.0), "١٠٠٫٠٪؜");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let f = formatter();
        assert!(f.format_currency(0.125, "SAR").unwrap().contains("٠٫١٣"));
        assert!(f.format_currency(2.5, "JPY").unwrap().contains('٣'));
        assert_eq!(f.format_number(0.0625), "٠٫٠٦٣");
        assert_eq!(f.format_number(-0.0625), "\u{061C}-٠٫٠٦٣");
        assert_eq!(f.format_percent(12.25), "١٢٫٣٪؜");
        assert_eq!(f.format_number(9.9995), "١٠");
    }

    #[test]
    fn test_round_half_expand_digits() {
        assert_eq!(round_half_expand(999.96, 0, 1), ("1000".to_string(), "0".to_string()));
        assert_eq!(round_half_expand(0.1225, 2, 1), ("12".to_string(), "3".to_string()));
        assert_eq!(round_half_expand(0.5, 2, 1), ("50".to_string(), String::new()));
        assert_eq!(round_half_expand(1e-7, 0, 3), ("0".to_string(), "000".to_string()));
    }

    #[test]
    fn test_format_currency_round_trip() {
        let f = formatter();
        let formatted = f.format_currency(1000.0, "SAR").unwrap();
        assert!(formatted.contains("ر.س"));
        assert!(formatted.contains('٬'));
        assert_eq!(parse_number(&formatted), Some(1000.0));
    }

    #[test]
    fn test_format_currency_default() {
        let f = formatter();
        assert_eq!(f.format_default_currency(5.0), f.format_currency(5.0, "sar").unwrap());
    }

    #[test]
    fn test_format_currency_unknown_symbol_uses_code() {
        let f = formatter();
        let formatted = f.format_currency(12.0, "CHF").unwrap();
        assert!(formatted.ends_with("CHF"));
        assert_eq!(parse_number(&formatted), Some(12.0));
    }

    #[test]
    fn test_format_currency_minor_units() {
        let f = formatter();
        assert!(f.format_currency(1.5, "KWD").unwrap().contains("١٫٥٠٠"));
        assert!(!f.format_currency(100.0, "JPY").unwrap().contains('٫'));
    }

    #[test]
    fn test_invalid_currency() {
        assert!(matches!(
            formatter().format_currency(1.0, "RIYAL"),
            Err(ArabicError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_unsupported_locale() {
        assert!(matches!(
            LocaleFormatter::new("fr-FR"),
            Err(ArabicError::UnsupportedLocale(_))
        ));
        assert!(LocaleFormatter::new("ar_eg").is_ok());
    }

    #[test]
    fn test_format_date() {
        let f = formatter();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(f.format_date(&date, DateStyle::Long), "١٥ مارس ٢٠٢٤");
        assert_eq!(f.format_date(&date, DateStyle::Short), "١٥ مارس ٢٠٢٤");
    }

    #[test]
    fn test_format_time() {
        let f = formatter();
        let morning = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        let evening = NaiveTime::from_hms_opt(15, 30, 0).unwrap();
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(f.format_time(&morning), "٠٩:٠٥ ص");
        assert_eq!(f.format_time(&evening), "٠٣:٣٠ م");
        assert_eq!(f.format_time(&midnight), "١٢:٠٠ ص");
    }

    #[test]
    fn test_parse_date_input() {
        let dt = parse_date_input("2024-03-15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2024, 3, 15, 0));

        let dt = parse_date_input("2024-03-15T21:45:00+03:00").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (21, 45));

        assert!(matches!(
            parse_date_input("not a date"),
            Err(ArabicError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(1500.0), "1.5K");
        assert_eq!(format_compact(2_000_000.0), "2.0M");
        assert_eq!(format_compact(3_100_000_000.0), "3.1B");
    }

    #[test]
    fn test_parse_number_ignores_symbols() {
        assert_eq!(parse_number("‏١٬٠٠٠٫٠٠\u{00A0}ر.س.‏"), Some(1000.0));
        assert_eq!(parse_number("٧٥٫٥٪؜"), Some(75.5));
        assert_eq!(parse_number("no digits"), None);
    }
}
