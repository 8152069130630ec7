//! Number parsing and formatting for the value field
//!
//! Two parsers with different strictness:
//! - [`parse_typed`] gates each keystroke. It only accepts non-negative
//!   decimal text (digits, grouping commas, one decimal point), so a half-typed
//!   buffer like `"12."` is valid but `"12.5x"` or `"-3"` is not.
//! - [`parse_commit`] reads the buffer when editing ends. The whole buffer must
//!   be a plain float literal: grouping commas and surrounding whitespace make it
//!   fail, and callers fall back to zero. A typed `"1,000"` therefore commits as 0.

use thiserror::Error;

/// Why a piece of text is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    #[error("empty input")]
    Empty,

    #[error("unexpected character '{ch}' at byte {index}")]
    InvalidCharacter { ch: char, index: usize },

    #[error("more than one decimal point")]
    MultipleDecimalPoints,

    #[error("misplaced grouping separator at byte {index}")]
    MisplacedSeparator { index: usize },

    #[error("negative values cannot be typed")]
    Negative,

    #[error("no digits")]
    NoDigits,

    #[error("value is not finite")]
    NotFinite,

    #[error("invalid number: {0}")]
    Invalid(#[from] std::num::ParseFloatError),
}

/// Parse a buffer the way the value field does while the user is typing.
pub fn parse_typed(text: &str) -> Result<f64, NumberParseError> {
    if text.is_empty() {
        return Err(NumberParseError::Empty);
    }

    let mut seen_point = false;
    let mut seen_digit = false;
    let mut prev: Option<char> = None;

    for (index, ch) in text.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' => {
                if seen_point {
                    return Err(NumberParseError::MultipleDecimalPoints);
                }
                if prev == Some(',') {
                    return Err(NumberParseError::MisplacedSeparator { index: index - 1 });
                }
                seen_point = true;
            }
            // Grouping only in the integer part, between digits
            ',' => {
                if seen_point || !matches!(prev, Some('0'..='9')) {
                    return Err(NumberParseError::MisplacedSeparator { index });
                }
            }
            '-' if index == 0 => return Err(NumberParseError::Negative),
            _ => return Err(NumberParseError::InvalidCharacter { ch, index }),
        }
        prev = Some(ch);
    }

    if !seen_digit {
        return Err(NumberParseError::NoDigits);
    }

    let plain: String = text.chars().filter(|c| *c != ',').collect();
    let value: f64 = plain.parse()?;
    Ok(value)
}

/// Parse a buffer being committed as the new value.
pub fn parse_commit(text: &str) -> Result<f64, NumberParseError> {
    if text.is_empty() {
        return Err(NumberParseError::Empty);
    }

    let value: f64 = text.parse()?;
    if !value.is_finite() {
        return Err(NumberParseError::NotFinite);
    }
    Ok(value)
}

/// Commit-time parse with the zero fallback.
pub fn parse_commit_or_zero(text: &str) -> f64 {
    match parse_commit(text) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Stepper: '{}' is not a number ({}), using 0", text, e);
            0.0
        }
    }
}

/// Format a value for display.
///
/// Integer mode truncates toward zero (`12.9` shows as `12`, `-0.5` as `0`).
/// Decimal mode prints the shortest text that parses back to the same value,
/// with a fractional part for whole numbers (`12.0`). Magnitudes from `1e16` up
/// and below `1e-4` switch to exponent form with a signed, two-digit exponent
/// (`1e+20`, `2.5e-05`).
pub fn format_value(value: f64, show_int_value: bool) -> String {
    if show_int_value {
        return format!("{}", value.trunc() as i64);
    }

    let magnitude = value.abs();
    if !value.is_finite() || value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        if value.is_finite() && value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            format!("{}", value)
        }
    } else {
        exponent_form(value)
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accepts_partial_decimals() {
        assert_eq!(parse_typed("1"), Ok(1.0));
        assert_eq!(parse_typed("12."), Ok(12.0));
        assert_eq!(parse_typed("12.5"), Ok(12.5));
        assert_eq!(parse_typed(".5"), Ok(0.5));
        assert_eq!(parse_typed("1,000"), Ok(1000.0));
        assert_eq!(parse_typed("1,"), Ok(1.0));
    }

    #[test]
    fn test_typed_rejects_garbage() {
        assert_eq!(parse_typed(""), Err(NumberParseError::Empty));
        assert_eq!(parse_typed("."), Err(NumberParseError::NoDigits));
        assert_eq!(
            parse_typed("12.5x"),
            Err(NumberParseError::InvalidCharacter { ch: 'x', index: 4 })
        );
        assert_eq!(parse_typed("1.2.3"), Err(NumberParseError::MultipleDecimalPoints));
        assert_eq!(parse_typed("-3"), Err(NumberParseError::Negative));
        assert_eq!(
            parse_typed(",1"),
            Err(NumberParseError::MisplacedSeparator { index: 0 })
        );
        assert_eq!(
            parse_typed("1.5,"),
            Err(NumberParseError::MisplacedSeparator { index: 3 })
        );
        assert!(matches!(
            parse_typed("1e5"),
            Err(NumberParseError::InvalidCharacter { ch: 'e', .. })
        ));
    }

    #[test]
    fn test_commit_parse() {
        assert_eq!(parse_commit("12.5"), Ok(12.5));
        assert_eq!(parse_commit("-4"), Ok(-4.0));
        assert_eq!(parse_commit("12."), Ok(12.0));
        assert_eq!(parse_commit("1e+20"), Ok(1e20));
        assert_eq!(parse_commit(""), Err(NumberParseError::Empty));
        assert_eq!(parse_commit("inf"), Err(NumberParseError::NotFinite));
        assert!(matches!(parse_commit("abc"), Err(NumberParseError::Invalid(_))));
    }

    #[test]
    fn test_commit_falls_back_to_zero() {
        assert_eq!(parse_commit_or_zero("abc"), 0.0);
        assert_eq!(parse_commit_or_zero("NaN"), 0.0);
        assert_eq!(parse_commit_or_zero("7"), 7.0);
    }

    #[test]
    fn test_commit_rejects_separators_and_padding() {
        // The typing gate lets these through; committing them yields 0
        assert!(parse_typed("1,000").is_ok());
        assert!(matches!(parse_commit("1,000"), Err(NumberParseError::Invalid(_))));
        assert!(matches!(parse_commit(" 4"), Err(NumberParseError::Invalid(_))));
        assert_eq!(parse_commit_or_zero("2,500"), 0.0);
    }

    #[test]
    fn test_format_int_mode_truncates() {
        assert_eq!(format_value(12.9, true), "12");
        assert_eq!(format_value(-3.7, true), "-3");
        assert_eq!(format_value(-0.5, true), "0");
        assert_eq!(format_value(100.0, true), "100");
    }

    #[test]
    fn test_format_decimal_mode() {
        assert_eq!(format_value(12.0, false), "12.0");
        assert_eq!(format_value(12.5, false), "12.5");
        assert_eq!(format_value(0.1 + 0.2, false), "0.30000000000000004");
        assert_eq!(format_value(0.0, false), "0.0");
        assert_eq!(format_value(0.0001, false), "0.0001");
    }

    #[test]
    fn test_format_decimal_mode_exponent() {
        assert_eq!(format_value(1e20, false), "1e+20");
        assert_eq!(format_value(-1.5e16, false), "-1.5e+16");
        assert_eq!(format_value(2.5e-5, false), "2.5e-05");
        assert_eq!(format_value(1e-100, false), "1e-100");
        assert_eq!(format_value(9999999999999998.0, false), "9999999999999998.0");
    }

    #[test]
    fn test_decimal_display_reparses_to_same_value() {
        for value in [0.0, 0.1, 12.5, 99.999, 1.0 / 3.0, -42.25, 1e20, 2.5e-5, -7e-300] {
            let shown = format_value(value, false);
            assert_eq!(parse_commit(&shown), Ok(value), "{}", shown);
        }
    }
}
