use crate::config::{DIGIT_COUNT, MAX_DISPLAY_VALUE, MAX_HOURS_PER_WEEK};
use once_cell::sync::Lazy;
use regex::Regex;

// Accepts "50", "$1,250.50", "75/hr", "$ 40 / hour"
static RATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\$?\s*([0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]*)?|[0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*(?:/\s*(?:h|hr|hour))?$")
        .unwrap()
});

/// Rate parsing error types for better error handling
#[derive(Debug, Clone, PartialEq)]
pub enum RateParseError {
    EmptyInput,
    Negative,
    InvalidFormat(String),
    NotFinite,
}

impl std::fmt::Display for RateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateParseError::EmptyInput => write!(f, "Enter an hourly rate"),
            RateParseError::Negative => write!(f, "Hourly rate cannot be negative"),
            RateParseError::InvalidFormat(input) => {
                write!(f, "'{}' is not a valid rate. Use: 50, $1,250.50 or 75/hr", input)
            }
            RateParseError::NotFinite => write!(f, "Hourly rate is too large"),
        }
    }
}

impl std::error::Error for RateParseError {}

/// Parse an hourly rate typed by the user.
///
/// A leading `$`, comma group separators and a trailing `/h`, `/hr` or
/// `/hour` are tolerated. The result is always finite and non-negative.
///
/// # Examples
/// ```
/// use time_value_roi::utils::parse_rate;
/// assert_eq!(parse_rate("50"), Ok(50.0));
/// assert_eq!(parse_rate("$1,250.50"), Ok(1250.5));
/// assert_eq!(parse_rate("75/hr"), Ok(75.0));
/// ```
pub fn parse_rate(input: &str) -> Result<f64, RateParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RateParseError::EmptyInput);
    }
    if trimmed.starts_with('-') {
        return Err(RateParseError::Negative);
    }

    let captures = RATE_REGEX
        .captures(trimmed)
        .ok_or_else(|| RateParseError::InvalidFormat(trimmed.to_string()))?;
    let rate: f64 = captures[1]
        .replace(',', "")
        .parse()
        .map_err(|_| RateParseError::InvalidFormat(trimmed.to_string()))?;

    if !rate.is_finite() {
        return Err(RateParseError::NotFinite);
    }
    Ok(rate)
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    let val = trimmed
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", field_name))?;
    if let Some(min_val) = min {
        if val < min_val {
            return Err(format!("{} must be at least {}", field_name, min_val));
        }
    }
    if let Some(max_val) = max {
        if val > max_val {
            return Err(format!("{} cannot exceed {}", field_name, max_val));
        }
    }
    Ok(val)
}

/// Validate the value reported by an hours-per-week slider.
pub fn validate_hours(input: &str) -> Result<u32, String> {
    validate_numeric_input(input, Some(0), Some(MAX_HOURS_PER_WEEK), "Hours per week")
}

/// Clamp to zero, round, and saturate at the widest value the display can hold.
/// NaN maps to zero.
pub fn normalize_display_value(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= MAX_DISPLAY_VALUE as f64 {
        MAX_DISPLAY_VALUE
    } else {
        rounded as u32
    }
}

/// Split an already-normalized value into its zero-padded decimal digits.
pub fn pad_digits(value: u32) -> [u8; DIGIT_COUNT] {
    let mut digits = [0u8; DIGIT_COUNT];
    let mut rest = value.min(MAX_DISPLAY_VALUE);
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a dollar amount with grouping; cents are shown only when non-zero.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let (whole, cents) = (total_cents / 100, total_cents % 100);
    if cents == 0 {
        format!("{}${}", sign, format_number(whole))
    } else {
        format!("{}${}.{:02}", sign, format_number(whole), cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_rate_accepts_plain_and_decorated_input() {
        assert_eq!(parse_rate("50"), Ok(50.0));
        assert_eq!(parse_rate("  12.5 "), Ok(12.5));
        assert_eq!(parse_rate("$1,250.50"), Ok(1250.5));
        assert_eq!(parse_rate("75/hr"), Ok(75.0));
        assert_eq!(parse_rate("$ 40 / Hour"), Ok(40.0));
        assert_eq!(parse_rate(".5"), Ok(0.5));
        assert_eq!(parse_rate("0"), Ok(0.0));
    }

    #[test]
    fn parse_rate_rejects_bad_input() {
        assert_eq!(parse_rate(""), Err(RateParseError::EmptyInput));
        assert_eq!(parse_rate("   "), Err(RateParseError::EmptyInput));
        assert_eq!(parse_rate("-5"), Err(RateParseError::Negative));
        assert_eq!(
            parse_rate("abc"),
            Err(RateParseError::InvalidFormat("abc".to_string()))
        );
        assert!(matches!(parse_rate("1,2,3"), Err(RateParseError::InvalidFormat(_))));
        assert!(matches!(parse_rate("50/day"), Err(RateParseError::InvalidFormat(_))));
    }

    #[test]
    fn parse_rate_rejects_overflowing_input() {
        let huge = "9".repeat(400);
        assert_eq!(parse_rate(&huge), Err(RateParseError::NotFinite));
    }

    #[test]
    fn validate_hours_respects_slider_bounds() {
        assert_eq!(validate_hours("0"), Ok(0));
        assert_eq!(validate_hours("20"), Ok(20));
        assert!(validate_hours("21").is_err());
        assert!(validate_hours("").is_err());
        assert!(validate_hours("x").is_err());
    }

    #[test]
    fn normalize_clamps_rounds_and_saturates() {
        assert_eq!(normalize_display_value(-10.0), 0);
        assert_eq!(normalize_display_value(f64::NAN), 0);
        assert_eq!(normalize_display_value(1349.5), 1350);
        assert_eq!(normalize_display_value(1349.4), 1349);
        assert_eq!(normalize_display_value(12_345_678.0), MAX_DISPLAY_VALUE);
        assert_eq!(normalize_display_value(f64::INFINITY), MAX_DISPLAY_VALUE);
    }

    #[test]
    fn pad_digits_left_pads_to_width() {
        assert_eq!(pad_digits(1350), [0, 0, 0, 1, 3, 5, 0]);
        assert_eq!(pad_digits(0), [0; DIGIT_COUNT]);
        assert_eq!(pad_digits(9_999_999), [9; DIGIT_COUNT]);
    }

    #[test]
    fn format_number_groups_display_and_hour_values() {
        assert_eq!(format_number(MAX_DISPLAY_VALUE as u64), "9,999,999");
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(320), "320");
        assert_eq!(format_number(1350), "1,350");
    }

    #[test]
    fn format_currency_shows_cents_only_when_needed() {
        assert_eq!(format_currency(1350.0), "$1,350");
        assert_eq!(format_currency(1250.5), "$1,250.50");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(-250.0), "-$250");
    }
}
