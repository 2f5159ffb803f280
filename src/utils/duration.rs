//! Duration codec: parsing `1w 2d 3h 30m`-style strings into signed minute
//! counts and formatting minute counts back into canonical duration text.
//!
//! Week and day units are interpreted through the configured working week
//! (days per week, hours per day), so `1w` with the 5x8 default is 2400
//! minutes, not 7x24.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

/// Order-sensitive grammar: optional sign, then optional week, day, hour and
/// minute tokens. Each number is an integer or carries exactly a `.5`/`,5`
/// suffix; any other fraction fails to match.
fn duration_regex() -> &'static Regex {
    DURATION_RE.get_or_init(|| {
        Regex::new(
            r"^\s*(-)?\s*(?:(\d+(?:[.,]5)?)[wW])?\s*(?:(\d+(?:[.,]5)?)[dD])?\s*(?:(\d+(?:[.,]5)?)[hH])?\s*(?:(\d+(?:[.,]5)?)[mM])?\s*$",
        )
        .unwrap()
    })
}

/// Parse a duration string into signed minutes.
///
/// An empty string is a zero duration. Anything outside the grammar is an
/// `InputFormat` error and must not reach the store.
pub fn parse_duration(text: &str, working_days: u32, working_hours: u32) -> AppResult<i64> {
    let caps = duration_regex()
        .captures(text)
        .ok_or_else(|| AppError::InputFormat(text.to_string()))?;

    let number = |idx: usize| -> f64 {
        caps.get(idx)
            .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    let negative = caps.get(1).is_some();
    let week = number(2);
    let day = number(3);
    let hour = number(4);
    let minute = number(5);

    let total = (week * working_days as f64 + day) * working_hours as f64 * 60.0
        + hour * 60.0
        + minute;

    // Magnitude first so a bare "-" never yields -0.
    let minutes = total.abs().round() as i64;

    Ok(if negative { -minutes } else { minutes })
}

/// Format signed minutes as canonical duration text.
///
/// `None` (no value, as opposed to zero) propagates. An all-zero duration
/// renders as `0h`, never as an empty string.
pub fn format_duration(
    minutes: Option<i64>,
    working_days: u32,
    working_hours: u32,
) -> Option<String> {
    let total = minutes?;

    let negative = total < 0;
    let mut minute = total.abs();
    let mut hour = 0i64;
    let mut day = 0i64;
    let mut week = 0i64;

    if minute >= 60 {
        hour = minute / 60;
        minute %= 60;
    }

    let wh = working_hours as i64;
    if wh > 0 && hour >= wh {
        day = hour / wh;
        hour %= wh;
    }

    let wd = working_days as i64;
    if wd > 0 && day >= wd {
        week = day / wd;
        day %= wd;
    }

    let mut parts = Vec::new();
    if week > 0 {
        parts.push(format!("{week}w"));
    }
    if day > 0 {
        parts.push(format!("{day}d"));
    }
    if hour > 0 {
        parts.push(format!("{hour}h"));
    }
    if minute > 0 {
        parts.push(format!("{minute}m"));
    }

    let body = if parts.is_empty() {
        "0h".to_string()
    } else {
        parts.join(" ")
    };

    Some(if negative { format!("-{body}") } else { body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_units_with_default_working_week() {
        assert_eq!(parse_duration("1w", 5, 8).unwrap(), 2400);
        assert_eq!(parse_duration("1d", 5, 8).unwrap(), 480);
        assert_eq!(parse_duration("1h", 5, 8).unwrap(), 60);
        assert_eq!(parse_duration("45m", 5, 8).unwrap(), 45);
    }

    #[test]
    fn parses_combined_tokens() {
        assert_eq!(parse_duration("1w 2d 3h 30m", 5, 8).unwrap(), 3570);
        assert_eq!(parse_duration("  2h   15m ", 5, 8).unwrap(), 135);
    }

    #[test]
    fn parses_negative_durations() {
        assert_eq!(parse_duration("-1d", 5, 8).unwrap(), -480);
        assert_eq!(parse_duration("- 1h 30m", 5, 8).unwrap(), -90);
    }

    #[test]
    fn parses_half_unit_fractions() {
        assert_eq!(parse_duration("2.5h", 5, 8).unwrap(), 150);
        assert_eq!(parse_duration("2,5h", 5, 8).unwrap(), 150);
        assert_eq!(parse_duration("0.5d", 5, 8).unwrap(), 240);
        assert_eq!(parse_duration("0,5w", 5, 8).unwrap(), 1200);
    }

    #[test]
    fn half_minute_rounds_up_on_magnitude() {
        assert_eq!(parse_duration("0.5m", 5, 8).unwrap(), 1);
        assert_eq!(parse_duration("-0.5m", 5, 8).unwrap(), -1);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(parse_duration("", 5, 8).unwrap(), 0);
        assert_eq!(parse_duration("   ", 5, 8).unwrap(), 0);
    }

    #[test]
    fn bare_sign_never_yields_negative_zero() {
        assert_eq!(parse_duration("-", 5, 8).unwrap(), 0);
    }

    #[test]
    fn rejects_unknown_units_and_fractions() {
        assert!(matches!(
            parse_duration("3x", 5, 8),
            Err(AppError::InputFormat(_))
        ));
        assert!(matches!(
            parse_duration("1.2h", 5, 8),
            Err(AppError::InputFormat(_))
        ));
        assert!(matches!(
            parse_duration("1h 1w", 5, 8),
            Err(AppError::InputFormat(_))
        ));
    }

    #[test]
    fn respects_custom_working_week() {
        assert_eq!(parse_duration("1w", 4, 6).unwrap(), 1440);
        assert_eq!(parse_duration("1d", 5, 6).unwrap(), 360);
    }

    #[test]
    fn formats_zero_and_none() {
        assert_eq!(format_duration(Some(0), 5, 8).unwrap(), "0h");
        assert_eq!(format_duration(None, 5, 8), None);
    }

    #[test]
    fn formats_negative_values() {
        assert_eq!(format_duration(Some(-90), 5, 8).unwrap(), "-1h 30m");
    }

    #[test]
    fn carries_units_upward() {
        assert_eq!(format_duration(Some(2400), 5, 8).unwrap(), "1w");
        assert_eq!(format_duration(Some(3570), 5, 8).unwrap(), "1w 2d 3h 30m");
        assert_eq!(format_duration(Some(150), 5, 8).unwrap(), "2h 30m");
    }

    #[test]
    fn round_trips_on_total_minutes() {
        for input in ["1w", "2d 3h", "-1d 30m", "4h 59m", "1w 4d 7h 59m"] {
            let minutes = parse_duration(input, 5, 8).unwrap();
            let formatted = format_duration(Some(minutes), 5, 8).unwrap();
            assert_eq!(parse_duration(&formatted, 5, 8).unwrap(), minutes);
        }
    }
}
