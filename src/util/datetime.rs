//! Token-based date/time formatting.

use chrono::{Datelike, Timelike};

/// Formats a date/time value against a token pattern.
///
/// Recognized tokens: `y` (year), `M` (month), `d` (day), `h` (hour),
/// `m` (minute), `s` (second), `q` (quarter), `S` (milliseconds).
/// A run of one renders the raw value; a longer run renders the value
/// zero-padded to two digits (`yyyy` renders the full year, `yy` its last
/// two digits). `S` always renders raw milliseconds. Any other character
/// is copied through.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use spanner::format_datetime;
///
/// let when = NaiveDate::from_ymd_opt(2026, 8, 7)
///     .unwrap()
///     .and_hms_milli_opt(9, 5, 3, 42)
///     .unwrap();
/// assert_eq!(format_datetime(&when, "yyyy-MM-dd hh:mm:ss"), "2026-08-07 09:05:03");
/// assert_eq!(format_datetime(&when, "yy/M/d q S"), "26/8/7 3 42");
/// ```
pub fn format_datetime<T>(value: &T, fmt: &str) -> String
where
    T: Datelike + Timelike,
{
    let millis = value.nanosecond() / 1_000_000;
    let mut out = String::with_capacity(fmt.len() + 8);
    let mut chars = fmt.chars().peekable();

    while let Some(c) = chars.next() {
        if !matches!(c, 'y' | 'M' | 'd' | 'h' | 'm' | 's' | 'q' | 'S') {
            out.push(c);
            continue;
        }
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        match c {
            'y' => {
                let year = format!("{:04}", value.year());
                if run >= year.len() {
                    out.push_str(&year);
                } else {
                    out.push_str(&year[year.len() - run..]);
                }
            }
            'S' => out.push_str(&millis.to_string()),
            _ => {
                let n = match c {
                    'M' => value.month(),
                    'd' => value.day(),
                    'h' => value.hour(),
                    'm' => value.minute(),
                    's' => value.second(),
                    // quarter
                    _ => (value.month() + 2) / 3,
                };
                if run == 1 {
                    out.push_str(&n.to_string());
                } else {
                    out.push_str(&format!("{:02}", n % 100));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_milli_opt(9, 5, 3, 42)
            .unwrap()
    }

    #[test]
    fn test_padded_tokens() {
        assert_eq!(
            format_datetime(&sample(), "yyyy-MM-dd hh:mm:ss"),
            "2026-08-07 09:05:03"
        );
    }

    #[test]
    fn test_single_tokens_render_raw() {
        assert_eq!(format_datetime(&sample(), "M-d h:m:s"), "8-7 9:5:3");
    }

    #[test]
    fn test_short_year_takes_last_digits() {
        assert_eq!(format_datetime(&sample(), "yy"), "26");
    }

    #[test]
    fn test_quarter_and_millis() {
        assert_eq!(format_datetime(&sample(), "q"), "3");
        assert_eq!(format_datetime(&sample(), "S"), "42");
    }

    #[test]
    fn test_literal_text_passes_through() {
        assert_eq!(format_datetime(&sample(), "at hh:mm"), "at 09:05");
    }
}
