//! Wikibase timestamp parsing.
//!
//! Time values arrive as `+YYYY…-MM-DDTHH:MM:SSZ` strings. The year is
//! signed and may run to eleven or more digits (`-4540000000-00-00T00:00:00Z`),
//! and a month or day of `00` means the field is unknown.

use crate::error::DecodeError;
use crate::limits::MAX_TIME_LEN;
use crate::model::RawTime;

fn invalid(value: &str, reason: &'static str) -> DecodeError {
    DecodeError::InvalidTime {
        value: value.to_string(),
        reason,
    }
}

/// Parses a two-digit field, checking it against an inclusive upper bound.
fn parse_field(value: &str, field: &str, max: u8, reason: &'static str) -> Result<u8, DecodeError> {
    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(value, reason));
    }
    let n: u8 = field.parse().map_err(|_| invalid(value, reason))?;
    if n > max {
        return Err(invalid(value, reason));
    }
    Ok(n)
}

/// Parses a Wikibase timestamp into raw calendar fields.
///
/// The time-of-day part is optional; when present it must be `HH:MM:SS`
/// with an optional trailing `Z`. Month and day of `00` become `None`.
pub fn parse_wikibase_time(value: &str) -> Result<RawTime, DecodeError> {
    if value.len() > MAX_TIME_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            field: "time",
            len: value.len(),
            max: MAX_TIME_LEN,
        });
    }

    let (negative, rest) = match value.as_bytes().first() {
        Some(b'+') => (false, &value[1..]),
        Some(b'-') => (true, &value[1..]),
        Some(_) => (false, value),
        None => return Err(invalid(value, "empty timestamp")),
    };

    let (date, time) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let mut parts = date.rsplitn(3, '-');
    let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid(value, "expected YEAR-MM-DD"));
    };

    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(value, "year is not numeric"));
    }
    let magnitude: i64 = year.parse().map_err(|_| invalid(value, "year out of range"))?;
    let year = if negative { -magnitude } else { magnitude };

    let nonzero = |n: u8| (n != 0).then_some(n);
    let month = nonzero(parse_field(value, month, 12, "month out of range")?);
    let day = nonzero(parse_field(value, day, 31, "day out of range")?);

    let (hour, minute, second) = match time {
        None => (None, None, None),
        Some(time) => {
            let time = time.strip_suffix('Z').unwrap_or(time);
            let mut fields = time.split(':');
            let (Some(h), Some(m), Some(s), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(invalid(value, "expected HH:MM:SS"));
            };
            (
                Some(parse_field(value, h, 23, "hour out of range")?),
                Some(parse_field(value, m, 59, "minute out of range")?),
                Some(parse_field(value, s, 60, "second out of range")?),
            )
        }
    };

    Ok(RawTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_timestamp() {
        let raw = parse_wikibase_time("+1972-05-01T15:43:04Z").unwrap();
        assert_eq!(raw.year, 1972);
        assert_eq!(raw.month, Some(5));
        assert_eq!(raw.day, Some(1));
        assert_eq!(raw.hour, Some(15));
        assert_eq!(raw.minute, Some(43));
        assert_eq!(raw.second, Some(4));
    }

    #[test]
    fn test_parse_unknown_month_and_day() {
        let raw = parse_wikibase_time("+1405-00-00T00:00:00Z").unwrap();
        assert_eq!(raw.year, 1405);
        assert_eq!(raw.month, None);
        assert_eq!(raw.day, None);
    }

    #[test]
    fn test_parse_deep_time() {
        let raw = parse_wikibase_time("-4540000000-00-00T00:00:00Z").unwrap();
        assert_eq!(raw.year, -4_540_000_000);

        let raw = parse_wikibase_time("-10001-00-00T00:00:00Z").unwrap();
        assert_eq!(raw.year, -10_001);
    }

    #[test]
    fn test_parse_date_only() {
        let raw = parse_wikibase_time("+2024-03-15").unwrap();
        assert_eq!((raw.year, raw.month, raw.day), (2024, Some(3), Some(15)));
        assert_eq!(raw.hour, None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_wikibase_time("").is_err());
        assert!(parse_wikibase_time("+1972").is_err());
        assert!(parse_wikibase_time("+1972-13-01T00:00:00Z").is_err());
        assert!(parse_wikibase_time("+1972-05-01T24:00:00Z").is_err());
        assert!(parse_wikibase_time("+19x2-05-01T00:00:00Z").is_err());
        assert!(parse_wikibase_time("+1972-05-01T00:00Z").is_err());
        assert!(matches!(
            parse_wikibase_time(&format!("+{}-01-01", "9".repeat(60))),
            Err(DecodeError::LengthExceedsLimit { field: "time", .. })
        ));
    }
}
