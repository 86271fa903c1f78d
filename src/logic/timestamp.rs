//! Creation-timestamp formatting in the Brazilian Portuguese convention.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Placeholder rendered for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Data inválida";

/// `dd/mm/aaaa, HH:MM:SS` with a 24-hour clock, as `pt-BR` locales print it.
const PT_BR_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Offset-less date-time layouts accepted from the service.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// What: Format a serialized timestamp for display in local time.
///
/// Inputs:
/// - `raw`: ISO-8601-like string from the service
///
/// Output:
/// - Formatted string, or [`INVALID_DATE`] when `raw` does not parse
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// What: Format a serialized timestamp in an explicit display time zone.
///
/// Inputs:
/// - `raw`: ISO-8601-like string
/// - `tz`: Time zone the viewer reads dates in
///
/// Output:
/// - `dd/mm/aaaa, HH:MM:SS` in `tz`, or [`INVALID_DATE`]
///
/// Details:
/// - RFC 3339 values (with `Z` or an offset) are converted into `tz`.
/// - Offset-less date-times are read as wall-clock time in `tz`.
/// - A bare date is read as midnight UTC.
/// - Never panics.
#[must_use]
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp(raw.trim(), tz).map_or_else(
        || {
            tracing::debug!(raw, "unparseable created_at value");
            INVALID_DATE.to_string()
        },
        |dt| dt.format(PT_BR_FORMAT).to_string(),
    )
}

/// What: Parse the accepted timestamp layouts into `tz`.
///
/// Output:
/// - `Some(DateTime<Tz>)` on success; `None` for anything unrecognised
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(tz));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn brasilia() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).expect("valid offset")
    }

    /// What: UTC instants are converted into the display zone.
    ///
    /// Inputs:
    /// - `2024-01-01T10:00:00Z` shown in UTC and in UTC-3
    ///
    /// Output:
    /// - Day/month/year order and 24-hour time in both
    #[test]
    fn formats_rfc3339_in_pt_br_convention() {
        assert_eq!(
            format_timestamp_in("2024-01-01T10:00:00Z", &Utc),
            "01/01/2024, 10:00:00"
        );
        assert_eq!(
            format_timestamp_in("2024-01-01T10:00:00Z", &brasilia()),
            "01/01/2024, 07:00:00"
        );
        assert_eq!(
            format_timestamp_in("2024-12-31T23:30:05.123456+00:00", &Utc),
            "31/12/2024, 23:30:05"
        );
    }

    #[test]
    fn crosses_day_boundary_when_converting() {
        assert_eq!(
            format_timestamp_in("2024-02-01T01:15:00Z", &brasilia()),
            "31/01/2024, 22:15:00"
        );
    }

    /// What: Offset-less values are wall-clock time in the display zone.
    #[test]
    fn naive_values_are_local_wall_clock() {
        assert_eq!(
            format_timestamp_in("2024-03-05T18:09:10", &brasilia()),
            "05/03/2024, 18:09:10"
        );
        assert_eq!(
            format_timestamp_in("2024-03-05 18:09:10.5", &Utc),
            "05/03/2024, 18:09:10"
        );
        assert_eq!(
            format_timestamp_in("2024-03-05 18:09:10+00:00", &Utc),
            "05/03/2024, 18:09:10"
        );
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        assert_eq!(format_timestamp_in("2024-03-05", &Utc), "05/03/2024, 00:00:00");
    }

    /// What: Garbage never escapes as a panic.
    ///
    /// Inputs:
    /// - Empty, free text, impossible dates
    ///
    /// Output:
    /// - The invalid-date placeholder
    #[test]
    fn invalid_values_fail_closed() {
        for raw in ["", "   ", "ontem", "2024-13-45T99:00:00Z", "1700000000"] {
            assert_eq!(format_timestamp_in(raw, &Utc), INVALID_DATE, "{raw:?}");
        }
        assert_eq!(format_timestamp("not a date"), INVALID_DATE);
    }
}
