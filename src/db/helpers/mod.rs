use std::convert::TryFrom;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

pub fn to_u64(value: i64, field: &str) -> Result<u64> {
    u64::try_from(value).map_err(|_| anyhow!("{field} contains negative value {value}"))
}

/// Fixed-width UTC timestamps so that text comparison matches time order.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_optional_datetime(
    value: Option<String>,
    field: &str,
) -> Result<Option<DateTime<Utc>>> {
    match value {
        Some(raw) => parse_datetime(&raw, field).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn formatted_timestamps_sort_chronologically() {
        let base = parse_datetime("2026-03-14T12:00:00Z", "t").unwrap();
        let later = base + Duration::milliseconds(500);
        assert!(format_datetime(&base) < format_datetime(&later));
        assert_eq!(format_datetime(&base), "2026-03-14T12:00:00.000000Z");
    }

    #[test]
    fn round_trips_through_text() {
        let ts = parse_datetime("2026-03-14T12:00:00.123456Z", "t").unwrap();
        assert_eq!(parse_datetime(&format_datetime(&ts), "t").unwrap(), ts);
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(to_u64(-1, "count").is_err());
        assert_eq!(to_u64(4, "count").unwrap(), 4);
    }
}
