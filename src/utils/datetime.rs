use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// UTC+05:30, used for joining dates sent without an offset.
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

pub fn parse_joining_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("invalid employee_joining_date: {}", raw))?;

    ist()
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| format!("invalid employee_joining_date: {}", raw))
}

pub fn deserialize_joining_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_joining_date(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn naive_timestamps_are_read_as_ist() {
        assert_eq!(parse_joining_date("2024-01-01T10:00:00").unwrap(), utc("2024-01-01T04:30:00Z"));
        assert_eq!(parse_joining_date("2024-01-01 10:00:00.250").unwrap(), utc("2024-01-01T04:30:00.250Z"));
        assert_eq!(parse_joining_date("2024-01-01T10:00").unwrap(), utc("2024-01-01T04:30:00Z"));
    }

    #[test]
    fn explicit_offsets_are_kept() {
        assert_eq!(parse_joining_date("2024-01-01T10:00:00Z").unwrap(), utc("2024-01-01T10:00:00Z"));
        assert_eq!(parse_joining_date("2024-01-01T10:00:00-05:00").unwrap(), utc("2024-01-01T15:00:00Z"));
    }

    #[test]
    fn bare_dates_mean_midnight_ist() {
        assert_eq!(parse_joining_date("2024-01-01").unwrap(), utc("2023-12-31T18:30:00Z"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_joining_date("yesterday").is_err());
        assert!(parse_joining_date("2024-13-01T00:00:00").is_err());
        assert!(parse_joining_date("").is_err());
    }
}
