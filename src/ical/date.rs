//! Conversion of iCal `DATE` and `DATE-TIME` values into timestamps

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// A point in time. `None` means the source value could not be understood
pub type Timestamp = Option<DateTime<Utc>>;

/// Parse the value of a `DTSTART`-like property.
///
/// * `20240115T140000Z` is a UTC date-time
/// * `20240115` is an all-day date, that starts at midnight in the _local_ time zone
/// * anything else is given to a best-effort parser
///
/// This never fails: values that cannot be understood give `None`.
pub fn parse_date(raw: &str) -> Timestamp {
    if raw.contains('T') {
        parse_utc_date_time(raw).or_else(|| parse_generic(raw))
    } else if raw.chars().count() == 8 {
        parse_local_date(raw)
    } else {
        log::debug!("Unusual date format {:?}, trying a generic parser", raw);
        parse_generic(raw)
    }
}

/// `YYYYMMDDTHHMMSSZ`, interpreted as UTC. The trailing `Z` is optional
fn parse_utc_date_time(raw: &str) -> Timestamp {
    let compact = raw.strip_suffix('Z').unwrap_or(raw);
    NaiveDateTime::parse_from_str(compact, "%Y%m%dT%H%M%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `YYYYMMDD`, at local midnight.
///
/// Out-of-range months and days roll over (`20240230` is March 1st, `20241301` is January 1st of the next year).
fn parse_local_date(raw: &str) -> Timestamp {
    let date = rolled_over_date(raw)?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn rolled_over_date(raw: &str) -> Option<NaiveDate> {
    if raw.bytes().all(|b| b.is_ascii_digit()) == false {
        return None;
    }
    let year: i32 = raw[0..4].parse().ok()?;
    let month: i32 = raw[4..6].parse().ok()?;
    let day: i64 = raw[6..8].parse().ok()?;

    let months = year * 12 + month - 1;
    let first_of_month = NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1)?;
    first_of_month.checked_add_signed(Duration::days(day - 1))
}

fn parse_generic(raw: &str) -> Timestamp {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // A bare ISO date is a UTC midnight, while a date-time without an offset is a local time
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Local.from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));
    }
    None
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_utc_date_time() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).single();
        assert_eq!(parse_date("20240115T140000Z"), expected);
        assert_eq!(parse_date("20240115T140000"), expected);
    }

    #[test]
    fn test_all_day_date_is_local_midnight() {
        let expected = Local.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).earliest().map(|dt| dt.with_timezone(&Utc));
        assert_eq!(parse_date("20240115"), expected);
        assert_eq!(
            parse_date("20240115").map(|dt| dt.with_timezone(&Local).date_naive()),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_all_day_date_rolls_over() {
        let local_day = |raw: &str| parse_date(raw).map(|dt| dt.with_timezone(&Local).date_naive());
        assert_eq!(local_day("20240230"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(local_day("20230229"), NaiveDate::from_ymd_opt(2023, 3, 1));
        assert_eq!(local_day("20241345"), NaiveDate::from_ymd_opt(2025, 2, 14));
        assert_eq!(local_day("20240100"), NaiveDate::from_ymd_opt(2023, 12, 31));
        assert_eq!(local_day("20240001"), NaiveDate::from_ymd_opt(2023, 12, 1));
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(parse_date("2024-01-15"), Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single());
        assert_eq!(parse_date("2024-01-15T14:00:00+01:00"), Utc.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).single());
        assert_eq!(parse_date("Mon, 15 Jan 2024 14:00:00 +0000"), Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).single());
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date("2024011x"), None);
        assert_eq!(parse_date("2024T"), None);
    }
}
