use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::RecordTimeError;

/// This is the standard way of writing an activity timestamp in actilog, both in the input log
/// and in the reports.
pub const RECORD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a timestamp in exactly [RECORD_TIME_FORMAT]. chrono alone accepts unpadded fields,
/// signed years and extra whitespace, so the value must also format back to itself.
pub fn parse_record_time(value: &str) -> Result<NaiveDateTime, RecordTimeError> {
    let parsed = NaiveDateTime::parse_from_str(value, RECORD_TIME_FORMAT)?;
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(RecordTimeError::LeapSecond);
    }
    if format_record_time(parsed) != value {
        return Err(RecordTimeError::NotExact);
    }
    Ok(parsed)
}

pub fn format_record_time(value: NaiveDateTime) -> String {
    value.format(RECORD_TIME_FORMAT).to_string()
}

/// Ordinal day in the year, starting at 1. Year itself is dropped.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    #[test]
    fn parses_and_formats_record_time() {
        let time = parse_record_time("2021-03-01 23:00:05").unwrap();
        assert_eq!(
            time,
            NaiveDate::from_ymd_opt(2021, 3, 1)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(23, 0, 5).unwrap())
        );
        assert_eq!(format_record_time(time), "2021-03-01 23:00:05");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_record_time("2021/03/01 23:00:05").is_err());
        assert!(parse_record_time("2021-03-01T23:00:05").is_err());
        assert!(parse_record_time("2021-03-01").is_err());
    }

    #[test]
    fn rejects_loose_fields() {
        for value in [
            "2021-3-1 1:2:3",
            "2021-03-01  23:00:00",
            "2021-03-0123:00:00",
            "+2021-03-01 23:00:00",
            "21-03-01 23:00:00",
        ] {
            assert!(
                matches!(
                    parse_record_time(value),
                    Err(RecordTimeError::NotExact | RecordTimeError::Parse(_))
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_leap_second() {
        assert!(matches!(
            parse_record_time("2021-03-01 23:00:60"),
            Err(RecordTimeError::LeapSecond)
        ));
    }

    #[test]
    fn day_of_year_ignores_year() {
        assert_eq!(day_of_year(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()), 1);
        assert_eq!(day_of_year(NaiveDate::from_ymd_opt(2021, 3, 13).unwrap()), 72);
        assert_eq!(day_of_year(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()), 366);
    }
}
