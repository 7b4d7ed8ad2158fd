//! Wall clock for the landing page, pinned to New York time.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc, Weekday};

const EST_OFFSET_SECS: i32 = -5 * 3600;
const EDT_OFFSET_SECS: i32 = -4 * 3600;

/// US Eastern offset at `utc`. Daylight time runs from the second Sunday of
/// March (02:00 EST) to the first Sunday of November (02:00 EDT).
pub fn new_york_offset(utc: DateTime<Utc>) -> FixedOffset {
    let year = utc.year();
    let starts = NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2)
        .and_then(|d| d.and_hms_opt(7, 0, 0));
    let ends = NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1)
        .and_then(|d| d.and_hms_opt(6, 0, 0));
    let now = utc.naive_utc();
    let daylight = matches!((starts, ends), (Some(s), Some(e)) if now >= s && now < e);
    let secs = if daylight {
        EDT_OFFSET_SECS
    } else {
        EST_OFFSET_SECS
    };
    FixedOffset::east_opt(secs).unwrap_or_else(|| Utc.fix())
}

/// e.g. "03:07 PM"
pub fn new_york_time(utc: DateTime<Utc>) -> String {
    utc.with_timezone(&new_york_offset(utc))
        .format("%I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_standard_and_daylight_time() {
        assert_eq!(new_york_time(at(2024, 1, 15, 17, 30)), "12:30 PM");
        assert_eq!(new_york_time(at(2024, 7, 1, 12, 0)), "08:00 AM");
        assert_eq!(new_york_time(at(2024, 12, 31, 4, 5)), "11:05 PM");
    }

    #[test]
    fn test_dst_boundaries() {
        // 2024-03-10 is the second Sunday of March
        assert_eq!(new_york_time(at(2024, 3, 10, 6, 59)), "01:59 AM");
        assert_eq!(new_york_time(at(2024, 3, 10, 7, 0)), "03:00 AM");
        // 2024-11-03 is the first Sunday of November
        assert_eq!(new_york_time(at(2024, 11, 3, 5, 59)), "01:59 AM");
        assert_eq!(new_york_time(at(2024, 11, 3, 6, 0)), "01:00 AM");
    }
}
