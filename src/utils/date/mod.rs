// Date utility functions

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

pub fn end_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(23, 59, 59)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    date - Duration::days(offset)
}

/// Last valid day number of the given month (28-31).
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test]
    fn test_get_week_start_sunday() {
        // Wednesday, Dec 4, 2024
        let date = NaiveDate::from_ymd_opt(2024, 12, 4).unwrap();
        // Week starts on Sunday (0)
        let start = get_week_start(date, 0);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }

    #[test]
    fn test_get_week_start_monday() {
        // Wednesday, Dec 4, 2024
        let date = NaiveDate::from_ymd_opt(2024, 12, 4).unwrap();
        // Week starts on Monday (1)
        let start = get_week_start(date, 1);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
    }

    #[test]
    fn test_get_week_start_on_week_start_is_identity() {
        let sunday = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(get_week_start(sunday, 0), sunday);
    }

    #[test]
    fn test_day_boundaries() {
        let noon = Local.with_ymd_and_hms(2024, 6, 5, 12, 30, 0).unwrap();
        assert_eq!(
            start_of_day(noon),
            Local.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(
            end_of_day(noon),
            Local.with_ymd_and_hms(2024, 6, 5, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_is_same_day() {
        let morning = Local.with_ymd_and_hms(2024, 6, 5, 8, 0, 0).unwrap();
        let evening = Local.with_ymd_and_hms(2024, 6, 5, 22, 0, 0).unwrap();
        let next_day = Local.with_ymd_and_hms(2024, 6, 6, 8, 0, 0).unwrap();

        assert!(is_same_day(morning, evening));
        assert!(!is_same_day(morning, next_day));
    }

    #[test_case(2024, 1 => 31)]
    #[test_case(2024, 2 => 29; "leap february")]
    #[test_case(2025, 2 => 28; "non-leap february")]
    #[test_case(2024, 4 => 30)]
    #[test_case(2024, 12 => 31; "december crosses year")]
    fn test_last_day_of_month(year: i32, month: u32) -> u32 {
        last_day_of_month(year, month)
    }
}
