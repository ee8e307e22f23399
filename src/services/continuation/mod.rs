//! Continuation classification for multi-day event bars.
//!
//! Pure functions of (event, day, week start): whether the assigned day is
//! the event's first day, last day, both, or an interior day, which edge of
//! the bar gets rounded, and whether the title is drawn in this cell.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::get_week_start;

/// Shape of one event bar within a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentShape {
    /// Single-day event, rounded on both edges.
    Full,
    /// First day of a multi-day bar, the bar continues rightward.
    Left,
    /// Last day of a multi-day bar, the bar continues leftward.
    Right,
    /// Interior day, square on both edges.
    Middle,
}

/// Presentation classification of one event on one assigned day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub is_start: bool,
    pub is_end: bool,
    /// The title is drawn on the start day and again whenever the bar wraps
    /// onto a new week row; other cells keep the bar unlabeled.
    pub shows_label: bool,
}

impl Segment {
    pub fn classify(event: &Event, day: NaiveDate, first_day_of_week: u8) -> Self {
        let is_start = event.first_day() == day;
        let is_end = event.last_day() == day;
        let starts_week_row = get_week_start(day, first_day_of_week) == day;
        Self {
            is_start,
            is_end,
            shows_label: is_start || starts_week_row,
        }
    }

    pub fn shape(&self) -> SegmentShape {
        match (self.is_start, self.is_end) {
            (true, true) => SegmentShape::Full,
            (true, false) => SegmentShape::Left,
            (false, true) => SegmentShape::Right,
            (false, false) => SegmentShape::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use test_case::test_case;

    fn launch_event() -> Event {
        // Wednesday June 5 through Friday June 7, 2024
        let start = Local.with_ymd_and_hms(2024, 6, 5, 14, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, 7, 16, 0, 0).unwrap();
        Event::new("Launch", start, end).unwrap()
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test_case(5, true, false, SegmentShape::Left; "start day rounds left")]
    #[test_case(6, false, false, SegmentShape::Middle; "middle day is square")]
    #[test_case(7, false, true, SegmentShape::Right; "end day rounds right")]
    fn test_multi_day_classification(
        day: u32,
        is_start: bool,
        is_end: bool,
        shape: SegmentShape,
    ) {
        let segment = Segment::classify(&launch_event(), june(day), 0);
        assert_eq!(segment.is_start, is_start);
        assert_eq!(segment.is_end, is_end);
        assert_eq!(segment.shape(), shape);
    }

    #[test]
    fn test_single_day_event_is_full() {
        let start = Local.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, 5, 17, 0, 0).unwrap();
        let event = Event::new("Standup", start, end).unwrap();

        let segment = Segment::classify(&event, june(5), 0);
        assert!(segment.is_start && segment.is_end);
        assert_eq!(segment.shape(), SegmentShape::Full);
    }

    #[test]
    fn test_label_on_start_day_only_within_a_week() {
        let event = launch_event();

        assert!(Segment::classify(&event, june(5), 0).shows_label);
        assert!(!Segment::classify(&event, june(6), 0).shows_label);
        assert!(!Segment::classify(&event, june(7), 0).shows_label);
    }

    #[test]
    fn test_label_reappears_when_bar_wraps_to_new_row() {
        // Spans Wednesday June 5 through Tuesday June 11; June 9 is the
        // Sunday starting the next week row.
        let start = Local.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, 11, 9, 0, 0).unwrap();
        let event = Event::new("Sprint", start, end).unwrap();

        assert!(Segment::classify(&event, june(9), 0).shows_label);
        assert!(!Segment::classify(&event, june(10), 0).shows_label);
    }

    #[test]
    fn test_label_row_break_follows_week_start_setting() {
        let start = Local.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, 11, 9, 0, 0).unwrap();
        let event = Event::new("Sprint", start, end).unwrap();

        // Monday week start: the row break falls on June 10 instead.
        assert!(!Segment::classify(&event, june(9), 1).shows_label);
        assert!(Segment::classify(&event, june(10), 1).shows_label);
    }

    #[test]
    fn test_classification_is_referentially_consistent() {
        let event = launch_event();
        let a = Segment::classify(&event, june(6), 0);
        let b = Segment::classify(&event, june(6), 0);
        assert_eq!(a, b);
    }
}
