//! Event-to-day assignment for the month grid.
//!
//! Overlap is computed on whole-day boundaries: an event ending at any time
//! on day D still occupies D entirely. The visible ordering is by start
//! instant, then title, so a cell lists its events identically on every
//! render pass.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::{end_of_day, start_of_day};

/// Maximum number of event bars shown inside one day cell.
pub const MAX_VISIBLE_EVENTS: usize = 2;

/// Events assigned to a single day cell, split at the display cap.
#[derive(Debug, Clone, Default)]
pub struct DayEvents<'a> {
    pub visible: Vec<&'a Event>,
    pub hidden: Vec<&'a Event>,
}

impl DayEvents<'_> {
    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    /// Label for the count-of-remaining indicator, absent when every
    /// assigned event is visible.
    pub fn overflow_label(&self) -> Option<String> {
        if self.hidden.is_empty() {
            None
        } else {
            Some(format!("+{} more", self.hidden.len()))
        }
    }
}

/// Whether `event` occupies `day` under the whole-day overlap rule.
pub fn event_covers_day(event: &Event, day: NaiveDate) -> bool {
    let first = start_of_day(event.start).date_naive();
    let last = end_of_day(event.end).date_naive();
    first <= day && day <= last
}

/// All events overlapping `day`, ordered by start instant ascending with
/// titles breaking ties lexicographically.
pub fn events_for_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    let mut assigned: Vec<&Event> = events
        .iter()
        .filter(|event| event_covers_day(event, day))
        .collect();
    assigned.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.title.cmp(&b.title)));
    assigned
}

/// Assignment with the display cap applied: at most [`MAX_VISIBLE_EVENTS`]
/// bars, the remainder kept for the overflow indicator.
pub fn visible_events_for_day<'a>(events: &'a [Event], day: NaiveDate) -> DayEvents<'a> {
    let mut visible = events_for_day(events, day);
    let hidden = if visible.len() > MAX_VISIBLE_EVENTS {
        visible.split_off(MAX_VISIBLE_EVENTS)
    } else {
        Vec::new()
    };
    DayEvents { visible, hidden }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn event_on(title: &str, start_day: u32, end_day: u32) -> Event {
        let start = Local.with_ymd_and_hms(2024, 6, start_day, 9, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, end_day, 10, 0, 0).unwrap();
        Event::new(title, start, end).unwrap()
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_event_covers_every_day_of_its_span() {
        let event = event_on("Launch", 5, 7);

        assert!(!event_covers_day(&event, june(4)));
        assert!(event_covers_day(&event, june(5)));
        assert!(event_covers_day(&event, june(6)));
        assert!(event_covers_day(&event, june(7)));
        assert!(!event_covers_day(&event, june(8)));
    }

    #[test]
    fn test_event_ending_early_still_occupies_its_last_day() {
        // Ends 00:30 on June 7 - whole-day overlap still claims June 7.
        let start = Local.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, 7, 0, 30, 0).unwrap();
        let event = Event::new("Launch", start, end).unwrap();

        assert!(event_covers_day(&event, june(7)));
    }

    #[test]
    fn test_ordering_by_start_then_title() {
        let events = vec![
            event_on("B-event", 5, 5),
            event_on("A-event", 5, 5),
            event_on("Earlier", 4, 5),
        ];

        let assigned = events_for_day(&events, june(5));
        let titles: Vec<&str> = assigned.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Earlier", "A-event", "B-event"]);
    }

    #[test]
    fn test_ordering_is_stable_across_passes() {
        let events = vec![
            event_on("Gamma", 3, 9),
            event_on("Alpha", 5, 5),
            event_on("Beta", 5, 6),
            event_on("Delta", 1, 30),
        ];

        let first_pass: Vec<String> = events_for_day(&events, june(5))
            .iter()
            .map(|e| e.id.clone())
            .collect();
        for _ in 0..10 {
            let pass: Vec<String> = events_for_day(&events, june(5))
                .iter()
                .map(|e| e.id.clone())
                .collect();
            assert_eq!(pass, first_pass);
        }
    }

    #[test]
    fn test_visible_cap_and_overflow() {
        let events = vec![
            event_on("One", 5, 5),
            event_on("Two", 5, 5),
            event_on("Three", 5, 5),
            event_on("Four", 5, 5),
        ];

        let day_events = visible_events_for_day(&events, june(5));
        assert_eq!(day_events.visible.len(), MAX_VISIBLE_EVENTS);
        assert_eq!(day_events.hidden_count(), 2);
        assert_eq!(day_events.overflow_label(), Some("+2 more".to_string()));

        // The first two by ordering stay visible.
        assert_eq!(day_events.visible[0].title, "Four");
        assert_eq!(day_events.visible[1].title, "One");
    }

    #[test]
    fn test_no_overflow_indicator_at_or_below_cap() {
        let events = vec![event_on("One", 5, 5), event_on("Two", 5, 5)];

        let day_events = visible_events_for_day(&events, june(5));
        assert_eq!(day_events.visible.len(), 2);
        assert_eq!(day_events.hidden_count(), 0);
        assert_eq!(day_events.overflow_label(), None);
    }

    #[test]
    fn test_empty_store_assigns_nothing() {
        let day_events = visible_events_for_day(&[], june(5));
        assert!(day_events.visible.is_empty());
        assert!(day_events.hidden.is_empty());
    }
}
