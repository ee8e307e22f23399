//! Calendar state controller: the reference date and the event store.
//!
//! Single owner of all mutable widget state. Rendering components receive
//! it as an explicit parameter; nothing reads it through globals.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::event::{Event, EventColor};
use crate::utils::date::last_day_of_month;

pub struct CalendarState {
    current_date: NaiveDate,
    events: Vec<Event>,
}

impl CalendarState {
    pub fn new(current_date: NaiveDate) -> Self {
        Self {
            current_date,
            events: Vec::new(),
        }
    }

    /// State anchored on today, seeded with the demo event the original
    /// app ships with.
    pub fn with_demo_event() -> Self {
        let now = Local::now();
        let mut state = Self::new(now.date_naive());
        let demo = Event::builder()
            .title("Project Launch 🚀")
            .start(now)
            .end(now + Duration::days(10))
            .color(EventColor::Blue)
            .build()
            .expect("demo event is valid");
        state.add_event(demo);
        state
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Append an event. The store performs no validation; the form
    /// controller is responsible for rejecting invalid candidates.
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn next_month(&mut self) {
        self.current_date = shift_month_preserving_day(self.current_date, 1);
    }

    pub fn previous_month(&mut self) {
        self.current_date = shift_month_preserving_day(self.current_date, -1);
    }

    pub fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }
}

fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, current.day())
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> NaiveDate {
    let max_day = last_day_of_month(year, month);
    let day = desired_day.min(max_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, max_day))
        .expect("valid calendar date")
}
