//! Date-grid generation for the month view.
//!
//! Given any date inside a reference month, produces the ordered day cells
//! to display: full weeks from the week containing the first of the month
//! through the week containing the last, so adjacent-month padding days are
//! real cells that participate in event assignment.

use chrono::{Datelike, Duration, NaiveDate};

use crate::utils::date::{get_week_start, last_day_of_month};

/// One rendered date slot in the month grid, possibly outside the
/// displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

/// Build the ordered day cells for the month containing `reference`.
///
/// The result length is always a positive multiple of 7 and is
/// week-start-aligned per `first_day_of_week` (0 = Sunday).
pub fn month_grid(reference: NaiveDate, first_day_of_week: u8) -> Vec<DayCell> {
    let first_of_month = reference.with_day(1).expect("day 1 exists in every month");
    let last_of_month = reference
        .with_day(last_day_of_month(reference.year(), reference.month()))
        .expect("valid last day of month");

    let grid_start = get_week_start(first_of_month, first_day_of_week);
    let grid_end = get_week_start(last_of_month, first_day_of_week) + Duration::days(6);

    let mut cells = Vec::with_capacity(42);
    let mut day = grid_start;
    while day <= grid_end {
        cells.push(DayCell {
            date: day,
            in_current_month: day.year() == reference.year() && day.month() == reference.month(),
        });
        day += Duration::days(1);
    }
    cells
}
