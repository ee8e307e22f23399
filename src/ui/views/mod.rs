use crate::models::event::Event;

mod month_day_cell;
pub mod month_view;
pub(crate) mod palette;

pub use month_view::{MonthView, MonthViewResult};

/// Weekday column headers rotated to the configured week start.
pub(crate) fn day_names(first_day_of_week: u8) -> Vec<&'static str> {
    let all_days = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = first_day_of_week as usize;
    let mut result = Vec::with_capacity(7);
    for i in 0..7 {
        result.push(all_days[(start + i) % 7]);
    }
    result
}

/// Generate a rich tooltip string for an event.
/// Shows title, date range, organizer, and description preview.
pub(crate) fn format_event_tooltip(event: &Event) -> String {
    let mut lines = Vec::new();

    lines.push(format!("📌 {}", event.title));

    if event.is_multi_day() {
        lines.push(format!(
            "🕐 {} – {}",
            event.start.format("%b %d, %Y"),
            event.end.format("%b %d, %Y")
        ));
    } else {
        lines.push(format!("🕐 {}", event.start.format("%A, %B %d, %Y")));
    }

    if let Some(ref organizer) = event.organizer {
        if !organizer.is_empty() {
            lines.push(format!("👤 {}", organizer));
        }
    }

    if let Some(ref description) = event.description {
        if !description.is_empty() {
            let preview = if description.chars().count() > 100 {
                let cut: String = description.chars().take(100).collect();
                format!("{}...", cut)
            } else {
                description.clone()
            };
            lines.push(format!("\n📝 {}", preview));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_day_names_rotation() {
        assert_eq!(day_names(0)[0], "Sun");
        assert_eq!(day_names(1)[0], "Mon");
        assert_eq!(day_names(1)[6], "Sun");
        assert_eq!(day_names(6)[0], "Sat");
    }

    #[test]
    fn test_tooltip_includes_optional_fields() {
        let start = Local.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, 7, 9, 0, 0).unwrap();
        let event = Event::builder()
            .title("Launch")
            .start(start)
            .end(end)
            .organizer("Dana")
            .description("Ship it")
            .build()
            .unwrap();

        let tooltip = format_event_tooltip(&event);
        assert!(tooltip.contains("Launch"));
        assert!(tooltip.contains("Dana"));
        assert!(tooltip.contains("Ship it"));
        assert!(tooltip.contains("Jun 05"));
    }

    #[test]
    fn test_tooltip_single_day_shows_full_date() {
        let start = Local.with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        let event = Event::new("Standup", start, start).unwrap();

        let tooltip = format_event_tooltip(&event);
        assert!(tooltip.contains("Wednesday, June 05, 2024"));
    }
}
