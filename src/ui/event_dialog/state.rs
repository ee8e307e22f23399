use chrono::{DateTime, Local, LocalResult, NaiveDate};

use crate::models::event::{Event, EventColor};

/// State for the add-event dialog.
///
/// Validation errors are field-scoped: each offending field carries its own
/// message and the dialog stays open until every field passes.
pub struct EventDialogState {
    pub title: String,
    pub organizer: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Selected palette entry; overridden by `custom_hex` when non-empty.
    pub color: EventColor,
    pub custom_hex: String,
    pub title_error: Option<String>,
    pub end_date_error: Option<String>,
    pub color_error: Option<String>,
}

impl EventDialogState {
    /// Dialog for a new event on the clicked day; both dates start there.
    pub fn new_event(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            organizer: String::new(),
            description: String::new(),
            start_date: date,
            end_date: date,
            color: EventColor::default(),
            custom_hex: String::new(),
            title_error: None,
            end_date_error: None,
            color_error: None,
        }
    }

    fn chosen_color(&self) -> Result<EventColor, String> {
        let hex = self.custom_hex.trim();
        if hex.is_empty() {
            Ok(self.color.clone())
        } else {
            EventColor::custom(hex)
        }
    }

    fn start_end_instants(&self) -> Result<(DateTime<Local>, DateTime<Local>), String> {
        let start_naive = self.start_date.and_hms_opt(0, 0, 0).unwrap();
        let end_naive = self.end_date.and_hms_opt(0, 0, 0).unwrap();

        let start = match start_naive.and_local_timezone(Local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => {
                return Err("Start date is invalid in the local timezone".to_string());
            }
        };

        let end = match end_naive.and_local_timezone(Local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(dt, _) => dt,
            LocalResult::None => {
                return Err("End date is invalid in the local timezone".to_string());
            }
        };

        Ok((start, end))
    }

    /// Re-run all field validations. Returns true when the form is clean.
    pub fn validate(&mut self) -> bool {
        self.title_error = if self.title.trim().is_empty() {
            Some("Title is required".to_string())
        } else {
            None
        };

        self.end_date_error = if self.end_date < self.start_date {
            Some("End date cannot be before the start date".to_string())
        } else {
            None
        };

        self.color_error = self.chosen_color().err();

        self.title_error.is_none() && self.end_date_error.is_none() && self.color_error.is_none()
    }

    /// Build the event if every field validates; otherwise record the
    /// field errors and return None without touching the store.
    pub fn to_event(&mut self) -> Option<Event> {
        if !self.validate() {
            return None;
        }

        let (start, end) = match self.start_end_instants() {
            Ok(instants) => instants,
            Err(message) => {
                self.end_date_error = Some(message);
                return None;
            }
        };
        let color = self.chosen_color().ok()?;

        let mut builder = Event::builder()
            .title(self.title.trim())
            .start(start)
            .end(end)
            .color(color);
        if !self.organizer.trim().is_empty() {
            builder = builder.organizer(self.organizer.trim());
        }
        if !self.description.trim().is_empty() {
            builder = builder.description(self.description.trim());
        }

        match builder.build() {
            Ok(event) => Some(event),
            Err(message) => {
                log::warn!("Event rejected at build time: {}", message);
                self.title_error = Some(message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    fn base_state() -> EventDialogState {
        let mut state = EventDialogState::new_event(sample_date());
        state.title = "Test Event".to_string();
        state
    }

    #[test]
    fn test_new_event_starts_and_ends_on_clicked_day() {
        let state = EventDialogState::new_event(sample_date());
        assert_eq!(state.start_date, sample_date());
        assert_eq!(state.end_date, sample_date());
        assert!(state.title.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut state = base_state();
        state.title = "   ".to_string();

        assert!(!state.validate());
        assert!(state.title_error.is_some());
        assert!(state.end_date_error.is_none());
    }

    #[test]
    fn test_validate_scopes_date_error_to_end_date() {
        let mut state = base_state();
        state.end_date = state.start_date.pred_opt().unwrap();

        assert!(!state.validate());
        assert!(state.title_error.is_none());
        assert_eq!(
            state.end_date_error.as_deref(),
            Some("End date cannot be before the start date")
        );
    }

    #[test]
    fn test_validate_accepts_equal_dates() {
        let mut state = base_state();
        assert!(state.validate());
    }

    #[test]
    fn test_validate_rejects_bad_custom_hex() {
        let mut state = base_state();
        state.custom_hex = "magenta".to_string();

        assert!(!state.validate());
        assert!(state.color_error.is_some());
    }

    #[test]
    fn test_to_event_uses_midnight_instants() {
        let mut state = base_state();
        state.end_date = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();

        let event = state.to_event().expect("event should build");
        assert_eq!(event.start.date_naive(), sample_date());
        assert_eq!(event.start.time().hour(), 0);
        assert_eq!(event.end.date_naive(), state.end_date);
    }

    #[test]
    fn test_to_event_applies_chosen_color() {
        let mut state = base_state();
        state.color = EventColor::Purple;
        let event = state.to_event().unwrap();
        assert_eq!(event.color, EventColor::Purple);

        let mut state = base_state();
        state.custom_hex = "#102030".to_string();
        let event = state.to_event().unwrap();
        assert_eq!(event.color, EventColor::custom("#102030").unwrap());
    }

    #[test]
    fn test_to_event_returns_none_on_invalid_form() {
        let mut state = base_state();
        state.title.clear();
        assert!(state.to_event().is_none());
    }

    #[test]
    fn test_to_event_trims_optional_fields() {
        let mut state = base_state();
        state.organizer = "  ".to_string();
        state.description = " notes ".to_string();

        let event = state.to_event().unwrap();
        assert_eq!(event.organizer, None);
        assert_eq!(event.description, Some("notes".to_string()));
    }
}
