// Event module
// Core event record rendered in the month grid

use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

/// Fixed palette of named event colors, plus a validated custom hex value.
///
/// The palette matches the colors offered by the add-event dialog; `Custom`
/// carries a `#RRGGBB` string that has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventColor {
    Default,
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Custom(String),
}

impl EventColor {
    /// Build a `Custom` color from a hex string, rejecting anything that is
    /// not a `#RRGGBB` value.
    pub fn custom(hex: impl Into<String>) -> Result<Self, String> {
        let hex = hex.into();
        validate_hex(&hex)?;
        Ok(Self::Custom(hex))
    }

    /// The named palette entries offered in the dialog, in display order.
    pub fn palette() -> [EventColor; 6] {
        [
            Self::Default,
            Self::Blue,
            Self::Red,
            Self::Green,
            Self::Yellow,
            Self::Purple,
        ]
    }

    /// Resolved `#RRGGBB` value used for rendering.
    pub fn as_hex(&self) -> &str {
        match self {
            Self::Default => "#6B7280",
            Self::Blue => "#3B82F6",
            Self::Red => "#EF4444",
            Self::Green => "#22C55E",
            Self::Yellow => "#EAB308",
            Self::Purple => "#A855F7",
            Self::Custom(hex) => hex,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Purple => "Purple",
            Self::Custom(_) => "Custom",
        }
    }
}

impl Default for EventColor {
    fn default() -> Self {
        Self::Default
    }
}

fn validate_hex(hex: &str) -> Result<(), String> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| "Color must be in hex format (#RRGGBB)".to_string())?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Color must be in hex format (#RRGGBB)".to_string());
    }
    Ok(())
}

/// Calendar event spanning one or more whole days in the month grid
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: EventColor,
    pub organizer: Option<String>,
    pub description: Option<String>,
}

impl Event {
    /// Create a new event with required fields and a fresh identifier
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start instant
    /// * `end` - Event end instant (`end >= start`)
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if end < start {
            return Err("Event end must not be before its start".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title,
            start,
            end,
            color: EventColor::default(),
            organizer: None,
            description: None,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end < self.start {
            return Err("Event end must not be before its start".to_string());
        }

        if let EventColor::Custom(ref hex) = self.color {
            validate_hex(hex)?;
        }

        Ok(())
    }

    /// Calendar date of the event's start instant.
    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date of the event's end instant.
    pub fn last_day(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Whether the event spans more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        self.first_day() != self.last_day()
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    color: EventColor,
    organizer: Option<String>,
    description: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            start: None,
            end: None,
            color: EventColor::default(),
            organizer: None,
            description: None,
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start instant
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end instant
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color
    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    /// Set the event organizer
    pub fn organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = Some(organizer.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the event, generating a fresh unique identifier
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start is required")?;
        let end = self.end.ok_or("Event end is required")?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title,
            start,
            end,
            color: self.color,
            organizer: self.organizer,
            description: self.description,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
