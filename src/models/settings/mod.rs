// Settings module

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub first_day_of_week: u8,
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            first_day_of_week: 0, // Sunday
            date_format: "MM/DD/YYYY".to_string(),
        }
    }
}

impl Settings {
    /// Week-start convention folded into 0..=6 so malformed config values
    /// cannot push the grid out of alignment.
    pub fn week_start(&self) -> u8 {
        self.first_day_of_week % 7
    }
}
