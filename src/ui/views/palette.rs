use egui::Color32;

use crate::models::event::EventColor;
use crate::ui::theme::CalendarTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub outside_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub hover_border: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            outside_bg: theme.calendar_background,
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            muted_text: theme.text_secondary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DayStripPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub strip_border: Color32,
}

impl DayStripPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            header_bg: theme.header_background,
            header_text: theme.header_text,
            strip_border: theme.day_border,
        }
    }
}

/// Fill color for an event bar. Validated at construction, so a parse
/// failure only happens for hand-built events and falls back to the
/// default bar color.
pub(crate) fn event_fill(color: &EventColor) -> Color32 {
    CalendarTheme::hex_to_color(color.as_hex()).unwrap_or(Color32::from_rgb(100, 150, 200))
}
