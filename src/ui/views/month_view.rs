use chrono::{Local, NaiveDate};
use egui::{Color32, Margin, Stroke, Vec2};

use super::month_day_cell::render_day_cell;
use super::palette::{CalendarCellPalette, DayStripPalette};
use crate::models::settings::Settings;
use crate::services::assignment::visible_events_for_day;
use crate::services::calendar::CalendarState;
use crate::services::grid::month_grid;
use crate::ui::theme::CalendarTheme;

/// Result returned from the month view
#[derive(Default)]
pub struct MonthViewResult {
    /// Day cell the user clicked to create an event there
    pub clicked_date: Option<NaiveDate>,
}

/// Blend header color for weekend columns (slightly darker/lighter)
fn blend_header_weekend(header_bg: Color32, is_dark: bool) -> Color32 {
    let factor = if is_dark { 1.15 } else { 0.92 };
    Color32::from_rgb(
        ((header_bg.r() as f32 * factor).min(255.0)) as u8,
        ((header_bg.g() as f32 * factor).min(255.0)) as u8,
        ((header_bg.b() as f32 * factor).min(255.0)) as u8,
    )
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        state: &CalendarState,
        settings: &Settings,
        theme: &CalendarTheme,
    ) -> MonthViewResult {
        let today = Local::now().date_naive();
        let mut result = MonthViewResult::default();
        let first_day_of_week = settings.week_start();

        let spacing = 2.0;
        let total_spacing = spacing * 6.0; // 6 gaps between 7 columns
        let col_width = (ui.available_width() - total_spacing) / 7.0;

        // Day of week headers - use Grid to match column widths below
        let day_strip_palette = DayStripPalette::from_theme(theme);
        egui::Grid::new("month_header_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for (idx, day) in super::day_names(first_day_of_week).iter().enumerate() {
                    let weekday = (first_day_of_week as usize + idx) % 7;
                    let is_weekend = weekday == 0 || weekday == 6;
                    let header_bg = if is_weekend {
                        blend_header_weekend(day_strip_palette.header_bg, theme.is_dark)
                    } else {
                        day_strip_palette.header_bg
                    };

                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 30.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, day_strip_palette.strip_border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(*day)
                                                .size(14.0)
                                                .color(day_strip_palette.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
                ui.end_row();
            });

        ui.add_space(5.0);

        // Build the padded grid; adjacent-month cells render dimmed but
        // still carry their assigned events.
        let cells = month_grid(state.current_date(), first_day_of_week);
        let palette = CalendarCellPalette::from_theme(theme);

        egui::Grid::new("month_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for week in cells.chunks(7) {
                    for cell in week {
                        let day_events = visible_events_for_day(state.events(), cell.date);
                        let clicked = render_day_cell(
                            ui,
                            cell,
                            today,
                            first_day_of_week,
                            &day_events,
                            palette,
                            col_width,
                        );
                        if clicked {
                            result.clicked_date = Some(cell.date);
                        }
                    }
                    ui.end_row();
                }
            });

        result
    }
}
