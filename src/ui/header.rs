//! Month navigation header: current month title plus Previous / Today /
//! Next controls.

use chrono::NaiveDate;
use egui::RichText;

use crate::ui::theme::CalendarTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    PreviousMonth,
    NextMonth,
    Today,
}

pub fn render_header(
    ui: &mut egui::Ui,
    current_date: NaiveDate,
    theme: &CalendarTheme,
) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(current_date.format("%B %Y").to_string())
                .size(22.0)
                .strong()
                .color(theme.text_primary),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Next ▶").clicked() {
                action = HeaderAction::NextMonth;
            }
            if ui.button("Today").clicked() {
                action = HeaderAction::Today;
            }
            if ui.button("◀ Previous").clicked() {
                action = HeaderAction::PreviousMonth;
            }
        });
    });

    action
}
