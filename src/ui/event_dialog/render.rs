use egui::{Color32, RichText, Stroke, Vec2};
use egui_extras::DatePickerButton;

use super::state::EventDialogState;
use crate::models::event::{Event, EventColor};
use crate::ui::views::palette::event_fill;

#[derive(Default)]
pub struct EventDialogResult {
    pub saved_event: Option<Event>,
}

const FORM_LABEL_WIDTH: f32 = 100.0;
const ERROR_TEXT: Color32 = Color32::from_rgb(255, 120, 120);

pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    show_dialog: &mut bool,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();
    let mut dialog_open = *show_dialog;

    egui::Window::new("Add Event")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            render_title_field(ui, state);
            render_date_fields(ui, state);
            render_color_fields(ui, state);
            render_detail_fields(ui, state);

            ui.add_space(12.0);
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("Save").strong()).clicked() {
                    if let Some(event) = state.to_event() {
                        result.saved_event = Some(event);
                    }
                }
                if ui.button("Cancel").clicked() {
                    *show_dialog = false;
                }
            });
        });

    if !dialog_open {
        *show_dialog = false;
    }

    result
}

fn labeled_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [FORM_LABEL_WIDTH, 20.0],
            egui::Label::new(RichText::new(label).strong()),
        );
        add_contents(ui);
    });
}

fn field_error(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(message) = error {
        ui.horizontal(|ui| {
            ui.add_space(FORM_LABEL_WIDTH + 8.0);
            ui.colored_label(ERROR_TEXT, RichText::new(message).small());
        });
    }
}

fn render_title_field(ui: &mut egui::Ui, state: &mut EventDialogState) {
    labeled_row(ui, "Title:", |ui| {
        let response = ui.text_edit_singleline(&mut state.title);
        ui.label(RichText::new("*").color(ERROR_TEXT));

        if response.changed() && state.title_error.is_some() {
            let _ = state.title_error.take();
        }
    });
    field_error(ui, &state.title_error);
    ui.add_space(4.0);
}

fn render_date_fields(ui: &mut egui::Ui, state: &mut EventDialogState) {
    labeled_row(ui, "Start date:", |ui| {
        let response = ui.add(
            DatePickerButton::new(&mut state.start_date)
                .id_source("event_start_date")
                .show_icon(true),
        );
        if response.changed() {
            state.end_date_error = None;
        }
    });

    labeled_row(ui, "End date:", |ui| {
        let response = ui.add(
            DatePickerButton::new(&mut state.end_date)
                .id_source("event_end_date")
                .show_icon(true),
        );
        if response.changed() {
            state.end_date_error = None;
        }
    });
    field_error(ui, &state.end_date_error);
    ui.add_space(4.0);
}

fn render_color_fields(ui: &mut egui::Ui, state: &mut EventDialogState) {
    labeled_row(ui, "Color:", |ui| {
        for option in EventColor::palette() {
            let is_selected = state.custom_hex.trim().is_empty() && state.color == option;
            let swatch = egui::Button::new("")
                .fill(event_fill(&option))
                .min_size(Vec2::splat(22.0))
                .rounding(egui::Rounding::same(11.0))
                .stroke(if is_selected {
                    Stroke::new(2.0, ui.visuals().strong_text_color())
                } else {
                    Stroke::NONE
                });

            let response = ui.add(swatch).on_hover_text(option.label());
            if response.clicked() {
                state.color = option;
                state.custom_hex.clear();
                state.color_error = None;
            }
        }
    });

    labeled_row(ui, "Custom hex:", |ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.custom_hex)
                .hint_text("#RRGGBB")
                .desired_width(90.0),
        );
        if response.changed() {
            state.color_error = None;
        }
    });
    field_error(ui, &state.color_error);
    ui.add_space(4.0);
}

fn render_detail_fields(ui: &mut egui::Ui, state: &mut EventDialogState) {
    labeled_row(ui, "Organizer:", |ui| {
        ui.text_edit_singleline(&mut state.organizer);
    });

    labeled_row(ui, "Description:", |ui| {
        let width = ui.available_width();
        ui.add_sized(
            [width, 60.0],
            egui::TextEdit::multiline(&mut state.description),
        );
    });
}
