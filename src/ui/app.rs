use chrono::NaiveDate;

use crate::models::settings::Settings;
use crate::services::calendar::CalendarState;
use crate::ui::event_dialog::{render_event_dialog, EventDialogState};
use crate::ui::header::{render_header, HeaderAction};
use crate::ui::theme::CalendarTheme;
use crate::ui::views::MonthView;

pub struct CalendarApp {
    /// Single owner of the reference date and the event store
    state: CalendarState,
    settings: Settings,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    show_event_dialog: bool,
    event_dialog_state: Option<EventDialogState>,
}

impl CalendarApp {
    /// The state controller is a mandatory parameter: the app cannot be
    /// constructed without one.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: CalendarState,
        settings: Settings,
    ) -> Self {
        let active_theme = CalendarTheme::from_name(&settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            state,
            settings,
            active_theme,
            show_event_dialog: false,
            event_dialog_state: None,
        }
    }

    fn open_event_dialog(&mut self, date: NaiveDate) {
        self.event_dialog_state = Some(EventDialogState::new_event(date));
        self.show_event_dialog = true;
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.active_theme.app_background)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                match render_header(ui, self.state.current_date(), &self.active_theme) {
                    HeaderAction::PreviousMonth => self.state.previous_month(),
                    HeaderAction::NextMonth => self.state.next_month(),
                    HeaderAction::Today => self.state.jump_to_today(),
                    HeaderAction::None => {}
                }

                ui.add_space(6.0);
                ui.separator();
                ui.add_space(6.0);

                let view_result =
                    MonthView::show(ui, &self.state, &self.settings, &self.active_theme);
                if let Some(date) = view_result.clicked_date {
                    self.open_event_dialog(date);
                }
            });

        if self.show_event_dialog {
            if let Some(dialog_state) = self.event_dialog_state.as_mut() {
                let result = render_event_dialog(ctx, dialog_state, &mut self.show_event_dialog);
                if let Some(event) = result.saved_event {
                    log::info!(
                        "Created event '{}' ({} to {})",
                        event.title,
                        event.first_day(),
                        event.last_day()
                    );
                    self.state.add_event(event);
                    self.show_event_dialog = false;
                }
            }

            if !self.show_event_dialog {
                self.event_dialog_state = None;
            }
        }
    }
}
