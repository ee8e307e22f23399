// calgrid - month-view calendar widget
// Main entry point

use calgrid::services::calendar::CalendarState;
use calgrid::services::settings::SettingsService;
use calgrid::ui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting calgrid");

    let settings = SettingsService::new().load_or_default();
    let state = CalendarState::with_demo_event();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "calgrid",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc, state, settings)))),
    )
}
