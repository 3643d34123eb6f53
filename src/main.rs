// Month Calendar Application
// Main entry point

use month_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Month Calendar")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(|cc| {
            let app = CalendarApp::new(cc).map_err(|e| {
                log::error!("Failed to start: {:#}", e);
                e
            })?;
            Ok(Box::new(app))
        }),
    )
}
