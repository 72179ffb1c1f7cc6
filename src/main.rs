// Prayer Schedule Application
// Main entry point

use anyhow::Result;
use prayer_schedule::models::settings::Settings;
use prayer_schedule::services::settings::SettingsService;
use prayer_schedule::ui_egui::PrayerScheduleApp;

fn load_settings() -> (Settings, Vec<String>) {
    let path = match SettingsService::default_path() {
        Ok(path) => path,
        Err(err) => {
            log::warn!("{}; using default settings", err);
            return (Settings::default(), vec![err.to_string()]);
        }
    };

    match SettingsService::load(&path) {
        Ok(settings) => (settings, Vec::new()),
        Err(err) => {
            log::warn!("Failed to load settings: {}, using defaults", err);
            (Settings::default(), vec![err.to_string()])
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Prayer Schedule");

    let (settings, startup_issues) = load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Prayer Schedule")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prayer Schedule",
        options,
        Box::new(move |cc| Ok(Box::new(PrayerScheduleApp::new(cc, settings, startup_issues)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run application: {}", err))
}
