mod context;
mod lifecycle;
mod status_bar;

use self::context::AppContext;
use crate::models::settings::Settings;
use crate::ui_egui::theme::ScheduleTheme;
use crate::ui_egui::views::DaySchedule;

const MIN_CARD_WIDTH: f32 = 260.0;

/// Three-day prayer schedule board: today, tomorrow and the day after.
pub struct PrayerScheduleApp {
    /// Data sources and the clock shared by every card
    context: AppContext,
    settings: Settings,
    active_theme: ScheduleTheme,
    /// One card per day selector, in display order
    cards: Vec<DaySchedule>,
}

impl eframe::App for PrayerScheduleApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
