use std::time::Duration;

use super::context::AppContext;
use super::{PrayerScheduleApp, MIN_CARD_WIDTH};
use crate::models::day_selector::DaySelector;
use crate::models::settings::Settings;
use crate::ui_egui::theme::ScheduleTheme;
use crate::ui_egui::views::{DaySchedule, ScheduleEnv};

/// Repaint at least this often so the "Today" card rolls over at midnight
/// even when no countdown is ticking.
const IDLE_REPAINT: Duration = Duration::from_secs(30);

impl PrayerScheduleApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        startup_issues: Vec<String>,
    ) -> Self {
        let mut context = AppContext::from_settings(&settings);
        for issue in startup_issues {
            context.push_issue(issue);
        }

        let active_theme = ScheduleTheme::for_preference(settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let tick_interval = Duration::from_millis(settings.tick_interval_ms);
        let cards = DaySelector::ALL
            .iter()
            .map(|_| DaySchedule::new(context.clock(), tick_interval, &cc.egui_ctx))
            .collect();

        log::info!(
            "Schedule board ready: base_date={:?}, timezone={:?}, {} timetable days",
            settings.base_date,
            settings.timezone,
            context.timetable().len()
        );

        Self {
            context,
            settings,
            active_theme,
            cards,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            log::info!("Reloading prayer timetable");
            self.context.reload_timetable();
        }

        // Render status bar (before CentralPanel so it takes bottom space)
        self.render_status_bar(ctx);

        self.render_cards(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }

    fn render_cards(&mut self, ctx: &egui::Context) {
        let today = self.context.clock().today();
        let configured_base = self.settings.base_date;
        let props: Vec<_> = DaySelector::ALL
            .iter()
            .map(|day| self.context.props_for(*day, configured_base, today))
            .collect();

        let env = ScheduleEnv {
            today,
            configured_base,
            hijri_adjustment_days: self.settings.hijri_adjustment_days,
            theme: &self.active_theme,
            database: self.context.database(),
        };
        let cards = &mut self.cards;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if ui.available_width() >= MIN_CARD_WIDTH * cards.len() as f32 {
                        ui.columns(cards.len(), |columns| {
                            for ((column, card), props) in
                                columns.iter_mut().zip(cards.iter_mut()).zip(&props)
                            {
                                card.show(column, props, &env);
                            }
                        });
                    } else {
                        for (card, props) in cards.iter_mut().zip(&props) {
                            card.show(ui, props, &env);
                            ui.add_space(12.0);
                        }
                    }
                });
        });
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        for card in &mut self.cards {
            card.suspend();
        }
        log::info!("Schedule board closed");
    }
}
