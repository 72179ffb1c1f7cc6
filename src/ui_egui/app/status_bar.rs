//! Status bar showing the clock, timetable coverage and data-source problems.

use super::PrayerScheduleApp;
use egui::{Color32, RichText};

/// Get theme-aware secondary text color
fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

fn warning_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_rgb(251, 191, 36)
    } else {
        Color32::from_rgb(180, 83, 9)
    }
}

impl PrayerScheduleApp {
    pub(super) fn render_status_bar(&self, ctx: &egui::Context) {
        let is_dark = self.active_theme.is_dark;
        let secondary = secondary_text_color(is_dark);
        let now = self.context.clock().now();

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(now.format("%H:%M:%S").to_string())
                            .monospace()
                            .color(secondary),
                    );
                    if let Some(zone) = &self.settings.timezone {
                        ui.label(RichText::new(zone).small().color(secondary));
                    }
                    ui.separator();

                    let issues = self.context.issues();
                    match issues.first() {
                        Some(issue) => {
                            let extra = issues.len() - 1;
                            let text = if extra > 0 {
                                format!("{} (+{} more)", issue, extra)
                            } else {
                                issue.to_string()
                            };
                            ui.label(RichText::new(text).small().color(warning_text_color(is_dark)))
                                .on_hover_text(issues.join("\n"));
                        }
                        None => {
                            let coverage = match self.context.timetable().coverage() {
                                Some((first, last)) => format!(
                                    "Timetable {} – {}",
                                    first.format("%b %-d, %Y"),
                                    last.format("%b %-d, %Y")
                                ),
                                None => "Timetable empty".to_string(),
                            };
                            ui.label(RichText::new(coverage).small().color(secondary));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("F5 reload timetable").small().color(secondary));
                    });
                });
            });
    }
}
