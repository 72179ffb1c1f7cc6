use egui::RichText;

use super::palette::CardPalette;
use crate::models::prayer_times::{display_name, PrayerTimes};

pub const PRAYER_TIMES_UNAVAILABLE: &str = "Prayer times not available";

/// Two-column list of a day's prayer times.
pub struct PrayerTimesList;

impl PrayerTimesList {
    pub fn show(
        ui: &mut egui::Ui,
        id_salt: impl std::hash::Hash,
        times: &PrayerTimes,
        palette: &CardPalette,
    ) {
        egui::Grid::new(("prayer_times", id_salt))
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |grid| {
                for (name, time) in times.entries() {
                    grid.label(RichText::new(display_name(name)).color(palette.heading));
                    grid.label(RichText::new(time).monospace().color(palette.heading));
                    grid.end_row();
                }
            });
    }

    /// Rendered in place of the list when no times were supplied.
    pub fn show_unavailable(ui: &mut egui::Ui, palette: &CardPalette) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(PRAYER_TIMES_UNAVAILABLE).color(palette.subtle));
        });
    }
}
