use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use egui::{Margin, RichText};

use super::event_list::EventList;
use super::palette::CardPalette;
use super::prayer_times::PrayerTimesList;
use crate::services::clock::Clock;
use crate::services::countdown::{CountdownKind, DayCountdowns};
use crate::services::database::Database;
use crate::services::schedule::{resolve_day, ScheduleProps};
use crate::ui_egui::theme::ScheduleTheme;

/// Shared, per-frame context every card renders against.
pub struct ScheduleEnv<'a> {
    pub today: NaiveDate,
    /// Process-wide default base date from settings.
    pub configured_base: Option<NaiveDate>,
    pub hijri_adjustment_days: i64,
    pub theme: &'a ScheduleTheme,
    pub database: Option<&'a Database>,
}

/// One day's card: dates, countdowns, prayer times and events.
///
/// The card owns its countdown tickers; they stop requesting repaints when
/// the card is dropped or suspended.
pub struct DaySchedule {
    countdowns: DayCountdowns,
}

impl DaySchedule {
    pub fn new(clock: Arc<dyn Clock>, tick_interval: Duration, ctx: &egui::Context) -> Self {
        let ctx = ctx.clone();
        Self {
            countdowns: DayCountdowns::new(
                clock,
                tick_interval,
                Arc::new(move |after: Duration| ctx.request_repaint_after(after)),
            ),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, props: &ScheduleProps, env: &ScheduleEnv<'_>) {
        let day = resolve_day(props, env.configured_base, env.today);
        self.countdowns.sync(&day, props);

        let palette = CardPalette::from_theme(env.theme, day.is_today());

        egui::Frame::none()
            .fill(palette.fill)
            .stroke(palette.border)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(Margin::same(16.0))
            .shadow(egui::epaint::Shadow {
                offset: egui::vec2(0.0, 2.0),
                blur: 8.0,
                spread: 0.0,
                color: palette.shadow,
            })
            .show(ui, |card| {
                card.set_min_width(card.available_width());

                card.label(
                    RichText::new(day.header())
                        .size(20.0)
                        .strong()
                        .color(palette.heading),
                );
                card.label(
                    RichText::new(day.subheader(env.hijri_adjustment_days))
                        .small()
                        .color(palette.subtle),
                );

                if day.is_today() {
                    for countdown in self.countdowns.active() {
                        if let Some(text) = countdown.display_text() {
                            let color = match countdown.kind() {
                                CountdownKind::Maghrib => palette.maghrib,
                                CountdownKind::Suhoor => palette.suhoor,
                            };
                            card.add_space(4.0);
                            card.label(RichText::new(text).small().color(color));
                        }
                    }
                }

                card.add_space(6.0);
                card.separator();

                match &props.prayer_times {
                    Some(times) => PrayerTimesList::show(card, props.day, times, &palette),
                    None => PrayerTimesList::show_unavailable(card, &palette),
                }

                EventList::show(card, day.date, env.database, &palette);
            });
    }

    /// Release the countdown tickers without dropping the card.
    pub fn suspend(&mut self) {
        self.countdowns.stop();
    }
}
