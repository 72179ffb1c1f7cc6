use chrono::NaiveDate;
use egui::{RichText, Stroke};

use super::palette::CardPalette;
use crate::models::event::Event;
use crate::services::database::Database;
use crate::services::event::EventService;
use crate::ui_egui::theme::ScheduleTheme;

/// Events overlapping a day, read from the event store on each render.
pub struct EventList;

impl EventList {
    pub fn show(
        ui: &mut egui::Ui,
        date: NaiveDate,
        database: Option<&Database>,
        palette: &CardPalette,
    ) {
        ui.add_space(8.0);
        ui.label(RichText::new("Events").strong().color(palette.heading));

        let Some(database) = database else {
            ui.label(RichText::new("Events unavailable").color(palette.subtle));
            return;
        };

        let events = match EventService::new(database.connection()).find_for_date(date) {
            Ok(events) => events,
            Err(err) => {
                log::debug!("Failed to load events for {}: {:#}", date, err);
                ui.label(RichText::new("Events unavailable").color(palette.subtle));
                return;
            }
        };

        if events.is_empty() {
            ui.label(RichText::new("No events").color(palette.subtle));
            return;
        }

        for event in &events {
            Self::show_event(ui, event, date, palette);
        }
    }

    fn show_event(ui: &mut egui::Ui, event: &Event, date: NaiveDate, palette: &CardPalette) {
        let accent = event
            .color
            .as_deref()
            .and_then(|hex| ScheduleTheme::hex_to_color(hex).ok())
            .unwrap_or(palette.maghrib);

        let response = egui::Frame::none()
            .inner_margin(egui::Margin {
                left: 8.0,
                right: 4.0,
                top: 2.0,
                bottom: 2.0,
            })
            .show(ui, |row| {
                row.horizontal(|row| {
                    row.label(
                        RichText::new(event.time_label(date))
                            .small()
                            .monospace()
                            .color(palette.subtle),
                    );
                    row.label(RichText::new(&event.title).color(palette.heading));
                });
                if let Some(location) = &event.location {
                    row.label(RichText::new(location).small().color(palette.subtle));
                }
            })
            .response;

        let rect = response.rect;
        ui.painter()
            .vline(rect.left(), rect.y_range(), Stroke::new(3.0, accent));

        if let Some(description) = &event.description {
            response.on_hover_text(description.as_str());
        }
    }
}
