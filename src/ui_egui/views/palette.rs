use crate::ui_egui::theme::ScheduleTheme;
use egui::{Color32, Stroke};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Resolved colors for one schedule card.
#[derive(Clone, Copy)]
pub struct CardPalette {
    pub fill: Color32,
    pub border: Stroke,
    pub shadow: Color32,
    pub heading: Color32,
    pub subtle: Color32,
    pub maghrib: Color32,
    pub suhoor: Color32,
}

impl CardPalette {
    pub fn from_theme(theme: &ScheduleTheme, is_today: bool) -> Self {
        let border = if is_today {
            Stroke::new(2.0, theme.today_border)
        } else {
            Stroke::new(1.0, theme.card_border)
        };

        Self {
            fill: theme.card_background,
            border,
            shadow: with_alpha(Color32::BLACK, if is_today { 40 } else { 20 }),
            heading: theme.text_primary,
            subtle: theme.text_secondary,
            maghrib: theme.maghrib_accent,
            suhoor: theme.suhoor_accent,
        }
    }
}
