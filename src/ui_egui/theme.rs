//! Theme module for the schedule board
//!
//! Defines the ScheduleTheme structure and resolves the configured
//! light/dark/system preference into concrete colors.

use egui::Color32;

use crate::models::settings::ThemePreference;

/// Colors used by the schedule cards and the surrounding window
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Card fill color
    pub card_background: Color32,

    /// Card border for days other than today
    pub card_border: Color32,

    /// Accent border for today's card
    pub today_border: Color32,

    /// Primary text color (headings, prayer names)
    pub text_primary: Color32,

    /// Secondary text color (weekday, Hijri date, fallback messages)
    pub text_secondary: Color32,

    /// Maghrib countdown text
    pub maghrib_accent: Color32,

    /// Suhoor countdown text
    pub suhoor_accent: Color32,
}

impl ScheduleTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(220, 220, 220),
            today_border: Color32::from_rgb(59, 130, 246),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(107, 114, 128),
            maghrib_accent: Color32::from_rgb(59, 130, 246),
            suhoor_accent: Color32::from_rgb(168, 85, 247),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            card_background: Color32::from_rgb(40, 40, 40),
            card_border: Color32::from_rgb(60, 60, 60),
            today_border: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            maghrib_accent: Color32::from_rgb(125, 170, 255),
            suhoor_accent: Color32::from_rgb(196, 148, 255),
        }
    }

    /// Pick a theme for the preference, asking the OS for `System`.
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Parse `#RRGGBB` or `#RGB` into a color.
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: #{}", hex));
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(format!("Invalid hex color: #{}", hex)),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|e| format!("Invalid hex color #{}: {}", hex, e))
        };

        Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preferences() {
        assert!(!ScheduleTheme::for_preference(ThemePreference::Light).is_dark);
        assert!(ScheduleTheme::for_preference(ThemePreference::Dark).is_dark);
    }

    #[test]
    fn test_hex_to_color_long_and_short() {
        assert_eq!(
            ScheduleTheme::hex_to_color("#2E7D32"),
            Ok(Color32::from_rgb(0x2E, 0x7D, 0x32))
        );
        assert_eq!(
            ScheduleTheme::hex_to_color("#f80"),
            Ok(Color32::from_rgb(0xFF, 0x88, 0x00))
        );
    }

    #[test]
    fn test_hex_to_color_invalid() {
        assert!(ScheduleTheme::hex_to_color("#12345").is_err());
        assert!(ScheduleTheme::hex_to_color("#GGGGGG").is_err());
        assert!(ScheduleTheme::hex_to_color("#aébcd").is_err());
    }
}
