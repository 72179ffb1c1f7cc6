// Event module
// Community / personal events listed under a day's prayer times

use chrono::{NaiveDate, NaiveDateTime};

/// An event shown in the day schedule's event list.
///
/// Times are wall-clock times in the schedule's time zone, matching the
/// prayer timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub color: Option<String>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use prayer_schedule::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(19, 30, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("Community Iftar", start, end).unwrap();
    /// assert_eq!(event.time_label(start.date()), "19:30–20:30");
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let event = Self {
            id: None,
            title: title.into(),
            description: None,
            location: None,
            start,
            end,
            all_day: false,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Short time label for list rendering on `date`.
    pub fn time_label(&self, date: NaiveDate) -> String {
        if self.all_day {
            return "All day".to_string();
        }
        if self.start.date() < date {
            return format!("until {}", self.end.format("%H:%M"));
        }
        format!("{}–{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
    color: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id: None,
            title,
            description: self.description,
            location: self.location,
            start,
            end,
            all_day: self.all_day,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}
