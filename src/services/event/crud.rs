use super::shared::to_storage;
use super::EventService;
use crate::models::event::Event;
use anyhow::{anyhow, Context, Result};
use rusqlite::params;

impl<'a> EventService<'a> {
    /// Create a new event in the database.
    pub fn create(&self, mut event: Event) -> Result<Event> {
        event.validate().map_err(|e| anyhow!(e))?;

        self.conn
            .execute(
                "INSERT INTO events (
                    title, description, location, start_datetime, end_datetime,
                    is_all_day, color
                ) VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![
                    event.title,
                    event.description,
                    event.location,
                    to_storage(event.start),
                    to_storage(event.end),
                    event.all_day as i32,
                    event.color,
                ],
            )
            .context("Failed to insert event")?;

        event.id = Some(self.conn.last_insert_rowid());
        log::debug!("Created event {:?} '{}'", event.id, event.title);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::database::Database;
    use chrono::{Duration, NaiveDate};

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    fn sample_event() -> Event {
        let start = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        Event::builder()
            .title("Community Iftar")
            .location("Masjid hall")
            .start(start)
            .end(start + Duration::hours(2))
            .color("#2E7D32")
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_assigns_id_and_persists() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        let created = service.create(sample_event()).unwrap();
        assert!(created.id.is_some());

        let day = created.start.date();
        let loaded = service.find_for_date(day).unwrap();
        assert_eq!(loaded, vec![created]);
    }

    #[test]
    fn test_create_rejects_invalid_event() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        let mut event = sample_event();
        event.title = "  ".to_string();
        assert!(service.create(event).is_err());
    }
}
