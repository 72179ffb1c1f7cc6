use super::shared::{map_event_row, to_storage, EVENT_COLUMNS};
use super::EventService;
use crate::models::event::Event;
use crate::utils::date::{end_of_day, start_of_day};
use anyhow::Result;
use chrono::NaiveDate;

impl<'a> EventService<'a> {
    /// Events overlapping `date`, ordered by start time.
    pub fn find_for_date(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM events
             WHERE start_datetime <= ?1 AND end_datetime > ?2
             ORDER BY is_all_day DESC, start_datetime ASC",
            EVENT_COLUMNS
        ))?;

        let events = stmt
            .query_map(
                [to_storage(end_of_day(date)), to_storage(start_of_day(date))],
                map_event_row,
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }
}
