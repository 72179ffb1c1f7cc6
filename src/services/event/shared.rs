use chrono::NaiveDateTime;
use rusqlite::{self, Result, Row};

use crate::models::event::Event;

/// Column list shared by every event query, in `map_event_row` order.
pub(crate) const EVENT_COLUMNS: &str =
    "id, title, description, location, start_datetime, end_datetime, is_all_day, color";

/// Stored datetime format. Lexicographic order matches chronological order.
const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub(crate) fn to_storage(value: NaiveDateTime) -> String {
    value.format(STORAGE_FORMAT).to_string()
}

pub(crate) fn from_storage(index: usize, value: String) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&value, STORAGE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub(crate) fn map_event_row(row: &Row<'_>) -> Result<Event> {
    Ok(Event {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        start: from_storage(4, row.get(4)?)?,
        end: from_storage(5, row.get(5)?)?,
        all_day: row.get::<_, i32>(6)? != 0,
        color: row.get(7)?,
    })
}
