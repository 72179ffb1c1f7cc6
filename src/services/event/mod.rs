//! Event store service.
//! Database-backed operations for the events listed on each day card,
//! organized across focused submodules.

use rusqlite::Connection;

pub mod crud;
pub mod queries;
mod shared;

/// Service for managing events stored in SQLite.
pub struct EventService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> EventService<'a> {
    /// Create a new EventService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}
