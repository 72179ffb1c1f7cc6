// Service module exports

pub mod clock;
pub mod countdown;
pub mod database;
pub mod event;
pub mod hijri;
pub mod schedule;
pub mod settings;
pub mod timetable;
