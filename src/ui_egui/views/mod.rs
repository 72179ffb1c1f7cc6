pub mod day_schedule;
pub mod event_list;
mod palette;
pub mod prayer_times;

pub use day_schedule::{DaySchedule, ScheduleEnv};
