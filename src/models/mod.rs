// Module exports for models

pub mod day_selector;
pub mod event;
pub mod prayer_times;
pub mod settings;
