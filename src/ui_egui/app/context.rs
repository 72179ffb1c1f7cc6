use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::day_selector::DaySelector;
use crate::models::settings::Settings;
use crate::services::clock::{Clock, SystemClock};
use crate::services::database::Database;
use crate::services::schedule::{resolve_date, ScheduleProps};
use crate::services::settings::SettingsService;
use crate::services::timetable::Timetable;
use crate::utils::date::add_days;

/// Shared access point for the data sources every card reads from.
pub struct AppContext {
    clock: Arc<dyn Clock>,
    timetable: Timetable,
    timetable_path: Option<PathBuf>,
    database: Option<Database>,
    /// Problems with the clock, settings or event store, shown in the status bar
    issues: Vec<String>,
    /// Last timetable load failure; replaced on every reload
    timetable_issue: Option<String>,
}

impl AppContext {
    pub fn new(clock: Arc<dyn Clock>, timetable: Timetable, database: Option<Database>) -> Self {
        Self {
            clock,
            timetable,
            timetable_path: None,
            database,
            issues: Vec::new(),
            timetable_issue: None,
        }
    }

    /// Open every data source named by `settings`, recording failures
    /// instead of aborting so the board can still render dates.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut issues = Vec::new();

        let timezone = settings.timezone().unwrap_or_else(|err| {
            log::warn!("{}; falling back to local time", err);
            issues.push(err);
            None
        });
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(timezone));

        let timetable_path = match SettingsService::timetable_path(settings) {
            Ok(path) => Some(path),
            Err(err) => {
                issues.push(err.to_string());
                None
            }
        };
        let (timetable, timetable_issue) = match &timetable_path {
            Some(path) => load_timetable(path),
            None => (Timetable::new(), None),
        };

        let database = match SettingsService::database_path(settings) {
            Ok(path) => open_database(&path, &mut issues),
            Err(err) => {
                issues.push(err.to_string());
                None
            }
        };

        Self {
            clock,
            timetable,
            timetable_path,
            database,
            issues,
            timetable_issue,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Every outstanding problem, timetable first.
    pub fn issues(&self) -> Vec<&str> {
        self.timetable_issue
            .iter()
            .chain(self.issues.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn push_issue(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    /// Re-read the timetable file, keeping the old data if that fails.
    pub fn reload_timetable(&mut self) {
        let Some(path) = &self.timetable_path else {
            return;
        };
        let (timetable, issue) = load_timetable(path);
        if issue.is_none() {
            self.timetable = timetable;
        }
        self.timetable_issue = issue;
    }

    /// Card inputs for `day`, looked up from the timetable the way the page
    /// hands them to each card.
    pub fn props_for(
        &self,
        day: DaySelector,
        configured_base: Option<NaiveDate>,
        today: NaiveDate,
    ) -> ScheduleProps {
        let date = resolve_date(day, None, configured_base, today);
        ScheduleProps {
            day,
            prayer_times: self.timetable.for_date(date).cloned(),
            base_date: None,
            next_day_prayer_times: self.timetable.for_date(add_days(date, 1)).cloned(),
        }
    }
}

fn load_timetable(path: &Path) -> (Timetable, Option<String>) {
    match Timetable::load(path) {
        Ok(timetable) => (timetable, None),
        Err(err) => {
            log::warn!("Prayer timetable unavailable: {}", err);
            (Timetable::new(), Some(err.to_string()))
        }
    }
}

fn open_database(path: &Path, issues: &mut Vec<String>) -> Option<Database> {
    if let Some(parent) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            log::warn!("Failed to create {}: {}", parent.display(), err);
        }
    }

    let result = Database::new(&path.to_string_lossy()).and_then(|db| {
        db.initialize_schema()?;
        Ok(db)
    });

    match result {
        Ok(db) => {
            log::info!("Opened event store at {}", path.display());
            Some(db)
        }
        Err(err) => {
            log::warn!("Event store unavailable: {:#}", err);
            issues.push(format!("Event store unavailable: {}", err));
            None
        }
    }
}
