//! Settings management.
//!
//! Translates the persisted settings blob into the validated domain
//! [`ScheduleConfig`] and history, and writes edits back through
//! [`SettingsStorage`]. A blob that cannot be parsed or validated is replaced
//! by the default settings on load, so the calculation core only ever sees
//! well-formed input.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use shared::UserSettings;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::models::schedule::{weekday_from_id, DailyRecord, ScheduleConfig};
use crate::storage::SettingsStorage;

/// Ways user-supplied settings can be invalid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Invalid monthly salary: {0}. Must be a non-negative number")]
    InvalidSalary(f64),
    #[error("Invalid rest day: {0}. Must be 0-6 (Sunday-Saturday)")]
    InvalidRestDay(u8),
    #[error("Invalid {field}: '{value}'. Expected HH:MM")]
    InvalidTime { field: &'static str, value: String },
    #[error("Invalid history date: '{0}'. Expected YYYY-MM-DD")]
    InvalidRecordDate(String),
    #[error("Invalid earned amount {earned} for {date}")]
    InvalidRecordAmount { date: String, earned: f64 },
}

/// Settings together with their validated domain form
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSettings {
    pub settings: UserSettings,
    pub schedule: ScheduleConfig,
    pub history: Vec<DailyRecord>,
}

impl ActiveSettings {
    /// Validate `settings` into domain types
    pub fn resolve(settings: UserSettings) -> Result<Self, SettingsError> {
        let schedule = schedule_from_settings(&settings)?;
        let history = history_from_settings(&settings)?;
        Ok(Self {
            settings,
            schedule,
            history,
        })
    }

    /// Non-fatal problems worth showing to the user
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.schedule.has_valid_window() {
            warnings.push(format!(
                "Work end {} is not after work start {}; no earnings will accrue",
                self.settings.work_end_hour, self.settings.work_start_hour
            ));
        }
        if self.schedule.work_days_per_week() == 0 {
            warnings.push("Every day is a rest day; no earnings will accrue".to_string());
        }
        warnings
    }
}

/// Build the schedule from persisted settings
pub fn schedule_from_settings(settings: &UserSettings) -> Result<ScheduleConfig, SettingsError> {
    if !settings.monthly_salary.is_finite() || settings.monthly_salary < 0.0 {
        return Err(SettingsError::InvalidSalary(settings.monthly_salary));
    }

    let rest_days = settings
        .rest_days
        .iter()
        .map(|id| weekday_from_id(*id).ok_or(SettingsError::InvalidRestDay(*id)))
        .collect::<Result<Vec<_>, _>>()?;

    let work_start = parse_hour("work start hour", &settings.work_start_hour)?;
    let work_end = parse_hour("work end hour", &settings.work_end_hour)?;

    Ok(ScheduleConfig::new(
        settings.monthly_salary,
        rest_days,
        work_start,
        work_end,
    ))
}

/// Convert the recorded history to domain records
pub fn history_from_settings(settings: &UserSettings) -> Result<Vec<DailyRecord>, SettingsError> {
    settings
        .history
        .iter()
        .map(|record| {
            let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
                .map_err(|_| SettingsError::InvalidRecordDate(record.date.clone()))?;
            if !record.earned.is_finite() {
                return Err(SettingsError::InvalidRecordAmount {
                    date: record.date.clone(),
                    earned: record.earned,
                });
            }
            Ok(DailyRecord {
                date,
                earned: record.earned,
                is_rest_day: record.is_rest_day,
                salary_snapshot: record.salary_snapshot,
            })
        })
        .collect()
}

fn parse_hour(field: &'static str, value: &str) -> Result<NaiveTime, SettingsError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value.trim(), "%H:%M:%S"))
        .map_err(|_| SettingsError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

/// Service for loading, saving and resetting settings
#[derive(Clone)]
pub struct SettingsService {
    storage: Arc<dyn SettingsStorage>,
}

impl SettingsService {
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self { storage }
    }

    /// Load the current settings.
    ///
    /// Falls back to defaults when nothing is stored or the stored blob is
    /// malformed. Storage I/O failures are returned as errors.
    pub async fn load(&self) -> Result<ActiveSettings> {
        let settings = match self.storage.load_blob().await? {
            None => UserSettings::default(),
            Some(blob) => match serde_json::from_str::<UserSettings>(&blob) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Stored settings could not be parsed, using defaults: {}", e);
                    UserSettings::default()
                }
            },
        };

        match ActiveSettings::resolve(settings) {
            Ok(active) => Ok(active),
            Err(e) => {
                warn!("Stored settings are invalid, using defaults: {}", e);
                Ok(ActiveSettings::resolve(UserSettings::default())?)
            }
        }
    }

    /// Validate and persist new settings.
    ///
    /// Invalid input is rejected with a [`SettingsError`] (reachable through
    /// `anyhow::Error::downcast_ref`) and nothing is written.
    pub async fn save(&self, settings: UserSettings) -> Result<ActiveSettings> {
        let active = ActiveSettings::resolve(settings)?;
        for warning in active.warnings() {
            warn!("Saving settings with warning: {}", warning);
        }

        let blob = serde_json::to_string_pretty(&active.settings)?;
        self.storage.save_blob(&blob).await?;

        info!(
            "Saved settings: salary {:.2}, {} work days/week, {}-{}",
            active.schedule.monthly_salary,
            active.schedule.work_days_per_week(),
            active.settings.work_start_hour,
            active.settings.work_end_hour
        );
        Ok(active)
    }

    /// Forget everything stored and return the defaults
    pub async fn reset(&self) -> Result<ActiveSettings> {
        let deleted = self.storage.delete_blob().await?;
        info!("Reset settings (stored blob removed: {})", deleted);
        Ok(ActiveSettings::resolve(UserSettings::default())?)
    }
}
