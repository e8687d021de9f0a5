//! Domain model for the work schedule and recorded income history.
use chrono::{NaiveDate, NaiveTime, Weekday};

/// Immutable schedule used for a single computation.
///
/// Built from the persisted settings by the settings service, which validates
/// every field, so the calculation core never sees malformed input.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    pub monthly_salary: f64,
    /// Distinct weekdays with zero accrual
    rest_days: Vec<Weekday>,
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
}

impl ScheduleConfig {
    /// Duplicate rest days are collapsed.
    pub fn new(
        monthly_salary: f64,
        rest_days: impl IntoIterator<Item = Weekday>,
        work_start: NaiveTime,
        work_end: NaiveTime,
    ) -> Self {
        let mut distinct: Vec<Weekday> = Vec::with_capacity(7);
        for day in rest_days {
            if !distinct.contains(&day) {
                distinct.push(day);
            }
        }
        Self {
            monthly_salary,
            rest_days: distinct,
            work_start,
            work_end,
        }
    }

    pub fn rest_days(&self) -> &[Weekday] {
        &self.rest_days
    }

    pub fn is_rest_day(&self, weekday: Weekday) -> bool {
        self.rest_days.contains(&weekday)
    }

    pub fn work_days_per_week(&self) -> usize {
        7 - self.rest_days.len()
    }

    /// Length of the daily work window in seconds; zero or negative when
    /// the end is not after the start.
    pub fn work_window_seconds(&self) -> i64 {
        (self.work_end - self.work_start).num_seconds()
    }

    /// Whether the work window actually spans some time
    pub fn has_valid_window(&self) -> bool {
        self.work_window_seconds() > 0
    }
}

/// Convert a Sunday-based weekday id (0 = Sunday ... 6 = Saturday)
pub fn weekday_from_id(id: u8) -> Option<Weekday> {
    match id {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Inverse of [`weekday_from_id`]
pub fn weekday_id(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Income actually recorded for one past day.
///
/// Created once by an external recorder and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub earned: f64,
    pub is_rest_day: bool,
    pub salary_snapshot: f64,
}
