//! Computed, ephemeral results of the earnings engine.
//!
//! None of these are ever persisted; they are recreated on every tick.
use chrono::Weekday;

/// Earnings accrued today at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkStats {
    pub current_earnings: f64,
    pub elapsed_time_seconds: f64,
    pub progress_percentage: f64,
    pub is_working: bool,
    pub is_rest_day: bool,
}

impl WorkStats {
    /// Stats for a configured rest day. Progress is 100 because there is
    /// nothing left to earn today.
    pub fn rest_day() -> Self {
        Self {
            current_earnings: 0.0,
            elapsed_time_seconds: 0.0,
            progress_percentage: 100.0,
            is_working: false,
            is_rest_day: true,
        }
    }

    /// Stats for a workday whose window does not exist
    pub fn idle() -> Self {
        Self {
            current_earnings: 0.0,
            elapsed_time_seconds: 0.0,
            progress_percentage: 0.0,
            is_working: false,
            is_rest_day: false,
        }
    }

    pub fn is_day_complete(&self) -> bool {
        self.progress_percentage >= 100.0
    }
}

/// Month-to-date and year-to-date totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStats {
    pub today_earnings: f64,
    pub month_total: f64,
    pub year_total: f64,
    pub current_daily_target: f64,
}

/// One day of the projected week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub weekday: Weekday,
    pub income: f64,
    pub is_rest_day: bool,
}
