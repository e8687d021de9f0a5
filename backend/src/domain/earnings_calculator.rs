//! Instant earnings calculation.
//!
//! Maps a schedule and a local wall-clock instant to the amount earned so
//! far today. Everything here is a pure function of its inputs; the
//! presentation layer decides how often to call it (typically every 100 ms).
//!
//! The daily target spreads the monthly salary over an average month of
//! `work_days_per_week * 4.33` working days. The 4.33 weeks-per-month figure
//! is a fixed approximation and must stay as is: every displayed amount
//! derives from it.

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use crate::domain::models::schedule::ScheduleConfig;
use crate::domain::models::stats::WorkStats;

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Portion of the monthly salary attributed to one work day
pub fn daily_target(config: &ScheduleConfig) -> f64 {
    let avg_work_days_per_month = (config.work_days_per_week() as f64 * WEEKS_PER_MONTH).max(1.0);
    config.monthly_salary / avg_work_days_per_month
}

/// Stateless calculator for today's running earnings
#[derive(Debug, Clone, Copy, Default)]
pub struct EarningsCalculator;

impl EarningsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute today's stats at `now`.
    ///
    /// Never fails: rest days, days before the window opens and misconfigured
    /// windows (end not after start) all produce a well-defined result.
    pub fn compute(&self, config: &ScheduleConfig, now: NaiveDateTime) -> WorkStats {
        if config.is_rest_day(now.weekday()) {
            return WorkStats::rest_day();
        }

        let total_work_seconds = config.work_window_seconds();
        if total_work_seconds <= 0 {
            debug!(
                "Work window {}-{} is empty, no earnings accrue",
                config.work_start, config.work_end
            );
            return WorkStats::idle();
        }
        let total_work_seconds = total_work_seconds as f64;

        let target = daily_target(config);
        let per_second_rate = target / total_work_seconds;

        let start_time = now.date().and_time(config.work_start);
        let elapsed = (now - start_time).num_milliseconds() as f64 / 1000.0;

        // Snap to the exact target once the day is over so the accumulated
        // rate never drifts from the true daily total.
        if elapsed >= total_work_seconds {
            return WorkStats {
                current_earnings: target,
                elapsed_time_seconds: total_work_seconds,
                progress_percentage: 100.0,
                is_working: false,
                is_rest_day: false,
            };
        }

        let (elapsed, is_working) = if elapsed < 0.0 {
            (0.0, false)
        } else {
            (elapsed, true)
        };

        WorkStats {
            current_earnings: elapsed * per_second_rate,
            elapsed_time_seconds: elapsed,
            progress_percentage: (elapsed / total_work_seconds * 100.0).clamp(0.0, 100.0),
            is_working,
            is_rest_day: false,
        }
    }

    /// Earnings per hour of the work window, 0 when the window is empty
    pub fn hourly_rate(&self, config: &ScheduleConfig) -> f64 {
        if !config.has_valid_window() {
            return 0.0;
        }
        let hours = config.work_window_seconds() as f64 / 3600.0;
        daily_target(config) / hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Weekday};

    fn standard_config() -> ScheduleConfig {
        ScheduleConfig::new(
            10000.0,
            [Weekday::Sun, Weekday::Sat],
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        )
    }

    // 2024-03-13 is a Wednesday, 2024-03-16 a Saturday
    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_daily_target_uses_fixed_weeks_per_month() {
        let config = standard_config();
        // 5 work days * 4.33 = 21.65 days per month
        assert!(approx(daily_target(&config), 10000.0 / 21.65));
        assert!((daily_target(&config) - 461.89).abs() < 0.01);
    }

    #[test]
    fn test_daily_target_when_every_day_is_rest() {
        let config = ScheduleConfig::new(
            3000.0,
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        );
        // Average month is clamped to at least one day
        assert_eq!(daily_target(&config), 3000.0);
    }

    #[test]
    fn test_midday_accrual() {
        let config = standard_config();
        let stats = EarningsCalculator::new().compute(&config, at(13, 13, 30, 0));

        assert_eq!(stats.elapsed_time_seconds, 16200.0);
        assert!(approx(stats.progress_percentage, 50.0));
        assert!(approx(stats.current_earnings, daily_target(&config) / 2.0));
        assert!((stats.current_earnings - 230.94).abs() < 0.01);
        assert!(stats.is_working);
        assert!(!stats.is_rest_day);
    }

    #[test]
    fn test_before_work_starts() {
        let config = standard_config();
        let stats = EarningsCalculator::new().compute(&config, at(13, 8, 0, 0));

        assert_eq!(stats.current_earnings, 0.0);
        assert_eq!(stats.elapsed_time_seconds, 0.0);
        assert_eq!(stats.progress_percentage, 0.0);
        assert!(!stats.is_working);
        assert!(!stats.is_rest_day);
    }

    #[test]
    fn test_at_work_start() {
        let config = standard_config();
        let stats = EarningsCalculator::new().compute(&config, at(13, 9, 0, 0));

        assert_eq!(stats.current_earnings, 0.0);
        assert_eq!(stats.elapsed_time_seconds, 0.0);
        assert_eq!(stats.progress_percentage, 0.0);
        assert!(stats.is_working);
        assert!(!stats.is_rest_day);
    }

    #[test]
    fn test_at_and_after_work_end_snaps_to_target() {
        let config = standard_config();
        let calculator = EarningsCalculator::new();

        for now in [at(13, 18, 0, 0), at(13, 18, 0, 1), at(13, 23, 59, 59)] {
            let stats = calculator.compute(&config, now);
            assert_eq!(stats.current_earnings, daily_target(&config));
            assert_eq!(stats.progress_percentage, 100.0);
            assert_eq!(stats.elapsed_time_seconds, 32400.0);
            assert!(!stats.is_working);
            assert!(stats.is_day_complete());
        }
    }

    #[test]
    fn test_rest_day_at_any_hour() {
        let config = standard_config();
        let calculator = EarningsCalculator::new();

        for hour in [0, 8, 13, 18, 23] {
            let stats = calculator.compute(&config, at(16, hour, 0, 0));
            assert!(stats.is_rest_day);
            assert!(!stats.is_working);
            assert_eq!(stats.current_earnings, 0.0);
            assert_eq!(stats.progress_percentage, 100.0);
        }
    }

    #[test]
    fn test_earnings_strictly_increase_during_window() {
        let config = standard_config();
        let calculator = EarningsCalculator::new();

        let mut previous = 0.0;
        let start = at(13, 9, 0, 1);
        for step in 0..(9 * 60 - 1) {
            let now = start + chrono::Duration::minutes(step);
            let stats = calculator.compute(&config, now);
            assert!(stats.progress_percentage > 0.0 && stats.progress_percentage < 100.0);
            assert!(stats.current_earnings > previous, "not increasing at {}", now);
            assert!(stats.is_working);
            previous = stats.current_earnings;
        }
    }

    #[test]
    fn test_sub_second_precision() {
        let config = standard_config();
        let calculator = EarningsCalculator::new();
        let now = at(13, 10, 0, 0);
        let a = calculator.compute(&config, now);
        let b = calculator.compute(&config, now + chrono::Duration::milliseconds(100));
        assert!(b.current_earnings > a.current_earnings);
        assert!(approx(b.elapsed_time_seconds - a.elapsed_time_seconds, 0.1));
    }

    #[test]
    fn test_inverted_window_accrues_nothing() {
        let config = ScheduleConfig::new(
            10000.0,
            [Weekday::Sun, Weekday::Sat],
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        let calculator = EarningsCalculator::new();

        for hour in [8, 12, 20] {
            let stats = calculator.compute(&config, at(13, hour, 0, 0));
            assert_eq!(stats, WorkStats::idle());
        }
        assert_eq!(calculator.hourly_rate(&config), 0.0);
    }

    #[test]
    fn test_rest_day_wins_over_inverted_window() {
        let config = ScheduleConfig::new(
            10000.0,
            [Weekday::Sat],
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        );
        let stats = EarningsCalculator::new().compute(&config, at(16, 12, 0, 0));
        assert_eq!(stats, WorkStats::rest_day());
    }

    #[test]
    fn test_hourly_rate() {
        let config = standard_config();
        let rate = EarningsCalculator::new().hourly_rate(&config);
        assert!(approx(rate, daily_target(&config) / 9.0));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let config = standard_config();
        let calculator = EarningsCalculator::new();
        let now = at(13, 11, 17, 42);
        assert_eq!(calculator.compute(&config, now), calculator.compute(&config, now));
    }
}
