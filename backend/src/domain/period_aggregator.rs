//! Month-to-date and year-to-date aggregation.
//!
//! Totals are built by walking every calendar day from January 1st up to
//! (but excluding) today, then adding today's live earnings from the
//! [`EarningsCalculator`]. A past day with a recorded [`DailyRecord`] always
//! contributes the recorded amount. A day without one is estimated from the
//! current schedule: zero on a rest day, the full daily target otherwise.
//! The estimate lets the totals look plausible right after onboarding,
//! before any history exists.
//!
//! The walk visits at most 365 days and completes synchronously.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use std::collections::HashMap;
use tracing::debug;

use crate::domain::earnings_calculator::{daily_target, EarningsCalculator};
use crate::domain::models::schedule::{DailyRecord, ScheduleConfig};
use crate::domain::models::stats::{AggregateStats, TrendPoint};

/// Stateless aggregator over the current calendar year
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodAggregator {
    calculator: EarningsCalculator,
}

impl PeriodAggregator {
    pub fn new() -> Self {
        Self {
            calculator: EarningsCalculator::new(),
        }
    }

    /// Compute today's, month-to-date and year-to-date earnings at `now`.
    ///
    /// Records dated outside `[Jan 1, today)` are ignored. If several records
    /// share a date, the last one in `history` wins.
    pub fn aggregate(
        &self,
        config: &ScheduleConfig,
        now: NaiveDateTime,
        history: &[DailyRecord],
    ) -> AggregateStats {
        let target = daily_target(config);
        let today_earnings = self.calculator.compute(config, now).current_earnings;

        let recorded: HashMap<NaiveDate, f64> =
            history.iter().map(|r| (r.date, r.earned)).collect();

        let today = now.date();
        let start_of_year = today - Duration::days(i64::from(today.ordinal0()));

        let mut month_total = 0.0;
        let mut year_total = 0.0;
        let mut recorded_days = 0usize;

        for day in start_of_year.iter_days().take_while(|d| *d < today) {
            let earned = match recorded.get(&day) {
                Some(earned) => {
                    recorded_days += 1;
                    *earned
                }
                None if config.is_rest_day(day.weekday()) => 0.0,
                None => target,
            };

            year_total += earned;
            if day.month() == today.month() {
                month_total += earned;
            }
        }

        debug!(
            "Aggregated {} past days ({} recorded) up to {}",
            today.ordinal0(),
            recorded_days,
            today
        );

        AggregateStats {
            today_earnings,
            month_total: month_total + today_earnings,
            year_total: year_total + today_earnings,
            current_daily_target: target,
        }
    }

    /// Projected income for each weekday, Monday first.
    ///
    /// Derived from the current schedule only; it says nothing about what was
    /// actually earned on those days.
    pub fn weekly_trend(&self, config: &ScheduleConfig) -> Vec<TrendPoint> {
        let target = daily_target(config);
        let mut weekday = Weekday::Mon;
        let mut points = Vec::with_capacity(7);
        for _ in 0..7 {
            let is_rest_day = config.is_rest_day(weekday);
            points.push(TrendPoint {
                weekday,
                income: if is_rest_day { 0.0 } else { target },
                is_rest_day,
            });
            weekday = weekday.succ();
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn standard_config() -> ScheduleConfig {
        ScheduleConfig::new(
            10000.0,
            [Weekday::Sun, Weekday::Sat],
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-01-01 is a Monday
    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn record(d: NaiveDate, earned: f64) -> DailyRecord {
        DailyRecord {
            date: d,
            earned,
            is_rest_day: false,
            salary_snapshot: 10000.0,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_first_week_without_history() {
        let config = standard_config();
        let target = daily_target(&config);
        // Friday evening: Mon-Thu estimated plus a finished Friday
        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 1, 5, 20, 0), &[]);

        assert!(approx(stats.today_earnings, target));
        assert!(approx(stats.month_total, 5.0 * target));
        assert!(approx(stats.year_total, 5.0 * target));
        assert_eq!(stats.current_daily_target, target);
    }

    #[test]
    fn test_recorded_day_replaces_estimate() {
        let config = standard_config();
        let target = daily_target(&config);
        let history = vec![record(date(2024, 1, 2), 100.0)];

        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 1, 5, 20, 0), &history);

        // Jan 1, 3, 4 estimated, Jan 2 recorded, Jan 5 live
        assert!(approx(stats.year_total, 4.0 * target + 100.0));
        assert!(approx(stats.month_total, 4.0 * target + 100.0));
    }

    #[test]
    fn test_recorded_zero_on_workday_is_respected() {
        let config = standard_config();
        let target = daily_target(&config);
        let history = vec![record(date(2024, 1, 3), 0.0)];

        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 1, 4, 8, 0), &history);

        // Jan 1, 2 estimated; Jan 3 recorded as nothing; today not started
        assert!(approx(stats.year_total, 2.0 * target));
    }

    #[test]
    fn test_recorded_rest_day_income_counts() {
        let config = standard_config();
        let target = daily_target(&config);
        let mut weekend = record(date(2024, 1, 6), 50.0);
        weekend.is_rest_day = true;

        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 1, 8, 8, 0), &[weekend]);

        // Mon-Fri estimated, Saturday recorded, Sunday rest
        assert!(approx(stats.year_total, 5.0 * target + 50.0));
    }

    #[test]
    fn test_month_and_year_split() {
        let config = standard_config();
        let target = daily_target(&config);
        // Feb 2nd before work: 23 workdays in January plus Thursday Feb 1st
        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 2, 2, 8, 0), &[]);

        assert_eq!(stats.today_earnings, 0.0);
        assert!(approx(stats.month_total, target));
        assert!(approx(stats.year_total, 24.0 * target));
    }

    #[test]
    fn test_january_first_only_counts_today() {
        let config = standard_config();
        let target = daily_target(&config);
        let aggregator = PeriodAggregator::new();

        let morning = aggregator.aggregate(&config, at(2024, 1, 1, 8, 0), &[]);
        assert_eq!(morning.month_total, 0.0);
        assert_eq!(morning.year_total, 0.0);

        let midday = aggregator.aggregate(&config, at(2024, 1, 1, 13, 30), &[]);
        assert!(approx(midday.today_earnings, target / 2.0));
        assert!(approx(midday.month_total, target / 2.0));
        assert!(approx(midday.year_total, target / 2.0));
    }

    #[test]
    fn test_full_leap_year_walk() {
        let config = standard_config();
        let target = daily_target(&config);
        // 2024-12-31 is a Tuesday; 262 workdays in 2024, 22 of them in December
        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 12, 31, 20, 0), &[]);

        assert!(approx(stats.year_total, 262.0 * target));
        assert!(approx(stats.month_total, 22.0 * target));
    }

    #[test]
    fn test_records_outside_walk_are_ignored() {
        let config = standard_config();
        let baseline = PeriodAggregator::new().aggregate(&config, at(2024, 1, 5, 12, 0), &[]);

        let history = vec![
            record(date(2023, 12, 29), 9999.0),
            record(date(2024, 1, 5), 9999.0),
            record(date(2024, 1, 10), 9999.0),
        ];
        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 1, 5, 12, 0), &history);

        assert_eq!(stats, baseline);
    }

    #[test]
    fn test_last_duplicate_record_wins() {
        let config = standard_config();
        let target = daily_target(&config);
        let history = vec![record(date(2024, 1, 1), 10.0), record(date(2024, 1, 1), 20.0)];

        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 1, 2, 8, 0), &history);

        assert!(approx(stats.year_total, 20.0));
        assert!(stats.year_total < target);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let config = standard_config();
        let history = vec![record(date(2024, 3, 4), 123.45)];
        let aggregator = PeriodAggregator::new();
        let now = at(2024, 3, 13, 13, 30);

        let first = aggregator.aggregate(&config, now, &history);
        let second = aggregator.aggregate(&config, now, &history);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inverted_window_still_estimates_past_days() {
        let config = ScheduleConfig::new(
            10000.0,
            [Weekday::Sun, Weekday::Sat],
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        let target = daily_target(&config);
        let stats = PeriodAggregator::new().aggregate(&config, at(2024, 1, 3, 12, 0), &[]);

        assert_eq!(stats.today_earnings, 0.0);
        assert!(approx(stats.year_total, 2.0 * target));
    }

    #[test]
    fn test_weekly_trend_is_monday_first_projection() {
        let config = standard_config();
        let target = daily_target(&config);
        let trend = PeriodAggregator::new().weekly_trend(&config);

        let weekdays: Vec<Weekday> = trend.iter().map(|p| p.weekday).collect();
        assert_eq!(
            weekdays,
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ]
        );
        for point in &trend[..5] {
            assert!(!point.is_rest_day);
            assert_eq!(point.income, target);
        }
        for point in &trend[5..] {
            assert!(point.is_rest_day);
            assert_eq!(point.income, 0.0);
        }
    }
}
