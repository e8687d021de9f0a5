use chrono::NaiveDateTime;
use shared::{
    AggregateStats, AggregateStatsResponse, WeekdayInfo, WeeklyTrendEntry, WeeklyTrendResponse,
    WorkStats, WorkStatsResponse,
};

use crate::domain::models::schedule::weekday_id;
use crate::domain::models::stats::{
    AggregateStats as DomainAggregateStats, TrendPoint, WorkStats as DomainWorkStats,
};

const TREND_NOTE: &str = "Estimated from the current schedule; not recorded history";

pub struct StatsMapper;

impl StatsMapper {
    /// Timestamp string used in every stats response
    pub fn format_computed_at(now: NaiveDateTime) -> String {
        now.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }

    /// 4 decimals while the day is running, 2 once nothing is left to earn
    pub fn format_earnings(stats: &DomainWorkStats) -> String {
        if stats.is_day_complete() {
            format!("{:.2}", stats.current_earnings)
        } else {
            format!("{:.4}", stats.current_earnings)
        }
    }

    pub fn format_elapsed(elapsed_seconds: f64) -> String {
        let total = elapsed_seconds.max(0.0).floor() as u64;
        format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
    }

    pub fn work_stats_to_dto(stats: DomainWorkStats) -> WorkStats {
        WorkStats {
            current_earnings: stats.current_earnings,
            elapsed_time_seconds: stats.elapsed_time_seconds,
            progress_percentage: stats.progress_percentage,
            is_working: stats.is_working,
            is_rest_day: stats.is_rest_day,
        }
    }

    pub fn to_work_stats_response(
        stats: DomainWorkStats,
        hourly_rate: f64,
        daily_target: f64,
        now: NaiveDateTime,
    ) -> WorkStatsResponse {
        WorkStatsResponse {
            formatted_earnings: Self::format_earnings(&stats),
            formatted_elapsed: Self::format_elapsed(stats.elapsed_time_seconds),
            stats: Self::work_stats_to_dto(stats),
            hourly_rate,
            daily_target,
            computed_at: Self::format_computed_at(now),
        }
    }

    pub fn to_aggregate_response(
        stats: DomainAggregateStats,
        now: NaiveDateTime,
    ) -> AggregateStatsResponse {
        AggregateStatsResponse {
            stats: AggregateStats {
                today_earnings: stats.today_earnings,
                month_total: stats.month_total,
                year_total: stats.year_total,
                current_daily_target: stats.current_daily_target,
            },
            computed_at: Self::format_computed_at(now),
        }
    }

    pub fn trend_point_to_dto(point: TrendPoint) -> WeeklyTrendEntry {
        let id = weekday_id(point.weekday);
        let label = WeekdayInfo::by_id(id)
            .map(|info| info.short.to_string())
            .unwrap_or_else(|| point.weekday.to_string());
        WeeklyTrendEntry {
            weekday: id,
            label,
            income: point.income,
            is_rest_day: point.is_rest_day,
        }
    }

    pub fn to_weekly_trend_response(
        points: Vec<TrendPoint>,
        daily_target: f64,
    ) -> WeeklyTrendResponse {
        WeeklyTrendResponse {
            entries: points.into_iter().map(Self::trend_point_to_dto).collect(),
            daily_target,
            projected: true,
            note: TREND_NOTE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 13)
            .unwrap()
            .and_hms_milli_opt(13, 30, 0, 250)
            .unwrap()
    }

    #[test]
    fn test_earnings_precision_follows_progress() {
        let running = DomainWorkStats {
            current_earnings: 230.946882,
            elapsed_time_seconds: 16200.0,
            progress_percentage: 50.0,
            is_working: true,
            is_rest_day: false,
        };
        assert_eq!(StatsMapper::format_earnings(&running), "230.9469");

        let done = DomainWorkStats {
            current_earnings: 461.893764,
            elapsed_time_seconds: 32400.0,
            progress_percentage: 100.0,
            is_working: false,
            is_rest_day: false,
        };
        assert_eq!(StatsMapper::format_earnings(&done), "461.89");
        assert_eq!(StatsMapper::format_earnings(&DomainWorkStats::rest_day()), "0.00");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(StatsMapper::format_elapsed(0.0), "0h 0m 0s");
        assert_eq!(StatsMapper::format_elapsed(16200.0), "4h 30m 0s");
        assert_eq!(StatsMapper::format_elapsed(3725.9), "1h 2m 5s");
    }

    #[test]
    fn test_work_stats_response() {
        let stats = DomainWorkStats {
            current_earnings: 1.5,
            elapsed_time_seconds: 61.0,
            progress_percentage: 0.2,
            is_working: true,
            is_rest_day: false,
        };
        let response = StatsMapper::to_work_stats_response(stats, 51.3, 461.9, noon());

        assert_eq!(response.stats.current_earnings, 1.5);
        assert!(response.stats.is_working);
        assert_eq!(response.formatted_earnings, "1.5000");
        assert_eq!(response.formatted_elapsed, "0h 1m 1s");
        assert_eq!(response.hourly_rate, 51.3);
        assert_eq!(response.computed_at, "2024-03-13T13:30:00.250");
    }

    #[test]
    fn test_trend_entries_carry_ids_and_short_labels() {
        let points = vec![
            TrendPoint {
                weekday: Weekday::Mon,
                income: 400.0,
                is_rest_day: false,
            },
            TrendPoint {
                weekday: Weekday::Sun,
                income: 0.0,
                is_rest_day: true,
            },
        ];
        let response = StatsMapper::to_weekly_trend_response(points, 400.0);

        assert!(response.projected);
        assert!(!response.note.is_empty());
        assert_eq!(response.entries[0].weekday, 1);
        assert_eq!(response.entries[0].label, "Mon");
        assert_eq!(response.entries[1].weekday, 0);
        assert_eq!(response.entries[1].label, "Sun");
        assert!(response.entries[1].is_rest_day);
    }
}
