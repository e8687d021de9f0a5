use serde::{Deserialize, Serialize};

/// Persisted user settings, stored as a single blob by the storage layer.
///
/// Field names are serialized in camelCase so that blobs written by earlier
/// versions of the app keep loading. Fields missing from an older blob are
/// filled from [`UserSettings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Nominal monthly salary (non-negative)
    pub monthly_salary: f64,
    /// Weekday ids with no accrual, 0 = Sunday, 1 = Monday, ..., 6 = Saturday
    pub rest_days: Vec<u8>,
    /// Start of the work window, local wall-clock "HH:MM"
    pub work_start_hour: String,
    /// End of the work window, local wall-clock "HH:MM"
    pub work_end_hour: String,
    pub has_completed_onboarding: bool,
    pub privacy_mode: bool,
    /// Log of past income, written by an external recorder
    pub history: Vec<DailyRecord>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            monthly_salary: 10000.0,
            rest_days: vec![0, 6],
            work_start_hour: "09:00".to_string(),
            work_end_hour: "18:00".to_string(),
            has_completed_onboarding: false,
            privacy_mode: false,
            history: Vec::new(),
        }
    }
}

/// One recorded day of income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// ISO calendar date "YYYY-MM-DD"
    pub date: String,
    pub earned: f64,
    pub is_rest_day: bool,
    /// Salary in effect that day, so past records stay accurate if the salary changes
    pub salary_snapshot: f64,
}

/// Instantaneous earnings for today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkStats {
    pub current_earnings: f64,
    pub elapsed_time_seconds: f64,
    /// 0..=100; reported as 100 on rest days
    pub progress_percentage: f64,
    pub is_working: bool,
    pub is_rest_day: bool,
}

/// Response for the dashboard view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkStatsResponse {
    pub stats: WorkStats,
    /// Earnings formatted for display (4 decimals while accruing, 2 once the day is done)
    pub formatted_earnings: String,
    /// Elapsed time formatted as "{h}h {m}m {s}s"
    pub formatted_elapsed: String,
    pub hourly_rate: f64,
    pub daily_target: f64,
    /// Local wall-clock instant the stats were computed for (RFC 3339 without offset)
    pub computed_at: String,
}

/// Month-to-date and year-to-date totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub today_earnings: f64,
    pub month_total: f64,
    pub year_total: f64,
    pub current_daily_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatsResponse {
    pub stats: AggregateStats,
    pub computed_at: String,
}

/// One bar of the weekly trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrendEntry {
    /// Weekday id, 0 = Sunday ... 6 = Saturday
    pub weekday: u8,
    /// Short English weekday name ("Mon", "Tue", ...)
    pub label: String,
    pub income: f64,
    pub is_rest_day: bool,
}

/// Weekly trend, Monday first.
///
/// This is a projection of the current schedule, not recorded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrendResponse {
    pub entries: Vec<WeeklyTrendEntry>,
    pub daily_target: f64,
    /// Always true: values are estimated from the current settings
    pub projected: bool,
    pub note: String,
}

/// Flavor of a motivational quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    Fun,
    Serious,
    Rest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub kind: QuoteKind,
}

/// Where a served quote came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: Quote,
    pub source: QuoteSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: UserSettings,
    /// Non-fatal configuration problems, e.g. a work window that never accrues
    pub warnings: Vec<String>,
}

/// Weekday display entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayInfo {
    /// 0 = Sunday ... 6 = Saturday
    pub id: u8,
    pub label: &'static str,
    pub short: &'static str,
}

/// Weekdays in display order (Monday first)
pub const WEEKDAYS: [WeekdayInfo; 7] = [
    WeekdayInfo { id: 1, label: "周一", short: "Mon" },
    WeekdayInfo { id: 2, label: "周二", short: "Tue" },
    WeekdayInfo { id: 3, label: "周三", short: "Wed" },
    WeekdayInfo { id: 4, label: "周四", short: "Thu" },
    WeekdayInfo { id: 5, label: "周五", short: "Fri" },
    WeekdayInfo { id: 6, label: "周六", short: "Sat" },
    WeekdayInfo { id: 0, label: "周日", short: "Sun" },
];

impl WeekdayInfo {
    /// Look up a weekday by its Sunday-based id
    pub fn by_id(id: u8) -> Option<&'static WeekdayInfo> {
        WEEKDAYS.iter().find(|d| d.id == id)
    }
}
