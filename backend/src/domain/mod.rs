//! # Domain Module
//!
//! Business logic for the salary ticker.
//!
//! The calculation core ([`earnings_calculator`] and [`period_aggregator`])
//! is a set of pure functions over a [`ScheduleConfig`] and a local
//! wall-clock instant. It never reads the clock or touches storage; the
//! services around it do that and hand it validated values.
//!
//! ## Module Organization
//!
//! - **models**: Schedule configuration, recorded history and computed stats
//! - **clock**: Where "now" comes from
//! - **earnings_calculator**: Today's running earnings and the daily target
//! - **period_aggregator**: Month-to-date, year-to-date and the weekly trend
//! - **settings_service**: Loading, validating, saving and resetting settings
//! - **quote_service**: Motivational quotes with a static fallback pool
//!
//! ## Business Rules
//!
//! - The daily target is `monthly_salary / max(1, work_days_per_week * 4.33)`
//! - A rest day earns nothing and reports 100% progress
//! - A finished work day reports exactly the daily target
//! - A work window whose end is not after its start accrues nothing
//! - Past days without a record are estimated from the current schedule

pub mod clock;
pub mod earnings_calculator;
pub mod models;
pub mod period_aggregator;
pub mod quote_service;
pub mod settings_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use earnings_calculator::{daily_target, EarningsCalculator};
pub use models::schedule::{DailyRecord, ScheduleConfig};
pub use models::stats::{AggregateStats, TrendPoint, WorkStats};
pub use period_aggregator::PeriodAggregator;
pub use quote_service::{QuoteContext, QuoteError, QuoteGenerator, QuoteService};
pub use settings_service::{ActiveSettings, SettingsError, SettingsService};
