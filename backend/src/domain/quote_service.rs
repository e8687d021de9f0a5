//! Motivational quotes for the dashboard.
//!
//! A [`QuoteGenerator`] (an external text-generation service) is asked first
//! when one is configured. Any failure or empty answer counts as "no quote",
//! and a quote is then drawn uniformly at random from a static pool: the
//! rest-day pool on rest days, the work-day pool otherwise. Failures never
//! reach the caller.

use async_trait::async_trait;
use rand::Rng;
use shared::{Quote, QuoteKind, QuoteSource};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::models::stats::WorkStats;

/// Why the external generator produced nothing
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote service request failed: {0}")]
    Transport(String),
    #[error("quote service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("quote service response could not be parsed: {0}")]
    Parse(String),
}

/// Inputs handed to the generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteContext {
    pub current_earnings: f64,
    pub progress_percentage: f64,
    pub monthly_salary: f64,
    pub is_rest_day: bool,
}

impl QuoteContext {
    pub fn from_stats(stats: &WorkStats, monthly_salary: f64) -> Self {
        Self {
            current_earnings: stats.current_earnings,
            progress_percentage: stats.progress_percentage,
            monthly_salary,
            is_rest_day: stats.is_rest_day,
        }
    }
}

/// External short-text generator
#[async_trait]
pub trait QuoteGenerator: Send + Sync {
    /// Produce a single short sentence; an empty string means "nothing"
    async fn generate(&self, context: &QuoteContext) -> Result<String, QuoteError>;
}

struct PooledQuote {
    text: &'static str,
    author: &'static str,
    kind: QuoteKind,
}

const WORK_DAY_QUOTES: &[PooledQuote] = &[
    PooledQuote {
        text: "早上好！新的一天，新的'钱'程！",
        author: "存钱罐",
        kind: QuoteKind::Fun,
    },
    PooledQuote {
        text: "午餐时间到，你已赚到一顿大餐！🍔",
        author: "干饭人",
        kind: QuoteKind::Fun,
    },
    PooledQuote {
        text: "下午加油！距离下班又近了一步！",
        author: "时钟",
        kind: QuoteKind::Serious,
    },
    PooledQuote {
        text: "今日任务完成！为自己点赞！👍",
        author: "打工人",
        kind: QuoteKind::Serious,
    },
    PooledQuote {
        text: "每一秒都在变现，你的时间很值钱！",
        author: "华尔街之狼(伪)",
        kind: QuoteKind::Serious,
    },
    PooledQuote {
        text: "坚持住，这一秒的工资刚够买颗糖🍬",
        author: "理财助手",
        kind: QuoteKind::Fun,
    },
];

const REST_DAY_QUOTES: &[PooledQuote] = &[
    PooledQuote {
        text: "今天没有闹钟，只有自由！好好享受休息日~",
        author: "枕头",
        kind: QuoteKind::Rest,
    },
    PooledQuote {
        text: "充电中... 🔋 快乐+100",
        author: "电池",
        kind: QuoteKind::Rest,
    },
    PooledQuote {
        text: "休息是为了走更远的'钱'途！",
        author: "哲学家",
        kind: QuoteKind::Rest,
    },
    PooledQuote {
        text: "今天不谈工作，只谈风月（和美食）。",
        author: "生活家",
        kind: QuoteKind::Rest,
    },
    PooledQuote {
        text: "躺平也是一种生产力！",
        author: "沙发",
        kind: QuoteKind::Rest,
    },
];

const GENERATED_AUTHOR: &str = "AI";

/// Service handing out quotes, with or without a generator
#[derive(Clone, Default)]
pub struct QuoteService {
    generator: Option<Arc<dyn QuoteGenerator>>,
}

impl QuoteService {
    /// Service that only serves the static pools
    pub fn new() -> Self {
        Self { generator: None }
    }

    pub fn with_generator(generator: Arc<dyn QuoteGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Ask the generator, falling back to the static pool
    pub async fn next_quote(&self, context: &QuoteContext) -> (Quote, QuoteSource) {
        if let Some(generator) = &self.generator {
            match generator.generate(context).await {
                Ok(text) if !text.trim().is_empty() => {
                    info!("Serving generated quote");
                    let kind = if context.is_rest_day {
                        QuoteKind::Rest
                    } else {
                        QuoteKind::Fun
                    };
                    return (
                        Quote {
                            text: text.trim().to_string(),
                            author: GENERATED_AUTHOR.to_string(),
                            kind,
                        },
                        QuoteSource::Generated,
                    );
                }
                Ok(_) => warn!("Quote service returned an empty quote, using fallback"),
                Err(e) => warn!("Error generating quote: {}", e),
            }
        }
        (Self::random_fallback(context.is_rest_day), QuoteSource::Fallback)
    }

    /// Uniformly random quote from the matching static pool
    pub fn random_fallback(is_rest_day: bool) -> Quote {
        let pool = if is_rest_day {
            REST_DAY_QUOTES
        } else {
            WORK_DAY_QUOTES
        };
        let pick = &pool[rand::rng().random_range(0..pool.len())];
        Quote {
            text: pick.text.to_string(),
            author: pick.author.to_string(),
            kind: pick.kind,
        }
    }
}
