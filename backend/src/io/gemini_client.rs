//! HTTP client for the Gemini `generateContent` endpoint, used as the
//! optional motivational-quote generator.

use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::domain::quote_service::{QuoteContext, QuoteError, QuoteGenerator};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct GeminiQuoteGenerator {
    client: Client,
    base_url: Url,
    model: String,
    api_key: String,
}

impl GeminiQuoteGenerator {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> AnyResult<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL).context("parse Gemini base URL")?;
        Self::with_base_url(api_key, base_url, DEFAULT_MODEL, timeout)
    }

    /// Point the client at another host, e.g. a local mock
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: Url,
        model: impl Into<String>,
        timeout: Duration,
    ) -> AnyResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            client,
            base_url,
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> Result<Url, QuoteError> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|err| QuoteError::Transport(err.to_string()))
    }
}

/// Prompt for the current situation
pub fn build_prompt(context: &QuoteContext) -> String {
    if context.is_rest_day {
        "You are the witty, cartoonish friend of a hard worker. \
         Today is a REST DAY for the user. \
         Write one short, funny or relaxing sentence (in Chinese) \
         encouraging them to enjoy the break. \
         Do not talk about earning money today; focus on recharging and freedom. \
         Keep it under 20 words."
            .to_string()
    } else {
        format!(
            "You are a witty, cartoonish financial assistant for a worker. \
             The user has earned ¥{:.2} so far today and is {:.1}% through the workday. \
             Their monthly salary is ¥{}. \
             Write one short, funny or encouraging sentence (in Chinese) to motivate them. \
             Be playful if earnings are low and celebrate if they are high. \
             Keep it under 20 words.",
            context.current_earnings, context.progress_percentage, context.monthly_salary
        )
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct QuotePayload {
    quote: String,
}

/// Pull the quote out of a `generateContent` response body.
///
/// An answer without candidates yields an empty string.
fn extract_quote(response: GenerateContentResponse) -> Result<String, QuoteError> {
    let text = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text);

    match text {
        Some(text) if !text.trim().is_empty() => {
            let payload: QuotePayload = serde_json::from_str(text.trim())
                .map_err(|err| QuoteError::Parse(err.to_string()))?;
            Ok(payload.quote)
        }
        _ => Ok(String::new()),
    }
}

#[async_trait]
impl QuoteGenerator for GeminiQuoteGenerator {
    async fn generate(&self, context: &QuoteContext) -> Result<String, QuoteError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(context) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": { "quote": { "type": "STRING" } }
                }
            }
        });

        let resp = self
            .client
            .post(self.endpoint()?)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| QuoteError::Transport(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|err| format!("response body error: {err}"));
            return Err(QuoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = resp
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| QuoteError::Parse(err.to_string()))?;
        let quote = extract_quote(parsed)?;
        debug!("Quote service answered with {} chars", quote.chars().count());
        Ok(quote)
    }
}
