//! Gemini API integration for AI-generated metric analysis
//!
//! Requires the `ai` feature to be enabled:
//! ```toml
//! workpulse = { version = "0.3", features = ["ai"] }
//! ```

use crate::sample::TrendPoint;

/// Static message shown when no API key is configured
pub const UNAVAILABLE_MESSAGE: &str =
    "AI insights are currently unavailable. Configure GEMINI_API_KEY to enable them.";

/// Message shown when a request fails; failures never propagate to callers
/// of the fallback path
pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I was unable to generate insights at this time. Please try again later.";

/// Gemini API client for summarizing metric data
#[allow(dead_code)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
}

/// Error from the Gemini API
#[derive(Debug)]
pub enum InsightError {
    NoApiKey,
    RequestFailed(String),
    InvalidResponse(String),
    RateLimited,
    ApiError(String),
}

impl std::fmt::Display for InsightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightError::NoApiKey => write!(f, "GEMINI_API_KEY environment variable not set"),
            InsightError::RequestFailed(e) => write!(f, "Request failed: {}", e),
            InsightError::InvalidResponse(e) => write!(f, "Invalid response: {}", e),
            InsightError::RateLimited => write!(f, "Rate limited - try again later"),
            InsightError::ApiError(e) => write!(f, "API error: {}", e),
        }
    }
}

impl std::error::Error for InsightError {}

impl GeminiClient {
    /// Create a new client using GEMINI_API_KEY from environment
    pub fn from_env() -> Result<Self, InsightError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| InsightError::NoApiKey)?;

        Ok(Self::with_key(api_key))
    }

    /// Create a client with a specific API key
    pub fn with_key(api_key: String) -> Self {
        Self {
            api_key,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Summarize a metric's trend data: a short summary, two observations,
    /// and one recommendation.
    #[cfg(feature = "ai")]
    pub fn summarize(&self, metric_title: &str, points: &[TrendPoint]) -> Result<String, InsightError> {
        let prompt = build_prompt(metric_title, points);
        self.send_request(&prompt)
    }

    /// Send a prompt to Gemini and get the response text
    #[cfg(feature = "ai")]
    pub fn send_request(&self, prompt: &str) -> Result<String, InsightError> {
        use serde_json::json;

        let client = reqwest::blocking::Client::new();

        let body = json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| InsightError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(InsightError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(InsightError::ApiError(format!("{}: {}", status, error_text)));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| InsightError::InvalidResponse(e.to_string()))?;

        let text = json["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|p| p["text"].as_str())
            .ok_or_else(|| InsightError::InvalidResponse("No content in response".to_string()))?;

        Ok(text.trim().to_string())
    }

    /// Stub implementation when ai feature is disabled
    #[cfg(not(feature = "ai"))]
    pub fn summarize(
        &self,
        _metric_title: &str,
        _points: &[TrendPoint],
    ) -> Result<String, InsightError> {
        Err(InsightError::RequestFailed(
            "AI feature not enabled. Rebuild with: cargo build --features ai".to_string(),
        ))
    }

    #[cfg(not(feature = "ai"))]
    pub fn send_request(&self, _prompt: &str) -> Result<String, InsightError> {
        Err(InsightError::RequestFailed(
            "AI feature not enabled. Rebuild with: cargo build --features ai".to_string(),
        ))
    }
}

/// Check if the AI feature is available
pub fn is_ai_available() -> bool {
    cfg!(feature = "ai")
}

/// Build the analysis prompt from a metric title and its trend data
pub fn build_prompt(metric_title: &str, points: &[TrendPoint]) -> String {
    let data_lines = points
        .iter()
        .map(|p| format!("{}: actual {}, target {}", p.label, p.actual, p.target))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a senior HR analytics advisor. Analyze the following \
         monthly data for the \"{}\" metric.\n\n{}\n\n\
         Respond with a one-paragraph summary, exactly two bullet-point \
         observations, and one actionable recommendation for executive \
         leadership. Keep the whole response under 150 words.",
        metric_title, data_lines
    )
}

/// Summarize with graceful degradation: a missing key yields the static
/// unavailable message and any request failure yields an apology. Never
/// returns an error to the caller.
pub fn summarize_or_fallback(metric_title: &str, points: &[TrendPoint]) -> String {
    match GeminiClient::from_env() {
        Err(_) => UNAVAILABLE_MESSAGE.to_string(),
        Ok(client) => client
            .summarize(metric_title, points)
            .unwrap_or_else(|_| APOLOGY_MESSAGE.to_string()),
    }
}
