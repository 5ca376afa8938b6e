//! Domain gate and external fallback AI service.
//!
//! Prompts with no oceanographic keyword are out of domain. They are
//! forwarded to an external text service when one is configured (feature
//! `external-ai`, key via `GEMINI_API_KEY`), otherwise answered with a
//! canned redirection. The external call carries a bounded timeout and
//! every transport failure degrades to a user-visible diagnostic string;
//! nothing here can take the pipeline down.

/// Keywords marking a prompt as in-domain.
static OCEAN_KEYWORDS: &[&str] = &[
    "ocean", "sea", "water", "marine", "temperature", "salinity", "pressure",
    "depth", "tsunami", "wave", "current", "tide", "fish", "whale", "coral",
    "ice", "glacier", "arctic", "antarctic", "climate", "argo", "pacific",
    "atlantic", "indian ocean", "southern ocean", "coastal", "beach", "shore",
];

/// Substring check against the oceanographic keyword list.
pub fn is_oceanographic(prompt: &str) -> bool {
    let text = prompt.to_lowercase();
    OCEAN_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Canned response for off-topic prompts when no external service is
/// configured.
pub static FALLBACK_TEXT: &str = "This question is outside my oceanography expertise. \
I specialize in ocean data analysis, marine conditions, tsunami prediction, \
and climate impacts on oceans. Please ask questions related to:\n\n\
- Ocean temperature, salinity, and pressure\n\
- Marine life and ecosystems\n\
- Tsunami and flood risk analysis\n\
- Glacier and ice melting\n\
- Ocean currents and circulation\n\
- Climate change impacts on oceans\n\n\
For general questions, please configure the GEMINI_API_KEY environment variable.";

#[cfg(feature = "external-ai")]
pub use gemini::GeminiClient;

#[cfg(feature = "external-ai")]
mod gemini {
    use serde_json::json;
    use std::time::Duration;

    const ENDPOINT: &str =
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

    /// Bounded timeout on the sole network call in the system.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Client for the external text-generation service.
    pub struct GeminiClient {
        client: reqwest::Client,
        api_key: String,
    }

    impl GeminiClient {
        pub fn new(api_key: String) -> reqwest::Result<Self> {
            let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
            Ok(GeminiClient { client, api_key })
        }

        /// Build a client from `GEMINI_API_KEY`, if set and non-empty.
        pub fn from_env() -> Option<Self> {
            let key = std::env::var("GEMINI_API_KEY").ok()?;
            if key.is_empty() {
                return None;
            }
            Self::new(key).ok()
        }

        /// Ask the external service for a free-text answer.
        ///
        /// Transport errors, bad statuses and unexpected response shapes
        /// all come back as diagnostic strings; this method never fails.
        pub async fn generate(&self, prompt: &str) -> String {
            let body = json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            });

            let response = match self
                .client
                .post(format!("{}?key={}", ENDPOINT, self.api_key))
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => return format!("Error connecting to AI service: {e}"),
            };

            if !response.status().is_success() {
                return format!("Error connecting to AI service: HTTP {}", response.status());
            }

            let payload: serde_json::Value = match response.json().await {
                Ok(v) => v,
                Err(e) => return format!("Error processing AI response: {e}"),
            };

            payload["candidates"][0]["content"]["parts"][0]["text"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| "Unable to get response from AI service.".to_string())
        }
    }
}
