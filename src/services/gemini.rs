use super::{GatewayError, ModelGateway};
use crate::config::GeminiSettings;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API client
///
/// Sends single-turn `generateContent` requests and returns the text of the
/// first candidate.
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(settings: &GeminiSettings) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone().filter(|key| !key.is_empty()),
            model: settings.model.clone(),
            client,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::NotConfigured)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending request to Gemini API");

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Gemini API returned {}: {}", status, body);
            return Err(GatewayError::ApiError(format!("Gemini API error: {}", status)));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text = api_response.first_text().ok_or_else(|| {
            GatewayError::InvalidResponse("Response contained no candidate text".into())
        })?;

        tracing::debug!(model = %self.model, reply_len = text.len(), "Received Gemini reply");

        Ok(text.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
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

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}
