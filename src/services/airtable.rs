use super::VocabularySource;
use crate::config::AirtableSettings;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

/// Upper bound on followed `offset` cursors for a single lookup
const MAX_PAGES: usize = 20;

/// Errors that can occur when interacting with Airtable
#[derive(Debug, Error)]
pub enum AirtableError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Airtable token or base id is not configured")]
    NotConfigured,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Airtable API client for the vocabulary table
pub struct AirtableClient {
    base_url: String,
    api_token: Option<String>,
    base_id: Option<String>,
    table: String,
    age_group_field: String,
    word_field: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ListRecordsResponse {
    #[serde(default)]
    records: Vec<Record>,
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(default)]
    fields: Map<String, Value>,
}

impl AirtableClient {
    /// Create a new Airtable client
    pub fn new(settings: &AirtableSettings) -> Result<Self, AirtableError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.clone(),
            api_token: settings.api_token.clone().filter(|t| !t.is_empty()),
            base_id: settings.base_id.clone().filter(|b| !b.is_empty()),
            table: settings.table.clone(),
            age_group_field: settings.age_group_field.clone(),
            word_field: settings.word_field.clone(),
            client,
        })
    }

    /// Whether both the token and base id are present
    pub fn is_configured(&self) -> bool {
        self.api_token.is_some() && self.base_id.is_some()
    }

    /// Formula matching records whose age-group field contains `age_group`
    pub fn filter_formula(&self, age_group: &str) -> String {
        let escaped = age_group.replace('\\', "\\\\").replace('\'', "\\'");
        format!("FIND('{}', {{{}}})", escaped, self.age_group_field)
    }

    /// Fetch every non-blank word tagged with `age_group`
    pub async fn fetch_words(&self, age_group: &str) -> Result<Vec<String>, AirtableError> {
        let (token, base_id) = match (&self.api_token, &self.base_id) {
            (Some(token), Some(base_id)) => (token, base_id),
            _ => return Err(AirtableError::NotConfigured),
        };

        let url = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            base_id,
            urlencoding::encode(&self.table)
        );
        let formula = self.filter_formula(age_group);
        let encoded_formula = urlencoding::encode(&formula);

        let mut words = Vec::new();
        let mut offset: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let mut page_url = format!("{}?filterByFormula={}", url, encoded_formula);
            if let Some(cursor) = &offset {
                page_url.push_str(&format!("&offset={}", urlencoding::encode(cursor)));
            }

            let response = self
                .client
                .get(&page_url)
                .bearer_auth(token)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(AirtableError::ApiError(format!(
                    "Failed to list vocabulary records: {}",
                    response.status()
                )));
            }

            let page: ListRecordsResponse = response
                .json()
                .await
                .map_err(|e| AirtableError::InvalidResponse(format!("Failed to parse records: {}", e)))?;

            words.extend(page.records.iter().filter_map(|record| {
                record
                    .fields
                    .get(&self.word_field)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|word| !word.is_empty())
                    .map(str::to_string)
            }));

            offset = page.offset;
            if offset.is_none() {
                break;
            }
        }

        if offset.is_some() {
            tracing::warn!(
                "Stopped listing vocabulary for age group {} after {} pages; remaining records ignored",
                age_group,
                MAX_PAGES
            );
        }

        tracing::debug!("Fetched {} vocabulary words for age group {}", words.len(), age_group);

        Ok(words)
    }
}

#[async_trait]
impl VocabularySource for AirtableClient {
    async fn lookup(&self, age_group: &str) -> Option<String> {
        if !self.is_configured() {
            tracing::debug!("Airtable not configured, skipping vocabulary lookup");
            return None;
        }

        let words = match self.fetch_words(age_group).await {
            Ok(words) => words,
            Err(e) => {
                tracing::warn!("Vocabulary lookup failed for {}, continuing without a word: {}", age_group, e);
                return None;
            }
        };

        words.choose(&mut rand::thread_rng()).cloned()
    }
}
