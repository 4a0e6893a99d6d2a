use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::SourceConfig;
use crate::questions::model::Question;

/// Errors that can occur while fetching the question list.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection or transport failure
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-2xx status
    #[error("Question source returned status {status}")]
    Status { status: u16 },

    /// Payload was not a JSON array of questions
    #[error("Malformed question payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// One-shot HTTP question source.
///
/// Single attempt, no retry. The list is truncated to the configured limit.
pub struct HttpQuestionSource {
    client: Client,
    url: String,
    limit: usize,
}

impl HttpQuestionSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            limit: config.limit,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let mut questions: Vec<Question> = response.json().await.map_err(SourceError::Decode)?;
        questions.truncate(self.limit);
        tracing::info!(count = questions.len(), url = %self.url, "Fetched questions");
        Ok(questions)
    }
}
