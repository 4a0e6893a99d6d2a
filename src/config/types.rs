use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// Per-question timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Seconds each question stays on screen (default: 30).
    #[serde(default = "default_question_seconds")]
    pub question_seconds: u32,
    /// Seconds before answers can be selected (default: 10).
    #[serde(default = "default_answer_delay_seconds")]
    pub answer_delay_seconds: u32,
}

/// Remote question endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL returning a JSON array of `{ id, title, body }` records.
    #[serde(default = "default_source_url")]
    pub url: String,
    /// Maximum number of questions kept from the payload (default: 10).
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_question_seconds() -> u32 {
    30
}

fn default_answer_delay_seconds() -> u32 {
    10
}

fn default_source_url() -> String {
    "https://jsonplaceholder.typicode.com/posts?_limit=10".to_string()
}

fn default_limit() -> usize {
    10
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_seconds: default_question_seconds(),
            answer_delay_seconds: default_answer_delay_seconds(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            limit: default_limit(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
