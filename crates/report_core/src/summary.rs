//! Schema of the summary document written by a scrape run.
//!
//! Optional fields decode to `None` whether the key is missing or `null`.
//! Unknown keys are skipped without being decoded, which is also how the raw
//! `html` page source a producer may attach to each URL result is dropped.
use serde::{Deserialize, Serialize};

/// Root document: the outcome of one scrape job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Overall job success as decided by the producer.
    pub ok: bool,
    pub concurrent_sessions: u32,
    /// Sessions in execution order.
    pub sessions: Vec<SessionResult>,
    /// Where the run stored its raw artifacts.
    pub output_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub session_id: String,
    pub ok: bool,
    pub strategy: String,
    /// Per-URL attempts in the order they were made.
    pub results: Vec<UrlResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResult {
    pub url: String,
    pub ok: bool,
    pub strategy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_len: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
