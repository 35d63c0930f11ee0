use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use report_core::Summary;
use report_logging::{report_debug, report_warn};
use reqwest::header::CONTENT_TYPE;

use crate::{decode_summary, LoadError};

/// Path of the summary document relative to the serving origin.
pub const SUMMARY_PATH: &str = "/data.json";
/// File a scrape run writes into its artifacts directory.
pub const SUMMARY_FILENAME: &str = "summary.json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Whole-request deadline. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Provider of summary documents. Each call performs one read.
#[async_trait::async_trait]
pub trait SummarySource: Send + Sync {
    async fn load(&self) -> Result<Summary, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Reads `/data.json` from the origin of `base_url`.
#[derive(Debug, Clone)]
pub struct HttpSummarySource {
    base_url: String,
    settings: FetchSettings,
}

impl HttpSummarySource {
    pub fn new(base_url: impl Into<String>, settings: FetchSettings) -> Self {
        Self {
            base_url: base_url.into(),
            settings,
        }
    }

    fn document_url(&self) -> Result<url::Url, LoadError> {
        let base = url::Url::parse(&self.base_url)
            .map_err(|err| LoadError::transport(format!("invalid url {}: {err}", self.base_url)))?;
        base.join(SUMMARY_PATH)
            .map_err(|err| LoadError::transport(format!("invalid url {}: {err}", self.base_url)))
    }

    fn build_client(&self) -> Result<reqwest::Client, LoadError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| LoadError::transport(err.to_string()))
    }
}

#[async_trait::async_trait]
impl SummarySource for HttpSummarySource {
    async fn load(&self) -> Result<Summary, LoadError> {
        let url = self.document_url()?;
        let client = self.build_client()?;
        report_debug!("GET {}", url);

        let response = client
            .get(url.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::transport(format!("{url} returned {status}")));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !is_json_content_type(ct) {
                // The body decides; a non-JSON body fails at decode time.
                report_warn!("{} served content type {}", url, ct);
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        report_debug!("read {} bytes from {}", bytes.len(), url);

        decode_summary(&bytes)
    }

    fn describe(&self) -> String {
        self.document_url()
            .map(|url| url.to_string())
            .unwrap_or_else(|_| self.base_url.clone())
    }
}

/// Reads a summary from disk. A directory resolves to its `summary.json`.
#[derive(Debug, Clone)]
pub struct FileSummarySource {
    path: PathBuf,
}

impl FileSummarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn resolve(&self) -> PathBuf {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) if meta.is_dir() => self.path.join(SUMMARY_FILENAME),
            _ => self.path.clone(),
        }
    }
}

#[async_trait::async_trait]
impl SummarySource for FileSummarySource {
    async fn load(&self) -> Result<Summary, LoadError> {
        let path = self.resolve().await;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|err| LoadError::transport(format!("{}: {err}", display(&path))))?;
        report_debug!("read {} bytes from {}", bytes.len(), display(&path));
        decode_summary(&bytes)
    }

    fn describe(&self) -> String {
        display(&self.path)
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn is_json_content_type(content_type: &str) -> bool {
    let ct = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();
    ct == "application/json" || ct.ends_with("+json")
}

fn too_large(max_bytes: u64, actual: u64) -> LoadError {
    LoadError::transport(format!(
        "response too large (max {max_bytes} bytes, got at least {actual})"
    ))
}

fn map_reqwest_error(err: reqwest::Error) -> LoadError {
    if err.is_timeout() {
        return LoadError::transport(format!("request timed out: {err}"));
    }
    if err.is_redirect() {
        return LoadError::transport(format!("redirect limit exceeded: {err}"));
    }
    LoadError::transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_url_is_rooted_at_origin() {
        let source =
            HttpSummarySource::new("http://localhost:3000/reports/", FetchSettings::default());
        assert_eq!(
            source.document_url().unwrap().as_str(),
            "http://localhost:3000/data.json"
        );
    }

    #[test]
    fn json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("Application/JSON; charset=utf-8"));
        assert!(is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type("text/html"));
    }
}
