use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use report_engine::{FetchSettings, FileSummarySource, HttpSummarySource, SummarySource};
use report_logging::LogDestination;

/// Render a scrape-session summary as a report.
#[derive(Debug, Parser)]
#[command(name = "scrape_report", version, about)]
pub struct Cli {
    /// Base URL serving /data.json, or a summary file or run directory.
    pub source: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not truncate URL cells in text output.
    #[arg(long)]
    pub wide: bool,

    /// Maximum URL cell width in text output.
    #[arg(long, default_value_t = 48)]
    pub url_width: usize,

    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Whole-request deadline. Without it a stalled server keeps the view loading.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Largest accepted response body.
    #[arg(long, default_value_t = 16 * 1024 * 1024)]
    pub max_bytes: u64,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

impl Cli {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }

    pub fn summary_source(&self) -> Arc<dyn SummarySource> {
        if is_http_url(&self.source) {
            Arc::new(HttpSummarySource::new(self.source.clone(), self.fetch_settings()))
        } else {
            Arc::new(FileSummarySource::new(&self.source))
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::TerminalAndFile(path.clone()),
            None => LogDestination::Terminal,
        }
    }
}

fn is_http_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["scrape_report", "http://localhost:3000"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.url_width, 48);
        assert!(!cli.wide);
        assert_eq!(cli.log_destination(), LogDestination::Terminal);

        let settings = cli.fetch_settings();
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.request_timeout, None);
        assert_eq!(settings.max_bytes, FetchSettings::default().max_bytes);
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from([
            "scrape_report",
            "--format",
            "html",
            "--request-timeout-secs",
            "5",
            "--log-file",
            "report.log",
            "-v",
            "artifacts/run-1",
        ]);
        assert_eq!(cli.format, OutputFormat::Html);
        assert_eq!(cli.fetch_settings().request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        assert_eq!(
            cli.log_destination(),
            LogDestination::TerminalAndFile(PathBuf::from("report.log"))
        );
    }

    #[test]
    fn source_kind_follows_scheme() {
        assert!(is_http_url("HTTPS://example.com"));
        assert!(is_http_url("http://127.0.0.1:8000/"));
        assert!(!is_http_url("artifacts/run-1/summary.json"));
        assert!(!is_http_url("/srv/http/data.json"));
    }
}
