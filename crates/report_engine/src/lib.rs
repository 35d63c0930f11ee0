//! Report engine: summary sources and the background load executor.
mod decode;
mod engine;
mod source;
mod types;

pub use decode::decode_summary;
pub use engine::EngineHandle;
pub use source::{
    FetchSettings, FileSummarySource, HttpSummarySource, SummarySource, SUMMARY_FILENAME,
    SUMMARY_PATH,
};
pub use types::{EngineEvent, LoadError, LoadErrorKind};
