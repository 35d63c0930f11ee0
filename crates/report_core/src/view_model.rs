//! Display-safe projection of the load state.
//!
//! Every optional field of the summary is resolved to its fallback here, once,
//! so rendering never has to reason about absence.
use crate::{LoadState, SessionResult, Summary, UrlResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportViewModel {
    Loading,
    Failed { message: String },
    Loaded {
        header: HeaderView,
        sessions: Vec<SessionView>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub ok: bool,
    pub concurrent_sessions: u32,
    pub output_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub session_id: String,
    pub strategy: String,
    pub ok: bool,
    pub rows: Vec<UrlRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRowView {
    /// 1-based position within the session.
    pub index: usize,
    pub url: String,
    pub title: String,
    pub text_len: u64,
    pub ok: bool,
    pub error: String,
}

impl ReportViewModel {
    pub fn from_load_state(load: &LoadState) -> Self {
        match load {
            LoadState::Uninitialized | LoadState::Loading => ReportViewModel::Loading,
            LoadState::Failed(message) => ReportViewModel::Failed {
                message: message.clone(),
            },
            LoadState::Loaded(summary) => ReportViewModel::from_summary(summary),
        }
    }

    pub fn from_summary(summary: &Summary) -> Self {
        ReportViewModel::Loaded {
            header: HeaderView {
                ok: summary.ok,
                concurrent_sessions: summary.concurrent_sessions,
                output_dir: summary.output_dir.clone(),
            },
            sessions: summary.sessions.iter().map(SessionView::from).collect(),
        }
    }
}

impl From<&SessionResult> for SessionView {
    fn from(session: &SessionResult) -> Self {
        Self {
            session_id: session.session_id.clone(),
            strategy: session.strategy.clone(),
            ok: session.ok,
            rows: session
                .results
                .iter()
                .enumerate()
                .map(|(idx, result)| UrlRowView::new(idx + 1, result))
                .collect(),
        }
    }
}

impl UrlRowView {
    fn new(index: usize, result: &UrlResult) -> Self {
        Self {
            index,
            url: result.url.clone(),
            title: result.title.clone().unwrap_or_default(),
            text_len: result.text_len.unwrap_or(0),
            ok: result.ok,
            error: result.error.clone().unwrap_or_default(),
        }
    }
}
