//! Maps the view model onto a backend-neutral document tree.
use crate::{HeaderView, ReportViewModel, SessionView, UrlRowView};

pub const PAGE_TITLE: &str = "Scrape Sessions";
pub const LOADING_TEXT: &str = "Loading…";
pub const SUCCESS_MARKER: &str = "✓";
pub const FAILURE_MARKER: &str = "✗";
pub const COLUMN_HEADERS: [&str; 6] = ["#", "URL", "Title", "Text len", "OK", "Error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub body: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Loading { text: String },
    Error { text: String },
    Field {
        label: String,
        value: String,
        tone: Tone,
    },
    Session(SessionBlock),
}

/// One session: a labelled block holding the per-URL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBlock {
    /// The session id. Not guaranteed unique.
    pub key: String,
    pub label: String,
    pub marker: String,
    pub tone: Tone,
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based position in the session; URLs may repeat so they cannot key rows.
    pub key: usize,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    /// Full value for hover/accessibility when the text may be cut visually.
    pub title: Option<String>,
    pub truncate: bool,
    pub tone: Tone,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Document {
    pub fn session_blocks(&self) -> impl Iterator<Item = &SessionBlock> {
        self.body.iter().filter_map(|element| match element {
            Element::Session(block) => Some(block),
            _ => None,
        })
    }

    /// Keyed lookup; with duplicate session ids the last-rendered block wins.
    pub fn session_block(&self, key: &str) -> Option<&SessionBlock> {
        self.session_blocks().filter(|block| block.key == key).last()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.body.iter().find_map(|element| match element {
            Element::Error { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.body
            .iter()
            .any(|element| matches!(element, Element::Loading { .. }))
    }
}

/// Pure renderer: the same view model always yields the same document.
pub fn render(view: &ReportViewModel) -> Document {
    let body = match view {
        ReportViewModel::Loading => vec![Element::Loading {
            text: LOADING_TEXT.to_string(),
        }],
        ReportViewModel::Failed { message } => vec![Element::Error {
            text: message.clone(),
        }],
        ReportViewModel::Loaded { header, sessions } => {
            let mut body = header_fields(header);
            body.extend(sessions.iter().map(|s| Element::Session(session_block(s))));
            body
        }
    };

    Document {
        title: PAGE_TITLE.to_string(),
        body,
    }
}

fn header_fields(header: &HeaderView) -> Vec<Element> {
    let (status, tone) = if header.ok {
        ("succeeded", Tone::Success)
    } else {
        ("blocked", Tone::Error)
    };
    vec![
        Element::Field {
            label: "Overall success".to_string(),
            value: status.to_string(),
            tone,
        },
        Element::Field {
            label: "Concurrent sessions".to_string(),
            value: header.concurrent_sessions.to_string(),
            tone: Tone::Normal,
        },
        Element::Field {
            label: "Artifacts".to_string(),
            value: header.output_dir.clone(),
            tone: Tone::Normal,
        },
    ]
}

fn session_block(session: &SessionView) -> SessionBlock {
    SessionBlock {
        key: session.session_id.clone(),
        label: format!("{} ({})", session.session_id, session.strategy),
        marker: marker(session.ok).to_string(),
        tone: outcome_tone(session.ok),
        headers: COLUMN_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: session.rows.iter().map(url_row).collect(),
    }
}

fn url_row(row: &UrlRowView) -> Row {
    let error_tone = if row.error.is_empty() {
        Tone::Normal
    } else {
        Tone::Error
    };
    Row {
        key: row.index,
        cells: vec![
            Cell::plain(row.index.to_string()),
            Cell {
                text: row.url.clone(),
                title: Some(row.url.clone()),
                truncate: true,
                tone: Tone::Normal,
            },
            Cell::plain(row.title.clone()),
            Cell::plain(row.text_len.to_string()),
            Cell {
                tone: outcome_tone(row.ok),
                ..Cell::plain(marker(row.ok))
            },
            Cell {
                tone: error_tone,
                ..Cell::plain(row.error.clone())
            },
        ],
    }
}

fn marker(ok: bool) -> &'static str {
    if ok {
        SUCCESS_MARKER
    } else {
        FAILURE_MARKER
    }
}

fn outcome_tone(ok: bool) -> Tone {
    if ok {
        Tone::Success
    } else {
        Tone::Error
    }
}
