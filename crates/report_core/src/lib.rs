//! Report core: pure load state machine, display defaults and renderer.
mod effect;
mod msg;
mod render;
mod state;
mod summary;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use render::{
    render, Cell, Document, Element, Row, SessionBlock, Tone, COLUMN_HEADERS, FAILURE_MARKER,
    LOADING_TEXT, PAGE_TITLE, SUCCESS_MARKER,
};
pub use state::{LoadState, MountId, ReportState};
pub use summary::{SessionResult, Summary, UrlResult};
pub use update::update;
pub use view_model::{HeaderView, ReportViewModel, SessionView, UrlRowView};
