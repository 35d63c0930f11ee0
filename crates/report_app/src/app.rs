use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use report_core::{render, update, Document, Element, LoadState, Msg, ReportState};
use report_engine::SummarySource;
use report_logging::report_info;

use crate::cli::{Cli, OutputFormat};
use crate::effects::EffectRunner;
use crate::output::{self, TextOptions};

const TICK: Duration = Duration::from_millis(75);

/// One report view: state, effect execution and render coalescing.
struct ReportApp {
    state: ReportState,
    effects: EffectRunner,
}

impl ReportApp {
    fn new(source: Arc<dyn SummarySource>) -> Self {
        Self {
            state: ReportState::new(),
            effects: EffectRunner::new(source),
        }
    }

    /// Applies `msg` and returns a fresh document when the state changed.
    fn dispatch(&mut self, msg: Msg) -> Option<Document> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.enqueue(effects);
        let was_dirty = state.consume_dirty();
        let document = was_dirty.then(|| render(&state.view()));
        self.state = state;
        document
    }

    /// Mounts the view, pumps engine events until the load settles, then
    /// unmounts. Returns the settled document and the matching exit status.
    fn run_to_completion(&mut self) -> (Document, ExitCode) {
        let mut document = self.dispatch(Msg::Mounted);
        while !self.state.load_state().is_terminal() {
            if let Some(doc) = document.take() {
                show_loading(&doc);
            }
            let msg = self.effects.next_msg(TICK);
            document = self.dispatch(msg);
        }

        let settled = render(&self.state.view());
        let code = match self.state.load_state() {
            LoadState::Loaded(_) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        };
        self.dispatch(Msg::Unmounted);
        (settled, code)
    }
}

pub fn run(cli: &Cli) -> Result<ExitCode> {
    let source = cli.summary_source();
    report_info!("report source: {}", source.describe());
    let (document, code) = ReportApp::new(source).run_to_completion();

    let rendered = match cli.format {
        OutputFormat::Text => output::to_text(&document, &TextOptions::from_cli(cli)),
        OutputFormat::Html => output::to_html(&document),
    };
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing report to stdout")?;

    Ok(code)
}

fn show_loading(doc: &Document) {
    for element in &doc.body {
        if let Element::Loading { text } = element {
            eprintln!("{text}");
        }
    }
}
