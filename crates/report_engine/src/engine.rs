use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use report_core::MountId;
use report_logging::{report_debug, report_error, report_info, report_warn};
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, LoadError, SummarySource};

enum EngineCommand {
    Load {
        mount_id: MountId,
        cancel: CancellationToken,
    },
}

/// Runs summary loads on a background runtime.
///
/// At most one load is live at a time: starting a load cancels the previous
/// one, and a cancelled load never emits an event.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    in_flight: Mutex<Option<(MountId, CancellationToken)>>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn SummarySource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    report_error!("failed to start load runtime: {}", err);
                    reject_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx,
            in_flight: Mutex::new(None),
        }
    }

    pub fn load(&self, mount_id: MountId) {
        let cancel = CancellationToken::new();
        if let Ok(mut in_flight) = self.in_flight.lock() {
            if let Some((previous, token)) = in_flight.replace((mount_id, cancel.clone())) {
                report_debug!("load for mount {} superseded by mount {}", previous, mount_id);
                token.cancel();
            }
        }
        let _ = self.cmd_tx.send(EngineCommand::Load { mount_id, cancel });
    }

    pub fn cancel(&self, mount_id: MountId) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            if matches!(in_flight.as_ref(), Some((id, _)) if *id == mount_id) {
                if let Some((_, token)) = in_flight.take() {
                    report_debug!("load for mount {} cancelled", mount_id);
                    token.cancel();
                }
            }
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn SummarySource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load { mount_id, cancel } => {
            report_info!("loading summary from {} (mount {})", source.describe(), mount_id);
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = source.load() => result,
            };
            if cancel.is_cancelled() {
                return;
            }
            match &result {
                Ok(summary) => report_info!(
                    "summary loaded: {} sessions, ok={}",
                    summary.sessions.len(),
                    summary.ok
                ),
                Err(err) => report_warn!("summary load failed: {}", err),
            }
            let _ = event_tx.send(EngineEvent::SummaryLoaded { mount_id, result });
        }
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(EngineCommand::Load { mount_id, cancel }) = cmd_rx.recv() {
        if cancel.is_cancelled() {
            continue;
        }
        let result = Err(LoadError::transport(format!("load runtime unavailable: {reason}")));
        let _ = event_tx.send(EngineEvent::SummaryLoaded { mount_id, result });
    }
}
