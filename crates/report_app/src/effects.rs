use std::sync::Arc;
use std::time::Duration;

use report_core::{Effect, Msg};
use report_engine::{EngineEvent, EngineHandle, SummarySource};
use report_logging::report_debug;

/// Executes core effects against the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(source: Arc<dyn SummarySource>) -> Self {
        Self {
            engine: EngineHandle::new(source),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchSummary { mount_id } => {
                    report_debug!("FetchSummary mount_id={}", mount_id);
                    self.engine.load(mount_id);
                }
                Effect::CancelFetch { mount_id } => {
                    report_debug!("CancelFetch mount_id={}", mount_id);
                    self.engine.cancel(mount_id);
                }
            }
        }
    }

    /// Waits up to `tick` for an engine event; a quiet interval yields `Msg::Tick`.
    pub fn next_msg(&self, tick: Duration) -> Msg {
        match self.engine.recv_timeout(tick) {
            Some(event) => map_event(event),
            None => Msg::Tick,
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SummaryLoaded { mount_id, result } => Msg::SummaryLoaded {
            mount_id,
            result: result.map_err(|err| err.to_string()),
        },
    }
}
