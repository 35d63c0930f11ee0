use crate::{Effect, LoadState, Msg, ReportState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ReportState, msg: Msg) -> (ReportState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            // One load per mount; a repeated mount signal while mounted is ignored.
            if state.mount().is_some() {
                return (state, Vec::new());
            }
            let mount_id = state.begin_mount();
            vec![Effect::FetchSummary { mount_id }]
        }
        Msg::Unmounted => {
            let pending = *state.load_state() == LoadState::Loading;
            match state.end_mount() {
                Some(mount_id) if pending => vec![Effect::CancelFetch { mount_id }],
                _ => Vec::new(),
            }
        }
        Msg::SummaryLoaded { mount_id, result } => {
            // Stale or duplicate outcomes leave the state untouched.
            state.apply_loaded(mount_id, result);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
