use crate::view_model::ReportViewModel;
use crate::Summary;

/// Identifies one mount of the view. Results tagged with a stale id are dropped.
pub type MountId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loading,
    Loaded(Summary),
    Failed(String),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportState {
    load: LoadState,
    mount: Option<MountId>,
    last_mount_id: MountId,
    dirty: bool,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Id of the live mount, if the view is currently mounted.
    pub fn mount(&self) -> Option<MountId> {
        self.mount
    }

    pub fn view(&self) -> ReportViewModel {
        ReportViewModel::from_load_state(&self.load)
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin_mount(&mut self) -> MountId {
        self.last_mount_id += 1;
        let mount_id = self.last_mount_id;
        self.mount = Some(mount_id);
        self.load = LoadState::Loading;
        self.dirty = true;
        mount_id
    }

    pub(crate) fn end_mount(&mut self) -> Option<MountId> {
        let mount_id = self.mount.take()?;
        self.load = LoadState::Uninitialized;
        self.dirty = true;
        Some(mount_id)
    }

    /// Applies a load outcome if it belongs to the live mount and the mount is
    /// still waiting for it. Returns false when the outcome was discarded.
    pub(crate) fn apply_loaded(
        &mut self,
        mount_id: MountId,
        result: Result<Summary, String>,
    ) -> bool {
        if self.mount != Some(mount_id) || self.load != LoadState::Loading {
            return false;
        }
        self.load = match result {
            Ok(summary) => LoadState::Loaded(summary),
            Err(message) => LoadState::Failed(message),
        };
        self.dirty = true;
        true
    }
}
