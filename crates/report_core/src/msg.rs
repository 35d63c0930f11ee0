use crate::{MountId, Summary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view became visible; starts the one load for this mount.
    Mounted,
    /// The view was torn down. Any pending load must be ignored.
    Unmounted,
    /// Outcome of the load issued for `mount_id`.
    ///
    /// The error side is the user-visible text of the failure.
    SummaryLoaded {
        mount_id: MountId,
        result: Result<Summary, String>,
    },
    /// Render tick to coalesce rendering.
    Tick,
}
