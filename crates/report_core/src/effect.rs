use crate::MountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single summary load for this mount.
    FetchSummary { mount_id: MountId },
    /// Drop the in-flight load for this mount; its result must never arrive.
    CancelFetch { mount_id: MountId },
}
