use serde::{Deserialize, Serialize};

/// How far the recovery-room discharge checklist has been completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistProgress {
    /// Recognised items ticked off
    pub completed: usize,
    pub total: usize,
    /// Every item is ticked
    pub ready: bool,
}
