//! Semantic action IDs for click targets.

// ── Task entry ──────────────────────────────────────────────────
pub const FOCUS_INPUT: u16 = 0;
pub const ADD_TASK: u16 = 1;

// ── Bulk actions ────────────────────────────────────────────────
pub const DELETE_CHECKED: u16 = 10;
pub const DRAW_GACHA: u16 = 11;

// ── Task rows (base + task index) ───────────────────────────────
pub const TOGGLE_TASK_BASE: u16 = 100;

/// Click action for task row `index`, or `None` once the ID space runs out.
/// Such rows stay reachable through the selection keys.
pub fn toggle_task_action(index: usize) -> Option<u16> {
    u16::try_from(index)
        .ok()
        .and_then(|i| TOGGLE_TASK_BASE.checked_add(i))
}

/// Inverse of [`toggle_task_action`].
pub fn task_index_of(action_id: u16) -> Option<usize> {
    action_id.checked_sub(TOGGLE_TASK_BASE).map(usize::from)
}
