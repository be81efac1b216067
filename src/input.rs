//! Input normalisation and click-target bookkeeping.
//!
//! Keyboard, mouse, and touch all end up as an [`InputEvent`]. Clicks are
//! resolved against the targets the last render registered.

use ratzilla::ratatui::layout::Rect;

/// Below this many columns the UI stacks panels vertically.
pub const NARROW_WIDTH: u16 = 60;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key.
    Key(char),
    Backspace,
    Enter,
    Esc,
    /// Move the task selection.
    Up,
    Down,
    /// A click/tap on a registered target, identified by its action ID
    /// (see `app::actions`).
    Click(u16),
}

#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared between the render loop (which registers targets) and the mouse
/// handler (which hit-tests them).
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register the full width of `area` at `row`. Rows outside `area` are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Action ID under a cell. When targets overlap the one registered last wins.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets
            .iter()
            .rev()
            .find(|t| {
                let r = t.rect;
                col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|t| t.action_id)
    }
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// Map a pixel offset inside the grid container to a cell index along one axis.
///
/// `offset` is relative to the container edge, `extent` is the container size
/// in pixels, and `cells` is the number of rows or columns. Returns `None`
/// outside the grid or for degenerate sizes.
pub fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    if cell >= cells {
        None
    } else {
        Some(cell)
    }
}
