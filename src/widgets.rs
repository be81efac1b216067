//! [`ClickableList`] — lines paired with the click actions they trigger.
//!
//! Rendering and click registration are built from the same list, so a
//! clickable row can never drift away from its target when lines are
//! inserted above it.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register one row target per clickable line. Lines are assumed not to wrap.
    ///
    /// `top_offset`/`bottom_offset` are the border rows of the enclosing
    /// block. Scrolling lists pass only their visible window. Rows clipped
    /// by the bottom border get no target.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
    ) {
        let first_row = area.y.saturating_add(top_offset);
        let visible = area
            .height
            .saturating_sub(top_offset)
            .saturating_sub(bottom_offset);
        for &(line_idx, action_id) in &self.actions {
            let Ok(offset) = u16::try_from(line_idx) else {
                continue;
            };
            if offset >= visible {
                continue;
            }
            cs.add_row_target(area, first_row + offset, action_id);
        }
    }
}

impl Default for ClickableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}
