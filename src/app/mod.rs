//! Todo Gacha screen — key/click dispatch on top of a [`Session`].

pub mod actions;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::gacha::roll::{RollSource, SeededRolls};
use crate::input::{ClickState, InputEvent};
use crate::session::Session;

use actions::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands.
    Normal,
    /// Keys go into the new-task input box.
    Editing,
}

pub struct TodoGachaApp {
    pub session: Session,
    /// Text typed into the new-task box, not yet submitted.
    pub input: String,
    pub mode: InputMode,
    /// Highlighted task row. The task panel scrolls to keep it visible.
    pub selected: usize,
    rolls: Box<dyn RollSource>,
}

impl TodoGachaApp {
    pub fn new(seed: u64) -> Self {
        Self::with_rolls(Box::new(SeededRolls::new(seed)))
    }

    pub fn with_rolls(rolls: Box<dyn RollSource>) -> Self {
        Self {
            session: Session::new(),
            input: String::new(),
            mode: InputMode::Normal,
            selected: 0,
            rolls,
        }
    }

    /// Handle one input event. Returns true if it changed anything.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let consumed = match event {
            InputEvent::Click(id) => self.handle_click(*id),
            _ => match self.mode {
                InputMode::Editing => self.handle_editing(event),
                InputMode::Normal => self.handle_normal(event),
            },
        };
        if consumed && log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&self.session.snapshot()) {
                Ok(json) => log::debug!("state: {}", json),
                Err(e) => log::warn!("state snapshot failed: {}", e),
            }
        }
        consumed
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            FOCUS_INPUT => {
                self.mode = InputMode::Editing;
                true
            }
            ADD_TASK => self.submit_input(),
            DELETE_CHECKED => self.delete_checked(),
            DRAW_GACHA => self.draw(),
            id => match task_index_of(id) {
                Some(index) => {
                    let toggled = self.toggle(index);
                    if toggled {
                        self.selected = index;
                    }
                    toggled
                }
                None => false,
            },
        }
    }

    fn handle_editing(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => {
                self.input.push(*c);
                true
            }
            InputEvent::Backspace => self.input.pop().is_some(),
            InputEvent::Enter => self.submit_input(),
            InputEvent::Esc => {
                self.mode = InputMode::Normal;
                true
            }
            _ => false,
        }
    }

    fn handle_normal(&mut self, event: &InputEvent) -> bool {
        let key = match event {
            InputEvent::Key(c) => *c,
            InputEvent::Up => return self.select_prev(),
            InputEvent::Down => return self.select_next(),
            _ => return false,
        };
        match key {
            'a' | 'i' => {
                self.mode = InputMode::Editing;
                true
            }
            '1'..='9' => self.toggle((key as u8 - b'1') as usize),
            'k' => self.select_prev(),
            'j' => self.select_next(),
            ' ' | 'x' => self.toggle(self.selected),
            'd' => self.delete_checked(),
            'g' => self.draw(),
            _ => false,
        }
    }

    fn select_prev(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }

    fn select_next(&mut self) -> bool {
        if self.selected + 1 >= self.session.tasks().len() {
            return false;
        }
        self.selected += 1;
        true
    }

    /// The buffer is only cleared when a task was actually added.
    fn submit_input(&mut self) -> bool {
        if !self.session.add_task(&self.input) {
            return false;
        }
        self.input.clear();
        true
    }

    fn toggle(&mut self, index: usize) -> bool {
        match self.session.toggle_task(index) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("toggle rejected: {}", e);
                false
            }
        }
    }

    fn delete_checked(&mut self) -> bool {
        if self.session.remove_checked() == 0 {
            return false;
        }
        self.selected = self
            .selected
            .min(self.session.tasks().len().saturating_sub(1));
        true
    }

    fn draw(&mut self) -> bool {
        self.session.draw(&mut *self.rolls).is_some()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gacha::roll::ScriptedRolls;

    fn type_text(app: &mut TodoGachaApp, text: &str) {
        for c in text.chars() {
            app.handle_input(&InputEvent::Key(c));
        }
    }

    fn app_with_rolls(rolls: &[f64]) -> TodoGachaApp {
        TodoGachaApp::with_rolls(Box::new(ScriptedRolls::new(rolls)))
    }

    #[test]
    fn typing_and_enter_adds_task() {
        let mut app = TodoGachaApp::new(1);
        app.handle_input(&InputEvent::Key('a'));
        assert_eq!(app.mode, InputMode::Editing);
        type_text(&mut app, "buy milk");
        assert_eq!(app.input, "buy milk");
        assert!(app.handle_input(&InputEvent::Enter));
        assert_eq!(app.session.tasks().len(), 1);
        assert_eq!(app.session.tasks().tasks()[0].text, "buy milk");
        assert!(app.input.is_empty());
        assert_eq!(app.mode, InputMode::Editing);
    }

    #[test]
    fn blank_input_is_not_added_and_kept() {
        let mut app = TodoGachaApp::new(1);
        app.handle_input(&InputEvent::Click(FOCUS_INPUT));
        type_text(&mut app, "  ");
        assert!(!app.handle_input(&InputEvent::Enter));
        assert!(app.session.tasks().is_empty());
        assert_eq!(app.input, "  ");
    }

    #[test]
    fn command_keys_are_text_while_editing() {
        let mut app = TodoGachaApp::new(1);
        app.handle_input(&InputEvent::Key('i'));
        type_text(&mut app, "dg1");
        assert_eq!(app.input, "dg1");
        app.handle_input(&InputEvent::Backspace);
        assert_eq!(app.input, "dg");
        app.handle_input(&InputEvent::Esc);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.input, "dg");
    }

    #[test]
    fn backspace_on_empty_input_is_not_consumed() {
        let mut app = TodoGachaApp::new(1);
        app.handle_input(&InputEvent::Key('a'));
        assert!(!app.handle_input(&InputEvent::Backspace));
    }

    #[test]
    fn add_button_click_submits() {
        let mut app = TodoGachaApp::new(1);
        app.handle_input(&InputEvent::Click(FOCUS_INPUT));
        type_text(&mut app, "walk dog");
        app.handle_input(&InputEvent::Esc);
        assert!(app.handle_input(&InputEvent::Click(ADD_TASK)));
        assert_eq!(app.session.tasks().tasks()[0].text, "walk dog");
    }

    #[test]
    fn number_keys_toggle_tasks() {
        let mut app = TodoGachaApp::new(1);
        app.session.add_task("a");
        app.session.add_task("b");
        assert!(app.handle_input(&InputEvent::Key('2')));
        assert!(app.session.tasks().tasks()[1].checked);
        assert!(!app.session.tasks().tasks()[0].checked);
        // no third task
        assert!(!app.handle_input(&InputEvent::Key('3')));
    }

    #[test]
    fn row_click_toggles_task() {
        let mut app = TodoGachaApp::new(1);
        app.session.add_task("a");
        assert!(app.handle_input(&InputEvent::Click(TOGGLE_TASK_BASE)));
        assert!(app.session.tasks().tasks()[0].checked);
        assert!(!app.handle_input(&InputEvent::Click(TOGGLE_TASK_BASE + 5)));
    }

    #[test]
    fn delete_then_draw_via_keys() {
        let mut app = app_with_rolls(&[0.95, 0.0]);
        app.session.add_task("buy milk");
        app.session.add_task("walk dog");
        app.handle_input(&InputEvent::Key('1'));
        app.handle_input(&InputEvent::Key('2'));
        assert!(app.handle_input(&InputEvent::Key('d')));
        assert_eq!(app.session.tickets(), 2);
        assert!(app.session.tasks().is_empty());

        assert!(app.handle_input(&InputEvent::Key('g')));
        assert_eq!(app.session.tickets(), 1);
        assert_eq!(app.session.collection().records()[0].key, "🐉");
        assert_eq!(app.session.collection().records()[0].count, 1);
        assert_eq!(app.session.message(), "🐉 ドラゴン を手に入れた！残りガチャ券: 1");
    }

    #[test]
    fn delete_and_draw_are_noops_when_unavailable() {
        let mut app = TodoGachaApp::new(1);
        app.session.add_task("a");
        assert!(!app.handle_input(&InputEvent::Click(DELETE_CHECKED)));
        assert!(!app.handle_input(&InputEvent::Click(DRAW_GACHA)));
        assert_eq!(app.session.tasks().len(), 1);
        assert!(app.session.collection().is_empty());
        assert_eq!(app.session.message(), "");
    }

    #[test]
    fn selection_moves_and_toggles_past_number_keys() {
        let mut app = TodoGachaApp::new(1);
        for i in 0..12 {
            app.session.add_task(&format!("task {}", i));
        }
        assert!(!app.handle_input(&InputEvent::Up));
        for _ in 0..11 {
            assert!(app.handle_input(&InputEvent::Key('j')));
        }
        assert_eq!(app.selected, 11);
        assert!(!app.handle_input(&InputEvent::Down));
        assert!(app.handle_input(&InputEvent::Key(' ')));
        assert!(app.session.tasks().tasks()[11].checked);
        assert!(app.handle_input(&InputEvent::Key('k')));
        assert_eq!(app.selected, 10);
    }

    #[test]
    fn selection_keys_are_text_while_editing() {
        let mut app = TodoGachaApp::new(1);
        app.session.add_task("a");
        app.session.add_task("b");
        app.handle_input(&InputEvent::Key('a'));
        type_text(&mut app, "jk x");
        assert!(!app.handle_input(&InputEvent::Down));
        assert_eq!(app.selected, 0);
        assert_eq!(app.input, "jk x");
        assert!(app.session.tasks().tasks().iter().all(|t| !t.checked));
    }

    #[test]
    fn delete_clamps_selection() {
        let mut app = TodoGachaApp::new(1);
        for t in ["a", "b", "c"] {
            app.session.add_task(t);
        }
        app.handle_input(&InputEvent::Key('j'));
        app.handle_input(&InputEvent::Key('j'));
        app.handle_input(&InputEvent::Key('x'));
        app.handle_input(&InputEvent::Key('2'));
        assert!(app.handle_input(&InputEvent::Key('d')));
        assert_eq!(app.session.tasks().len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn row_click_selects_row() {
        let mut app = TodoGachaApp::new(1);
        app.session.add_task("a");
        app.session.add_task("b");
        assert!(app.handle_input(&InputEvent::Click(TOGGLE_TASK_BASE + 1)));
        assert_eq!(app.selected, 1);
        assert!(app.session.tasks().tasks()[1].checked);
    }

    #[test]
    fn click_on_missing_row_is_rejected() {
        let mut app = TodoGachaApp::new(1);
        assert!(!app.handle_input(&InputEvent::Click(u16::MAX)));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn unknown_keys_ignored() {
        let mut app = TodoGachaApp::new(1);
        assert!(!app.handle_input(&InputEvent::Key('z')));
        assert!(!app.handle_input(&InputEvent::Enter));
        assert!(!app.handle_input(&InputEvent::Click(50)));
    }
}
