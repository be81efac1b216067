mod app;
mod error;
mod gacha;
mod input;
mod session;
mod tasks;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::TodoGachaApp;
use input::{pixel_to_cell, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

#[cfg(target_arch = "wasm32")]
const LOG_LEVEL: log::Level = log::Level::Info;

/// Seed for the gacha RNG. Fixed off-browser so native runs are reproducible.
fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        42
    }
}

/// Convert a mouse position to a terminal cell via the grid container's bounding rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend renders into a <div> directly under <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }

    let app = Rc::new(RefCell::new(TodoGachaApp::new(entropy_seed())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(action_id) = action {
                log::debug!("click: action {}", action_id);
                app.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Backspace => InputEvent::Backspace,
                KeyCode::Enter => InputEvent::Enter,
                KeyCode::Esc => InputEvent::Esc,
                KeyCode::Up => InputEvent::Up,
                KeyCode::Down => InputEvent::Down,
                _ => return,
            };
            app.borrow_mut().handle_input(&event);
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let app = app.borrow();
            let size = f.area();

            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            app.render(f, size, &click_state);
        }
    });

    Ok(())
}
