//! Todo Gacha rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::gacha::rarity::Rarity;
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::*;
use super::{InputMode, TodoGachaApp};

/// Width of the add button next to the input box.
const ADD_BUTTON_WIDTH: u16 = 10;

pub fn render(
    app: &TodoGachaApp,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    let is_narrow = is_narrow_layout(area.width);

    let actions = action_lines(app);
    let action_height = (actions.len() as u16 + 2).max(3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(3),             // Input box + add button
            Constraint::Min(6),                // Tasks | Collection
            Constraint::Length(action_height), // Delete / draw buttons
            Constraint::Length(3),             // Message
            Constraint::Length(3),             // Help
        ])
        .split(area);

    render_title(f, chunks[0]);
    render_input(app, f, chunks[1], &mut cs);

    let body = Layout::default()
        .direction(if is_narrow {
            Direction::Vertical
        } else {
            Direction::Horizontal
        })
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_tasks(app, f, body[0], &mut cs);
    render_collection(app, f, body[1]);

    render_actions(actions, f, chunks[3], &mut cs);
    render_message(app, f, chunks[4]);
    render_help(app, f, chunks[5], &mut cs);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Todo ガチャ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_input(app: &TodoGachaApp, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON_WIDTH)])
        .split(area);

    let editing = app.mode == InputMode::Editing;
    let line = if app.input.is_empty() && !editing {
        Line::from(Span::styled(
            " 新しいTodo",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if editing { "▏" } else { "" };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(app.input.clone(), Style::default().fg(Color::White)),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ])
    };
    let border = if editing { Color::Yellow } else { Color::DarkGray };

    let mut cl = ClickableList::new();
    cl.push_clickable(line, FOCUS_INPUT);
    cl.register_targets(cols[0], cs, 1, 1);
    let input = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(input, cols[0]);

    let button = Paragraph::new(Line::from(Span::styled(
        "追加",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    )
    .alignment(Alignment::Center);
    f.render_widget(button, cols[1]);
    cs.add_click_target(cols[1], ADD_TASK);
}

/// First task row shown when `visible` rows fit and `selected` must be one of them.
pub(crate) fn task_scroll(selected: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    let selected = selected.min(len - 1);
    selected.saturating_sub(visible - 1).min(len - visible)
}

fn render_tasks(app: &TodoGachaApp, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let tasks = app.session.tasks();
    let mut cl = ClickableList::new();

    if tasks.is_empty() {
        cl.push(Line::from(Span::styled(
            " タスクを追加してください",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Only the visible window is built, so row i of the list is screen row i.
    let visible = usize::from(area.height.saturating_sub(2));
    let first = task_scroll(app.selected, tasks.len(), visible);
    for (i, task) in tasks.tasks().iter().enumerate().skip(first).take(visible) {
        let number = if i < 9 {
            format!(" {}.", i + 1)
        } else {
            "   ".to_string()
        };
        let (mark, mut text_style) = if task.checked {
            (
                "☑",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            ("☐", Style::default().fg(Color::White))
        };
        if i == app.selected && app.mode == InputMode::Normal {
            text_style = text_style.add_modifier(Modifier::REVERSED);
        }
        let line = Line::from(vec![
            Span::styled(number, Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {} ", mark), Style::default().fg(Color::Yellow)),
            Span::styled(task.text.clone(), text_style),
        ]);
        match toggle_task_action(i) {
            Some(id) => cl.push_clickable(line, id),
            None => cl.push(line),
        }
    }

    cl.register_targets(area, cs, 1, 1);
    let title = if first > 0 {
        format!(" タスク ({}) ↑{} ", tasks.len(), first)
    } else {
        format!(" タスク ({}) ", tasks.len())
    };
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(title),
    );
    f.render_widget(widget, area);
}

fn render_collection(app: &TodoGachaApp, f: &mut Frame, area: Rect) {
    let collection = app.session.collection();
    let mut lines: Vec<Line> = if collection.is_empty() {
        vec![Line::from(Span::styled(
            " まだ何も持っていません",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        collection
            .records()
            .iter()
            .map(|rec| {
                let color = rec.rarity.color();
                Line::from(vec![
                    Span::styled(" ┃ ", Style::default().fg(color)),
                    Span::styled(
                        format!(
                            "{} {} × {} ({})",
                            rec.name,
                            rec.key,
                            rec.count,
                            rec.rarity.label()
                        ),
                        Style::default().fg(color),
                    ),
                ])
            })
            .collect()
    };

    let rates: Vec<String> = Rarity::all()
        .iter()
        .map(|r| format!("{} {:.0}%", r.label(), r.probability() * 100.0))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" 排出率 {}", rates.join(" / ")),
        Style::default().fg(Color::DarkGray),
    )));

    let title = format!(
        " コレクション {}/{}  計{}回 ",
        collection.len(),
        app.session.pool_len(),
        collection.total_drawn()
    );
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(title),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Buttons are only offered when they would do something.
fn action_lines(app: &TodoGachaApp) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    if app.session.tasks().has_checked() {
        cl.push_clickable(
            Line::from(Span::styled(
                " [D] 選択削除",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            DELETE_CHECKED,
        );
    }
    let tickets = app.session.tickets();
    if tickets > 0 {
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    " [G] ガチャを引く",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  残りガチャ券: {}", tickets),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            DRAW_GACHA,
        );
    }
    if cl.is_empty() {
        cl.push(Line::from(Span::styled(
            " 完了したタスクを削除するとガチャ券がもらえます",
            Style::default().fg(Color::DarkGray),
        )));
    }
    cl
}

fn render_actions(cl: ClickableList<'static>, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    cl.register_targets(area, cs, 1, 1);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" ▶ アクション "),
    );
    f.render_widget(widget, area);
}

fn render_message(app: &TodoGachaApp, f: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.session.message()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(widget, area);
}

fn render_help(app: &TodoGachaApp, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let (text, action) = match app.mode {
        InputMode::Normal => (
            "[A] 入力  [J/K] 選択  [Space] チェック  [D] 削除  [G] ガチャ",
            FOCUS_INPUT,
        ),
        InputMode::Editing => ("[Enter] 追加  [Esc] 入力終了", ADD_TASK),
    };
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))),
        action,
    );
    cl.register_targets(area, cs, 1, 1);
    let widget = Paragraph::new(cl.into_lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
