use crate::app::{action::Action, state::AppState, ui};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Margin, Position, Rect, Size};

/// Index of the suggestion drawn at the given terminal cell, if any.
pub fn suggestion_at(app_state: &AppState<'_>, area: Rect, column: u16, row: u16) -> Option<usize> {
    if !app_state.is_expanded() {
        return None;
    }
    let layout = ui::get_layout(area, app_state);
    let inner = layout.list.inner(Margin::new(1, 1));
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let idx = app_state.list_state.offset() + usize::from(row - inner.y);
    (idx < app_state.results.len()).then_some(idx)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            match app_state.keymap.get_action(key) {
                // With nothing to accept, Right keeps its usual cursor movement.
                Some(Action::AcceptInline) if app_state.results.is_empty() => {
                    (key.code == KeyCode::Right).then_some(Action::EditQuery(key))
                }
                Some(action) => Some(action),
                None => Some(Action::EditQuery(key)),
            }
        }
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let hit = suggestion_at(app_state, area, mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => hit.map(Action::AcceptIndex),
                MouseEventKind::Moved if hit != app_state.hovered => {
                    Some(Action::HoverIndex(hit))
                }
                _ => None,
            }
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}
