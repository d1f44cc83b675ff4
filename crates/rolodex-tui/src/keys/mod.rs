
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use rolodex_core::DropdownEvent;

use crate::app::App;

pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match code {
        // ── Dropdown navigation ─────────────────────
        KeyCode::Down => {
            app.dispatch(DropdownEvent::ArrowDown);
        }
        KeyCode::Up => {
            app.dispatch(DropdownEvent::ArrowUp);
        }
        KeyCode::Enter => {
            if !app.autocomplete.is_open() && app.selection().is_some() {
                // second Enter confirms the committed value
                app.should_quit = true;
            } else {
                let focus = app.autocomplete.focus_index();
                app.dispatch(DropdownEvent::CommitRequested(focus));
            }
        }
        KeyCode::Tab => {
            if app.has_toggle_button() {
                app.dispatch(DropdownEvent::ToggleRequested);
            }
        }
        KeyCode::Esc => {
            if app.autocomplete.is_open() {
                app.dismiss();
            } else {
                app.should_quit = true;
            }
        }

        // ── Text editing ────────────────────────────
        KeyCode::Char(c) => {
            app.input.insert_char(c);
            app.text_edited();
        }
        KeyCode::Backspace => {
            if app.input.delete_back() {
                app.text_edited();
            }
        }
        KeyCode::Delete => {
            if app.input.delete_forward() {
                app.text_edited();
            }
        }
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        _ => {}
    }
}

/// Left clicks only. Hit areas come from the last render.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let pos = Position::new(mouse.column, mouse.row);

    if let Some(index) = app.hits.row_at(pos) {
        app.dispatch(DropdownEvent::CommitRequested(Some(index)));
    } else if app.hits.on_toggle(pos) {
        app.focused = true;
        app.dispatch(DropdownEvent::ToggleRequested);
    } else if app.hits.on_input(pos) {
        app.focused = true;
    } else {
        app.focused = false;
    }
}
