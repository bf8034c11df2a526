mod edit;
mod navigate;
mod new_todo;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use edit::handle_edit;
use navigate::handle_navigate;
use new_todo::handle_new_todo;

/// Handle a key event in the current focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.editing_id().is_some() {
        handle_edit(app, key);
        return;
    }

    match app.focus {
        Focus::NewTodo => handle_new_todo(app, key),
        Focus::List => handle_navigate(app, key),
    }
}
