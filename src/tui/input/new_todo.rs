use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

/// Keys while the new-todo field has focus
pub(super) fn handle_new_todo(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let result = app.store.add(app.new_todo.text());
            match result {
                Ok(Some(_)) => app.new_todo.clear(),
                // Blank input stays as typed
                Ok(None) => {}
                Err(e) => {
                    // The item was added even though the save failed
                    app.new_todo.clear();
                    app.report(Err(e));
                }
            }
        }
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => {
            if !app.visible().is_empty() {
                app.focus = Focus::List;
            }
        }
        KeyCode::Backspace => {
            app.new_todo.backspace();
        }
        KeyCode::Delete => {
            app.new_todo.delete();
        }
        KeyCode::Left => app.new_todo.move_left(),
        KeyCode::Right => app.new_todo.move_right(),
        KeyCode::Home => app.new_todo.move_home(),
        KeyCode::End => app.new_todo.move_end(),
        KeyCode::Char(c) => app.new_todo.insert_char(c),
        _ => {}
    }
}
