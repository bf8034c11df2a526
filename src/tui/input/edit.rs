use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

/// Keys while an item is being edited.
///
/// Enter commits, Esc cancels. Moving focus away (Tab, Up, Down) commits
/// first, the way a blur would.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Tab => {
            app.commit_edit();
            app.focus = Focus::NewTodo;
        }
        KeyCode::Up => {
            app.commit_edit();
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            app.commit_edit();
            if app.cursor + 1 < app.visible().len() {
                app.cursor += 1;
            }
        }
        KeyCode::Backspace => {
            if app.edit_input.backspace() {
                app.update_edit();
            }
        }
        KeyCode::Delete => {
            if app.edit_input.delete() {
                app.update_edit();
            }
        }
        KeyCode::Left => app.edit_input.move_left(),
        KeyCode::Right => app.edit_input.move_right(),
        KeyCode::Home => app.edit_input.move_home(),
        KeyCode::End => app.edit_input.move_end(),
        KeyCode::Char(c) => {
            app.edit_input.insert_char(c);
            app.update_edit();
        }
        _ => {}
    }
    app.clamp_cursor();
}
