use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::ops::todo_ops;
use crate::tui::app::{App, Focus};

/// Keys while the list has focus
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_key_hints = !app.show_key_hints,

        KeyCode::Up | KeyCode::Char('k') => {
            if app.cursor == 0 {
                app.focus = Focus::NewTodo;
            } else {
                app.cursor -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.cursor + 1 < app.visible().len() {
                app.cursor += 1;
            }
        }
        KeyCode::Tab | KeyCode::Esc | KeyCode::Char('n') => app.focus = Focus::NewTodo,

        // Item actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(todo) = app.selected() {
                let result = app.store.set_completed(todo.id, !todo.completed);
                app.report(result);
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(todo) = app.selected() {
                let result = app.store.remove(todo.id);
                app.report(result);
            }
        }

        // List actions
        KeyCode::Char('a') => {
            let completed = !todo_ops::all_completed(app.todos());
            let result = app.store.toggle_all(completed);
            app.report(result);
        }
        KeyCode::Char('C') => {
            let result = app.store.remove_completed();
            app.report(result);
        }

        // Routes
        KeyCode::Char('1') => app.set_route(Filter::All),
        KeyCode::Char('2') => app.set_route(Filter::Active),
        KeyCode::Char('3') => app.set_route(Filter::Completed),
        _ => {}
    }
    app.clamp_cursor();
}
