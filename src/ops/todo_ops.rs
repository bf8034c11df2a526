//! List transformations.
//!
//! Every function here takes the current list and returns a new one; nothing
//! is mutated in place. An id that matches no item leaves the list unchanged.

use chrono::Utc;

use crate::model::filter::Filter;
use crate::model::todo::Todo;

// ---------------------------------------------------------------------------
// Transformations
// ---------------------------------------------------------------------------

/// Append a new item with `id`. Blank titles are ignored; others are trimmed.
pub fn add(todos: &[Todo], title: &str, id: i64) -> Vec<Todo> {
    let title = title.trim();
    let mut next = todos.to_vec();
    if !title.is_empty() {
        next.push(Todo::new(id, title));
    }
    next
}

/// Set `completed` on every item
pub fn toggle_all(todos: &[Todo], completed: bool) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| Todo {
            completed,
            ..todo.clone()
        })
        .collect()
}

pub fn set_completed(todos: &[Todo], id: i64, completed: bool) -> Vec<Todo> {
    map_one(todos, id, |todo| todo.completed = completed)
}

/// Replace the title verbatim (no trimming; used for live edits)
pub fn set_title(todos: &[Todo], id: i64, title: &str) -> Vec<Todo> {
    map_one(todos, id, |todo| todo.title = title.to_string())
}

pub fn remove(todos: &[Todo], id: i64) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

/// Keep only the items that are not completed
pub fn remove_completed(todos: &[Todo]) -> Vec<Todo> {
    visible(todos, Filter::Active)
}

/// Trim the item's title; a title that trims to nothing deletes the item
pub fn commit_title(todos: &[Todo], id: i64) -> Vec<Todo> {
    let Some(todo) = find(todos, id) else {
        return todos.to_vec();
    };
    let title = todo.title.trim();
    if title.is_empty() {
        remove(todos, id)
    } else {
        set_title(todos, id, title)
    }
}

fn map_one(todos: &[Todo], id: i64, f: impl Fn(&mut Todo)) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            let mut todo = todo.clone();
            if todo.id == id {
                f(&mut todo);
            }
            todo
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

pub fn find(todos: &[Todo], id: i64) -> Option<&Todo> {
    todos.iter().find(|todo| todo.id == id)
}

/// The subset selected by `filter`, in list order
pub fn visible(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

/// Number of items not yet completed
pub fn remaining(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// State of the toggle-all checkbox
pub fn all_completed(todos: &[Todo]) -> bool {
    remaining(todos) == 0
}

/// Whether "clear completed" has anything to do
pub fn has_completed(todos: &[Todo]) -> bool {
    todos.len() > remaining(todos)
}

pub fn items_left_label(remaining: usize) -> String {
    if remaining == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", remaining)
    }
}

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

/// Id for a new item created at `now_ms`.
///
/// Creation time in milliseconds, bumped past the largest existing id so that
/// two items created in the same millisecond still get distinct ids.
pub fn next_id_at(todos: &[Todo], now_ms: i64) -> i64 {
    match todos.iter().map(|todo| todo.id).max() {
        Some(max) if max >= now_ms => max + 1,
        _ => now_ms,
    }
}

pub fn next_id(todos: &[Todo]) -> i64 {
    next_id_at(todos, Utc::now().timestamp_millis())
}
