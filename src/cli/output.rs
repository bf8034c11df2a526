use serde::Serialize;

use crate::model::{Filter, Todo};
use crate::ops::todo_ops;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub filter: Filter,
    pub remaining: usize,
    pub todos: Vec<&'a Todo>,
}

#[derive(Serialize)]
pub struct CountJson {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct RouteJson {
    pub hash: String,
    pub filter: Filter,
    /// True when the requested fragment was unknown and got cleared
    pub reset: bool,
}

pub fn list_json(todos: &[Todo], filter: Filter) -> ListJson<'_> {
    ListJson {
        filter,
        remaining: todo_ops::remaining(todos),
        todos: todos.iter().filter(|t| filter.matches(t)).collect(),
    }
}

pub fn count_json(todos: &[Todo]) -> CountJson {
    let remaining = todo_ops::remaining(todos);
    CountJson {
        total: todos.len(),
        remaining,
        completed: todos.len() - remaining,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `[x] 1700000000000  Buy milk`
pub fn format_todo_line(todo: &Todo) -> String {
    let check = if todo.completed { 'x' } else { ' ' };
    format!("[{}] {}  {}", check, todo.id, todo.title)
}

/// Visible rows, a blank line, then the footer. Empty for an empty list.
pub fn format_listing(todos: &[Todo], filter: Filter) -> Vec<String> {
    if todos.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<String> = todos
        .iter()
        .filter(|t| filter.matches(t))
        .map(format_todo_line)
        .collect();
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format_footer(todos, filter));
    lines
}

/// `2 items left · active · 1 completed`
pub fn format_footer(todos: &[Todo], filter: Filter) -> String {
    let remaining = todo_ops::remaining(todos);
    let mut footer = format!(
        "{} \u{00B7} {}",
        todo_ops::items_left_label(remaining),
        filter.name()
    );
    if todo_ops::has_completed(todos) {
        footer.push_str(&format!(
            " \u{00B7} {} completed",
            todos.len() - remaining
        ));
    }
    footer
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Todo> {
        vec![
            Todo {
                id: 1,
                title: "Buy milk".into(),
                completed: true,
            },
            Todo::new(2, "Walk dog"),
        ]
    }

    #[test]
    fn todo_line() {
        assert_eq!(format_todo_line(&sample()[0]), "[x] 1  Buy milk");
        assert_eq!(format_todo_line(&sample()[1]), "[ ] 2  Walk dog");
    }

    #[test]
    fn listing_all() {
        assert_eq!(
            format_listing(&sample(), Filter::All),
            vec![
                "[x] 1  Buy milk",
                "[ ] 2  Walk dog",
                "",
                "1 item left \u{00B7} all \u{00B7} 1 completed",
            ]
        );
    }

    #[test]
    fn listing_with_nothing_visible_keeps_footer() {
        let todos = vec![Todo::new(1, "a")];
        assert_eq!(
            format_listing(&todos, Filter::Completed),
            vec!["1 item left \u{00B7} completed"]
        );
    }

    #[test]
    fn empty_listing() {
        assert!(format_listing(&[], Filter::All).is_empty());
    }

    #[test]
    fn list_json_filters_but_counts_all() {
        let todos = sample();
        let json = serde_json::to_value(list_json(&todos, Filter::Completed)).unwrap();
        assert_eq!(json["filter"], "completed");
        assert_eq!(json["remaining"], 1);
        assert_eq!(json["todos"].as_array().unwrap().len(), 1);
        assert_eq!(json["todos"][0]["title"], "Buy milk");
    }

    #[test]
    fn count() {
        let json = serde_json::to_value(count_json(&sample())).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["remaining"], 1);
        assert_eq!(json["completed"], 1);
    }
}
