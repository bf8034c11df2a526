use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `id` is the creation time in milliseconds since the Unix epoch and is
/// unique within a list. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed item
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Todo {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_storage_field_names() {
        let todo = Todo::new(1700000000000, "Buy milk");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"title":"Buy milk","completed":false}"#
        );
    }

    #[test]
    fn deserializes_list() {
        let list: Vec<Todo> = serde_json::from_str(
            r#"[{"id":1,"title":"a","completed":true},{"id":2,"title":"b","completed":false}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert!(list[0].completed);
        assert_eq!(list[1].title, "b");
    }
}
