use crate::io::storage::{Storage, StorageError};
use crate::model::todo::Todo;
use crate::ops::store::{Subscriber, TodoStore};

/// Storage key holding the serialized todo list
pub const STORAGE_KEY: &str = "react-todomvc";

/// Error type for saving the todo list
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("could not serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Read the todo list. A missing key or an unparsable value reads as empty.
pub fn load(storage: &dyn Storage) -> Vec<Todo> {
    let Some(raw) = storage.get_item(STORAGE_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(todos) => todos,
        Err(e) => {
            tracing::warn!(error = %e, "stored todo list is malformed, starting empty");
            Vec::new()
        }
    }
}

/// Write the whole list under [`STORAGE_KEY`]
pub fn save(storage: &mut dyn Storage, todos: &[Todo]) -> Result<(), PersistError> {
    let raw = serde_json::to_string(todos)?;
    storage.set_item(STORAGE_KEY, &raw)?;
    tracing::debug!(count = todos.len(), "saved todo list");
    Ok(())
}

/// A store subscriber that saves every new list to `storage`
pub fn subscriber<S: Storage + 'static>(mut storage: S) -> Subscriber {
    Box::new(
        move |todos: &[Todo]| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            save(&mut storage, todos)?;
            Ok(())
        },
    )
}

/// Load the list from `storage` and wire up a store that saves back to it
pub fn open_store<S: Storage + 'static>(storage: S) -> TodoStore {
    let todos = load(&storage);
    tracing::debug!(count = todos.len(), "loaded todo list");
    let mut store = TodoStore::new(todos);
    store.subscribe(subscriber(storage));
    store
}
