use crate::model::edit::EditSession;
use crate::model::todo::Todo;
use crate::ops::todo_ops;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A subscriber failed after the list was replaced. The new list is kept.
    #[error("could not sync todo list: {0}")]
    Sync(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Callback invoked with the new list after each change.
///
/// Every subscriber runs even if an earlier one fails; the first failure is
/// returned as [`StoreError::Sync`].
pub type Subscriber =
    Box<dyn FnMut(&[Todo]) -> Result<(), Box<dyn std::error::Error + Send + Sync>>>;

/// Handle returned by [`TodoStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// Holds the todo list and the edit cursor.
///
/// Each operation derives a new list with [`todo_ops`] and swaps it in. When
/// the new list differs from the old one, every subscriber runs synchronously
/// before the operation returns.
pub struct TodoStore {
    todos: Vec<Todo>,
    edit: EditSession,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
}

impl TodoStore {
    pub fn new(todos: Vec<Todo>) -> Self {
        TodoStore {
            todos,
            edit: EditSession::Idle,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.edit.editing_id()
    }

    pub fn find(&self, id: i64) -> Option<&Todo> {
        todo_ops::find(&self.todos, id)
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Swap in a new list and notify subscribers if it changed
    fn replace(&mut self, next: Vec<Todo>) -> Result<(), StoreError> {
        if next == self.todos {
            return Ok(());
        }
        self.todos = next;
        tracing::trace!(len = self.todos.len(), "todo list replaced");
        let mut first_error = None;
        for (sid, subscriber) in &mut self.subscribers {
            if let Err(e) = subscriber(&self.todos) {
                tracing::warn!(subscriber = sid.0, error = %e, "subscriber failed");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(StoreError::Sync(e)),
            None => Ok(()),
        }
    }

    // -----------------------------------------------------------------------
    // List operations
    // -----------------------------------------------------------------------

    /// Append a new item. Returns its id, or `None` for a blank title.
    pub fn add(&mut self, title: &str) -> Result<Option<i64>, StoreError> {
        if title.trim().is_empty() {
            return Ok(None);
        }
        let id = todo_ops::next_id(&self.todos);
        self.replace(todo_ops::add(&self.todos, title, id))?;
        tracing::debug!(id, "added todo");
        Ok(Some(id))
    }

    pub fn toggle_all(&mut self, completed: bool) -> Result<(), StoreError> {
        self.replace(todo_ops::toggle_all(&self.todos, completed))
    }

    pub fn set_completed(&mut self, id: i64, completed: bool) -> Result<(), StoreError> {
        self.replace(todo_ops::set_completed(&self.todos, id, completed))
    }

    pub fn set_title(&mut self, id: i64, title: &str) -> Result<(), StoreError> {
        self.replace(todo_ops::set_title(&self.todos, id, title))
    }

    pub fn remove(&mut self, id: i64) -> Result<(), StoreError> {
        self.replace(todo_ops::remove(&self.todos, id))
    }

    pub fn remove_completed(&mut self) -> Result<(), StoreError> {
        self.replace(todo_ops::remove_completed(&self.todos))
    }

    // -----------------------------------------------------------------------
    // Edit session
    // -----------------------------------------------------------------------

    /// Start editing `id`. A session already open on another item is
    /// abandoned without restoring its title. Unknown ids are ignored.
    pub fn edit_todo(&mut self, id: i64) {
        let Some(todo) = todo_ops::find(&self.todos, id) else {
            return;
        };
        if let Some(abandoned) = self.edit.start(todo)
            && abandoned != id
        {
            tracing::debug!(abandoned, id, "edit abandoned for another item");
        }
    }

    /// Finish the open edit: trim the title, or delete the item if the title
    /// is blank. Does nothing unless `id` is the item being edited.
    pub fn commit_edit(&mut self, id: i64) -> Result<(), StoreError> {
        if !self.edit.is_editing(id) {
            return Ok(());
        }
        self.edit.take();
        self.replace(todo_ops::commit_title(&self.todos, id))
    }

    /// Abandon the open edit on `id` and put the pre-edit title back
    pub fn cancel_edit(&mut self, id: i64) -> Result<(), StoreError> {
        if !self.edit.is_editing(id) {
            return Ok(());
        }
        let Some((_, cached_title)) = self.edit.take() else {
            return Ok(());
        };
        self.replace(todo_ops::set_title(&self.todos, id, &cached_title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_store(todos: Vec<Todo>) -> (TodoStore, Rc<RefCell<Vec<Vec<Todo>>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = TodoStore::new(todos);
        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |todos: &[Todo]| {
            sink.borrow_mut().push(todos.to_vec());
            Ok(())
        }));
        (store, seen)
    }

    #[test]
    fn add_notifies_subscribers() {
        let (mut store, seen) = recording_store(Vec::new());
        let id = store.add("Buy milk").unwrap().unwrap();
        assert_eq!(store.todos().len(), 1);
        assert!(!store.todos()[0].completed);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0][0].id, id);
    }

    #[test]
    fn blank_add_does_not_notify() {
        let (mut store, seen) = recording_store(Vec::new());
        assert_eq!(store.add("   ").unwrap(), None);
        assert!(store.todos().is_empty());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unchanged_list_does_not_notify() {
        let (mut store, seen) = recording_store(vec![Todo::new(1, "a")]);
        store.remove(42).unwrap();
        store.set_completed(1, false).unwrap();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn ids_are_unique_within_a_burst() {
        let mut store = TodoStore::new(Vec::new());
        for i in 0..20 {
            store.add(&format!("item {}", i)).unwrap();
        }
        let mut ids: Vec<i64> = store.todos().iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn cancel_restores_pre_edit_title() {
        let mut store = TodoStore::new(vec![Todo::new(1, "Walk dog")]);
        store.edit_todo(1);
        store.set_title(1, "Walk").unwrap();
        store.set_title(1, "Walk the ca").unwrap();
        store.set_title(1, "").unwrap();
        store.cancel_edit(1).unwrap();
        assert_eq!(store.todos()[0].title, "Walk dog");
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn commit_trims_and_closes() {
        let mut store = TodoStore::new(vec![Todo::new(1, "Walk dog")]);
        store.edit_todo(1);
        store.set_title(1, "  Walk cat ").unwrap();
        store.commit_edit(1).unwrap();
        assert_eq!(store.todos()[0].title, "Walk cat");
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn commit_blank_removes_item() {
        let mut store = TodoStore::new(vec![Todo::new(1, "a"), Todo::new(2, "b")]);
        store.edit_todo(2);
        store.set_title(2, "  ").unwrap();
        store.commit_edit(2).unwrap();
        assert_eq!(store.todos(), &[Todo::new(1, "a")]);
    }

    #[test]
    fn second_commit_is_noop() {
        let (mut store, seen) = recording_store(vec![Todo::new(1, "a")]);
        store.edit_todo(1);
        store.set_title(1, " b ").unwrap();
        store.commit_edit(1).unwrap();
        let after_first = seen.borrow().len();
        // Simulates blur firing after Enter already committed
        store.set_title(1, "  ").unwrap();
        store.commit_edit(1).unwrap();
        assert_eq!(store.todos()[0].title, "  ");
        assert_eq!(seen.borrow().len(), after_first + 1);
    }

    #[test]
    fn cancel_while_idle_is_noop() {
        let mut store = TodoStore::new(vec![Todo::new(1, "a")]);
        store.set_title(1, "changed").unwrap();
        store.cancel_edit(1).unwrap();
        assert_eq!(store.todos()[0].title, "changed");
    }

    #[test]
    fn new_edit_abandons_previous_without_restore() {
        let mut store = TodoStore::new(vec![Todo::new(1, "a"), Todo::new(2, "b")]);
        store.edit_todo(1);
        store.set_title(1, "a-draft").unwrap();
        store.edit_todo(2);
        assert_eq!(store.editing_id(), Some(2));
        assert_eq!(store.todos()[0].title, "a-draft");
        store.cancel_edit(2).unwrap();
        assert_eq!(store.todos()[1].title, "b");
    }

    #[test]
    fn edit_unknown_id_is_ignored() {
        let mut store = TodoStore::new(vec![Todo::new(1, "a")]);
        store.edit_todo(9);
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (mut store, seen) = recording_store(Vec::new());
        let extra = store.subscribe(Box::new(|_: &[Todo]| Ok(())));
        assert!(store.unsubscribe(extra));
        assert!(!store.unsubscribe(extra));
        store.add("a").unwrap();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn subscriber_error_keeps_new_list() {
        let mut store = TodoStore::new(Vec::new());
        store.subscribe(Box::new(
            |_: &[Todo]| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
                Err("disk full".into())
            },
        ));
        let err = store.add("a").unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(store.todos().len(), 1);
    }

    #[test]
    fn failing_subscriber_does_not_starve_later_ones() {
        let mut store = TodoStore::new(Vec::new());
        store.subscribe(Box::new(
            |_: &[Todo]| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
                Err("disk full".into())
            },
        ));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |todos: &[Todo]| {
            sink.borrow_mut().push(todos.to_vec());
            Ok(())
        }));
        assert!(store.add("a").is_err());
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0][0].title, "a");
    }

    #[test]
    fn cancel_for_other_item_is_noop() {
        let mut store = TodoStore::new(vec![Todo::new(1, "Walk dog"), Todo::new(2, "Buy milk")]);
        store.edit_todo(1);
        store.cancel_edit(2).unwrap();
        assert_eq!(store.todos()[1].title, "Buy milk");
        assert_eq!(store.editing_id(), Some(1));
    }

    #[test]
    fn commit_for_other_item_is_noop() {
        let mut store = TodoStore::new(vec![Todo::new(1, "Walk dog"), Todo::new(2, "   ")]);
        store.edit_todo(1);
        store.commit_edit(2).unwrap();
        assert_eq!(store.todos().len(), 2);
        assert_eq!(store.todos()[1].title, "   ");
        assert_eq!(store.editing_id(), Some(1));
    }
}
