use super::todo::Todo;

/// The inline edit cursor.
///
/// Refers to the edited item by id so it survives list replacement, and keeps
/// the title from before the edit so a cancel can restore it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { id: i64, cached_title: String },
}

impl EditSession {
    /// Open an edit on `todo`, caching its current title.
    ///
    /// Any edit already in progress is abandoned as-is (its title is not
    /// restored); the abandoned id is returned.
    pub fn start(&mut self, todo: &Todo) -> Option<i64> {
        let abandoned = self.editing_id();
        *self = EditSession::Editing {
            id: todo.id,
            cached_title: todo.title.clone(),
        };
        abandoned
    }

    /// Close the session, returning what it held. `None` when already idle.
    pub fn take(&mut self) -> Option<(i64, String)> {
        match std::mem::take(self) {
            EditSession::Idle => None,
            EditSession::Editing { id, cached_title } => Some((id, cached_title)),
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { id, .. } => Some(*id),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// Whether `id` is the item being edited. Idle never matches.
    pub fn is_editing(&self, id: i64) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn cached_title(&self) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { cached_title, .. } => Some(cached_title),
        }
    }
}
