use std::collections::VecDeque;

/// The fragment part of the app's location, e.g. `#/active`.
///
/// Setting a different hash queues one change notification, the way a browser
/// fires `hashchange`. Whoever owns the event loop drains the queue with
/// [`Location::take_changes`] and resolves each one.
#[derive(Debug, Clone, Default)]
pub struct Location {
    hash: String,
    pending: VecDeque<String>,
}

impl Location {
    /// A location with an initial hash and no pending notifications
    pub fn new(hash: impl Into<String>) -> Self {
        Location {
            hash: hash.into(),
            pending: VecDeque::new(),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Change the hash. Queues a notification only when the value changes.
    pub fn set_hash(&mut self, hash: impl Into<String>) {
        let hash = hash.into();
        if hash == self.hash {
            return;
        }
        self.hash = hash.clone();
        self.pending.push_back(hash);
    }

    /// Drain queued change notifications, oldest first
    pub fn take_changes(&mut self) -> Vec<String> {
        self.pending.drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_hash_queues_change() {
        let mut loc = Location::default();
        loc.set_hash("#/active");
        assert_eq!(loc.hash(), "#/active");
        assert!(loc.has_pending());
        assert_eq!(loc.take_changes(), vec!["#/active".to_string()]);
        assert!(!loc.has_pending());
    }

    #[test]
    fn same_hash_is_not_a_change() {
        let mut loc = Location::new("#/completed");
        loc.set_hash("#/completed");
        assert!(loc.take_changes().is_empty());
    }

    #[test]
    fn changes_keep_order() {
        let mut loc = Location::default();
        loc.set_hash("#/active");
        loc.set_hash("#/bogus");
        loc.set_hash("");
        assert_eq!(loc.take_changes(), vec!["#/active", "#/bogus", ""]);
    }
}
