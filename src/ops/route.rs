use std::sync::LazyLock;

use regex::Regex;

use crate::model::filter::Filter;
use crate::model::location::Location;

static HASH_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#/?").expect("valid regex"));

/// Outcome of resolving a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Route name with the `#` / `#/` prefix stripped
    pub name: String,
    /// Whether `name` names a filter (the empty name counts as `all`)
    pub valid: bool,
}

impl Resolution {
    /// The filter to show: the named one, or `All` when invalid
    pub fn filter(&self) -> Filter {
        if self.name.is_empty() {
            return Filter::All;
        }
        Filter::from_name(&self.name).unwrap_or_default()
    }
}

/// Resolve a fragment like `#/active` to a filter name.
pub fn resolve(fragment: &str) -> Resolution {
    let name = HASH_PREFIX.replace(fragment, "");
    if name.is_empty() {
        return Resolution {
            name: Filter::All.name().to_string(),
            valid: true,
        };
    }
    Resolution {
        valid: Filter::from_name(&name).is_some(),
        name: name.into_owned(),
    }
}

/// Keeps the visible filter in sync with a [`Location`]
#[derive(Debug, Clone, Default)]
pub struct Router {
    filter: Filter,
}

impl Router {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// React to the location's current hash.
    ///
    /// An unknown fragment is cleared from the location (which queues its own
    /// change notification) and the filter falls back to `All`.
    pub fn on_hash_change(&mut self, location: &mut Location) -> Filter {
        let resolution = resolve(location.hash());
        if resolution.valid {
            self.filter = resolution.filter();
        } else {
            tracing::debug!(hash = location.hash(), "unknown route, resetting");
            location.set_hash("");
            self.filter = Filter::All;
        }
        self.filter
    }

    /// Resolve every queued hash change, returning true if any were pending
    pub fn sync(&mut self, location: &mut Location) -> bool {
        let mut changed = false;
        while location.has_pending() {
            for _ in location.take_changes() {
                self.on_hash_change(location);
            }
            changed = true;
        }
        changed
    }
}
