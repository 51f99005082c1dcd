//! Unidirectional state container
//!
//! State lives in immutable snapshots. Every change goes through an
//! [`Action`] dispatched to the [`Store`], which replaces the snapshot with
//! the result of the pure [`reduce`] function. Views read through selectors
//! and notice changes through version-based subscriptions.

pub mod action;
pub mod reducer;
pub mod state;

pub use action::{Action, SaveParams};
pub use reducer::reduce;
pub use state::AppState;

use tracing::debug;

/// Anything actions can be sent to
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// Owner of the current state snapshot
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    version: u64,
}

impl Store {
    /// Current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run a selector against the current snapshot
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state)
    }

    /// Start observing changes from the current version onwards
    pub fn subscribe(&self) -> Subscription {
        Subscription { seen: self.version }
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "dispatch");
        let next = reduce(&self.state, &action);
        if next != self.state {
            self.state = next;
            self.version += 1;
        }
    }
}

/// Cursor over store versions
#[derive(Debug, Clone, Copy)]
pub struct Subscription {
    seen: u64,
}

impl Subscription {
    /// True if the store changed since the last call; marks it seen
    pub fn changed(&mut self, store: &Store) -> bool {
        if store.version() != self.seen {
            self.seen = store.version();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_bumps_version_on_change() {
        let mut store = Store::default();
        store.dispatch(Action::BeginCreate);
        assert_eq!(store.version(), 1);
        assert!(store.state().draft.is_some());
    }

    #[test]
    fn test_noop_dispatch_keeps_version() {
        let mut store = Store::default();
        // no draft, nothing to delete
        store.dispatch(Action::DeleteWorkout("missing".into()));
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_subscription_reports_each_change_once() {
        let mut store = Store::default();
        let mut sub = store.subscribe();
        assert!(!sub.changed(&store));

        store.dispatch(Action::ChangeName("Leg day".into()));
        assert!(sub.changed(&store));
        assert!(!sub.changed(&store));

        store.dispatch(Action::ChangeName("Leg day".into()));
        assert!(!sub.changed(&store));
    }

    #[test]
    fn test_select() {
        let mut store = Store::default();
        store.dispatch(Action::ChangeType("Swim".into()));
        let kind = store.select(|s| s.draft.as_ref().map(|d| d.kind.clone()));
        assert_eq!(kind.as_deref(), Some("Swim"));
    }
}
