use super::state::ActiveState;

use std::collections::BTreeMap;
use std::fmt;

type Listener = Box<dyn FnMut(&ActiveState)>;

/// Handle returned by [`Router::on_changes`](crate::Router::on_changes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Callbacks keyed by subscription, called in registration order.
#[derive(Default)]
pub(super) struct Listeners {
    next: u64,
    map: BTreeMap<u64, Listener>,
}

impl Listeners {
    pub(super) fn insert(&mut self, f: Listener) -> Subscription {
        let id = self.next;
        self.next += 1;
        self.map.insert(id, f);
        Subscription(id)
    }

    pub(super) fn remove(&mut self, sub: Subscription) -> bool {
        self.map.remove(&sub.0).is_some()
    }

    pub(super) fn len(&self) -> usize {
        self.map.len()
    }

    pub(super) fn notify(&mut self, state: &ActiveState) {
        for f in self.map.values_mut() {
            f(state)
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.map.len())
            .finish()
    }
}
