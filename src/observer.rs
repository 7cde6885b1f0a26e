//! Subscription registry mapping fields to the dependents that read them.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "no_std")]
use alloc::vec::Vec;
#[cfg(not(feature = "no_std"))]
use std::collections::{BTreeMap, BTreeSet};

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{Field, FieldSet};

/// Identifies one subscription. Ids grow monotonically, so ordering by id is
/// registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ObserverId(u64);

/// What a dependent is told when fields it read have changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Change {
    fields: FieldSet,
}

impl Change {
    pub(crate) fn new(fields: FieldSet) -> Self {
        Self { fields }
    }

    /// The changed fields this dependent had read.
    pub fn fields(&self) -> FieldSet {
        self.fields
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(field.set())
    }
}

pub(crate) type Callback = Box<dyn Fn(&Change) + Send + Sync>;

struct Observer {
    reads: FieldSet,
    callback: Callback,
}

pub(crate) struct Registry {
    next_id: u64,
    by_field: BTreeMap<Field, BTreeSet<ObserverId>>,
    observers: BTreeMap<ObserverId, Arc<Observer>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            by_field: BTreeMap::new(),
            observers: BTreeMap::new(),
        }
    }

    fn insert(&mut self, reads: FieldSet, callback: Callback) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;

        for field in reads.fields() {
            self.by_field.entry(field).or_default().insert(id);
        }
        self.observers
            .insert(id, Arc::new(Observer { reads, callback }));
        id
    }

    fn remove(&mut self, id: ObserverId) -> bool {
        let Some(observer) = self.observers.remove(&id) else {
            return false;
        };
        for field in observer.reads.fields() {
            if let Some(ids) = self.by_field.get_mut(&field) {
                ids.remove(&id);
                if ids.is_empty() {
                    self.by_field.remove(&field);
                }
            }
        }
        true
    }

    fn contains(&self, id: ObserverId) -> bool {
        self.observers.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    /// Observers whose read set intersects `affected`, in registration order.
    fn matching(&self, affected: FieldSet) -> Vec<(ObserverId, Arc<Observer>)> {
        let ids: BTreeSet<ObserverId> = affected
            .fields()
            .filter_map(|field| self.by_field.get(&field))
            .flatten()
            .copied()
            .collect();

        ids.into_iter()
            .filter_map(|id| self.observers.get(&id).map(|observer| (id, observer.clone())))
            .collect()
    }
}

/// Register `callback` for changes to any field in `reads`.
pub(crate) fn subscribe(
    registry: &Arc<Mutex<Registry>>,
    reads: FieldSet,
    callback: Callback,
) -> Subscription {
    let id = registry.lock().insert(reads, callback);
    tracing::trace!(?id, ?reads, "observer subscribed");
    Subscription {
        id,
        registry: registry.clone(),
    }
}

/// Call every observer that read one of `affected`.
///
/// The registry lock is released before any callback runs, so callbacks are
/// free to read state, subscribe or drop subscriptions. Observers subscribed
/// during the pass are not called; observers dropped during it are skipped.
pub(crate) fn notify(registry: &Mutex<Registry>, affected: FieldSet) {
    let observers = registry.lock().matching(affected);
    tracing::trace!(?affected, observers = observers.len(), "notifying observers");

    for (id, observer) in observers {
        if !registry.lock().contains(id) {
            tracing::trace!(?id, "observer dropped mid-notification, skipped");
            continue;
        }
        let change = Change::new(observer.reads & affected);
        (observer.callback)(&change);
    }
}

/// Keeps a callback registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: ObserverId,
    registry: Arc<Mutex<Registry>>,
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.registry.lock().remove(self.id) {
            tracing::trace!(id = ?self.id, "observer unsubscribed");
        }
    }
}
