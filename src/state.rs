//! The application state container.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::string::String;

use core::cell::Cell;

use portable_atomic_util::Arc;
use spin::Mutex;

use crate::observer::{self, Registry};
use crate::{format_message, Change, Field, FieldSet, Seed, Snapshot, Subscription};

/// A mutation of [`AppState`].
///
/// These are the only ways the base fields can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Increase `count` by one.
    Increment,
    /// Replace `name`. Any string is accepted, including the empty string.
    Rename(String),
}

struct Fields {
    count: i64,
    name: String,
}

struct Shared {
    fields: Mutex<Fields>,
    observers: Arc<Mutex<Registry>>,
}

/// Observable application state: a `count`, a `name`, and the `message`
/// derived from both.
///
/// `AppState` is a handle. Construct it once at the root of the application
/// and pass it (or clones of it, which share the same container) to whatever
/// needs it.
///
/// Reads come in two flavours. The plain getters ([`count`](Self::count),
/// [`name`](Self::name), [`message`](Self::message)) never register
/// anything. Reads made through [`track`](Self::track) record which fields
/// were looked at, so the caller can [`subscribe`](Self::subscribe) to exactly
/// those.
///
/// Mutations notify every dependent whose read set intersects the changed
/// fields before they return.
///
/// ```rust
/// use oxide_state::{AppState, Seed};
///
/// let state = AppState::with_seed(Seed::default().name("wangbadan"));
/// state.increment();
/// assert_eq!(state.message(), "wangbadan say count is  1");
///
/// state.rename("foo");
/// assert_eq!(state.message(), "foo say count is  1");
/// ```
#[derive(Clone)]
pub struct AppState {
    shared: Arc<Shared>,
}

impl AppState {
    /// A container holding the default values.
    pub fn new() -> Self {
        Self::with_seed(Seed::default())
    }

    /// A container holding `seed`, with absent fields defaulted.
    pub fn with_seed(seed: Seed) -> Self {
        let Snapshot { count, name } = seed.resolve();
        tracing::debug!(count, name = %name, "app state created");

        Self {
            shared: Arc::new(Shared {
                fields: Mutex::new(Fields { count, name }),
                observers: Arc::new(Mutex::new(Registry::new())),
            }),
        }
    }

    /// The current count. Untracked.
    pub fn count(&self) -> i64 {
        self.shared.fields.lock().count
    }

    /// The current name. Untracked.
    pub fn name(&self) -> String {
        self.shared.fields.lock().name.clone()
    }

    /// The derived message, computed from the current `name` and `count`.
    pub fn message(&self) -> String {
        let fields = self.shared.fields.lock();
        format_message(&fields.name, fields.count)
    }

    /// Start a tracking scope for a render pass.
    pub fn track(&self) -> Tracked<'_> {
        Tracked {
            state: self,
            reads: Cell::new(FieldSet::empty()),
        }
    }

    /// Increase `count` by one, wrapping on overflow.
    pub fn increment(&self) {
        let count = {
            let mut fields = self.shared.fields.lock();
            fields.count = fields.count.wrapping_add(1);
            fields.count
        };
        tracing::debug!(count, "count incremented");
        self.notify(FieldSet::COUNT);
    }

    /// Replace `name`.
    ///
    /// Renaming to the current name changes nothing and notifies no one.
    pub fn rename(&self, name: impl Into<String>) {
        let name = name.into();
        {
            let mut fields = self.shared.fields.lock();
            if fields.name == name {
                tracing::trace!(name = %name, "rename to current name ignored");
                return;
            }
            fields.name = name;
        }
        tracing::debug!("name changed");
        self.notify(FieldSet::NAME);
    }

    /// Apply `action` through [`increment`](Self::increment) or
    /// [`rename`](Self::rename).
    pub fn dispatch(&self, action: Action) {
        match action {
            Action::Increment => self.increment(),
            Action::Rename(name) => self.rename(name),
        }
    }

    /// A detached copy of the base fields.
    pub fn serialize(&self) -> Snapshot {
        let fields = self.shared.fields.lock();
        Snapshot {
            count: fields.count,
            name: fields.name.clone(),
        }
    }

    /// Call `callback` whenever a field in `reads` changes, directly or
    /// through the derived `message`.
    ///
    /// The callback runs synchronously inside the mutation, after the write
    /// and with no lock held.
    pub fn subscribe<F>(&self, reads: FieldSet, callback: F) -> Subscription
    where
        F: Fn(&Change) + Send + Sync + 'static,
    {
        observer::subscribe(&self.shared.observers, reads, Box::new(callback))
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.shared.observers.lock().len()
    }

    fn notify(&self, written: FieldSet) {
        observer::notify(&self.shared.observers, FieldSet::affected_by(written));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Snapshot> for AppState {
    fn from(snapshot: Snapshot) -> Self {
        Self::with_seed(snapshot.into())
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let fields = self.shared.fields.lock();
        f.debug_struct("AppState")
            .field("count", &fields.count)
            .field("name", &fields.name)
            .finish()
    }
}

/// Reads made during one render pass.
///
/// Every getter records its field before returning the value. Hand
/// [`reads`](Self::reads) to [`AppState::subscribe`] afterwards to be told
/// about changes to exactly those fields.
pub struct Tracked<'a> {
    state: &'a AppState,
    reads: Cell<FieldSet>,
}

impl Tracked<'_> {
    /// The current count, recording a read of [`Field::Count`].
    pub fn count(&self) -> i64 {
        self.record(Field::Count);
        self.state.count()
    }

    /// The current name, recording a read of [`Field::Name`].
    pub fn name(&self) -> String {
        self.record(Field::Name);
        self.state.name()
    }

    /// The derived message, recording a read of [`Field::Message`].
    pub fn message(&self) -> String {
        self.record(Field::Message);
        self.state.message()
    }

    /// The fields read so far.
    pub fn reads(&self) -> FieldSet {
        self.reads.get()
    }

    fn record(&self, field: Field) {
        self.reads.set(self.reads.get() | field.set());
    }
}
