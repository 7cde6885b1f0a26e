//! Plain, detached values of the container's base fields.

#[cfg(feature = "no_std")]
use alloc::format;
#[cfg(feature = "no_std")]
use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

/// Name used when no name is supplied at construction.
pub const DEFAULT_NAME: &str = "wangbadan";

/// Count used when no count is supplied at construction.
pub const DEFAULT_COUNT: i64 = 0;

/// The derived message for a `(name, count)` pair.
///
/// ```rust
/// assert_eq!(oxide_state::format_message("foo", 1), "foo say count is  1");
/// ```
pub fn format_message(name: &str, count: i64) -> String {
    format!("{name} say count is  {count}")
}

/// An owned copy of the base fields at one moment.
///
/// This is the wire shape produced by [`AppState::serialize`](crate::AppState::serialize).
/// It shares nothing with the container it was taken from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub count: i64,
    pub name: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

/// Initial values for a new container.
///
/// Either field may be absent; each absent field falls back to its default on
/// its own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub count: Option<i64>,
    pub name: Option<String>,
}

impl Seed {
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Fill absent fields with their defaults.
    pub fn resolve(self) -> Snapshot {
        Snapshot {
            count: self.count.unwrap_or(DEFAULT_COUNT),
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        }
    }
}

impl From<Snapshot> for Seed {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            count: Some(snapshot.count),
            name: Some(snapshot.name),
        }
    }
}
