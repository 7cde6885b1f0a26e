//! Hydration from a server-rendered initial state document.

#[cfg(feature = "no_std")]
use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::{AppState, Error, Seed, Snapshot};

/// The initial state document a server rendering step embeds in the page.
///
/// ```json
/// { "appState": { "count": 3, "name": "wangbadan" } }
/// ```
///
/// The `appState` key and each field inside it are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialState {
    pub app_state: Option<Seed>,
}

impl InitialState {
    /// Parse an initial state document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInitialState`] if `json` is not a valid
    /// document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::MalformedInitialState)
    }

    /// The seed for the application state, defaults if none was provided.
    pub fn seed(&self) -> Seed {
        self.app_state.clone().unwrap_or_default()
    }
}

impl AppState {
    /// Build a container from an initial state document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInitialState`] if `json` is not a valid
    /// document.
    pub fn hydrate(json: &str) -> Result<Self, Error> {
        let initial = InitialState::from_json(json)?;
        tracing::debug!(seeded = initial.app_state.is_some(), "hydrating app state");
        Ok(Self::with_seed(initial.seed()))
    }

    /// The current base fields as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if encoding fails.
    pub fn to_json(&self) -> Result<String, Error> {
        self.serialize().to_json()
    }
}

impl Snapshot {
    /// Encode as a JSON object `{"count": .., "name": ..}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if encoding fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Encode)
    }
}
