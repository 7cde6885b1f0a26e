//! View trait binding state reads to Props.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use crate::{Effect, Emitter, Tracked};

/// A presentational view over [`AppState`](crate::AppState).
///
/// Implementations provide:
/// - [`view`](Self::view): derive Props from the state, reading it only
///   through the [`Tracked`] scope so the binder learns which fields the
///   view depends on
/// - [`bootstrap`](Self::bootstrap): deferred work to run once after mount
///
/// See the [crate-level documentation](crate) for a complete example.
pub trait View<Props> {
    /// Reduce the current state to Props.
    ///
    /// Only fields read through `state` are tracked. The binder re-renders
    /// when one of them changes and ignores changes to the rest.
    ///
    /// # Arguments
    ///
    /// * `state` - Tracking scope over the application state
    /// * `emitter` - Action emitter for creating callbacks
    fn view(&self, state: &Tracked<'_>, emitter: &Emitter) -> Props;

    /// Work to start after the first render.
    ///
    /// Defaults to [`Effect::none`].
    fn bootstrap(&self) -> Effect {
        Effect::none()
    }
}

impl<Props, V> View<Props> for Box<V>
where
    V: View<Props> + ?Sized,
{
    fn view(&self, state: &Tracked<'_>, emitter: &Emitter) -> Props {
        (**self).view(state, emitter)
    }

    fn bootstrap(&self) -> Effect {
        (**self).bootstrap()
    }
}
