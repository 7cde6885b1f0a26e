//! Declarative effect system for describing deferred actions.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use core::future::Future;
use core::pin::Pin;

use crate::{Action, Emitter};

/// The future an executed [`Effect`] hands to a [`Spawner`](crate::Spawner).
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Declarative description of deferred work that produces actions.
///
/// Effects are returned from [`View::bootstrap`](crate::View::bootstrap) and
/// run once after the view is first rendered. They are fire-and-forget: an
/// effect cannot fail and cannot be cancelled.
///
/// # Example
///
/// ```rust
/// use oxide_state::{Action, Effect};
///
/// // Queue a single action
/// let effect = Effect::just(Action::Increment);
///
/// // Combine multiple effects
/// let effect = Effect::batch(vec![
///     Effect::just(Action::Increment),
///     Effect::just(Action::Rename("cached".to_string())),
/// ]);
///
/// // No side effects
/// let effect = Effect::none();
/// ```
pub struct Effect(Box<dyn FnOnce(Emitter) -> EffectFuture + Send + 'static>);

impl Effect {
    /// Turn the effect into a future that emits its actions when polled.
    pub fn execute(self, emitter: &Emitter) -> EffectFuture {
        (self.0)(emitter.clone())
    }

    /// An effect that queues `action`.
    pub fn just(action: Action) -> Self {
        Self(Box::new(move |emitter: Emitter| -> EffectFuture {
            Box::pin(async move { emitter.emit(action) })
        }))
    }

    /// An effect that does nothing.
    pub fn none() -> Self {
        Self(Box::new(|_: Emitter| -> EffectFuture { Box::pin(async {}) }))
    }

    /// Run `effects` one after another.
    pub fn batch(effects: Vec<Effect>) -> Self {
        Self(Box::new(move |emitter: Emitter| -> EffectFuture {
            Box::pin(async move {
                for effect in effects {
                    effect.execute(&emitter).await;
                }
            })
        }))
    }

    /// An effect driven by arbitrary async work, such as waiting on a timer
    /// before emitting.
    ///
    /// ```rust
    /// use oxide_state::{Action, Effect};
    ///
    /// let effect = Effect::from_async(|emitter| async move {
    ///     // e.g. tokio::time::sleep(..).await;
    ///     emitter.emit(Action::Increment);
    /// });
    /// ```
    pub fn from_async<F, Fut>(work: F) -> Self
    where
        F: FnOnce(Emitter) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self(Box::new(move |emitter: Emitter| -> EffectFuture {
            Box::pin(work(emitter))
        }))
    }
}
