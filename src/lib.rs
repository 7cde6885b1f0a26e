#![cfg_attr(feature = "no_std", no_std)]

//! An observable application state container with fine-grained change
//! notification, plus a small binder that keeps a rendered view in step with it.
//!
//! [`AppState`] holds a `count` and a `name` and derives a `message` from both.
//! The base fields can only change through [`AppState::increment`] and
//! [`AppState::rename`] (or [`AppState::dispatch`]), and every change notifies
//! the dependents that read an affected field before the call returns.
//!
//! Dependency tracking is explicit: a render pass reads through a
//! [`Tracked`] scope, then subscribes to the [`FieldSet`] it collected.
//!
//! ## Example
//!
//! ```rust
//! use std::future::Future;
//! use std::pin::Pin;
//!
//! use oxide_state::{Action, AppState, Binder, Emitter, Renderer, Tracked, View};
//!
//! struct Props {
//!     message: String,
//!     on_name_input: Box<dyn Fn(String)>,
//! }
//!
//! struct TopicList;
//!
//! impl View<Props> for TopicList {
//!     fn view(&self, state: &Tracked<'_>, emitter: &Emitter) -> Props {
//!         let emitter = emitter.clone();
//!         Props {
//!             message: state.message(),
//!             on_name_input: Box::new(move |value| emitter.emit(Action::Rename(value))),
//!         }
//!     }
//! }
//!
//! struct ConsoleRenderer;
//! impl Renderer<Props> for ConsoleRenderer {
//!     fn render(&mut self, props: Props) {
//!         println!("{}", props.message);
//!     }
//! }
//!
//! // Seed from the server-rendered document, falling back to defaults.
//! let state = AppState::hydrate(r#"{"appState": {"count": 3}}"#).unwrap_or_default();
//!
//! // Create a spawner for your async runtime
//! let spawner = |_fut: Pin<Box<dyn Future<Output = ()> + Send>>| {
//!     // e.g., tokio::spawn(fut);
//! };
//!
//! let mut binder = Binder::new(state, TopicList, ConsoleRenderer, spawner);
//! let _running = binder.run(); // await this on your runtime
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod binder;
mod effect;
mod emitter;
mod error;
mod field;
mod hydrate;
mod observer;
mod renderer;
mod snapshot;
mod state;
mod view;

// Public re-exports
pub use binder::{Binder, Spawner};
pub use effect::{Effect, EffectFuture};
pub use emitter::Emitter;
pub use error::Error;
pub use field::{Field, FieldSet};
pub use hydrate::InitialState;
pub use observer::{Change, Subscription};
pub use renderer::Renderer;
pub use snapshot::{format_message, Seed, Snapshot, DEFAULT_COUNT, DEFAULT_NAME};
pub use state::{Action, AppState, Tracked};
pub use view::View;

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use binder::{create_test_spawner, test_spawner_fn, TestBinder, TestBinderDriver};
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
