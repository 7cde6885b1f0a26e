//! The view binder that keeps a rendered view in step with the state.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use core::future::Future;
use core::pin::Pin;

use flume::Receiver;

use crate::emitter::Message;
use crate::{AppState, Emitter, Renderer, Subscription, View};

/// A spawner trait for executing futures on an async runtime.
///
/// This abstraction allows you to use whatever concurrency model you want (tokio, async-std, embassy, etc.).
///
/// Function pointers and closures automatically implement this trait via the blanket implementation.
pub trait Spawner {
    /// Spawn a future on the async runtime.
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>);
}

impl<F> Spawner for F
where
    F: Fn(Pin<Box<dyn Future<Output = ()> + Send>>),
{
    fn spawn(&self, future: Pin<Box<dyn Future<Output = ()> + Send>>) {
        self(future)
    }
}

/// Binds a [`View`] to an [`AppState`].
///
/// The binder:
/// 1. Renders the view, recording which fields it read
/// 2. Subscribes to exactly those fields
/// 3. Spawns the view's [`View::bootstrap`] effect
/// 4. Applies queued actions to the state, and re-renders whenever a
///    notification for one of the subscribed fields arrives
///
/// Notifications from a subscription that a later render has replaced are
/// dropped: the mutation behind them happened before that render, so the
/// view already shows it. Several queued mutations therefore cost one render.
///
/// Each render replaces the previous subscription with one over the fields
/// read during that render, so a view that stops reading a field stops being
/// re-rendered for it.
///
/// Actions and change notifications share one queue and are handled in the
/// order they were queued, on the task that polls [`Binder::run`].
///
/// For manual control in tests, use [`TestBinder`] with a [`crate::TestRenderer`].
///
/// # Type Parameters
///
/// * `Props` - The props type produced by the view
/// * `V` - The view implementation type (implements [`View`])
/// * `R` - The renderer implementation type (implements [`Renderer`])
/// * `S` - The spawner implementation type (implements [`Spawner`])
pub struct Binder<Props, V, R, S>
where
    V: View<Props>,
    R: Renderer<Props>,
    S: Spawner,
{
    state: AppState,
    view: V,
    renderer: R,
    spawner: S,
    emitter: Emitter,
    receiver: Receiver<Message>,
    subscription: Option<Subscription>,
    generation: u64,
    _props: core::marker::PhantomData<Props>,
}

impl<Props, V, R, S> Binder<Props, V, R, S>
where
    V: View<Props>,
    R: Renderer<Props>,
    S: Spawner,
{
    /// Create a new binder. Nothing is rendered until [`Binder::run`].
    ///
    /// # Arguments
    ///
    /// * `state` - The application state the view reads
    /// * `view` - The view to bind
    /// * `renderer` - Platform rendering implementation for rendering Props
    /// * `spawner` - Spawner to execute effects on your chosen runtime
    pub fn new(state: AppState, view: V, renderer: R, spawner: S) -> Self {
        let (sender, receiver) = flume::unbounded();

        Binder {
            state,
            view,
            renderer,
            spawner,
            emitter: Emitter::new(sender),
            receiver,
            subscription: None,
            generation: 0,
            _props: core::marker::PhantomData,
        }
    }

    /// The state this binder renders.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// An emitter queueing actions for this binder.
    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    /// Mount the view and process the queue.
    ///
    /// The binder holds an emitter of its own, so the queue never closes:
    /// this future runs until it is dropped.
    pub async fn run(&mut self) {
        self.mount();

        while let Ok(message) = self.receiver.recv_async().await {
            self.step(message);
        }
    }

    fn mount(&mut self) {
        tracing::debug!("mounting view");
        self.render();

        let effect = self.view.bootstrap();
        self.spawner.spawn(effect.execute(&self.emitter));
    }

    fn step(&mut self, message: Message) {
        match message {
            Message::Action(action) => {
                tracing::trace!(?action, "applying action");
                self.state.dispatch(action);
            }
            Message::Changed { generation, fields } if generation == self.generation => {
                tracing::trace!(?fields, "observed fields changed");
                self.render();
            }
            Message::Changed { generation, .. } => {
                tracing::trace!(generation, current = self.generation, "stale change skipped");
            }
        }
    }

    fn render(&mut self) {
        let (props, reads) = {
            let tracked = self.state.track();
            let props = self.view.view(&tracked, &self.emitter);
            (props, tracked.reads())
        };

        // Unsubscribe before resubscribing so the registry never holds both.
        self.subscription = None;
        self.generation += 1;
        let generation = self.generation;
        let emitter = self.emitter.clone();
        self.subscription = Some(self.state.subscribe(reads, move |change| {
            emitter.changed(generation, change.fields())
        }));

        tracing::debug!(?reads, generation, "view rendered");
        self.renderer.render(props);
    }

    #[cfg(any(test, feature = "testing"))]
    fn process_queued_events(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.step(message);
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test spawner function that executes futures synchronously.
///
/// This blocks on the future immediately rather than spawning it on an async runtime.
pub fn test_spawner_fn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a test spawner that executes futures synchronously.
///
/// Returns a function pointer that can be passed directly to binder
/// constructors without heap allocation.
pub fn create_test_spawner() -> fn(Pin<Box<dyn Future<Output = ()> + Send>>) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// Test binder for manual queue processing.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`Binder`], nothing is processed until the driver returned by
/// [`TestBinder::run`] is asked to.
///
/// ```rust
/// use oxide_state::{create_test_spawner, Action, AppState, Emitter, TestBinder, TestRenderer, Tracked, View};
/// # struct Props { message: String }
/// # struct Greeting;
/// # impl View<Props> for Greeting {
/// #     fn view(&self, state: &Tracked<'_>, _: &Emitter) -> Props {
/// #         Props { message: state.message() }
/// #     }
/// # }
/// let renderer = TestRenderer::new();
/// let binder = TestBinder::new(AppState::new(), Greeting, renderer.clone(), create_test_spawner());
///
/// let mut driver = binder.run();
/// driver.emitter().emit(Action::Rename("foo".to_string()));
/// driver.process_events();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[1].message, "foo say count is  0");
/// });
/// ```
pub struct TestBinder<Props, V, R, S>
where
    V: View<Props>,
    R: Renderer<Props>,
    S: Spawner,
{
    binder: Binder<Props, V, R, S>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props, V, R, S> TestBinder<Props, V, R, S>
where
    V: View<Props>,
    R: Renderer<Props>,
    S: Spawner,
{
    /// Create a new test binder.
    pub fn new(state: AppState, view: V, renderer: R, spawner: S) -> Self {
        TestBinder {
            binder: Binder::new(state, view, renderer, spawner),
        }
    }

    /// Mount the view and return a driver for manual queue processing.
    pub fn run(mut self) -> TestBinderDriver<Props, V, R, S> {
        self.binder.mount();
        TestBinderDriver {
            binder: self.binder,
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Returned by [`TestBinder::run`].
pub struct TestBinderDriver<Props, V, R, S>
where
    V: View<Props>,
    R: Renderer<Props>,
    S: Spawner,
{
    binder: Binder<Props, V, R, S>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props, V, R, S> TestBinderDriver<Props, V, R, S>
where
    V: View<Props>,
    R: Renderer<Props>,
    S: Spawner,
{
    /// Process everything queued until the queue is empty, including
    /// notifications queued while processing.
    pub fn process_events(&mut self) {
        self.binder.process_queued_events();
    }

    /// The state this binder renders.
    pub fn state(&self) -> &AppState {
        self.binder.state()
    }

    pub fn emitter(&self) -> Emitter {
        self.binder.emitter()
    }
}
