//! Renderer abstraction for rendering Props.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for rendering Props.
///
/// Implement this trait to connect a [`Binder`](crate::Binder) to your
/// rendering system (DOM bridge, terminal, embedded display, etc.).
///
/// [`render`](Self::render) is called on mount and again whenever a field
/// the view read has changed.
///
/// # Example
///
/// ```rust
/// use oxide_state::Renderer;
///
/// struct Props {
///     message: String,
/// }
///
/// struct ConsoleRenderer;
///
/// impl Renderer<Props> for ConsoleRenderer {
///     fn render(&mut self, props: Props) {
///         println!("{}", props.message);
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    ///
    /// Props may contain callbacks (via [`Emitter`](crate::Emitter)) that
    /// queue new actions.
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// # Example
///
/// ```rust
/// use oxide_state::{create_test_spawner, AppState, Emitter, TestBinder, TestRenderer, Tracked, View};
///
/// # struct Props { count: i64 }
/// # struct Counter;
/// # impl View<Props> for Counter {
/// #     fn view(&self, state: &Tracked<'_>, _: &Emitter) -> Props {
/// #         Props { count: state.count() }
/// #     }
/// # }
/// let renderer = TestRenderer::new();
///
/// let binder = TestBinder::new(
///     AppState::new(),
///     Counter,
///     renderer.clone(),
///     create_test_spawner(),
/// );
///
/// let _driver = binder.run();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0].count, 0);
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of renders so far.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Use it to make assertions on Props or to invoke Props callbacks.
    ///
    /// ```rust
    /// # use oxide_state::TestRenderer;
    /// # struct Props { message: String, on_click: Box<dyn Fn() + Send> }
    /// # let renderer = TestRenderer::<Props>::new();
    /// let count = renderer.with_renders(|renders| renders.len());
    ///
    /// renderer.with_renders(|renders| {
    ///     // (renders[0].on_click)();
    /// });
    /// ```
    ///
    /// Do not emit-and-process from inside the closure: the capture storage
    /// stays locked until it returns.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
