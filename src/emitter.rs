//! Action emitter for embedding callbacks in Props.

use flume::Sender;

use crate::{Action, FieldSet};

/// What the binder's queue carries.
#[derive(Debug)]
pub(crate) enum Message {
    Action(Action),
    /// Fields read by the render numbered `generation` have changed.
    Changed { generation: u64, fields: FieldSet },
}

/// Action emitter that can be embedded in Props.
///
/// Clone this handle to create callbacks in your Props that trigger
/// [`Action`]s when invoked (e.g., by user input).
///
/// Emitting only queues the action; the [`Binder`](crate::Binder) applies it
/// to the state when it next processes its queue.
///
/// # Example
///
/// ```rust
/// use oxide_state::{Action, Emitter, Tracked, View};
///
/// struct Props {
///     message: String,
///     on_name_input: Box<dyn Fn(String)>,
/// }
///
/// struct TopicList;
///
/// impl View<Props> for TopicList {
///     fn view(&self, state: &Tracked<'_>, emitter: &Emitter) -> Props {
///         let emitter = emitter.clone();
///         Props {
///             message: state.message(),
///             on_name_input: Box::new(move |value| emitter.emit(Action::Rename(value))),
///         }
///     }
/// }
/// ```
pub struct Emitter(pub(crate) Sender<Message>);

impl Clone for Emitter {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Emitter {
    pub(crate) fn new(sender: Sender<Message>) -> Self {
        Self(sender)
    }

    /// Queue an action for the binder.
    ///
    /// Actions emitted after the binder is gone are dropped.
    pub fn emit(&self, action: Action) {
        tracing::trace!(?action, "action emitted");
        self.0.send(Message::Action(action)).ok();
    }

    pub(crate) fn changed(&self, generation: u64, fields: FieldSet) {
        self.0
            .send(Message::Changed { generation, fields })
            .ok();
    }
}
