use oxide_state::{Action, Effect, Emitter, Tracked, View};

pub(crate) struct TestProps {
    pub(crate) message: String,
    pub(crate) on_increment: Box<dyn Fn() + Send>,
    pub(crate) on_name_input: Box<dyn Fn(&str) + Send>,
}

pub(crate) struct TestView {
    pub(crate) bootstrap: Box<dyn BootstrapDependency + Send>,
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait BootstrapDependency {
    fn on_bootstrap(&self) -> Effect;
}

impl View<TestProps> for TestView {
    fn view(&self, state: &Tracked<'_>, emitter: &Emitter) -> TestProps {
        let on_increment = {
            let emitter = emitter.clone();
            Box::new(move || emitter.emit(Action::Increment))
        };
        let on_name_input = {
            let emitter = emitter.clone();
            Box::new(move |value: &str| emitter.emit(Action::Rename(value.to_string())))
        };

        TestProps {
            message: state.message(),
            on_increment,
            on_name_input,
        }
    }

    fn bootstrap(&self) -> Effect {
        self.bootstrap.on_bootstrap()
    }
}
