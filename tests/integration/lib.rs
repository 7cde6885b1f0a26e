mod simple_view;

use std::future::Future;
use std::pin::Pin;

use oxide_state::{create_test_spawner, AppState, Effect, Seed, TestBinder, TestBinderDriver, TestRenderer};
pub(crate) use simple_view::*;

mod effect_dispatch_tests;
mod rendering_tests;

type TestSpawner = fn(Pin<Box<dyn Future<Output = ()> + Send>>);

pub(crate) struct IntegrationTest {
    pub(crate) driver: TestBinderDriver<TestProps, TestView, TestRenderer<TestProps>, TestSpawner>,
    pub(crate) renders: TestRenderer<TestProps>,
}

pub(crate) fn given_no_bootstrap_effect() -> IntegrationTest {
    create_integration_test(Effect::none())
}

pub(crate) fn given_a_bootstrap_effect(effect: Effect) -> IntegrationTest {
    create_integration_test(effect)
}

fn create_integration_test(bootstrap_effect: Effect) -> IntegrationTest {
    let renders = TestRenderer::new();
    let state = AppState::with_seed(Seed::default().count(0).name("wangbadan"));

    // The mock verifies on drop that bootstrap ran exactly once.
    let mut bootstrap = MockBootstrapDependency::new();
    bootstrap
        .expect_on_bootstrap()
        .times(1)
        .return_once(move || bootstrap_effect);

    let view = TestView {
        bootstrap: Box::new(bootstrap),
    };

    let binder = TestBinder::new(state, view, renders.clone(), create_test_spawner());
    let driver = binder.run();

    IntegrationTest { driver, renders }
}
