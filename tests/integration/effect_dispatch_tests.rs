use super::{given_a_bootstrap_effect, given_no_bootstrap_effect};
use oxide_state::{Action, Effect};

#[test]
fn given_no_bootstrap_effect_when_processed_should_not_render_again() {
    let mut test = given_no_bootstrap_effect();

    test.driver.process_events();

    assert_eq!(test.renders.count(), 1);
}

#[test]
fn given_a_batch_of_effects_as_bootstrap_should_execute_all_effects() {
    let mut test = given_a_bootstrap_effect(Effect::batch(vec![
        Effect::just(Action::Increment),
        Effect::just(Action::Increment),
        Effect::just(Action::Increment),
    ]));

    test.driver.process_events();

    // All three increments are queued before any change is processed:
    // 1. Initial render (count=0)
    // 2. One render showing all three (count=3)
    assert_eq!(test.driver.state().count(), 3);
    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].message, "wangbadan say count is  0");
        assert_eq!(renders[1].message, "wangbadan say count is  3");
    });
}

#[test]
fn given_an_async_bootstrap_effect_should_apply_its_actions() {
    let mut test = given_a_bootstrap_effect(Effect::from_async(|emitter| async move {
        emitter.emit(Action::Rename("yak".to_string()));
    }));

    test.driver.process_events();

    assert_eq!(test.driver.state().name(), "yak");
    test.renders.with_renders(|renders| {
        assert_eq!(renders.last().map(|props| props.message.as_str()), Some("yak say count is  0"));
    });
}
