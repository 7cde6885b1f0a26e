use super::given_no_bootstrap_effect;

#[test]
fn given_no_bootstrap_effect_should_render_initial_message() {
    let test = given_no_bootstrap_effect();

    assert_eq!(test.renders.count(), 1);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[0].message, "wangbadan say count is  0");
    });
}

#[test]
fn given_a_message_view_when_incremented_then_renamed_should_render_each_change() {
    let mut test = given_no_bootstrap_effect();

    test.renders.with_renders(|renders| {
        (renders[0].on_increment)();
    });
    test.driver.process_events();

    test.renders.with_renders(|renders| {
        (renders[1].on_name_input)("foo");
    });
    test.driver.process_events();

    assert_eq!(test.renders.count(), 3);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[1].message, "wangbadan say count is  1");
        assert_eq!(renders[2].message, "foo say count is  1");
    });
}

#[test]
fn given_the_current_name_when_input_should_not_render_again() {
    let mut test = given_no_bootstrap_effect();

    test.renders.with_renders(|renders| {
        (renders[0].on_name_input)("wangbadan");
    });
    test.driver.process_events();

    assert_eq!(test.renders.count(), 1);
}

#[test]
fn given_an_empty_name_input_should_render_it() {
    let mut test = given_no_bootstrap_effect();

    test.renders.with_renders(|renders| {
        (renders[0].on_name_input)("");
    });
    test.driver.process_events();

    assert_eq!(test.driver.state().name(), "");
    test.renders.with_renders(|renders| {
        assert_eq!(renders[1].message, " say count is  0");
    });
}
