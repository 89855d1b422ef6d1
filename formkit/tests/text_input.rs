use std::sync::{Arc, Mutex};

use formkit::config::InputConfig;
use formkit::formdom::{find_all_by_tag, find_by_tag};
use formkit::prelude::*;

#[test]
fn test_renders_text_input_at_defaults() {
    let text = UiTextInput::new();

    assert_eq!(text.input().config(), &InputConfig::default());
    assert_eq!(text.input().config().input_type, InputType::Text);

    let host = text.host();
    assert_eq!(host.tag, "ui-text-input");

    let wrapper = find_by_tag(&host, "ui-input").expect("generic input host");
    assert_eq!(wrapper.get_attr("type"), Some("text"));

    let natives = find_all_by_tag(&host, "input");
    assert_eq!(natives.len(), 1);
    assert_eq!(natives[0].get_attr("type"), Some("text"));
    assert_eq!(natives[0].get_attr("value"), Some(""));
}

#[test]
fn test_markup() {
    let text = UiTextInput::default();
    assert_eq!(
        text.to_html(),
        concat!(
            r#"<ui-text-input><ui-input type="text">"#,
            r#"<input class="dom-input" autocomplete="off" placeholder type="text" value>"#,
            "</ui-input></ui-text-input>"
        )
    );
}

#[test]
fn test_delegates_events_to_inner_input() {
    let mut text = UiTextInput::new();
    let changes = Arc::new(Mutex::new(Vec::new()));
    let c = Arc::clone(&changes);
    text.on_change(move |d| c.lock().unwrap().push(d.value.clone()));

    assert_eq!(text.type_text("hello"), EventResult::Changed);
    assert_eq!(text.press_key(Key::Backspace, Modifiers::new()), EventResult::Changed);

    assert_eq!(
        *changes.lock().unwrap(),
        vec![Some("hello".to_string()), Some("hell".to_string())]
    );
    assert_eq!(text.value(), &InputValue::from("hell"));
}

#[test]
fn test_dispatch_native_event() {
    let mut text = UiTextInput::new();
    let mut rx = text.subscribe();

    assert_eq!(text.dispatch(Event::Focus(Default::default())), EventResult::Handled);
    assert_eq!(rx.try_recv().map(|e| e.name()), Ok("focus"));
}

#[tokio::test]
async fn test_report_validity_delegates() {
    let mut text = UiTextInput::new();
    assert!(text.report_validity().await, "not required, empty is valid");
}
