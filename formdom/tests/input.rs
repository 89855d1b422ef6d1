use formdom::{EditKind, Element, Event, Key, KeyboardEvent, Modifiers, NativeInput};

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_type_text_fires_input() {
    let mut input = NativeInput::new();
    let event = input.type_text("ab").expect("editable");

    match event {
        Event::Input(ev) => {
            assert_eq!(ev.value, "ab");
            assert_eq!(ev.data.as_deref(), Some("ab"));
            assert_eq!(ev.input_type, EditKind::InsertText);
        }
        other => panic!("expected input event, got {other:?}"),
    }
    assert_eq!(input.value(), "ab");
    assert!(input.user_edited());
}

#[test]
fn test_set_user_value_replaces() {
    let mut input = NativeInput::from_element(&Element::input().attr("value", "old"));
    let event = input.set_user_value("new").expect("editable");
    assert_eq!(event.name(), "input");
    assert_eq!(input.value(), "new");
}

#[test]
fn test_disabled_and_readonly_ignore_edits() {
    let mut disabled = NativeInput::from_element(&Element::input().flag("disabled", true));
    assert!(disabled.type_text("x").is_none());
    assert_eq!(disabled.value(), "");

    let mut readonly = NativeInput::from_element(&Element::input().flag("readonly", true));
    assert!(readonly.set_user_value("x").is_none());
    assert!(readonly.press_key(Key::Char('x'), Modifiers::new()).len() == 1);
    assert_eq!(readonly.value(), "");
}

#[test]
fn test_press_key_fires_keydown_then_input() {
    let mut input = NativeInput::new();
    let events = input.press_key(Key::Char('a'), Modifiers::new());
    let names: Vec<_> = events.iter().map(Event::name).collect();
    assert_eq!(names, vec!["keydown", "input"]);
    assert_eq!(input.value(), "a");

    let events = input.press_key(Key::Backspace, Modifiers::new());
    assert_eq!(events.len(), 2);
    assert_eq!(input.value(), "");
}

#[test]
fn test_press_key_with_ctrl_only_fires_keydown() {
    let mut input = NativeInput::new();
    let events = input.press_key(Key::Char('a'), Modifiers::ctrl());
    assert_eq!(
        events,
        vec![Event::KeyDown(KeyboardEvent::new(Key::Char('a'), Modifiers::ctrl()))]
    );
    assert_eq!(input.value(), "");
}

#[test]
fn test_navigation_keys_do_not_edit() {
    let mut input = NativeInput::new();
    let events = input.press_key(Key::Enter, Modifiers::new());
    assert_eq!(events.len(), 1);
    assert!(input.press_key(Key::Backspace, Modifiers::new()).len() == 1);
}

#[test]
fn test_press_key_with_alt_only_fires_keydown() {
    let mut input = NativeInput::new();
    let mods = Modifiers::alt();
    assert!(!mods.none());
    assert_eq!(input.press_key(Key::Char('a'), mods).len(), 1);
    assert!(Modifiers::new().none());
}

#[test]
fn test_unidentified_key_only_fires_keydown() {
    use crossterm::event::KeyCode;

    let key: Key = KeyCode::CapsLock.into();
    assert_eq!(key, Key::Unidentified);

    let mut input = NativeInput::new();
    let events = input.press_key(key, Modifiers::new());
    assert_eq!(events, vec![Event::KeyDown(KeyboardEvent::new(Key::Unidentified, Modifiers::new()))]);
    assert_eq!(input.value(), "");
}

#[test]
fn test_disabled_input_fires_no_keydown() {
    let mut input = NativeInput::from_element(&Element::input().flag("disabled", true));
    assert!(input.press_key(Key::Char('a'), Modifiers::new()).is_empty());
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_and_blur() {
    let mut input = NativeInput::new();
    assert_eq!(input.focus().map(|e| e.name()), Some("focus"));
    assert!(input.is_focused());
    assert!(input.focus().is_none(), "already focused");

    assert_eq!(input.blur().map(|e| e.name()), Some("blur"));
    assert!(!input.is_focused());
    assert!(input.blur().is_none(), "already blurred");
}

#[test]
fn test_disabled_cannot_focus() {
    let mut input = NativeInput::from_element(&Element::input().flag("disabled", true));
    assert!(input.focus().is_none());
}

#[test]
fn test_disabling_drops_focus() {
    let mut input = NativeInput::new();
    input.focus();
    input.apply(&Element::input().flag("disabled", true));
    assert!(!input.is_focused());
}

#[test]
fn test_edit_kind_names() {
    assert_eq!(EditKind::InsertText.as_str(), "insertText");
    assert_eq!(EditKind::InsertReplacementText.as_str(), "insertReplacementText");
    assert_eq!(EditKind::DeleteContentBackward.as_str(), "deleteContentBackward");
}

// ============================================================================
// Partial entries
// ============================================================================

fn press_all(input: &mut NativeInput, text: &str) {
    for c in text.chars() {
        input.press_key(Key::Char(c), Modifiers::new());
    }
}

#[test]
fn test_decimal_typed_key_by_key() {
    let mut input = NativeInput::from_element(&Element::input().attr("type", "number"));

    press_all(&mut input, "1.");
    assert_eq!(input.value(), "");
    assert_eq!(input.raw_value(), "1.");

    press_all(&mut input, "5");
    assert_eq!(input.value(), "1.5");
}

#[test]
fn test_negative_number_typed_key_by_key() {
    let mut input = NativeInput::from_element(&Element::input().attr("type", "number"));
    press_all(&mut input, "-3");
    assert_eq!(input.value(), "-3");
}

#[test]
fn test_date_typed_key_by_key() {
    let mut input = NativeInput::from_element(&Element::input().attr("type", "date"));

    press_all(&mut input, "2024-01-0");
    assert_eq!(input.value(), "");

    press_all(&mut input, "2");
    assert_eq!(input.value(), "2024-01-02");
}

#[test]
fn test_email_keeps_inner_whitespace() {
    let mut input = NativeInput::from_element(&Element::input().attr("type", "email"));

    input.type_text("a ");
    assert_eq!(input.value(), "a");

    input.type_text("b");
    assert_eq!(input.value(), "a b");
}

#[test]
fn test_backspace_edits_typed_text() {
    let mut input = NativeInput::from_element(&Element::input().attr("type", "number"));
    press_all(&mut input, "1.");

    let events = input.press_key(Key::Backspace, Modifiers::new());
    assert_eq!(events.len(), 2);
    assert_eq!(input.value(), "1");
    assert_eq!(input.raw_value(), "1");
}

#[test]
fn test_apply_matching_value_keeps_partial_entry() {
    let mut input = NativeInput::from_element(&Element::input().attr("type", "number"));
    press_all(&mut input, "1.");

    input.apply(&Element::input().attr("type", "number").attr("value", ""));
    assert_eq!(input.raw_value(), "1.");

    press_all(&mut input, "25");
    assert_eq!(input.value(), "1.25");
}

#[test]
fn test_type_change_drops_partial_entry() {
    let mut input = NativeInput::from_element(&Element::input().attr("type", "number"));
    press_all(&mut input, "1.");

    input.apply(&Element::input().attr("type", "text").attr("value", ""));
    assert_eq!(input.raw_value(), "");

    press_all(&mut input, "x");
    assert_eq!(input.value(), "x");
}

// ============================================================================
// Patching
// ============================================================================

#[test]
fn test_apply_resets_value_from_attribute() {
    let mut input = NativeInput::new();
    input.type_text("typed");
    input.apply(&Element::input().attr("value", "scripted"));
    assert_eq!(input.value(), "scripted");
    assert!(!input.user_edited());
}

#[test]
fn test_apply_same_value_keeps_user_edit() {
    let mut input = NativeInput::new();
    input.type_text("ab");
    input.apply(&Element::input().attr("value", "ab").attr("minlength", "3"));
    assert!(input.user_edited());
    assert!(input.validity().too_short);
}

#[test]
fn test_apply_replaces_attributes() {
    let mut input = NativeInput::from_element(&Element::input().attr("name", "a").flag("required", true));
    input.apply(&Element::input().attr("name", "b"));
    assert_eq!(input.attribute("name"), Some("b"));
    assert!(input.attribute("required").is_none());
}

#[test]
fn test_edit_clears_shown_message() {
    let mut input = NativeInput::from_element(&Element::input().flag("required", true));
    assert!(!input.report_validity());
    assert!(input.shown_message().is_some());
    input.type_text("x");
    assert!(input.shown_message().is_none());
}

// ============================================================================
// Terminal key conversion
// ============================================================================

#[test]
fn test_crossterm_key_event_conversion() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let ev: KeyboardEvent = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::SHIFT).into();
    assert_eq!(ev.key, Key::Char('q'));
    assert_eq!(ev.modifiers, Modifiers::shift());
    assert!(!ev.repeat);

    let esc: Key = KeyCode::Esc.into();
    assert_eq!(esc, Key::Escape);
}
