use formdom::{Element, NativeInput};

fn input(el: Element) -> NativeInput {
    NativeInput::from_element(&el)
}

fn typed(el: Element, text: &str) -> NativeInput {
    let mut input = input(el);
    input.set_user_value(text);
    input
}

// ============================================================================
// Required
// ============================================================================

#[test]
fn test_required_empty_is_invalid() {
    let mut field = input(Element::input().flag("required", true));
    assert!(field.validity().value_missing);
    assert!(!field.report_validity());
    assert_eq!(field.shown_message(), Some("Please fill out this field."));
}

#[test]
fn test_required_filled_is_valid() {
    let mut field = input(Element::input().flag("required", true).attr("value", "x"));
    assert!(field.report_validity());
    assert_eq!(field.shown_message(), None);
}

#[test]
fn test_report_clears_shown_message_once_valid() {
    let mut field = input(Element::input().flag("required", true));
    assert!(!field.report_validity());
    field.apply(&Element::input().flag("required", true).attr("value", "ok"));
    assert!(field.report_validity());
    assert!(field.shown_message().is_none());
}

#[test]
fn test_check_validity_has_no_side_effect() {
    let field = input(Element::input().flag("required", true));
    assert!(!field.check_validity());
    assert!(field.shown_message().is_none());
}

#[test]
fn test_disabled_and_readonly_are_barred() {
    let disabled = input(Element::input().flag("required", true).flag("disabled", true));
    assert!(disabled.check_validity());

    let readonly = input(Element::input().flag("required", true).flag("readonly", true));
    assert!(readonly.check_validity());
}

// ============================================================================
// Pattern and type
// ============================================================================

#[test]
fn test_pattern_is_anchored() {
    let el = Element::input().attr("pattern", "[a-z]+");
    assert!(typed(el.clone(), "abc").check_validity());

    let field = typed(el, "abc1");
    assert!(field.validity().pattern_mismatch);
    assert_eq!(field.validation_message(), "Please match the requested format.");
}

#[test]
fn test_pattern_alternation_is_grouped() {
    let el = Element::input().attr("pattern", "a|b");
    assert!(typed(el.clone(), "a").check_validity());
    assert!(!typed(el, "ab").check_validity());
}

#[test]
fn test_pattern_ignores_empty_value() {
    let field = input(Element::input().attr("pattern", "[0-9]+"));
    assert!(field.check_validity());
}

#[test]
fn test_invalid_pattern_is_ignored() {
    let field = typed(Element::input().attr("pattern", "(unclosed"), "anything");
    assert!(field.check_validity());
}

#[test]
fn test_pattern_does_not_apply_to_number() {
    let el = Element::input().attr("type", "number").attr("pattern", "x");
    assert!(typed(el, "5").check_validity());
}

#[test]
fn test_email_type_mismatch() {
    let el = Element::input().attr("type", "email");
    assert!(typed(el.clone(), "user@example.com").check_validity());

    let field = typed(el, "not-an-email");
    assert!(field.validity().type_mismatch);
    assert_eq!(field.validation_message(), "Please enter an email address.");
}

#[test]
fn test_url_type_mismatch() {
    let el = Element::input().attr("type", "url");
    assert!(typed(el.clone(), "https://example.com/a").check_validity());
    assert!(typed(el, "example dot com").validity().type_mismatch);
}

// ============================================================================
// Length
// ============================================================================

#[test]
fn test_length_only_checked_after_user_edit() {
    let el = Element::input().attr("minlength", "3").attr("value", "ab");
    let scripted = input(el.clone());
    assert!(scripted.check_validity());

    let edited = typed(el, "ab");
    assert!(edited.validity().too_short);
    assert_eq!(
        edited.validation_message(),
        "Please lengthen this text to 3 characters or more (you are currently using 2 characters)."
    );
}

#[test]
fn test_maxlength_after_user_edit() {
    let field = typed(Element::input().attr("maxlength", "2"), "abc");
    assert!(field.validity().too_long);
}

#[test]
fn test_length_counts_utf16_units() {
    // U+1F600 is two UTF-16 code units.
    let field = typed(Element::input().attr("maxlength", "1"), "\u{1F600}");
    assert!(field.validity().too_long);
}

#[test]
fn test_empty_value_is_never_too_short() {
    let mut field = input(Element::input().attr("minlength", "3"));
    field.type_text("a");
    field.delete_backward();
    assert_eq!(field.value(), "");
    assert!(field.check_validity());
}

// ============================================================================
// Range and step
// ============================================================================

#[test]
fn test_number_range() {
    let el = Element::input()
        .attr("type", "number")
        .attr("min", "1")
        .attr("max", "10");

    assert!(typed(el.clone(), "5").check_validity());

    let low = typed(el.clone(), "0");
    assert!(low.validity().range_underflow);
    assert_eq!(low.validation_message(), "Value must be greater than or equal to 1.");

    let high = typed(el, "11");
    assert!(high.validity().range_overflow);
    assert_eq!(high.validation_message(), "Value must be less than or equal to 10.");
}

#[test]
fn test_min_greater_than_max_is_accepted_as_is() {
    let el = Element::input()
        .attr("type", "number")
        .attr("min", "10")
        .attr("max", "1");
    let state = typed(el, "5").validity();
    assert!(state.range_underflow);
    assert!(state.range_overflow);
}

#[test]
fn test_number_step() {
    let el = Element::input().attr("type", "number").attr("step", "0.5");
    assert!(typed(el.clone(), "1.5").check_validity());
    assert!(typed(el, "1.25").validity().step_mismatch);
}

#[test]
fn test_default_step_is_one_from_min() {
    let el = Element::input().attr("type", "number").attr("min", "0.5");
    assert!(typed(el.clone(), "1.5").check_validity());
    assert!(typed(el, "2").validity().step_mismatch);
}

#[test]
fn test_step_any_disables_step_check() {
    let el = Element::input().attr("type", "number").attr("step", "any");
    assert!(typed(el, "0.333").check_validity());
}

#[test]
fn test_invalid_step_falls_back_to_one() {
    let el = Element::input().attr("type", "number").attr("step", "-2");
    assert!(typed(el.clone(), "3").check_validity());
    assert!(typed(el, "3.5").validity().step_mismatch);
}

#[test]
fn test_date_range() {
    let el = Element::input()
        .attr("type", "date")
        .attr("min", "2024-01-01")
        .attr("max", "2024-12-31");

    assert!(typed(el.clone(), "2024-06-15").check_validity());
    assert!(typed(el.clone(), "2023-12-31").validity().range_underflow);
    assert!(typed(el, "2025-01-01").validity().range_overflow);
}

#[test]
fn test_time_and_week_ranges() {
    let time = Element::input()
        .attr("type", "time")
        .attr("min", "09:00")
        .attr("max", "17:30");
    assert!(typed(time.clone(), "12:15:30").check_validity());
    assert!(typed(time, "08:59").validity().range_underflow);

    let week = Element::input().attr("type", "week").attr("max", "2024-W10");
    assert!(typed(week.clone(), "2024-W09").check_validity());
    assert!(typed(week, "2024-W11").validity().range_overflow);
}

#[test]
fn test_unparsable_bound_is_ignored() {
    let el = Element::input().attr("type", "number").attr("min", "abc");
    assert!(typed(el, "-100").check_validity());
}

// ============================================================================
// Sanitization
// ============================================================================

#[test]
fn test_number_value_sanitized_but_attribute_kept() {
    let field = input(Element::input().attr("type", "number").attr("value", "12abc"));
    assert_eq!(field.value(), "");
    assert_eq!(field.attribute("value"), Some("12abc"));
}

#[test]
fn test_text_strips_newlines() {
    let field = input(Element::input().attr("value", "a\nb\r\nc"));
    assert_eq!(field.value(), "abc");
}

#[test]
fn test_email_trims_whitespace() {
    let field = input(Element::input().attr("type", "email").attr("value", "  a@b.co "));
    assert_eq!(field.value(), "a@b.co");
}

#[test]
fn test_invalid_date_sanitized_to_empty() {
    let field = input(Element::input().attr("type", "date").attr("value", "2024-13-01"));
    assert_eq!(field.value(), "");

    let ok = input(Element::input().attr("type", "month").attr("value", "2024-02"));
    assert_eq!(ok.value(), "2024-02");
}
