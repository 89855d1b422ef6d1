use log::{debug, trace};

use crate::element::Element;
use crate::event::{EditKind, Event, FocusEvent, InputEvent, Key, KeyboardEvent, Modifiers};
use crate::sanitize::sanitize;
use crate::types::InputType;
use crate::validity::{Constraints, ValidityState};

/// A live native `<input>` element.
///
/// Holds the attributes last applied from a rendered [`Element`], the text
/// being edited and its sanitized value, focus, and the validation message
/// currently shown.
/// Host interactions (`type_text`, `focus`, `press_key`, ...) mutate the
/// element like a browser would and return the native events it fires.
#[derive(Debug, Clone)]
pub struct NativeInput {
    element: Element,
    /// Text as typed. Partial entries (`1.`, `-`, `2024-0`) live here while
    /// `value` sanitizes to empty.
    raw: String,
    value: String,
    /// Value was last changed by a user edit rather than by script.
    user_edited: bool,
    focused: bool,
    shown_message: Option<String>,
}

impl Default for NativeInput {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeInput {
    pub fn new() -> Self {
        Self {
            element: Element::input(),
            raw: String::new(),
            value: String::new(),
            user_edited: false,
            focused: false,
            shown_message: None,
        }
    }

    /// Create an input already patched with a rendered element.
    pub fn from_element(element: &Element) -> Self {
        let mut input = Self::new();
        input.apply(element);
        input
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Patch this element from a freshly rendered description.
    ///
    /// Attributes are replaced wholesale. The live value is reset to the
    /// rendered `value` attribute, unless it already holds that value, in
    /// which case the typed text and user-edit state are kept.
    pub fn apply(&mut self, rendered: &Element) {
        if self.element.attributes != rendered.attributes {
            debug!(
                "NativeInput: applying {} attributes",
                rendered.attributes.len()
            );
        }
        self.element = rendered.clone();

        let ty = self.input_type();
        let attr = rendered.get_attr("value").unwrap_or("");
        let next = sanitize(ty, attr);
        if next != self.value {
            self.raw = attr.to_string();
            self.value = next;
            self.user_edited = false;
        } else if sanitize(ty, &self.raw) != self.value {
            // type changed under a partial entry
            self.raw = attr.to_string();
        }

        if self.disabled() && self.focused {
            self.focused = false;
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The element as last applied.
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.element.get_attr(name)
    }

    /// The live value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The text being edited, before sanitization.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    pub fn input_type(&self) -> InputType {
        InputType::from_attr(self.element.get_attr("type"))
    }

    pub fn disabled(&self) -> bool {
        self.element.has_attr("disabled")
    }

    pub fn readonly(&self) -> bool {
        self.element.has_attr("readonly")
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn user_edited(&self) -> bool {
        self.user_edited
    }

    /// The validation message currently displayed, if `report_validity`
    /// found the element invalid.
    pub fn shown_message(&self) -> Option<&str> {
        self.shown_message.as_deref()
    }

    /// Serialize the element as markup.
    pub fn to_html(&self) -> String {
        self.element.to_html()
    }

    // -------------------------------------------------------------------------
    // Constraint validation
    // -------------------------------------------------------------------------

    pub fn constraints(&self) -> Constraints {
        Constraints::from_element(&self.element)
    }

    pub fn validity(&self) -> ValidityState {
        self.constraints().check(&self.value, self.user_edited)
    }

    /// Whether the value satisfies every constraint. No side effects.
    pub fn check_validity(&self) -> bool {
        self.validity().valid()
    }

    /// The message for the current validity state; empty when valid.
    pub fn validation_message(&self) -> String {
        let constraints = self.constraints();
        let state = constraints.check(&self.value, self.user_edited);
        constraints.message(&state, &self.value)
    }

    /// Check validity and show the validation message when invalid.
    pub fn report_validity(&mut self) -> bool {
        let constraints = self.constraints();
        let state = constraints.check(&self.value, self.user_edited);
        if state.valid() {
            self.shown_message = None;
            return true;
        }

        let message = constraints.message(&state, &self.value);
        debug!("NativeInput: invalid ({message})");
        self.shown_message = Some(message);
        false
    }

    // -------------------------------------------------------------------------
    // User interaction
    // -------------------------------------------------------------------------

    fn editable(&self) -> bool {
        !self.disabled() && !self.readonly()
    }

    /// Replace the whole value as the user would (paste over, autofill).
    pub fn set_user_value(&mut self, text: &str) -> Option<Event> {
        if !self.editable() {
            trace!("NativeInput: ignoring edit on non-editable input");
            return None;
        }
        self.raw = text.to_string();
        Some(self.user_edit(Some(text.to_string()), EditKind::InsertReplacementText))
    }

    /// Append text at the end of the value, as typing does.
    pub fn type_text(&mut self, text: &str) -> Option<Event> {
        if !self.editable() {
            trace!("NativeInput: ignoring edit on non-editable input");
            return None;
        }
        self.raw.push_str(text);
        Some(self.user_edit(Some(text.to_string()), EditKind::InsertText))
    }

    /// Delete the last character, as Backspace does at the end of the value.
    pub fn delete_backward(&mut self) -> Option<Event> {
        if !self.editable() || self.raw.is_empty() {
            return None;
        }
        self.raw.pop();
        Some(self.user_edit(None, EditKind::DeleteContentBackward))
    }

    fn user_edit(&mut self, data: Option<String>, input_type: EditKind) -> Event {
        self.value = sanitize(self.input_type(), &self.raw);
        trace!("NativeInput: {} -> {:?}", input_type.as_str(), self.value);
        self.user_edited = true;
        self.shown_message = None;
        Event::Input(InputEvent {
            value: self.value.clone(),
            data,
            input_type,
        })
    }

    /// Press a key: fires `keydown`, then `input` when the key edits the value.
    pub fn press_key(&mut self, key: Key, modifiers: Modifiers) -> Vec<Event> {
        if self.disabled() {
            return Vec::new();
        }

        let mut events = vec![Event::KeyDown(KeyboardEvent::new(key, modifiers))];
        if modifiers.ctrl || modifiers.alt {
            return events;
        }

        let edit = match key {
            Key::Char(c) => self.type_text(&c.to_string()),
            Key::Backspace => self.delete_backward(),
            _ => None,
        };
        events.extend(edit);
        events
    }

    /// Give the element focus. Disabled elements cannot be focused.
    pub fn focus(&mut self) -> Option<Event> {
        if self.disabled() || self.focused {
            return None;
        }
        self.focused = true;
        Some(Event::Focus(FocusEvent::default()))
    }

    /// Take focus away from the element.
    pub fn blur(&mut self) -> Option<Event> {
        if !self.focused {
            return None;
        }
        self.focused = false;
        Some(Event::Blur(FocusEvent::default()))
    }
}
