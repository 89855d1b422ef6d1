//! Events emitted by input components.

use formdom::{FocusEvent, InputEvent, KeyboardEvent};
use serde::{Deserialize, Serialize};

use crate::value::InputValue;

/// Payload of the `change` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDetail {
    /// The new value as a string; `None` when the value is unset or null.
    pub value: Option<String>,
}

impl From<&InputValue> for ChangeDetail {
    fn from(value: &InputValue) -> Self {
        Self {
            value: value.as_string(),
        }
    }
}

/// Every notification an input emits, as delivered on its outbound channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiInputEvent {
    /// A native input event occurred.
    Input(InputEvent),
    /// The value changed.
    Change(ChangeDetail),
    /// The input lost focus.
    Blur(FocusEvent),
    /// The input gained focus.
    Focus(FocusEvent),
    /// A key was pressed.
    KeyDown(KeyboardEvent),
}

impl UiInputEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Change(_) => "change",
            Self::Blur(_) => "blur",
            Self::Focus(_) => "focus",
            Self::KeyDown(_) => "keydown",
        }
    }
}

/// Result of dispatching a native event to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// The component did not handle the event.
    #[default]
    Ignored,
    /// The event was relayed; no state changed.
    Handled,
    /// The event changed the component's value.
    Changed,
}

impl EventResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
