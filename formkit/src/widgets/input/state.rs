use formdom::{
    Autocomplete, FocusEvent, InputEvent, InputMode, InputType, KeyboardEvent, NativeInput,
};
use log::debug;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::InputConfig;
use crate::emitter::EventEmitter;
use crate::error::AttributeError;
use crate::events::{ChangeDetail, UiInputEvent};
use crate::value::InputValue;

use super::render::render_input;

/// Emitters for each event an input fires.
#[derive(Debug)]
pub(super) struct Emitters {
    pub(super) input: EventEmitter<InputEvent>,
    pub(super) change: EventEmitter<ChangeDetail>,
    pub(super) blur: EventEmitter<FocusEvent>,
    pub(super) focus: EventEmitter<FocusEvent>,
    pub(super) keydown: EventEmitter<KeyboardEvent>,
}

impl Default for Emitters {
    fn default() -> Self {
        Self {
            input: EventEmitter::new("input"),
            change: EventEmitter::new("change"),
            blur: EventEmitter::new("blur"),
            focus: EventEmitter::new("focus"),
            keydown: EventEmitter::new("keydown"),
        }
    }
}

/// A generic input component wrapping one native input element.
///
/// `UiInput` owns its configuration and the native element it renders to.
/// Every property setter re-renders and patches the native element. Value
/// mutations from any source go through [`UiInput::set_value`], which emits
/// exactly one `change` per actual change.
///
/// # Example
///
/// ```
/// use formkit::prelude::*;
///
/// let mut input = UiInput::new();
/// input.set_required(true);
/// input.on_change(|detail| println!("now {:?}", detail.value));
///
/// input.user_input("hello");
/// assert_eq!(input.value(), &InputValue::from("hello"));
/// assert_eq!(input.native().value(), "hello");
/// ```
#[derive(Debug)]
pub struct UiInput {
    pub(super) config: InputConfig,
    pub(super) native: NativeInput,
    pub(super) emitters: Emitters,
    pub(super) outbound: Vec<UnboundedSender<UiInputEvent>>,
}

impl Default for UiInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UiInput {
    /// Create an input with every property at its default.
    pub fn new() -> Self {
        Self::from_config(InputConfig::default())
    }

    /// Create an input from a configuration.
    pub fn from_config(config: InputConfig) -> Self {
        let native = NativeInput::from_element(&render_input(&config));
        Self {
            config,
            native,
            emitters: Emitters::default(),
            outbound: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The current configuration.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn value(&self) -> &InputValue {
        &self.config.value
    }

    /// The native element this input renders to.
    pub fn native(&self) -> &NativeInput {
        &self.native
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// Set the value.
    ///
    /// The single mutation point for the value: external assignment, native
    /// input handling and declarative attributes all land here. Emits one
    /// `change` when the value differs from the current one and returns
    /// whether it did.
    pub fn set_value(&mut self, value: impl Into<InputValue>) -> bool {
        let value = value.into();
        if value.is_same(&self.config.value) {
            return false;
        }

        debug!("UiInput: value {:?} -> {:?}", self.config.value, value);
        self.config.value = value;
        self.rerender();

        let detail = ChangeDetail::from(&self.config.value);
        self.emit(UiInputEvent::Change(detail));
        true
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Replace every property except the value, then set the value through
    /// [`UiInput::set_value`].
    pub fn set_config(&mut self, mut config: InputConfig) {
        let value = std::mem::replace(&mut config.value, self.config.value.clone());
        self.config = config;
        self.rerender();
        self.set_value(value);
    }

    pub fn set_input_type(&mut self, input_type: InputType) {
        self.config.input_type = input_type;
        self.rerender();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.config.placeholder = placeholder.into();
        self.rerender();
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.config.name = name;
        self.rerender();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        self.rerender();
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.config.readonly = readonly;
        self.rerender();
    }

    pub fn set_required(&mut self, required: bool) {
        self.config.required = required;
        self.rerender();
    }

    pub fn set_pattern(&mut self, pattern: Option<String>) {
        self.config.pattern = pattern;
        self.rerender();
    }

    pub fn set_min(&mut self, min: Option<String>) {
        self.config.min = min;
        self.rerender();
    }

    pub fn set_max(&mut self, max: Option<String>) {
        self.config.max = max;
        self.rerender();
    }

    pub fn set_step(&mut self, step: Option<String>) {
        self.config.step = step;
        self.rerender();
    }

    pub fn set_minlength(&mut self, minlength: Option<u32>) {
        self.config.minlength = minlength;
        self.rerender();
    }

    pub fn set_maxlength(&mut self, maxlength: Option<u32>) {
        self.config.maxlength = maxlength;
        self.rerender();
    }

    pub fn set_label_id(&mut self, label_id: Option<u32>) {
        self.config.label_id = label_id;
        self.rerender();
    }

    pub fn set_size(&mut self, size: Option<u32>) {
        self.config.size = size;
        self.rerender();
    }

    pub fn set_inputmode(&mut self, inputmode: Option<InputMode>) {
        self.config.inputmode = inputmode;
        self.rerender();
    }

    pub fn set_autofocus(&mut self, autofocus: bool) {
        self.config.autofocus = autofocus;
        self.rerender();
    }

    pub fn set_autocomplete(&mut self, autocomplete: Autocomplete) {
        self.config.autocomplete = autocomplete;
        self.rerender();
    }

    // -------------------------------------------------------------------------
    // Declarative attributes
    // -------------------------------------------------------------------------

    /// Apply a string attribute, as markup would set it.
    ///
    /// `value` goes through [`UiInput::set_value`] and so emits `change`.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError> {
        self.apply_attribute(name, Some(value))
    }

    /// Remove an attribute, restoring the property default.
    pub fn remove_attribute(&mut self, name: &str) -> Result<(), AttributeError> {
        self.apply_attribute(name, None)
    }

    fn apply_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        if name.eq_ignore_ascii_case("value") {
            self.set_value(value.map_or_else(InputValue::default, InputValue::from));
            return Ok(());
        }

        self.config.set_attribute(name, value)?;
        self.rerender();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Recompute the native element from the current configuration and
    /// patch the owned native input.
    pub(super) fn rerender(&mut self) {
        let rendered = render_input(&self.config);
        self.native.apply(&rendered);
    }
}
