//! Input configuration: the flat record of properties an input forwards to
//! its native element.

use formdom::{Autocomplete, InputMode, InputType};
use serde::{Deserialize, Serialize};

use crate::error::AttributeError;
use crate::value::InputValue;

/// Attribute names accepted by [`InputConfig::set_attribute`].
pub const ATTRIBUTES: &[&str] = &[
    "type",
    "value",
    "placeholder",
    "name",
    "disabled",
    "readonly",
    "required",
    "pattern",
    "min",
    "max",
    "step",
    "minlength",
    "maxlength",
    "label-id",
    "size",
    "inputmode",
    "autofocus",
    "autocomplete",
];

/// Configuration of an input component.
///
/// Every field maps one-to-one onto an attribute of the rendered native
/// input. Deserializes from a partial record; missing fields take their
/// defaults.
///
/// # Example
///
/// ```
/// use formkit::config::InputConfig;
/// use formkit::formdom::InputType;
///
/// let config = InputConfig::default()
///     .input_type(InputType::Email)
///     .name("email")
///     .required(true);
/// assert!(config.required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InputConfig {
    /// The type of input.
    #[serde(rename = "type")]
    pub input_type: InputType,
    /// The value of the input.
    pub value: InputValue,
    /// Text shown before the input has a value.
    pub placeholder: String,
    /// Name of the control, submitted with form data.
    pub name: Option<String>,
    /// The user cannot interact with the input.
    pub disabled: bool,
    /// The user cannot modify the value.
    pub readonly: bool,
    /// The user must fill in a value before submitting.
    pub required: bool,
    /// Regular expression the value is checked against.
    pub pattern: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    /// Increment for `number` inputs: `"any"` or a positive number.
    pub step: Option<String>,
    pub minlength: Option<u32>,
    pub maxlength: Option<u32>,
    /// Id of the labelling element, rendered as `aria-labelledby`.
    pub label_id: Option<u32>,
    pub size: Option<u32>,
    /// Virtual keyboard hint.
    pub inputmode: Option<InputMode>,
    pub autofocus: bool,
    pub autocomplete: Autocomplete,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            value: InputValue::default(),
            placeholder: String::new(),
            name: None,
            disabled: false,
            readonly: false,
            required: false,
            pattern: None,
            min: None,
            max: None,
            step: None,
            minlength: None,
            maxlength: None,
            label_id: None,
            size: None,
            inputmode: None,
            autofocus: false,
            autocomplete: Autocomplete::Off,
        }
    }
}

impl InputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn value(mut self, value: impl Into<InputValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    pub fn minlength(mut self, minlength: u32) -> Self {
        self.minlength = Some(minlength);
        self
    }

    pub fn maxlength(mut self, maxlength: u32) -> Self {
        self.maxlength = Some(maxlength);
        self
    }

    pub fn label_id(mut self, label_id: u32) -> Self {
        self.label_id = Some(label_id);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn inputmode(mut self, inputmode: InputMode) -> Self {
        self.inputmode = Some(inputmode);
        self
    }

    pub fn autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    pub fn autocomplete(mut self, autocomplete: Autocomplete) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    // -------------------------------------------------------------------------
    // Declarative attributes
    // -------------------------------------------------------------------------

    /// Apply a string attribute, as a custom element receives it from markup.
    ///
    /// `None` removes the attribute and restores the field's default.
    /// Attribute names are case-insensitive. On error nothing is changed.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        let defaults = Self::default();
        match name.to_ascii_lowercase().as_str() {
            "type" => {
                self.input_type = value
                    .map(str::parse::<InputType>)
                    .transpose()?
                    .unwrap_or(defaults.input_type);
            }
            "value" => self.value = value.map_or(defaults.value, InputValue::from),
            "placeholder" => self.placeholder = value.unwrap_or_default().to_string(),
            "name" => self.name = value.map(str::to_string),
            "disabled" => self.disabled = parse_flag(value),
            "readonly" => self.readonly = parse_flag(value),
            "required" => self.required = parse_flag(value),
            "pattern" => self.pattern = value.map(str::to_string),
            "min" => self.min = value.map(str::to_string),
            "max" => self.max = value.map(str::to_string),
            "step" => self.step = value.map(str::to_string),
            "minlength" => self.minlength = parse_count(name, value)?,
            "maxlength" => self.maxlength = parse_count(name, value)?,
            "label-id" => self.label_id = parse_count(name, value)?,
            "size" => self.size = parse_count(name, value)?,
            "inputmode" => self.inputmode = value.map(str::parse::<InputMode>).transpose()?,
            "autofocus" => self.autofocus = parse_flag(value),
            "autocomplete" => {
                self.autocomplete = value
                    .map(str::parse::<Autocomplete>)
                    .transpose()?
                    .unwrap_or(defaults.autocomplete);
            }
            _ => return Err(AttributeError::Unknown(name.to_string())),
        }
        Ok(())
    }
}

/// Boolean attributes are true when present, unless spelled `"false"`.
fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().eq_ignore_ascii_case("false"))
}

fn parse_count(name: &str, value: Option<&str>) -> Result<Option<u32>, AttributeError> {
    value
        .map(|v| {
            v.trim().parse::<u32>().map_err(|_| AttributeError::InvalidNumber {
                name: name.to_string(),
                value: v.to_string(),
            })
        })
        .transpose()
}
