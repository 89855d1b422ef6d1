//! Constraint validation for native inputs.
//!
//! Mirrors the HTML constraint validation model: a set of validity flags
//! computed from the element's attributes and its current value, plus the
//! user-facing message a browser would show for the first failing flag.

use std::cmp::Ordering;

use log::warn;
use regex::Regex;

use crate::element::Element;
use crate::temporal::{parse_float, parse_temporal};
use crate::types::InputType;

/// Relative tolerance when checking step alignment of floating point values.
const STEP_EPSILON: f64 = 1e-9;

/// Result of validating an input's value against its constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub step_mismatch: bool,
}

impl ValidityState {
    /// True when no constraint is violated.
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short
            || self.range_underflow
            || self.range_overflow
            || self.step_mismatch)
    }
}

/// The constraints an input element carries, resolved from its attributes.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub input_type: InputType,
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub pattern: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    pub minlength: Option<usize>,
    pub maxlength: Option<usize>,
}

impl Constraints {
    /// Resolve constraints from an element's attributes.
    ///
    /// Unparsable numeric attributes are treated as absent, as browsers do.
    pub fn from_element(el: &Element) -> Self {
        let length = |name: &str| el.get_attr(name).and_then(|v| v.trim().parse::<usize>().ok());
        Self {
            input_type: InputType::from_attr(el.get_attr("type")),
            disabled: el.has_attr("disabled"),
            readonly: el.has_attr("readonly"),
            required: el.has_attr("required"),
            pattern: el.get_attr("pattern").map(str::to_string),
            min: el.get_attr("min").map(str::to_string),
            max: el.get_attr("max").map(str::to_string),
            step: el.get_attr("step").map(str::to_string),
            minlength: length("minlength"),
            maxlength: length("maxlength"),
        }
    }

    /// Disabled and readonly inputs never take part in validation.
    pub fn barred(&self) -> bool {
        self.disabled || self.readonly
    }

    /// Check a value against these constraints.
    ///
    /// `user_edited` is true when the value was last changed by the user;
    /// length constraints only apply to user edits.
    pub fn check(&self, value: &str, user_edited: bool) -> ValidityState {
        let mut state = ValidityState::default();
        if self.barred() {
            return state;
        }

        let ty = self.input_type;
        state.value_missing = self.required && value.is_empty();

        if value.is_empty() {
            return state;
        }

        state.type_mismatch = match ty {
            InputType::Email => !email_address::EmailAddress::is_valid(value),
            InputType::Url => url::Url::parse(value).is_err(),
            _ => false,
        };

        if ty.is_textual() {
            state.pattern_mismatch = self.pattern_mismatch(value);

            if user_edited {
                let len = utf16_len(value);
                state.too_long = self.maxlength.is_some_and(|max| len > max);
                state.too_short = self.minlength.is_some_and(|min| len < min);
            }
        }

        if ty.has_range() {
            state.range_underflow = self
                .compare_bound(value, self.min.as_deref())
                .is_some_and(|o| o == Ordering::Less);
            state.range_overflow = self
                .compare_bound(value, self.max.as_deref())
                .is_some_and(|o| o == Ordering::Greater);
        }

        if ty == InputType::Number {
            state.step_mismatch = self.step_mismatch(value);
        }

        state
    }

    /// The message a browser shows for the first violated constraint.
    ///
    /// Empty when the state is valid.
    pub fn message(&self, state: &ValidityState, value: &str) -> String {
        if state.value_missing {
            return "Please fill out this field.".to_string();
        }
        if state.type_mismatch {
            return match self.input_type {
                InputType::Email => "Please enter an email address.".to_string(),
                _ => "Please enter a URL.".to_string(),
            };
        }
        if state.pattern_mismatch {
            return "Please match the requested format.".to_string();
        }
        if state.too_long {
            return format!(
                "Please shorten this text to {} characters or less (you are currently using {} characters).",
                self.maxlength.unwrap_or_default(),
                utf16_len(value)
            );
        }
        if state.too_short {
            return format!(
                "Please lengthen this text to {} characters or more (you are currently using {} characters).",
                self.minlength.unwrap_or_default(),
                utf16_len(value)
            );
        }
        if state.range_underflow {
            return format!(
                "Value must be greater than or equal to {}.",
                self.min.as_deref().unwrap_or_default()
            );
        }
        if state.range_overflow {
            return format!(
                "Value must be less than or equal to {}.",
                self.max.as_deref().unwrap_or_default()
            );
        }
        if state.step_mismatch {
            return "Please enter a valid value.".to_string();
        }
        String::new()
    }

    fn pattern_mismatch(&self, value: &str) -> bool {
        let Some(pattern) = self.pattern.as_deref() else {
            return false;
        };
        match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(re) => !re.is_match(value),
            Err(e) => {
                warn!("Ignoring invalid pattern {pattern:?}: {e}");
                false
            }
        }
    }

    /// Compare a value with a `min`/`max` bound. `None` when either side
    /// does not parse for this input type.
    fn compare_bound(&self, value: &str, bound: Option<&str>) -> Option<Ordering> {
        let bound = bound?;
        if self.input_type == InputType::Number {
            parse_float(value)?.partial_cmp(&parse_float(bound)?)
        } else {
            let ty = self.input_type;
            Some(parse_temporal(ty, value)?.cmp(&parse_temporal(ty, bound)?))
        }
    }

    fn step_mismatch(&self, value: &str) -> bool {
        let Some(v) = parse_float(value) else {
            return false;
        };
        let step = match self.step.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("any") => return false,
            Some(s) => parse_float(s).filter(|s| *s > 0.0).unwrap_or(1.0),
            None => 1.0,
        };
        let base = self.min.as_deref().and_then(parse_float).unwrap_or(0.0);
        let steps = (v - base) / step;
        (steps - steps.round()).abs() > STEP_EPSILON * steps.abs().max(1.0)
    }
}

/// Length in UTF-16 code units, the unit HTML length constraints count in.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}
