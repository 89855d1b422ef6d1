//! Rendering for the Input component.

use formdom::Element;

use crate::config::InputConfig;

/// Class carried by every rendered native input, for styling hooks.
pub const INPUT_CLASS: &str = "dom-input";

/// Render the native input element for a configuration.
///
/// Each field maps onto the attribute of the same meaning with no
/// transformation, except that numeric values are stringified and absent
/// values (unset or null) leave the `value` attribute off.
pub fn render_input(config: &InputConfig) -> Element {
    Element::input()
        .class(INPUT_CLASS)
        .attr("type", config.input_type.as_str())
        .attr_opt("value", config.value.as_string())
        .attr("placeholder", config.placeholder.as_str())
        .attr_opt("name", config.name.as_deref())
        .flag("disabled", config.disabled)
        .flag("readonly", config.readonly)
        .flag("required", config.required)
        .attr_opt("pattern", config.pattern.as_deref())
        .attr_opt("min", config.min.as_deref())
        .attr_opt("max", config.max.as_deref())
        .attr_opt("step", config.step.as_deref())
        .attr_opt("minlength", config.minlength)
        .attr_opt("maxlength", config.maxlength)
        .attr_opt("aria-labelledby", config.label_id)
        .attr_opt("size", config.size)
        .attr_opt("inputmode", config.inputmode.map(|m| m.as_str()))
        .flag("autofocus", config.autofocus)
        .attr("autocomplete", config.autocomplete.as_str())
}
