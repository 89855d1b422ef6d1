//! Component trait for form components.
//!
//! Components are stateful elements that:
//! - Render a formdom [`Element`] from their current fields
//! - Receive native events from the element they own
//! - Report what happened via [`EventResult`]
//!
//! Rendering is explicit: `render()` recomputes the whole element every time
//! and the component patches its native element from the result. There is
//! no hidden attribute binding.

use formdom::{Element, Event};

use crate::events::EventResult;

/// Trait for form components.
///
/// # Example
///
/// ```ignore
/// impl Component for UiTextInput {
///     fn tag(&self) -> &'static str {
///         "ui-text-input"
///     }
///
///     fn render(&self) -> Element {
///         Element::new("ui-input").attr("type", "text").child(self.inner.render())
///     }
///
///     fn dispatch(&mut self, event: Event) -> EventResult {
///         self.inner.dispatch(event)
///     }
/// }
/// ```
pub trait Component {
    /// The custom element tag this component is registered under.
    fn tag(&self) -> &'static str;

    /// Render the component's content from its current state.
    fn render(&self) -> Element;

    /// Handle a native event fired by an element this component owns.
    fn dispatch(&mut self, event: Event) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    /// The host element wrapping the rendered content.
    fn host(&self) -> Element {
        Element::new(self.tag()).child(self.render())
    }

    /// Serialize the host element and its content as markup.
    fn to_html(&self) -> String {
        self.host().to_html()
    }
}
