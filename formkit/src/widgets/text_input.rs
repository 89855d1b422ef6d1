//! Text input component - a generic input pinned to the `text` type.

use formdom::{Element, Event, FocusEvent, InputEvent, InputType, Key, KeyboardEvent, Modifiers};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::component::Component;
use crate::config::InputConfig;
use crate::emitter::SubscriptionId;
use crate::events::{ChangeDetail, EventResult, UiInputEvent};
use crate::value::InputValue;

use super::input::UiInput;

/// A single-line text input with no configuration of its own.
///
/// Renders a `ui-input` host of type `text` around the inner input's native
/// element. Events, interaction and validation are delegated to the inner
/// [`UiInput`], which is only reachable read-only so the type stays pinned.
#[derive(Debug)]
pub struct UiTextInput {
    inner: UiInput,
}

impl Default for UiTextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UiTextInput {
    pub fn new() -> Self {
        Self {
            inner: UiInput::from_config(InputConfig::default().input_type(InputType::Text)),
        }
    }

    /// The wrapped generic input.
    pub fn input(&self) -> &UiInput {
        &self.inner
    }

    pub fn value(&self) -> &InputValue {
        self.inner.value()
    }

    // Subscriptions
    pub fn on_input<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        self.inner.on_input(f)
    }

    pub fn on_change<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&ChangeDetail) + Send + Sync + 'static,
    {
        self.inner.on_change(f)
    }

    pub fn on_blur<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.inner.on_blur(f)
    }

    pub fn on_focus<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.inner.on_focus(f)
    }

    pub fn on_keydown<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&KeyboardEvent) + Send + Sync + 'static,
    {
        self.inner.on_keydown(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<UiInputEvent> {
        self.inner.subscribe()
    }

    // Host interaction
    pub fn user_input(&mut self, text: &str) -> EventResult {
        self.inner.user_input(text)
    }

    pub fn type_text(&mut self, text: &str) -> EventResult {
        self.inner.type_text(text)
    }

    pub fn press_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        self.inner.press_key(key, modifiers)
    }

    pub fn focus(&mut self) -> EventResult {
        self.inner.focus()
    }

    pub fn blur(&mut self) -> EventResult {
        self.inner.blur()
    }

    pub async fn report_validity(&mut self) -> bool {
        self.inner.report_validity().await
    }
}

impl Component for UiTextInput {
    fn tag(&self) -> &'static str {
        "ui-text-input"
    }

    fn render(&self) -> Element {
        Element::new(self.inner.tag())
            .attr("type", InputType::Text.as_str())
            .child(self.inner.render())
    }

    fn dispatch(&mut self, event: Event) -> EventResult {
        self.inner.dispatch(event)
    }
}
