//! Event handling for the Input component.

use formdom::{Element, Event, FocusEvent, InputEvent, Key, KeyboardEvent, Modifiers, ValidityState};
use log::trace;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::component::Component;
use crate::emitter::SubscriptionId;
use crate::events::{ChangeDetail, EventResult, UiInputEvent};
use crate::value::InputValue;

use super::render::render_input;
use super::UiInput;

impl UiInput {
    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Called on every native input event with that event.
    pub fn on_input<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        self.emitters.input.subscribe(f)
    }

    /// Called once per value change with the new value.
    pub fn on_change<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&ChangeDetail) + Send + Sync + 'static,
    {
        self.emitters.change.subscribe(f)
    }

    pub fn on_blur<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.emitters.blur.subscribe(f)
    }

    pub fn on_focus<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.emitters.focus.subscribe(f)
    }

    pub fn on_keydown<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&KeyboardEvent) + Send + Sync + 'static,
    {
        self.emitters.keydown.subscribe(f)
    }

    /// Remove a callback registered with any `on_*` method.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let e = &mut self.emitters;
        e.input.unsubscribe(id)
            || e.change.unsubscribe(id)
            || e.blur.unsubscribe(id)
            || e.focus.unsubscribe(id)
            || e.keydown.unsubscribe(id)
    }

    /// Receive every notification this input emits, in emission order.
    ///
    /// Dropping the receiver ends the subscription.
    pub fn subscribe(&mut self) -> UnboundedReceiver<UiInputEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.outbound.push(tx);
        rx
    }

    pub(super) fn emit(&mut self, event: UiInputEvent) {
        trace!("UiInput: emit {}", event.name());
        match &event {
            UiInputEvent::Input(ev) => self.emitters.input.emit(ev),
            UiInputEvent::Change(detail) => self.emitters.change.emit(detail),
            UiInputEvent::Blur(ev) => self.emitters.blur.emit(ev),
            UiInputEvent::Focus(ev) => self.emitters.focus.emit(ev),
            UiInputEvent::KeyDown(ev) => self.emitters.keydown.emit(ev),
        }
        self.outbound.retain(|tx| tx.send(event.clone()).is_ok());
    }

    // -------------------------------------------------------------------------
    // Native event handlers
    // -------------------------------------------------------------------------

    /// Relay the input event, then take the native element's value.
    fn handle_input(&mut self, ev: InputEvent) -> EventResult {
        self.emit(UiInputEvent::Input(ev));
        let current = self.native.value().to_string();
        if self.set_value(InputValue::Text(current)) {
            EventResult::Changed
        } else {
            EventResult::Handled
        }
    }

    fn handle_blur(&mut self, ev: FocusEvent) -> EventResult {
        self.emit(UiInputEvent::Blur(ev));
        EventResult::Handled
    }

    fn handle_focus(&mut self, ev: FocusEvent) -> EventResult {
        self.emit(UiInputEvent::Focus(ev));
        EventResult::Handled
    }

    fn handle_keydown(&mut self, ev: KeyboardEvent) -> EventResult {
        self.emit(UiInputEvent::KeyDown(ev));
        EventResult::Handled
    }

    // -------------------------------------------------------------------------
    // Host interaction
    // -------------------------------------------------------------------------

    /// Replace the value as the user would, firing the resulting events.
    pub fn user_input(&mut self, text: &str) -> EventResult {
        match self.native.set_user_value(text) {
            Some(ev) => self.dispatch(ev),
            None => EventResult::Ignored,
        }
    }

    /// Type text at the end of the value, firing the resulting events.
    pub fn type_text(&mut self, text: &str) -> EventResult {
        match self.native.type_text(text) {
            Some(ev) => self.dispatch(ev),
            None => EventResult::Ignored,
        }
    }

    /// Press a key on the native element.
    ///
    /// Returns the most significant result among the events it fired.
    pub fn press_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        let events = self.native.press_key(key, modifiers);
        events
            .into_iter()
            .map(|ev| self.dispatch(ev))
            .fold(EventResult::Ignored, |acc, r| match (acc, r) {
                (EventResult::Changed, _) | (_, EventResult::Changed) => EventResult::Changed,
                (EventResult::Handled, _) | (_, EventResult::Handled) => EventResult::Handled,
                _ => EventResult::Ignored,
            })
    }

    pub fn focus(&mut self) -> EventResult {
        match self.native.focus() {
            Some(ev) => self.dispatch(ev),
            None => EventResult::Ignored,
        }
    }

    pub fn blur(&mut self) -> EventResult {
        match self.native.blur() {
            Some(ev) => self.dispatch(ev),
            None => EventResult::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Check validity and show the native validation message if invalid.
    pub async fn report_validity(&mut self) -> bool {
        self.native.report_validity()
    }

    /// Check validity without showing a message.
    pub fn check_validity(&self) -> bool {
        self.native.check_validity()
    }

    pub fn validity(&self) -> ValidityState {
        self.native.validity()
    }

    pub fn validation_message(&self) -> String {
        self.native.validation_message()
    }
}

impl Component for UiInput {
    fn tag(&self) -> &'static str {
        "ui-input"
    }

    fn render(&self) -> Element {
        render_input(&self.config)
    }

    fn dispatch(&mut self, event: Event) -> EventResult {
        trace!("UiInput: native {}", event.name());
        match event {
            Event::Input(ev) => self.handle_input(ev),
            Event::Blur(ev) => self.handle_blur(ev),
            Event::Focus(ev) => self.handle_focus(ev),
            Event::KeyDown(ev) => self.handle_keydown(ev),
        }
    }
}
