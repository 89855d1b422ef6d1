//! # formkit
//!
//! Form input components built on [`formdom`].
//!
//! - [`UiInput`](widgets::UiInput): generic input forwarding its properties
//!   to a native input and relaying its events
//! - [`UiTextInput`](widgets::UiTextInput): text-only specialisation
//!
//! Components render explicitly (see [`component::Component`]) and emit
//! `input`, `change`, `blur`, `focus` and `keydown` notifications through
//! callbacks or an outbound channel.

pub mod component;
pub mod config;
pub mod emitter;
pub mod error;
pub mod events;
pub mod value;
pub mod widgets;

pub use formdom;

pub use error::AttributeError;

pub mod prelude {
    pub use crate::component::Component;
    pub use crate::config::InputConfig;
    pub use crate::emitter::SubscriptionId;
    pub use crate::error::AttributeError;
    pub use crate::events::{ChangeDetail, EventResult, UiInputEvent};
    pub use crate::value::{number_to_string, InputValue};
    pub use crate::widgets::{UiInput, UiTextInput};

    pub use formdom::{Autocomplete, Event, InputMode, InputType, Key, Modifiers};
}
