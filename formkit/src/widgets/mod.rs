//! Built-in form components.
//!
//! Each component owns its configuration and the native elements it renders
//! to, and implements [`Component`](crate::component::Component).

pub mod input;
pub mod text_input;

pub use input::UiInput;
pub use text_input::UiTextInput;
