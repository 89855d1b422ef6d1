//! Input component - a generic wrapper around one native input element.

pub mod events;
pub mod render;
mod state;

pub use render::{render_input, INPUT_CLASS};
pub use state::UiInput;
