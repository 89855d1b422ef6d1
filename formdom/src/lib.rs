//! # formdom
//!
//! Headless model of native form input elements.
//!
//! - [`Element`]: a virtual element tree that renders to markup
//! - [`NativeInput`]: a live `<input>` owning its attributes, value, focus and
//!   constraint validation
//! - [`Event`]: the native events an input produces when a host drives it
//!
//! Nothing here depends on a browser. Hosts (tests, a terminal loop, a wasm
//! shim) feed interactions into [`NativeInput`] and receive [`Event`]s back.

pub mod element;
pub mod error;
pub mod event;
pub mod input;
pub mod sanitize;
pub mod temporal;
pub mod types;
pub mod validity;

pub use element::{find_all_by_tag, find_by_tag, find_element, Element};
pub use error::ParseError;
pub use event::{EditKind, Event, FocusEvent, InputEvent, Key, KeyboardEvent, Modifiers};
pub use input::NativeInput;
pub use types::*;
pub use validity::{Constraints, ValidityState};
