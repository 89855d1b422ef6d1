/// Native events produced by a [`NativeInput`](crate::NativeInput).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The value was edited by the user.
    Input(InputEvent),
    /// The element gained focus.
    Focus(FocusEvent),
    /// The element lost focus.
    Blur(FocusEvent),
    /// A key was pressed while the element was focused.
    KeyDown(KeyboardEvent),
}

impl Event {
    /// The DOM event type name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Focus(_) => "focus",
            Self::Blur(_) => "blur",
            Self::KeyDown(_) => "keydown",
        }
    }
}

/// A user edit of the element's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// The element's value after the edit.
    pub value: String,
    /// The inserted text, if the edit inserted any.
    pub data: Option<String>,
    /// What kind of edit happened.
    pub input_type: EditKind,
}

/// Edit kinds, a subset of the DOM `inputType` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertText,
    InsertReplacementText,
    DeleteContentBackward,
}

impl EditKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsertText => "insertText",
            Self::InsertReplacementText => "insertReplacementText",
            Self::DeleteContentBackward => "deleteContentBackward",
        }
    }
}

/// Focus transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusEvent {
    /// The element focus moved to or came from, when the host knows it.
    pub related_target: Option<String>,
}

/// Key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub repeat: bool,
}

impl KeyboardEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            repeat: false,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// A key with no mapping, the DOM's `"Unidentified"`.
    Unidentified,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

// Conversion from crossterm types, for terminal hosts
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unidentified,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyboardEvent {
    fn from(ev: crossterm::event::KeyEvent) -> Self {
        Self {
            key: ev.code.into(),
            modifiers: ev.modifiers.into(),
            repeat: ev.kind == crossterm::event::KeyEventKind::Repeat,
        }
    }
}
