use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// Represents the result of handling a key event while browsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Show the folder prompt
    OpenFolder,
    /// Move button focus down
    FocusNext,
    /// Move button focus up
    FocusPrevious,
    /// Press the focused button
    Activate,
    /// Toggle help overlay
    Help,
    /// A printable character, candidate for a bucket hotkey
    Select(char),
    /// No action
    None,
}

/// Represents the result of handling a key event inside the folder prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Insert(char),
    Backspace,
    Clear,
    Submit,
    Cancel,
    None,
}

/// Maps keyboard events to actions.
///
/// Every printable character without Ctrl/Alt is left for bucket hotkeys, so
/// application commands live on control chords and special keys.
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    match (key.code, key.modifiers) {
        // Quit: Esc, Ctrl+C or Ctrl+Q
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => KeyAction::Quit,

        (KeyCode::Char('o'), KeyModifiers::CONTROL) => KeyAction::OpenFolder,

        // Button focus
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::FocusNext,
        (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::FocusNext,
        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::FocusPrevious,
        (KeyCode::BackTab, _) => KeyAction::FocusPrevious,
        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Activate,

        (KeyCode::F(1), KeyModifiers::NONE) => KeyAction::Help,

        (KeyCode::Char(c), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::Select(typed_char(c, key.state))
        }

        _ => KeyAction::None,
    }
}

/// Maps keyboard events inside the folder prompt
pub fn handle_prompt_input(key: KeyEvent) -> PromptAction {
    if key.kind == KeyEventKind::Release {
        return PromptAction::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => PromptAction::Submit,
        (KeyCode::Esc, _) => PromptAction::Cancel,
        (KeyCode::Backspace, _) => PromptAction::Backspace,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => PromptAction::Clear,
        (KeyCode::Char(c), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            PromptAction::Insert(typed_char(c, key.state))
        }
        _ => PromptAction::None,
    }
}

/// True for presses of a bare modifier or lock key.
///
/// Terminals reporting all keys as escape codes send these on their own.
pub fn is_modifier_only(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Modifier(_) | KeyCode::CapsLock | KeyCode::NumLock | KeyCode::ScrollLock
    )
}

/// The character the key produces once caps lock is applied.
///
/// Terminals using the keyboard enhancement protocol report the base key plus
/// a caps-lock flag instead of the already-cased character.
fn typed_char(c: char, state: KeyEventState) -> char {
    if !state.contains(KeyEventState::CAPS_LOCK) || !c.is_alphabetic() {
        return c;
    }

    let swapped: Vec<char> = if c.is_lowercase() {
        c.to_uppercase().collect()
    } else {
        c.to_lowercase().collect()
    };
    match swapped.as_slice() {
        [single] => *single,
        _ => c,
    }
}
