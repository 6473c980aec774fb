//! Generic input event types for cross-backend compatibility.

/// Generic key representation.
///
/// Backends map their native key codes to these values; keybindings match
/// against [`Key::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    Escape,
    Return,
    Backspace,
    Tab,
    Space,
    /// Shift modifier, also locks the active resize
    Shift,
    Ctrl,
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as written in keybindings and replay scripts.
    pub fn from_name(name: &str) -> Key {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c {
                ' ' => Key::Space,
                c => Key::Char(c.to_ascii_uppercase()),
            };
        }
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            _ => Key::Unknown,
        }
    }

    /// Name used for keybinding lookup, or `None` for modifiers and unknown keys.
    pub fn name(self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_uppercase().collect()),
            Key::Escape => "Escape",
            Key::Return => "Return",
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::Space => "Space",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parsing() {
        for key in [Key::Char('G'), Key::Escape, Key::Space, Key::Return] {
            let name = key.name().unwrap();
            assert_eq!(Key::from_name(&name), key);
        }
        assert_eq!(Key::from_name("g"), Key::Char('G'));
        assert_eq!(Key::from_name("esc"), Key::Escape);
        assert_eq!(Key::from_name("Shift"), Key::Shift);
        assert_eq!(Key::from_name("F13"), Key::Unknown);
        assert_eq!(Key::Shift.name(), None);
    }
}
