// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcut mapping for the lesson player.
//!
//! | Key        | Action                       |
//! |------------|------------------------------|
//! | Space      | play / pause                 |
//! | ArrowLeft  | skip backward                |
//! | ArrowRight | skip forward                 |
//! | F          | toggle fullscreen            |
//! | M          | toggle mute                  |
//! | Escape     | exit fullscreen (if active)  |
//!
//! Shortcuts are suppressed while focus is in a text entry element.

use std::str::FromStr;

/// A key press as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    Escape,
    Char(char),
}

impl FromStr for Key {
    type Err = String;

    /// Parses host key names (`Space`, `ArrowLeft`, `KeyF`, `f`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " | "Space" => return Ok(Self::Space),
            "ArrowLeft" | "Left" => return Ok(Self::ArrowLeft),
            "ArrowRight" | "Right" => return Ok(Self::ArrowRight),
            "Escape" | "Esc" => return Ok(Self::Escape),
            _ => {}
        }
        let code = s.strip_prefix("Key").unwrap_or(s);
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Char(c)),
            _ => Err(format!("unknown key: {s}")),
        }
    }
}

/// Element holding keyboard focus when a key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The page or a non-editable element.
    #[default]
    Page,
    TextInput,
    TextArea,
    ContentEditable,
}

impl FocusTarget {
    /// Returns true if the user is typing text.
    #[must_use]
    pub fn is_text_entry(self) -> bool {
        !matches!(self, Self::Page)
    }
}

/// Player action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePlay,
    SkipBackward,
    SkipForward,
    ToggleFullscreen,
    ToggleMute,
    ExitFullscreen,
}

impl ShortcutAction {
    /// Maps a key to its action. Letters are case-insensitive.
    #[must_use]
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Self::TogglePlay),
            Key::ArrowLeft => Some(Self::SkipBackward),
            Key::ArrowRight => Some(Self::SkipForward),
            Key::Escape => Some(Self::ExitFullscreen),
            Key::Char(c) => match c.to_ascii_lowercase() {
                'f' => Some(Self::ToggleFullscreen),
                'm' => Some(Self::ToggleMute),
                _ => None,
            },
        }
    }

    /// Whether the host should suppress the key's default behaviour
    /// (page scrolling, typing).
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::ExitFullscreen)
    }
}

/// What the player did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Shortcuts are inactive (no video lesson, or typing in a text field).
    Ignored,
    /// Menus were closed but the key has no binding.
    Unbound,
    /// The key ran a player action.
    Handled(ShortcutAction),
}

impl KeyOutcome {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        match self {
            Self::Handled(action) => action.prevents_default(),
            Self::Ignored | Self::Unbound => false,
        }
    }
}
