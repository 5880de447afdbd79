// File: src/keyboard.rs
use crate::core::types::TextDirection;
use serde::{Deserialize, Serialize};

/// Which language the user is currently typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyboardMode {
    Arabic,
    English,
}

/// What the host applies to the focused input and the mode indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardLayout {
    pub mode: KeyboardMode,
    pub direction: TextDirection,
    pub lang: &'static str,
    pub indicator_text: &'static str,
    pub indicator_title: &'static str,
}

impl KeyboardMode {
    pub fn layout(self) -> KeyboardLayout {
        match self {
            KeyboardMode::Arabic => KeyboardLayout {
                mode: self,
                direction: TextDirection::Rtl,
                lang: "ar",
                indicator_text: "ع",
                indicator_title: "اضغط لتغيير للإنجليزية",
            },
            KeyboardMode::English => KeyboardLayout {
                mode: self,
                direction: TextDirection::Ltr,
                lang: "en",
                indicator_text: "EN",
                indicator_title: "Click to switch to Arabic",
            },
        }
    }
}

/// Input mode of a session. Starts in Arabic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState {
    mode: KeyboardMode,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self { mode: KeyboardMode::Arabic }
    }
}

impl KeyboardState {
    pub fn new(mode: KeyboardMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    /// Flips between Arabic and English and returns the new layout.
    pub fn toggle(&mut self) -> KeyboardLayout {
        self.mode = match self.mode {
            KeyboardMode::Arabic => KeyboardMode::English,
            KeyboardMode::English => KeyboardMode::Arabic,
        };
        tracing::debug!("keyboard mode switched to {:?}", self.mode);
        self.mode.layout()
    }
}

/// Alt+Shift switches the input language.
pub fn is_toggle_shortcut(alt: bool, shift: bool) -> bool {
    alt && shift
}
