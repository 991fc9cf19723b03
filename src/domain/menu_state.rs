use serde::{Deserialize, Serialize};

use crate::shared::constants::{DISPLAY_BLOCK, DISPLAY_NONE};

/// Toggle state of the menu, encoded in the DOM by the marker class on the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Derive the state from the presence of the marker class
    pub fn from_marker(marked: bool) -> Self {
        if marked {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Panel display that matches this state
    pub fn display(self) -> Display {
        match self {
            MenuState::Open => Display::Block,
            MenuState::Closed => Display::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

impl std::fmt::Display for MenuState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inline display value written to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => DISPLAY_BLOCK,
            Display::None => DISPLAY_NONE,
        }
    }
}
