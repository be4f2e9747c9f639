use crate::constants::{MENU_ICON_CLOSE_PATH, MENU_ICON_OPEN_PATH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The toggle button was activated.
    Toggle,
    /// A navigation link was followed.
    Navigate,
}

impl MenuState {
    #[must_use]
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::Navigate) => MenuState::Closed,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// SVG path for the toggle button: a cross while open, a hamburger otherwise.
    #[inline]
    pub fn icon_path(self) -> &'static str {
        match self {
            MenuState::Open => MENU_ICON_CLOSE_PATH,
            MenuState::Closed => MENU_ICON_OPEN_PATH,
        }
    }

    #[inline]
    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Open => "Close menu",
            MenuState::Closed => "Open menu",
        }
    }
}
