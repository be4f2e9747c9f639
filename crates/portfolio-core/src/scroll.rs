use crate::constants::SCROLL_THRESHOLD_PX;

pub const NAV_BASE_CLASS: &str = "fixed w-full z-50 transition-all duration-300 py-4";
pub const NAV_TRANSPARENT_CLASS: &str = "bg-transparent";
pub const NAV_SCROLLED_CLASS: &str = "bg-black/30";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_scrolled: bool,
}

impl ScrollState {
    /// Background class for the navigation bar in this state.
    #[inline]
    pub fn nav_background(&self) -> &'static str {
        if self.is_scrolled {
            NAV_SCROLLED_CLASS
        } else {
            NAV_TRANSPARENT_CLASS
        }
    }

    pub fn nav_class(&self) -> String {
        format!("{} {}", NAV_BASE_CLASS, self.nav_background())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub state: ScrollState,
    pub changed: bool,
}

#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// The offset alone decides the state; there is no hysteresis band.
    pub fn on_scroll(&mut self, offset: f64) -> ScrollUpdate {
        let next = ScrollState {
            is_scrolled: offset > SCROLL_THRESHOLD_PX,
        };
        let changed = next != self.state;
        self.state = next;
        ScrollUpdate {
            state: next,
            changed,
        }
    }
}
