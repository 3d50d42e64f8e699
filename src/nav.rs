//! Open/closed state of the mobile navigation menu.
//!
//! The menu's `active` class and the body scroll lock are both derived from
//! the single `open` flag, so they cannot disagree.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    open: bool,
}

/// Something that can open or close the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTrigger {
    ToggleClicked,
    LinkClicked,
    /// A click that landed outside both the menu panel and the toggle control.
    OutsideClicked,
    Escape,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn scroll_locked(self) -> bool {
        self.open
    }

    pub fn body_overflow(self) -> &'static str {
        overflow_for(self.open)
    }

    /// Applies a trigger. Returns the new open state if it changed.
    pub fn apply(&mut self, trigger: NavTrigger) -> Option<bool> {
        let next = match trigger {
            NavTrigger::ToggleClicked => !self.open,
            NavTrigger::LinkClicked | NavTrigger::OutsideClicked | NavTrigger::Escape => false,
        };
        if next == self.open {
            return None;
        }
        self.open = next;
        Some(next)
    }
}

/// Value for the body's `overflow` style; empty clears the inline property.
pub fn overflow_for(open: bool) -> &'static str {
    if open {
        "hidden"
    } else {
        ""
    }
}
