//! Scroll-reactive navbar.

use crate::config::NavbarConfig;

pub const TRANSFORM_SHOWN: &str = "translateY(0)";
pub const TRANSFORM_HIDDEN: &str = "translateY(-100%)";

/// What the navbar should look like after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarLook {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarLook {
    pub fn transform(self) -> &'static str {
        if self.hidden {
            TRANSFORM_HIDDEN
        } else {
            TRANSFORM_SHOWN
        }
    }
}

/// Remembers only the previous offset; everything else is recomputed.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn observe(&mut self, offset: f64, cfg: &NavbarConfig) -> NavbarLook {
        // Overscroll bounce reports negative offsets.
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        let scrolling_down = offset > self.last_offset;
        self.last_offset = offset;
        NavbarLook {
            scrolled: offset > cfg.scrolled_after,
            hidden: scrolling_down && offset > cfg.hide_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reacts_to_offset_sequence() {
        let cfg = NavbarConfig::default();
        let mut t = ScrollTracker::new();

        let look = t.observe(0.0, &cfg);
        assert!(!look.scrolled && !look.hidden);

        let look = t.observe(60.0, &cfg);
        assert!(look.scrolled);
        assert!(!look.hidden);

        let look = t.observe(150.0, &cfg);
        assert!(look.scrolled);
        assert!(look.hidden);
        assert_eq!(look.transform(), TRANSFORM_HIDDEN);

        let look = t.observe(80.0, &cfg);
        assert!(look.scrolled);
        assert!(!look.hidden);
        assert_eq!(look.transform(), TRANSFORM_SHOWN);
    }

    #[test]
    fn thresholds_are_strict() {
        let cfg = NavbarConfig::default();
        let mut t = ScrollTracker::new();
        assert!(!t.observe(50.0, &cfg).scrolled);
        assert!(!t.observe(100.0, &cfg).hidden);
        assert!(t.observe(101.0, &cfg).hidden);
        // Same offset again is not "scrolling down".
        assert!(!t.observe(101.0, &cfg).hidden);
    }

    #[test]
    fn negative_offsets_count_as_top() {
        let cfg = NavbarConfig::default();
        let mut t = ScrollTracker::new();
        let look = t.observe(-40.0, &cfg);
        assert!(!look.scrolled && !look.hidden);
        assert_eq!(t.last_offset(), 0.0);
    }
}
