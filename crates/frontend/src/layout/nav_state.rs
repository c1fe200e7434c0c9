//! Navigation bar state machine.
//!
//! Pure in-memory state; the component layer feeds it scroll offsets and
//! drawer events and renders from the resulting flags. No transition here
//! can fail.

/// Scroll offset (CSS px) past which the bar switches from transparent to
/// opaque treatment.
pub const SCROLL_OPAQUE_THRESHOLD_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    /// True only while the compact-layout drawer is displayed.
    pub drawer_open: bool,
    /// True iff the vertical scroll offset exceeds the threshold.
    pub scrolled: bool,
}

impl NavState {
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// No-op when the drawer is already closed.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_OPAQUE_THRESHOLD_PX;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Primary navigation items, in display order. Paths are unique, so at most
/// one item is active for any route.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        path: "/",
    },
    NavItem {
        label: "About",
        path: "/about",
    },
    NavItem {
        label: "Community",
        path: "/community",
    },
    NavItem {
        label: "Organizers",
        path: "/organizers",
    },
];

/// Exact path equality; no prefix matching.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_sequence() {
        let mut state = NavState::default();
        let mut flags = Vec::new();
        for offset in [0.0, 15.0, 25.0, 10.0] {
            state.set_scroll_offset(offset);
            flags.push(state.scrolled);
        }
        assert_eq!(flags, [false, false, true, false]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut state = NavState::default();
        state.set_scroll_offset(SCROLL_OPAQUE_THRESHOLD_PX);
        assert!(!state.scrolled);
        state.set_scroll_offset(SCROLL_OPAQUE_THRESHOLD_PX + 0.1);
        assert!(state.scrolled);
    }

    #[test]
    fn test_drawer_transitions() {
        let mut state = NavState::default();
        assert!(!state.drawer_open);
        state.open_drawer();
        assert!(state.drawer_open);
        state.close_drawer();
        assert!(!state.drawer_open);
        // closing again is a no-op
        state.close_drawer();
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_drawer_independent_of_scroll() {
        let mut state = NavState::default();
        state.open_drawer();
        state.set_scroll_offset(100.0);
        assert!(state.drawer_open);
        assert!(state.scrolled);
    }

    #[test]
    fn test_exactly_one_active_item() {
        let current = "/about";
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| is_active(current, item.path))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, "/about");
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(is_active("/about", "/about"));
        assert!(!is_active("/about/team", "/about"));
        assert!(!is_active("/", "/about"));
        assert!(!is_active("/community", "/"));
    }
}
