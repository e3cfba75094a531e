//! Show/hide toggles: the search bar and the mobile navigation menu.

/// Header search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBar {
    open: bool,
}

impl SearchBar {
    /// Flip visibility. Returns `true` when the bar just opened and the
    /// search input should take focus.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Flip the menu open state.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_focus_only_when_opening() {
        let mut bar = SearchBar::default();
        assert!(bar.toggle());
        assert!(bar.is_open());
        assert!(!bar.toggle());
        assert!(!bar.is_open());
    }

    #[test]
    fn test_nav_toggle() {
        let mut nav = NavMenu::default();
        nav.toggle();
        assert!(nav.is_open());
        nav.toggle();
        assert!(!nav.is_open());
    }
}
