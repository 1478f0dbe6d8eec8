//! Navigation drawer visibility.

/// Drawer slice of the app store. The backdrop follows the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DrawerState {
    /// Whether the panel and backdrop are shown.
    pub open: bool,
}

impl DrawerState {
    /// Show the panel and backdrop.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Hide the panel and backdrop.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Handle a document-level key press; returns true when it closed the drawer.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }

    /// Whether the backdrop is visible.
    #[must_use]
    pub const fn backdrop_visible(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::DrawerState;

    #[test]
    fn open_and_close_are_idempotent() {
        let mut drawer = DrawerState::default();
        drawer.open();
        drawer.open();
        assert!(drawer.open && drawer.backdrop_visible());
        drawer.close();
        drawer.close();
        assert!(!drawer.open && !drawer.backdrop_visible());
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let mut drawer = DrawerState::default();
        drawer.open();
        assert!(!drawer.on_key("Enter"));
        assert!(drawer.open);
        assert!(drawer.on_key("Escape"));
        assert!(!drawer.open);
        assert!(!drawer.on_key("Escape"));
    }
}
