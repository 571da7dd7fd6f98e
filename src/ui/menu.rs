//! Mobile menu state

/// Where a click landed, relative to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuClick {
    /// The hamburger button
    Trigger,
    /// A link inside the menu
    Link,
    /// Inside the menu but not on a link
    Inside,
    /// Anywhere else on the page
    Outside,
}

/// Open/closed state of the navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply a click and return the resulting open state
    pub fn handle_click(&mut self, click: MenuClick) -> bool {
        match click {
            MenuClick::Trigger => self.toggle(),
            MenuClick::Link | MenuClick::Outside => self.close(),
            MenuClick::Inside => {}
        }
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_toggles() {
        let mut menu = MenuState::new();
        assert!(!menu.is_open());
        assert!(menu.handle_click(MenuClick::Trigger));
        assert!(!menu.handle_click(MenuClick::Trigger));
    }

    #[test]
    fn test_link_and_outside_clicks_close() {
        let mut menu = MenuState::new();
        menu.handle_click(MenuClick::Trigger);
        assert!(!menu.handle_click(MenuClick::Link));

        menu.handle_click(MenuClick::Trigger);
        assert!(menu.handle_click(MenuClick::Inside));
        assert!(!menu.handle_click(MenuClick::Outside));
    }
}
