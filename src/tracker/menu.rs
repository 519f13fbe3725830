/// Open/closed flag of the mobile navigation menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        log::debug!("menu {}", if self.open { "opened" } else { "closed" });
        self.open
    }

    /// A navigation link was activated.
    pub fn navigate(&mut self) {
        if self.open {
            log::debug!("menu closed by navigation");
        }
        self.open = false;
    }
}
