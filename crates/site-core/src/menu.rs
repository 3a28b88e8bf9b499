/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    #[inline]
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[inline]
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A document click closes the menu only when it lands outside both the
    /// menu and the hamburger button while the menu is open.
    #[inline]
    pub fn closes_on_click(&self, inside_menu: bool, on_hamburger: bool) -> bool {
        self.open && !inside_menu && !on_hamburger
    }
}
