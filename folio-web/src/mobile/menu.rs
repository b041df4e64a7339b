//! Hamburger menu open/closed state

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close if open; `true` when something changed
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
