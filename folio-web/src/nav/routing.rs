//! Input routing - gestures, link clicks, history and logo into `goto_section`

use super::chrome::Chrome;
use super::direction::Direction;
use super::navigator::Navigator;
use super::sections::strip_hash;
use super::transition::Transition;

/// Discrete intent produced by the gesture observer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Scroll/swipe toward the next section
    Forward,
    /// Scroll/swipe toward the previous section
    Back,
}

impl Navigator {
    /// Step to the neighbouring section; ignored at either end
    pub fn on_gesture<C: Chrome + ?Sized>(
        &mut self,
        gesture: Gesture,
        chrome: &mut C,
    ) -> Option<Transition> {
        if self.is_animating() {
            return None;
        }
        let current = self.current_index();
        match gesture {
            Gesture::Forward => self.goto_section(current + 1, Direction::Down, chrome),
            Gesture::Back => {
                let target = current.checked_sub(1)?;
                self.goto_section(target, Direction::Up, chrome)
            }
        }
    }

    /// Nav link click with the link's raw `href`
    ///
    /// Unknown targets and the current section are no-ops.
    pub fn on_link<C: Chrome + ?Sized>(
        &mut self,
        href: Option<&str>,
        chrome: &mut C,
    ) -> Option<Transition> {
        let target = self.sections().index_of(strip_hash(href?))?;
        self.goto_index(target, chrome)
    }

    /// Back/forward navigation: follow whatever fragment the browser now shows
    pub fn on_history<C: Chrome + ?Sized>(&mut self, chrome: &mut C) -> Option<Transition> {
        let target = self.sections().resolve_fragment(&chrome.fragment());
        if self.is_animating() {
            return None;
        }
        self.goto_index(target, chrome)
    }

    /// Logo click goes home
    pub fn on_logo<C: Chrome + ?Sized>(&mut self, chrome: &mut C) -> Option<Transition> {
        if self.current_index() == 0 {
            return None;
        }
        self.goto_section(0, Direction::Up, chrome)
    }

    fn goto_index<C: Chrome + ?Sized>(
        &mut self,
        target: usize,
        chrome: &mut C,
    ) -> Option<Transition> {
        let current = self.current_index();
        if target == current {
            return None;
        }
        self.goto_section(target, Direction::between(current, target), chrome)
    }
}
