//! Page chrome the navigator writes to: URL fragment and nav link colors
//!
//! Traits so the navigator runs against the browser in `bridge` and
//! against an in-memory page in tests.

use super::sections::href_for;

/// Browser location and history
pub trait Location {
    /// Current fragment without the leading `#`
    fn fragment(&self) -> String;

    /// Push `#id` as a new history entry without reloading
    fn push_fragment(&mut self, id: &str);
}

/// How a nav link is painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTone {
    Active,
    Idle,
}

/// The navigation link collection
pub trait LinkBar {
    /// Raw `href` attribute of every link, in document order
    fn hrefs(&self) -> Vec<Option<String>>;

    fn paint(&mut self, index: usize, tone: LinkTone);
}

/// Everything the navigator touches outside itself
pub trait Chrome: Location + LinkBar {}

impl<T: Location + LinkBar + ?Sized> Chrome for T {}

/// Paint the link targeting `active_id` active and every other link idle
pub fn paint_links<B: LinkBar + ?Sized>(bar: &mut B, active_id: &str) {
    let active_href = href_for(active_id);
    for (i, href) in bar.hrefs().into_iter().enumerate() {
        let tone = if href.as_deref() == Some(active_href.as_str()) {
            LinkTone::Active
        } else {
            LinkTone::Idle
        };
        bar.paint(i, tone);
    }
}
