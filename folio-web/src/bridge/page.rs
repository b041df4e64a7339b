//! DOM roles resolved once at boot, and the browser-backed chrome

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::{Palette, Selectors};
use crate::nav::{href_for, strip_hash, LinkBar, LinkTone, Location, SectionList};

fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Every element the wiring needs; absent roles stay `None` / empty
pub struct PageRoles {
    pub cursor: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub menu: Option<HtmlElement>,
    pub menu_toggle: Option<HtmlElement>,
    pub logo: Option<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub hoverables: Vec<HtmlElement>,
}

/// Which features have everything they need
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Features {
    pub cursor: bool,
    pub menu: bool,
    pub logo: bool,
    pub sections: bool,
}

impl PageRoles {
    pub fn resolve(document: &Document, selectors: &Selectors) -> Self {
        Self {
            cursor: query_one(document, &selectors.cursor),
            nav_links: query_all(document, &selectors.nav_links),
            menu: query_one(document, &selectors.menu),
            menu_toggle: query_one(document, &selectors.menu_toggle),
            logo: query_one(document, &selectors.logo),
            sections: query_all(document, &selectors.sections),
            hoverables: query_all(document, &selectors.hoverables),
        }
    }

    pub fn features(&self) -> Features {
        Features {
            cursor: self.cursor.is_some(),
            menu: self.menu.is_some() && self.menu_toggle.is_some(),
            logo: self.logo.is_some(),
            sections: !self.sections.is_empty(),
        }
    }

    /// Section ids in document order
    pub fn section_list(&self) -> SectionList {
        SectionList::new(self.sections.iter().map(|s| s.id()))
    }
}

/// `Location` and `LinkBar` over the real window and nav links
pub struct BrowserChrome {
    window: Window,
    links: Vec<HtmlElement>,
    palette: Palette,
}

impl BrowserChrome {
    pub fn new(window: Window, links: Vec<HtmlElement>, palette: Palette) -> Self {
        Self {
            window,
            links,
            palette,
        }
    }
}

impl Location for BrowserChrome {
    fn fragment(&self) -> String {
        let hash = self.window.location().hash().unwrap_or_default();
        strip_hash(&hash).to_string()
    }

    fn push_fragment(&mut self, id: &str) {
        let pushed = self.window.history().and_then(|history| {
            history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href_for(id)))
        });
        if pushed.is_err() {
            web_sys::console::warn_1(&format!("Could not push #{} to history", id).into());
        }
    }
}

impl LinkBar for BrowserChrome {
    fn hrefs(&self) -> Vec<Option<String>> {
        self.links.iter().map(|link| link.get_attribute("href")).collect()
    }

    fn paint(&mut self, index: usize, tone: LinkTone) {
        let Some(link) = self.links.get(index) else {
            return;
        };
        let color = match tone {
            LinkTone::Active => &self.palette.active_link,
            LinkTone::Idle => &self.palette.idle_link,
        };
        let _ = link.style().set_property("color", color);
    }
}
