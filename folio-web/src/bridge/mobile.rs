//! Mobile wiring - menu toggle, close-on-link, scroll spy
//!
//! No transition interception: links keep their native anchor scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::listen::listen;
use super::page::{BrowserChrome, PageRoles};
use crate::config::{Selectors, SiteConfig};
use crate::error::BootError;
use crate::mobile::{Intersection, MenuState, SectionSpy};

/// Menu container and its toggle button, sharing one open/closed state
#[derive(Clone)]
pub struct Menu {
    state: Rc<RefCell<MenuState>>,
    menu: HtmlElement,
    toggle: HtmlElement,
    menu_class: String,
    toggle_class: String,
}

impl Menu {
    pub fn new(menu: HtmlElement, toggle: HtmlElement, selectors: &Selectors) -> Self {
        Self {
            state: Rc::new(RefCell::new(MenuState::default())),
            menu,
            toggle,
            menu_class: selectors.menu_open_class.clone(),
            toggle_class: selectors.toggle_open_class.clone(),
        }
    }

    fn render(&self, open: bool) {
        let _ = self.menu.class_list().toggle_with_force(&self.menu_class, open);
        let _ = self.toggle.class_list().toggle_with_force(&self.toggle_class, open);
    }

    pub fn toggle(&self) {
        let open = self.state.borrow_mut().toggle();
        self.render(open);
    }

    pub fn close(&self) {
        if self.state.borrow_mut().close() {
            self.render(false);
        }
    }

    /// Toggle on button click
    pub fn wire_toggle(&self) -> Result<(), BootError> {
        let menu = self.clone();
        listen(&self.toggle, "click", move |_| menu.toggle())
    }
}

pub fn wire(window: &Window, roles: &PageRoles, config: &SiteConfig) -> Result<(), BootError> {
    let menu = match (&roles.menu, &roles.menu_toggle) {
        (Some(menu), Some(toggle)) => {
            let menu = Menu::new(menu.clone(), toggle.clone(), &config.selectors);
            menu.wire_toggle()?;
            Some(menu)
        }
        _ => None,
    };

    if let Some(menu) = &menu {
        for link in &roles.nav_links {
            let menu = menu.clone();
            listen(link, "click", move |_| menu.close())?;
        }
    }

    if roles.sections.is_empty() {
        return Ok(());
    }

    let spy = SectionSpy::new(config.spy_threshold);
    let mut chrome = BrowserChrome::new(
        window.clone(),
        roles.nav_links.clone(),
        config.palette.clone(),
    );
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let batch: Vec<Intersection> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| Intersection {
                id: entry.target().id(),
                intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
            .collect();
        spy.apply(&batch, &mut chrome);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.spy_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &roles.sections {
        observer.observe(section);
    }
    Ok(())
}
