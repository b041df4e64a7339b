//! Desktop wiring - section navigator, gestures, links, history, cursor
//!
//! The navigator lives in one `Rc<RefCell<DesktopSession>>` shared by every
//! handler. Handlers route input through the navigator, release the borrow,
//! and only then hand the accepted transition to GSAP.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use super::cursor;
use super::gsap::Gsap;
use super::listen::listen;
use super::mobile::Menu;
use super::page::{BrowserChrome, PageRoles};
use crate::anim::Timeline;
use crate::config::SiteConfig;
use crate::error::BootError;
use crate::nav::{Navigator, Transition};

pub struct DesktopSession {
    navigator: Navigator,
    chrome: BrowserChrome,
    sections: Vec<HtmlElement>,
    engine: Gsap,
}

type Shared = Rc<RefCell<DesktopSession>>;

thread_local! {
    static SESSION: RefCell<Option<Shared>> = const { RefCell::new(None) };
}

/// Run one routing decision and play whatever it starts
fn dispatch<R>(session: &Shared, route: R) -> bool
where
    R: FnOnce(&mut Navigator, &mut BrowserChrome) -> Option<Transition>,
{
    let transition = {
        let mut guard = session.borrow_mut();
        let state = &mut *guard;
        route(&mut state.navigator, &mut state.chrome)
    };
    match transition {
        Some(transition) => {
            play(session, transition);
            true
        }
        None => false,
    }
}

fn play(session: &Shared, transition: Transition) {
    let Transition { plan, ticket } = transition;
    let (outgoing, incoming, engine) = {
        let state = session.borrow();
        (
            state.sections.get(plan.from).cloned(),
            state.sections.get(plan.to).cloned(),
            state.engine,
        )
    };

    match (outgoing, incoming) {
        (Some(outgoing), Some(incoming)) => {
            let done = Rc::clone(session);
            engine.play_transition(&outgoing, &incoming, &plan, move || {
                done.borrow_mut().navigator.finish(ticket);
            });
        }
        _ => {
            session.borrow_mut().navigator.finish(ticket);
        }
    }
}

pub fn wire(
    window: &Window,
    document: &Document,
    roles: PageRoles,
    config: &SiteConfig,
) -> Result<(), BootError> {
    let engine = Gsap::detect()?;
    let features = roles.features();

    if let Some(cursor_el) = roles.cursor.clone() {
        cursor::wire(engine, document, cursor_el, &roles.hoverables, &config.cursor)?;
    }

    if let (Some(menu), Some(toggle)) = (&roles.menu, &roles.menu_toggle) {
        Menu::new(menu.clone(), toggle.clone(), &config.selectors).wire_toggle()?;
    }

    if !features.sections {
        web_sys::console::warn_1(&"No sections found, section navigation disabled".into());
        return Ok(());
    }

    let mut navigator = Navigator::new(roles.section_list(), config.transition.clone());
    let mut chrome = BrowserChrome::new(
        window.clone(),
        roles.nav_links.clone(),
        config.palette.clone(),
    );

    let layout = navigator.init(&mut chrome);
    for (section, pose) in roles.sections.iter().zip(&layout.poses) {
        engine.set(section, pose);
    }
    if layout.play_entrance {
        engine.play_timeline(document, &Timeline::entrance(&config.selectors));
    }

    let session: Shared = Rc::new(RefCell::new(DesktopSession {
        navigator,
        chrome,
        sections: roles.sections.clone(),
        engine,
    }));
    SESSION.with(|cell| *cell.borrow_mut() = Some(Rc::clone(&session)));

    {
        let session = Rc::clone(&session);
        engine.observe_gestures(window, &config.gesture, move |gesture| {
            dispatch(&session, |nav, chrome| nav.on_gesture(gesture, chrome));
        });
    }

    {
        let session = Rc::clone(&session);
        listen(window, "popstate", move |_| {
            dispatch(&session, |nav, chrome| nav.on_history(chrome));
        })?;
    }

    for link in &roles.nav_links {
        let session = Rc::clone(&session);
        let link_el = link.clone();
        listen(link, "click", move |event| {
            event.prevent_default();
            let href = link_el.get_attribute("href");
            dispatch(&session, |nav, chrome| nav.on_link(href.as_deref(), chrome));
        })?;
    }

    if let Some(logo) = &roles.logo {
        let session = Rc::clone(&session);
        listen(logo, "click", move |_| {
            dispatch(&session, |nav, chrome| nav.on_logo(chrome));
        })?;
    }

    console_log!(
        "Section navigation ready: {} sections, starting at #{}",
        roles.sections.len(),
        session.borrow().navigator.current_id().unwrap_or_default()
    );
    Ok(())
}

fn with_session<T>(f: impl FnOnce(&Shared) -> T) -> Option<T> {
    SESSION.with(|cell| cell.borrow().as_ref().map(f))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Id of the committed section, `undefined` outside a desktop session
#[wasm_bindgen]
pub fn current_section() -> Option<String> {
    with_session(|s| s.borrow().navigator.current_id().map(str::to_string)).flatten()
}

/// Whether a section transition is playing
#[wasm_bindgen]
pub fn is_transitioning() -> bool {
    with_session(|s| s.borrow().navigator.is_animating()).unwrap_or(false)
}

/// Navigate as if a nav link to `id` (with or without `#`) was clicked
///
/// Returns whether a transition started.
#[wasm_bindgen]
pub fn navigate_to(id: &str) -> bool {
    with_session(|s| dispatch(s, |nav, chrome| nav.on_link(Some(id), chrome))).unwrap_or(false)
}
