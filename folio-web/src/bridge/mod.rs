//! Bridge module - browser and GSAP side of the page
//!
//! Mode detection and boot live here; wiring per mode lives in submodules.

mod cursor;
mod desktop;
mod gsap;
mod listen;
mod mobile;
mod page;

use std::cell::{Cell, RefCell};

use web_sys::Window;

use crate::config::SiteConfig;
use crate::error::BootError;
use crate::viewport::{classify, ModeWatch, ViewportMode};
use listen::listen;
use page::PageRoles;

pub use desktop::{current_section, is_transitioning, navigate_to};

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

fn window_width(window: &Window) -> Option<f64> {
    window.inner_width().ok()?.as_f64()
}

/// Mode at load: the CSS media query when available, else the window width
fn detect_mode(window: &Window, config: &SiteConfig) -> ViewportMode {
    let query = config.mobile_media_query();
    match window.match_media(&query) {
        Ok(Some(list)) if list.matches() => ViewportMode::Mobile,
        Ok(Some(_)) => ViewportMode::Desktop,
        _ => classify(window_width(window).unwrap_or(f64::MAX), config.breakpoint_px),
    }
}

/// Reload the page once the width crosses into the other mode
fn watch_resize(window: &Window, config: &SiteConfig) -> Result<(), BootError> {
    let Some(width) = window_width(window) else {
        return Ok(());
    };
    let watch = RefCell::new(ModeWatch::new(width, config.breakpoint_px));
    let win = window.clone();
    listen(window, "resize", move |_| {
        let Some(width) = window_width(&win) else {
            return;
        };
        if watch.borrow_mut().on_resize(width) {
            console_log!("Viewport switched to {}, reloading", watch.borrow().mode().as_str());
            let _ = win.location().reload();
        }
    })
}

/// Run `resolve` unless a boot already went through
///
/// `Ok(None)` means an earlier boot holds the latch. The latch is only taken
/// once `resolve` succeeds, so a boot that fails early can be retried.
fn claim_boot<T>(
    booted: &Cell<bool>,
    resolve: impl FnOnce() -> Result<T, BootError>,
) -> Result<Option<T>, BootError> {
    if booted.get() {
        return Ok(None);
    }
    let resolved = resolve()?;
    booted.set(true);
    Ok(Some(resolved))
}

/// Wire the page for the current mode, deferring until the DOM is parsed
pub fn boot(config: SiteConfig) -> Result<(), BootError> {
    let claimed = BOOTED.with(|booted| {
        claim_boot(booted, || {
            let window = web_sys::window().ok_or(BootError::NoWindow)?;
            window.document().ok_or(BootError::NoDocument)
        })
    })?;
    let Some(document) = claimed else {
        web_sys::console::warn_1(&"folio-web already booted".into());
        return Ok(());
    };

    if document.ready_state() == "loading" {
        let pending = RefCell::new(Some(config));
        return listen(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = pending.borrow_mut().take() {
                if let Err(err) = start(config) {
                    web_sys::console::error_1(&err.to_string().into());
                }
            }
        });
    }
    start(config)
}

fn start(config: SiteConfig) -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;

    let roles = PageRoles::resolve(&document, &config.selectors);
    let features = roles.features();
    let mode = detect_mode(&window, &config);
    console_log!(
        "Booting {} layout (cursor: {}, menu: {}, logo: {}, sections: {})",
        mode.as_str(),
        features.cursor,
        features.menu,
        features.logo,
        roles.sections.len()
    );

    watch_resize(&window, &config)?;

    match mode {
        ViewportMode::Mobile => mobile::wire(&window, &roles, &config),
        ViewportMode::Desktop => match desktop::wire(&window, &document, roles, &config) {
            Err(err @ BootError::AnimationEngineMissing(_)) => {
                web_sys::console::error_1(&format!("{}, desktop features disabled", err).into());
                Ok(())
            }
            other => other,
        },
    }
}
