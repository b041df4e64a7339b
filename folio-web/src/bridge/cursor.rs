//! Custom cursor wiring (desktop only)

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::gsap::Gsap;
use super::listen::listen;
use crate::config::CursorConfig;
use crate::cursor::{follow, look, CursorLook};
use crate::error::BootError;

pub fn wire(
    engine: Gsap,
    document: &Document,
    cursor: HtmlElement,
    hoverables: &[HtmlElement],
    config: &CursorConfig,
) -> Result<(), BootError> {
    {
        let cursor = cursor.clone();
        let config = config.clone();
        listen(document, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (props, tween) = follow(mouse.client_x() as f64, mouse.client_y() as f64, &config);
            engine.to(&cursor, &props, &tween);
        })?;
    }

    for element in hoverables {
        for (event, state) in [("mouseenter", CursorLook::Hover), ("mouseleave", CursorLook::Idle)] {
            let cursor = cursor.clone();
            let (props, tween) = look(state, config);
            listen(element, event, move |_| engine.to(&cursor, &props, &tween))?;
        }
    }

    Ok(())
}
