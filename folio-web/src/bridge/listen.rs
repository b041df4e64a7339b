//! Event listener plumbing
//!
//! Handlers live for the whole page session, so closures are leaked once
//! registered.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::BootError;

/// Attach `handler` to `event` on `target` for the rest of the session
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BootError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
