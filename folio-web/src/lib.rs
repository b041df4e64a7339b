//! Folio Web - single-page portfolio presentation controller
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Everything outside `bridge` is plain Rust and runs under `cargo test`
//! on the host.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod anim;
pub mod config;
pub mod cursor;
pub mod error;
pub mod mobile;
pub mod nav;
pub mod viewport;

mod bridge;

#[cfg(test)]
mod testing;

pub use bridge::{current_section, is_transitioning, navigate_to};
pub use config::SiteConfig;
pub use error::BootError;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Wire the page with the built-in configuration
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    bridge::boot(SiteConfig::default())?;
    Ok(())
}

/// Wire the page with a JSON object overriding parts of the configuration
#[wasm_bindgen]
pub fn boot_with_config(json: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(json).map_err(BootError::from)?;
    bridge::boot(config)?;
    Ok(())
}
