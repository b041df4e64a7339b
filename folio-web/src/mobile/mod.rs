//! Mobile interactions - menu toggle and scroll spy
//!
//! Re-exports only. All logic in submodules.

mod menu;
mod spy;

pub use menu::MenuState;
pub use spy::{Intersection, SectionSpy};
