//! Section navigation - the page's only mutable shared state
//!
//! Re-exports only. All logic in submodules.

mod chrome;
mod direction;
mod navigator;
mod routing;
mod sections;
mod transition;

pub use chrome::{paint_links, Chrome, LinkBar, LinkTone, Location};
pub use direction::Direction;
pub use navigator::{InitialLayout, Navigator};
pub use routing::Gesture;
pub use sections::{href_for, strip_hash, SectionList};
pub use transition::{Transition, TransitionPlan, TransitionTicket};
