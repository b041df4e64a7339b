//! Animation vocabulary - what to tween, not how
//!
//! Re-exports only. The engine itself lives behind `bridge::gsap`.

mod props;
mod timeline;

pub use props::{PropValue, Props, Tween, Visibility};
pub use timeline::{Timeline, TimelineStep};
