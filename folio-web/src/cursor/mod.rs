//! Custom cursor - follow the pointer, grow over interactive elements
//!
//! Pure description of the tweens; `bridge::cursor` wires the events.

use crate::anim::{Props, Tween};
use crate::config::CursorConfig;

/// Visual state of the cursor element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorLook {
    Idle,
    Hover,
}

/// Tween that moves the cursor to the pointer with a short lag
pub fn follow(x: f64, y: f64, config: &CursorConfig) -> (Props, Tween) {
    (
        Props::new().x(x).y(y),
        Tween::new(config.follow_duration).ease(config.follow_ease.clone()),
    )
}

/// Tween into the given look
pub fn look(look: CursorLook, config: &CursorConfig) -> (Props, Tween) {
    let props = match look {
        CursorLook::Hover => Props::new()
            .scale(config.hover_scale)
            .background_color(config.hover_background.clone())
            .border(config.hover_border.clone()),
        CursorLook::Idle => Props::new()
            .scale(1.0)
            .background_color(config.idle_background.clone())
            .border(config.idle_border.clone()),
    };
    (props, Tween::new(config.hover_duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_lags_pointer() {
        let (props, tween) = follow(120.0, 48.0, &CursorConfig::default());
        assert_eq!(props.x, Some(120.0));
        assert_eq!(props.y, Some(48.0));
        assert!(tween.duration > 0.0);
        assert_eq!(tween.ease.as_deref(), Some("power2.out"));
    }

    #[test]
    fn test_hover_and_idle_looks() {
        let config = CursorConfig::default();
        let (hover, _) = look(CursorLook::Hover, &config);
        assert_eq!(hover.scale, Some(3.0));
        assert_eq!(hover.background_color.as_deref(), Some("rgba(100, 255, 218, 0.1)"));
        assert_eq!(hover.border.as_deref(), Some("none"));

        let (idle, tween) = look(CursorLook::Idle, &config);
        assert_eq!(idle.scale, Some(1.0));
        assert_eq!(idle.background_color.as_deref(), Some("transparent"));
        assert_eq!(idle.border.as_deref(), Some("1px solid var(--accent)"));
        assert_eq!(tween.duration, 0.2);
    }
}
