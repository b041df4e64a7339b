//! Site configuration - every tunable the page wiring reads
//!
//! Defaults reproduce the shipped portfolio. JS may pass a JSON object to
//! `boot_with_config`; missing keys keep their defaults.

use serde::Deserialize;

/// Top-level configuration for one page session
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Widths at or below this are mobile
    pub breakpoint_px: f64,

    /// Minimum visible ratio for the mobile section spy
    pub spy_threshold: f64,

    pub transition: TransitionConfig,
    pub gesture: GestureConfig,
    pub cursor: CursorConfig,
    pub palette: Palette,
    pub selectors: Selectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 900.0,
            spy_threshold: 0.5,
            transition: TransitionConfig::default(),
            gesture: GestureConfig::default(),
            cursor: CursorConfig::default(),
            palette: Palette::default(),
            selectors: Selectors::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override object on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Media query matching the mobile layout, e.g. `(max-width: 900px)`
    pub fn mobile_media_query(&self) -> String {
        format!("(max-width: {}px)", self.breakpoint_px)
    }
}

/// Section-to-section transition timing
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionConfig {
    /// Seconds
    pub duration: f64,
    pub ease: String,
    /// Vertical travel in px for both outgoing and incoming sections
    pub y_offset: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            ease: "power3.inOut".to_string(),
            y_offset: 50.0,
        }
    }
}

/// Options handed to the gesture observer
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    /// Dead zone in px before a gesture counts
    pub tolerance: f64,
    /// -1 flips wheel direction so "scroll down" reads as forward
    pub wheel_speed: f64,
    pub types: String,
    /// Subtrees whose gestures are left to native scrolling
    pub ignore: String,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            wheel_speed: -1.0,
            types: "wheel,touch,pointer".to_string(),
            ignore: ".projects-container, .projects-container *, .about-text".to_string(),
        }
    }
}

/// Custom cursor looks
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorConfig {
    pub follow_duration: f64,
    pub follow_ease: String,
    pub hover_duration: f64,
    pub hover_scale: f64,
    pub hover_background: String,
    pub hover_border: String,
    pub idle_background: String,
    pub idle_border: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            follow_duration: 0.1,
            follow_ease: "power2.out".to_string(),
            hover_duration: 0.2,
            hover_scale: 3.0,
            hover_background: "rgba(100, 255, 218, 0.1)".to_string(),
            hover_border: "none".to_string(),
            idle_background: "transparent".to_string(),
            idle_border: "1px solid var(--accent)".to_string(),
        }
    }
}

/// Link colors for the active and idle nav entries
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub active_link: String,
    pub idle_link: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active_link: "var(--accent)".to_string(),
            idle_link: "var(--text-primary)".to_string(),
        }
    }
}

/// CSS selectors for the DOM roles the page wiring consumes
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub cursor: String,
    pub nav_links: String,
    pub menu: String,
    pub menu_toggle: String,
    pub logo: String,
    pub sections: String,
    pub hoverables: String,
    pub hero_content: String,
    pub hero_image: String,
    /// Class set on the menu container while open
    pub menu_open_class: String,
    /// Class set on the toggle button while open
    pub toggle_open_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            cursor: "#cursor".to_string(),
            nav_links: ".nav-link".to_string(),
            menu: "#nav-links".to_string(),
            menu_toggle: ".hamburger".to_string(),
            logo: ".logo".to_string(),
            sections: "section".to_string(),
            hoverables: "a, button, .project-card, .skill-item".to_string(),
            hero_content: ".hero-content > *".to_string(),
            hero_image: ".hero-img".to_string(),
            menu_open_class: "active".to_string(),
            toggle_open_class: "toggle".to_string(),
        }
    }
}
