//! Viewport mode - mobile vs desktop, and reload when the width crosses over

/// Which feature set a page session wires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewportMode::Mobile => "mobile",
            ViewportMode::Desktop => "desktop",
        }
    }
}

/// Widths at or below the breakpoint are mobile
pub fn classify(width: f64, breakpoint: f64) -> ViewportMode {
    if width <= breakpoint {
        ViewportMode::Mobile
    } else {
        ViewportMode::Desktop
    }
}

/// Remembers the last seen width to spot a mode crossing on resize
#[derive(Clone, Debug)]
pub struct ModeWatch {
    breakpoint: f64,
    last_width: f64,
}

impl ModeWatch {
    pub fn new(width: f64, breakpoint: f64) -> Self {
        Self {
            breakpoint,
            last_width: width,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        classify(self.last_width, self.breakpoint)
    }

    /// Record a resize; `true` means the mode changed and the page must reload
    pub fn on_resize(&mut self, width: f64) -> bool {
        let crossed = classify(width, self.breakpoint) != self.mode();
        self.last_width = width;
        crossed
    }
}
