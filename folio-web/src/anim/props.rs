//! Animatable style properties and tween timing

/// CSS `visibility` as the engine sets it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// A single engine-facing value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropValue<'a> {
    Num(f64),
    Str(&'a str),
}

/// Sparse set of style properties; `None` leaves a property untouched
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub visibility: Option<Visibility>,
    pub background_color: Option<String>,
    pub border: Option<String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }

    /// Fully shown at rest
    pub fn shown() -> Self {
        Self::new().opacity(1.0).y(0.0).visibility(Visibility::Visible)
    }

    /// Fully hidden, offset untouched
    pub fn hidden() -> Self {
        Self::new().opacity(0.0).visibility(Visibility::Hidden)
    }

    /// Set properties keyed by the engine's camelCase names
    pub fn entries(&self) -> Vec<(&'static str, PropValue<'_>)> {
        let mut out = Vec::with_capacity(7);
        if let Some(v) = self.x {
            out.push(("x", PropValue::Num(v)));
        }
        if let Some(v) = self.y {
            out.push(("y", PropValue::Num(v)));
        }
        if let Some(v) = self.opacity {
            out.push(("opacity", PropValue::Num(v)));
        }
        if let Some(v) = self.scale {
            out.push(("scale", PropValue::Num(v)));
        }
        if let Some(v) = self.visibility {
            out.push(("visibility", PropValue::Str(v.as_str())));
        }
        if let Some(v) = &self.background_color {
            out.push(("backgroundColor", PropValue::Str(v)));
        }
        if let Some(v) = &self.border {
            out.push(("border", PropValue::Str(v)));
        }
        out
    }
}

/// Timing for one tween; `ease: None` defers to the engine default
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    /// Seconds
    pub duration: f64,
    pub ease: Option<String>,
    /// Seconds between consecutive targets
    pub stagger: Option<f64>,
}

impl Tween {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ease: None,
            stagger: None,
        }
    }

    pub fn ease(mut self, ease: impl Into<String>) -> Self {
        self.ease = Some(ease.into());
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Time from first target start to last target end
    pub fn span(&self, targets: usize) -> f64 {
        let stagger = self.stagger.unwrap_or(0.0);
        self.duration + stagger * targets.saturating_sub(1) as f64
    }

    pub fn entries(&self) -> Vec<(&'static str, PropValue<'_>)> {
        let mut out = vec![("duration", PropValue::Num(self.duration))];
        if let Some(ease) = &self.ease {
            out.push(("ease", PropValue::Str(ease)));
        }
        if let Some(stagger) = self.stagger {
            out.push(("stagger", PropValue::Num(stagger)));
        }
        out
    }
}
