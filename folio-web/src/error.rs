//! Boot errors - everything that can stop a feature set from being wired

use wasm_bindgen::JsValue;

/// Errors that can occur while wiring the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootError {
    NoWindow,
    NoDocument,
    /// A global the desktop branch depends on (`gsap`, `Observer`) is not loaded
    AnimationEngineMissing(&'static str),
    InvalidConfig(String),
    /// A DOM call threw
    Js(String),
}

impl std::fmt::Display for BootError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No window found"),
            Self::NoDocument => write!(f, "No document found"),
            Self::AnimationEngineMissing(name) => write!(f, "{} not loaded", name),
            Self::InvalidConfig(e) => write!(f, "Invalid site config: {}", e),
            Self::Js(e) => write!(f, "DOM call failed: {}", e),
        }
    }
}

impl std::error::Error for BootError {}

impl From<serde_json::Error> for BootError {
    fn from(err: serde_json::Error) -> Self {
        BootError::InvalidConfig(err.to_string())
    }
}

impl From<JsValue> for BootError {
    fn from(err: JsValue) -> Self {
        BootError::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<BootError> for JsValue {
    fn from(err: BootError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
