//! Icon-button collaborator contract.
//!
//! The search field never draws its buttons itself; it describes each one as
//! an [`IconButtonSpec`] and hands it to whatever [`IconButtonRenderer`] the
//! frontend supplies.

use serde::Serialize;

/// Visual variant of an icon button. The toolbar only uses borderless buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Unstyled,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unstyled => "unstyled",
        }
    }
}

/// HTML button type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Button,
    Submit,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
        }
    }
}

/// Everything an icon button needs to render, minus its click handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconButtonSpec {
    /// Sprite symbol id (e.g. `"times"`, `"search"`).
    pub symbol: &'static str,
    pub display_type: DisplayType,
    pub disabled: bool,
    /// Sprite sheet URI. `None` leaves sprite resolution to the renderer.
    pub spritemap: Option<String>,
    pub button_type: ButtonType,
    /// Extra class on the button element.
    pub class_name: Option<&'static str>,
}

/// Capability the search field needs from an icon-button implementation.
///
/// Implementations must ignore clicks while `spec.disabled` is set.
pub trait IconButtonRenderer {
    /// Click handler type accepted by this renderer.
    type Handler;
    /// Renderable produced for one button.
    type Output;

    fn render(&self, spec: &IconButtonSpec, on_click: Option<Self::Handler>) -> Self::Output;
}
