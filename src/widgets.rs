//! Auxiliary dashboard widget helpers
//!
//! Configuration for the host's multi-select enhancement widget and the
//! fullscreen preview toggle. Both ride the same page as the dialog
//! template but have no coupling to the presenter.

use serde::{Deserialize, Serialize};

/// Options handed to the host's multi-select enhancement widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectConfig {
    /// Render a clear-all affordance
    pub allow_clear: bool,

    /// Keep the dropdown open while picking multiple values
    pub close_on_select: bool,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            allow_clear: true,
            close_on_select: false,
        }
    }
}

impl MultiSelectConfig {
    /// Options literal for the host widget initializer
    pub fn to_options(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Rendering target for the fullscreen preview modal
pub trait PreviewSurface: Send {
    /// Whether the preview pane already holds content
    fn has_content(&self) -> bool;

    /// Copy the source markup into the preview pane
    fn adopt_content(&mut self, html: &str);

    /// Trigger display of the preview modal
    fn open(&mut self);
}

/// Fullscreen preview toggle for dashboard panels
///
/// The source markup is copied into the preview pane only on the first
/// show; later shows reuse the adopted copy.
pub struct FullscreenPreview<S: PreviewSurface> {
    surface: S,
}

impl<S: PreviewSurface> FullscreenPreview<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Show the preview, adopting the source content if the pane is
    /// still empty
    pub fn show(&mut self, source_html: &str) {
        if !self.surface.has_content() {
            self.surface.adopt_content(source_html);
        }
        self.surface.open();
    }

    /// The underlying preview pane
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
