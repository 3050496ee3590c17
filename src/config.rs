//! Presenter configuration

use serde::{Deserialize, Serialize};

use crate::glyph;

/// Configuration for a dialog presenter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Well-known identifier of the shared dialog container
    pub container_id: String,

    /// Icon namespace prepended to short glyph identifiers
    pub icon_namespace: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            container_id: "dialog".to_string(),
            icon_namespace: glyph::DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl PresenterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn with_icon_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.icon_namespace = namespace.into();
        self
    }

    /// Full class list for an icon element under this configuration
    pub fn icon_class(&self, icon: &str) -> String {
        glyph::full_class(&self.icon_namespace, icon)
    }
}
