//! Trait seams for the presenter's external collaborators
//!
//! The hosting page supplies the modal template and the navigation
//! primitive. Both are reached through the traits in this module, so the
//! presenter stays independent of any concrete rendering layer.

use std::fmt;

use tracing::warn;

/// Click handler bound to a dialog button
pub type Callback = Box<dyn FnMut() + Send>;

/// The three fixed button slots of the shared dialog template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Danger,
    Primary,
    Success,
}

impl ButtonRole {
    /// All roles, in the order the presenter processes them
    pub const ALL: [ButtonRole; 3] = [
        ButtonRole::Danger,
        ButtonRole::Primary,
        ButtonRole::Success,
    ];

    /// The slot's well-known identifier in the hosting template
    pub fn element_id(self) -> &'static str {
        match self {
            ButtonRole::Danger => "btn-danger",
            ButtonRole::Primary => "btn-primary",
            ButtonRole::Success => "btn-success",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ButtonRole::Danger => 0,
            ButtonRole::Primary => 1,
            ButtonRole::Success => 2,
        }
    }
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ButtonRole::Danger => "danger",
            ButtonRole::Primary => "primary",
            ButtonRole::Success => "success",
        };
        write!(f, "{}", name)
    }
}

/// Contract the hosting page's dialog template must satisfy
///
/// One container holding a title region, a body region and three role
/// buttons, each with a nested icon element and a nested label element.
/// The open primitive is the host framework's modal call; its open/close
/// transition logic stays opaque to this crate.
pub trait ModalSurface: Send {
    /// Set the visible dialog title (plain text)
    fn set_title(&mut self, title: &str);

    /// Replace the body region with a trusted HTML fragment.
    /// The fragment is inserted without escaping; the caller sanitizes.
    fn set_body_html(&mut self, html: &str);

    /// Replace a role button's visible label text
    fn set_button_label(&mut self, role: ButtonRole, label: &str);

    /// Replace the icon element's class list, or clear it with `None`
    fn set_button_icon_class(&mut self, role: ButtonRole, class: Option<&str>);

    /// Bind the click handler for a role. The slot must be free; the
    /// presenter always unbinds before binding.
    fn bind_button(&mut self, role: ButtonRole, handler: Callback);

    /// Remove the click handler for a role, if any
    fn unbind_button(&mut self, role: ButtonRole);

    /// Show or hide a role's button
    fn set_button_visible(&mut self, role: ButtonRole, visible: bool);

    /// Trigger display. Safe to call on an already open surface.
    fn open(&mut self);

    /// Whether the surface is currently shown
    fn is_open(&self) -> bool;
}

/// Full-page navigation primitive used by link-style buttons
pub trait Navigator: Send + Sync {
    /// Navigate the page to the given URL
    fn goto(&self, url: &str);
}

/// Default navigator for hosts without a navigation capability
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn goto(&self, url: &str) {
        warn!("No navigator installed; dropping navigation to {}", url);
    }
}
