//! Button descriptors for dialog actions
//!
//! Descriptors are plain value objects, created fresh per dialog
//! invocation and consumed by the presenter. They carry no DOM state.

use std::fmt;

use crate::glyph;
use crate::i18n;
use crate::surface::Callback;

/// What a button does when clicked
///
/// Resolved once at construction; the presenter never inspects value
/// types at bind time.
pub enum ButtonAction {
    /// Display-only. Presence of the button alone triggers the host
    /// framework's default dismiss behavior.
    None,

    /// Run the callback
    Invoke(Callback),

    /// Full-page navigation to the URL
    Visit(String),
}

impl ButtonAction {
    /// Wrap a callback
    pub fn invoke(handler: impl FnMut() + Send + 'static) -> Self {
        ButtonAction::Invoke(Box::new(handler))
    }

    /// Navigate to a URL
    pub fn visit(url: impl Into<String>) -> Self {
        ButtonAction::Visit(url.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ButtonAction::None)
    }
}

impl fmt::Debug for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonAction::None => write!(f, "None"),
            ButtonAction::Invoke(_) => write!(f, "Invoke(..)"),
            ButtonAction::Visit(url) => write!(f, "Visit({:?})", url),
        }
    }
}

impl From<&str> for ButtonAction {
    fn from(url: &str) -> Self {
        ButtonAction::Visit(url.to_string())
    }
}

impl From<String> for ButtonAction {
    fn from(url: String) -> Self {
        ButtonAction::Visit(url)
    }
}

/// A button's label, icon and action, independent of DOM state
#[derive(Debug)]
pub struct ButtonDescriptor {
    /// Visible label text
    pub label: String,

    /// Short glyph identifier; gains the namespace prefix at render time
    pub icon: Option<String>,

    /// What the button does when clicked
    pub action: ButtonAction,
}

/// Build a descriptor with a direct action
pub fn button(
    label: impl Into<String>,
    icon: Option<&str>,
    action: ButtonAction,
) -> ButtonDescriptor {
    ButtonDescriptor {
        label: label.into(),
        icon: icon.map(str::to_string),
        action,
    }
}

/// Build a descriptor that navigates to a URL
pub fn link_button(
    label: impl Into<String>,
    icon: Option<&str>,
    url: impl Into<String>,
) -> ButtonDescriptor {
    button(label, icon, ButtonAction::visit(url))
}

/// "Remove" button with a trash icon. A string becomes a navigation
/// action; a wrapped callback passes through untouched.
pub fn btn_remove(action: impl Into<ButtonAction>) -> ButtonDescriptor {
    button(i18n::text("Remove"), Some(glyph::TRASH), action.into())
}

/// "Save" button with a checkmark icon
pub fn btn_save(action: impl Into<ButtonAction>) -> ButtonDescriptor {
    button(i18n::text("Save"), Some(glyph::OK), action.into())
}

/// Display-only "Cancel" button
pub fn cancel() -> ButtonDescriptor {
    button(i18n::text("Cancel"), Some(glyph::REMOVE), ButtonAction::None)
}

/// Display-only "OK" button
pub fn ok() -> ButtonDescriptor {
    button(i18n::text("OK"), Some(glyph::OK), ButtonAction::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_btn_remove_from_url() {
        let descriptor = btn_remove("/items/5/delete");
        assert_eq!(descriptor.label, "Remove");
        assert_eq!(descriptor.icon.as_deref(), Some("trash"));
        match descriptor.action {
            ButtonAction::Visit(url) => assert_eq!(url, "/items/5/delete"),
            other => panic!("expected a navigation action, got {:?}", other),
        }
    }

    #[test]
    fn test_btn_remove_keeps_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let descriptor = btn_remove(ButtonAction::invoke(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        match descriptor.action {
            ButtonAction::Invoke(mut handler) => {
                handler();
                handler();
            }
            other => panic!("expected a callback action, got {:?}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_btn_save() {
        let descriptor = btn_save(ButtonAction::invoke(|| {}));
        assert_eq!(descriptor.label, "Save");
        assert_eq!(descriptor.icon.as_deref(), Some("ok"));
        assert!(!descriptor.action.is_none());
    }

    #[test]
    fn test_link_button() {
        let descriptor = link_button("Go", Some("ok"), "/x");
        assert_eq!(descriptor.label, "Go");
        assert_eq!(descriptor.icon.as_deref(), Some("ok"));
        match descriptor.action {
            ButtonAction::Visit(url) => assert_eq!(url, "/x"),
            other => panic!("expected a navigation action, got {:?}", other),
        }
    }

    #[test]
    fn test_display_only_buttons() {
        let cancel = cancel();
        assert_eq!(cancel.label, "Cancel");
        assert_eq!(cancel.icon.as_deref(), Some("remove"));
        assert!(cancel.action.is_none());

        let ok = ok();
        assert_eq!(ok.label, "OK");
        assert_eq!(ok.icon.as_deref(), Some("ok"));
        assert!(ok.action.is_none());
    }
}
