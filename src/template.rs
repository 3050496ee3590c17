//! In-memory dialog template
//!
//! Models the shared modal subtree the hosting page provides: a title
//! region, a body region and three role buttons, each holding an icon
//! element, a label element and at most one click handler. Serves as the
//! headless surface and as the observable double in tests.

use crate::surface::{ButtonRole, Callback, ModalSurface};

/// One role button inside the template
#[derive(Default)]
struct ButtonElement {
    visible: bool,
    icon_class: Option<String>,
    label: String,
    handler: Option<Callback>,
}

/// In-memory implementation of the shared dialog template
#[derive(Default)]
pub struct TemplateSurface {
    title: String,
    body_html: String,
    open: bool,
    buttons: [ButtonElement; 3],
}

impl TemplateSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current title text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current body fragment
    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    /// Whether a role's button is shown
    pub fn button_visible(&self, role: ButtonRole) -> bool {
        self.slot(role).visible
    }

    /// A role button's visible label text
    pub fn button_label(&self, role: ButtonRole) -> &str {
        &self.slot(role).label
    }

    /// A role button's icon class list, if any
    pub fn button_icon_class(&self, role: ButtonRole) -> Option<&str> {
        self.slot(role).icon_class.as_deref()
    }

    /// Whether a click handler is bound for the role
    pub fn has_handler(&self, role: ButtonRole) -> bool {
        self.slot(role).handler.is_some()
    }

    /// Click a role's button; returns whether a handler fired.
    /// Hidden buttons cannot be clicked.
    pub fn click(&mut self, role: ButtonRole) -> bool {
        let slot = self.slot_mut(role);
        if !slot.visible {
            return false;
        }
        match slot.handler.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Dismiss the dialog
    pub fn close(&mut self) {
        self.open = false;
    }

    fn slot(&self, role: ButtonRole) -> &ButtonElement {
        &self.buttons[role.index()]
    }

    fn slot_mut(&mut self, role: ButtonRole) -> &mut ButtonElement {
        &mut self.buttons[role.index()]
    }
}

impl ModalSurface for TemplateSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_body_html(&mut self, html: &str) {
        self.body_html = html.to_string();
    }

    fn set_button_label(&mut self, role: ButtonRole, label: &str) {
        self.slot_mut(role).label = label.to_string();
    }

    fn set_button_icon_class(&mut self, role: ButtonRole, class: Option<&str>) {
        self.slot_mut(role).icon_class = class.map(str::to_string);
    }

    fn bind_button(&mut self, role: ButtonRole, handler: Callback) {
        self.slot_mut(role).handler = Some(handler);
    }

    fn unbind_button(&mut self, role: ButtonRole) {
        self.slot_mut(role).handler = None;
    }

    fn set_button_visible(&mut self, role: ButtonRole, visible: bool) {
        self.slot_mut(role).visible = visible;
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
