//! The dialog presenter
//!
//! Owns exclusive access to one shared modal template and re-renders it
//! in full on every request: clear, set, rebind, open. Repeated
//! presentations never accumulate click handlers.

use std::sync::Arc;

use tracing::{debug, error};

use crate::button::{ButtonAction, ButtonDescriptor};
use crate::config::PresenterConfig;
use crate::error::DialogError;
use crate::surface::{ButtonRole, ModalSurface, Navigator, NoopNavigator};

/// One request to present a confirmation dialog
///
/// Has no identity beyond the call and no lifecycle beyond "shown, then
/// dismissed by the user".
#[derive(Debug, Default)]
pub struct DialogRequest {
    /// Dialog title (plain text)
    pub title: String,

    /// Trusted HTML fragment for the body; the caller sanitizes
    pub body_html: String,

    /// Success-role button
    pub success: Option<ButtonDescriptor>,

    /// Primary-role button
    pub primary: Option<ButtonDescriptor>,

    /// Danger-role button
    pub danger: Option<ButtonDescriptor>,
}

impl DialogRequest {
    pub fn new(title: impl Into<String>, body_html: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_html: body_html.into(),
            ..Self::default()
        }
    }

    pub fn with_success(mut self, button: ButtonDescriptor) -> Self {
        self.success = Some(button);
        self
    }

    pub fn with_primary(mut self, button: ButtonDescriptor) -> Self {
        self.primary = Some(button);
        self
    }

    pub fn with_danger(mut self, button: ButtonDescriptor) -> Self {
        self.danger = Some(button);
        self
    }
}

/// Presents confirmation dialogs on one shared modal template
///
/// The presenter is the sole owner of its rendering target; every call
/// to [`show`](DialogPresenter::show) is a full re-render, so no click
/// handler can leak from one presentation into the next.
pub struct DialogPresenter<S: ModalSurface> {
    config: PresenterConfig,
    navigator: Arc<dyn Navigator>,
    surface: Option<S>,
}

impl<S: ModalSurface> DialogPresenter<S> {
    /// Create a presenter with no template mounted yet
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            config,
            navigator: Arc::new(NoopNavigator),
            surface: None,
        }
    }

    /// Create a presenter bound to a template surface
    pub fn with_surface(config: PresenterConfig, surface: S) -> Self {
        let mut presenter = Self::new(config);
        presenter.mount(surface);
        presenter
    }

    /// Install the navigation primitive used by link-style buttons
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Attach the hosting page's template
    pub fn mount(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    /// Detach from the current template, returning it
    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Whether a template is mounted
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The mounted template, if any
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The mounted template, if any
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Whether the mounted template is currently shown
    pub fn is_open(&self) -> bool {
        self.surface.as_ref().map(|s| s.is_open()).unwrap_or(false)
    }

    /// Present a confirmation dialog
    ///
    /// Sets the title and body, then processes every role in the fixed
    /// order danger, primary, success: roles without a descriptor end
    /// hidden with no handler; roles with one get their previous handler
    /// removed before the new one is bound. Finally triggers display.
    ///
    /// Fails with [`DialogError::MissingTemplate`] when no template is
    /// mounted; the call then has no side effects and logs a diagnostic.
    pub fn show(&mut self, request: DialogRequest) -> Result<(), DialogError> {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => {
                error!(
                    "Cannot find #{}; make sure the dialog template is included on the page",
                    self.config.container_id
                );
                return Err(DialogError::MissingTemplate {
                    container: self.config.container_id.clone(),
                });
            }
        };

        debug!("Presenting dialog '{}'", request.title);
        surface.set_title(&request.title);
        surface.set_body_html(&request.body_html);

        let DialogRequest {
            success,
            primary,
            danger,
            ..
        } = request;

        let slots = [
            (ButtonRole::Danger, danger),
            (ButtonRole::Primary, primary),
            (ButtonRole::Success, success),
        ];

        for (role, descriptor) in slots {
            // Unbind first in every case, so no handler survives from a
            // previous presentation.
            surface.unbind_button(role);

            let descriptor = match descriptor {
                Some(descriptor) => descriptor,
                None => {
                    surface.set_button_visible(role, false);
                    continue;
                }
            };

            let ButtonDescriptor {
                mut label,
                icon,
                action,
            } = descriptor;

            match icon {
                Some(icon) => {
                    let class = self.config.icon_class(&icon);
                    surface.set_button_icon_class(role, Some(&class));
                    // Cosmetic gap between the icon element and the label
                    label.insert(0, ' ');
                }
                None => surface.set_button_icon_class(role, None),
            }
            surface.set_button_label(role, &label);

            match action {
                ButtonAction::Invoke(handler) => surface.bind_button(role, handler),
                ButtonAction::Visit(url) => {
                    let navigator = Arc::clone(&self.navigator);
                    surface.bind_button(
                        role,
                        Box::new(move || navigator.goto(&url)),
                    );
                }
                ButtonAction::None => {}
            }
            surface.set_button_visible(role, true);
        }

        surface.open();
        Ok(())
    }
}
