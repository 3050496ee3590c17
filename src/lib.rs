//! Confirmation dialogs on a shared modal template
//!
//! `popconfirm` builds confirmation dialogs from up to three
//! role-specific action buttons (danger, primary, success), populates
//! one shared modal template and triggers its display. The rendering
//! layer stays behind the [`ModalSurface`] trait, so the presenter works
//! against a DOM bridge, a webview, or the bundled in-memory
//! [`TemplateSurface`].
//!
//! ```
//! use popconfirm::{btn_remove, DialogPresenter, DialogRequest, PresenterConfig, TemplateSurface};
//!
//! let mut presenter =
//!     DialogPresenter::with_surface(PresenterConfig::default(), TemplateSurface::new());
//! presenter
//!     .show(
//!         DialogRequest::new("Delete item?", "<p>Are you sure?</p>")
//!             .with_danger(btn_remove("/items/5/delete")),
//!     )
//!     .expect("dialog template is mounted");
//! assert!(presenter.is_open());
//! ```

pub mod button;
pub mod config;
pub mod error;
pub mod glyph;
pub mod i18n;
pub mod presenter;
pub mod surface;
pub mod template;
pub mod widgets;

pub use button::{
    btn_remove, btn_save, button, cancel, link_button, ok, ButtonAction, ButtonDescriptor,
};
pub use config::PresenterConfig;
pub use error::DialogError;
pub use presenter::{DialogPresenter, DialogRequest};
pub use surface::{ButtonRole, Callback, ModalSurface, Navigator, NoopNavigator};
pub use template::TemplateSurface;
pub use widgets::{FullscreenPreview, MultiSelectConfig, PreviewSurface};
