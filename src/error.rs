//! Error taxonomy for dialog presentation

use thiserror::Error;

/// Errors surfaced by dialog presentation
///
/// There is exactly one recoverable condition; all other inputs are
/// normalized or defaulted silently. Nothing here is fatal.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The expected dialog container is absent from the hosting page
    #[error("cannot find #{container}; make sure the dialog template is included on the page")]
    MissingTemplate { container: String },
}
