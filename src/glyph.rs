//! Icon class normalization for the style framework's glyph set
//!
//! Short icon identifiers gain the namespace prefix automatically, so
//! callers may pass either `trash` or `glyphicon-trash`.

/// Default icon namespace of the hosting style framework
pub const DEFAULT_NAMESPACE: &str = "glyphicon";

/// Trash-can icon, used by the remove button factory
pub const TRASH: &str = "trash";

/// Checkmark icon, used by the save and OK button factories
pub const OK: &str = "ok";

/// Cross icon, used by the cancel button factory
pub const REMOVE: &str = "remove";

/// Build the full class list for an icon element: the namespace class
/// followed by the prefixed icon class, and exactly those two.
pub fn full_class(namespace: &str, icon: &str) -> String {
    let prefix = format!("{}-", namespace);
    if icon.contains(&prefix) {
        format!("{} {}", namespace, icon)
    } else {
        format!("{} {}{}", namespace, prefix, icon)
    }
}
