//! Label translation lookup
//!
//! Mirrors the host framework's message catalog: a process-wide
//! msgid-to-label map with identity fallback. Installed once at startup,
//! read on every descriptor construction.

use std::collections::HashMap;
use std::sync::RwLock;

static CATALOG: RwLock<Option<HashMap<String, String>>> = RwLock::new(None);

/// Install the message catalog, replacing any previous one
pub fn install(catalog: HashMap<String, String>) {
    let mut guard = CATALOG.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(catalog);
}

/// Look up a label, falling back to the message id itself
pub fn text(msgid: &str) -> String {
    let guard = CATALOG.read().unwrap_or_else(|e| e.into_inner());
    match guard.as_ref().and_then(|catalog| catalog.get(msgid)) {
        Some(label) => label.clone(),
        None => msgid.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_falls_back_to_msgid() {
        assert_eq!(text("No such label"), "No such label");
    }

    // The one test that installs a catalog; every other test in the
    // crate relies only on msgids this catalog does not contain.
    #[test]
    fn test_install_overrides_lookup() {
        let mut catalog = HashMap::new();
        catalog.insert("Greeting".to_string(), "Hallo".to_string());
        install(catalog);

        assert_eq!(text("Greeting"), "Hallo");
        // Missing entries still pass through unchanged
        assert_eq!(text("Remove"), "Remove");
    }
}
