//! Dark mode initialization and toggle.
//!
//! Reads the visitor's preference from storage and mirrors it onto the
//! `dark` class of the `<html>` element (Tailwind's class-based dark mode).
//! Toggle writes back to storage and updates the class. When no preference
//! is stored, falls back to the OS-level color-scheme preference.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::KeyValueBackend;

/// Storage key holding `"true"` / `"false"`.
pub const STORAGE_KEY: &str = "darkMode";

/// Read the dark mode preference.
///
/// Returns the stored preference if present, otherwise whether the system
/// prefers a dark color scheme (always `false` outside the browser).
pub fn read_preference(storage: &impl KeyValueBackend) -> bool {
    if let Some(val) = storage.get(STORAGE_KEY) {
        return val == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, persist the new preference, and apply it to the page.
pub fn toggle(storage: &impl KeyValueBackend, current: bool) -> bool {
    let next = !current;
    apply(next);
    storage.set(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
