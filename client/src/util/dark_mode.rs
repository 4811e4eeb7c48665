//! Dark mode preference.
//!
//! Stored in `localStorage` as `"true"`/`"false"` and reflected as a
//! `data-theme` attribute on `<html>`. Without a stored value the system
//! color scheme decides. Server rendering always starts light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(any(test, feature = "hydrate"))]
const STORAGE_KEY: &str = "marquee_dark";

#[cfg(any(test, feature = "hydrate"))]
fn parse_stored(raw: &str) -> bool {
    raw == "true"
}

fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Stored preference, else the system preference, else light.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                return parse_stored(&raw);
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    let theme = theme_name(enabled);
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(err) = el.set_attribute("data-theme", theme) {
                leptos::logging::warn!("theme not applied: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the preference, apply it, and persist it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
                leptos::logging::warn!("dark mode preference not saved: {err:?}");
            }
        }
    }
    next
}
