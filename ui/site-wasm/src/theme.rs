//! Light/dark theme.
//!
//! The theme is applied as `data-theme` on the document element. A stored
//! choice wins; otherwise the page follows `prefers-color-scheme` live.

use tp_site_core::theme::{Theme, ThemeState};
use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::events::{self, on_click};
use crate::state;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn init() -> Result<(), JsValue> {
    let key = state::with(|s| s.config.theme_storage_key.clone());
    let query = dom::window().match_media(DARK_QUERY)?;
    let prefers_dark = query.as_ref().is_some_and(|q| q.matches());

    let theme = ThemeState::resolve(state::stored_theme(&key), prefers_dark);
    apply(theme.applied());
    state::with_mut(|s| s.theme = Some(theme));
    debug!(theme = %theme.applied(), explicit = theme.is_explicit(), "theme resolved");

    if let Some(query) = query {
        let key = key.clone();
        events::listen(&query, "change", move |e: web_sys::MediaQueryListEvent| {
            on_system_change(&key, e.matches());
        })?;
    }

    if let Some(toggle) = dom::by_id("theme-toggle") {
        on_click!(toggle, move || toggle_theme(&key));
    }
    Ok(())
}

pub fn apply(theme: Theme) {
    if let Some(root) = dom::document().document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn on_system_change(key: &str, prefers_dark: bool) {
    let stored = state::stored_theme(key);
    let changed = state::with_mut(|s| {
        s.theme
            .as_mut()
            .and_then(|t| t.on_system_change(prefers_dark, stored))
    });
    if let Some(theme) = changed {
        apply(theme);
        debug!(%theme, "theme follows system preference");
    }
}

/// Explicit visitor choice: flip and persist.
pub fn toggle_theme(key: &str) {
    let toggled = state::with_mut(|s| s.theme.as_mut().map(ThemeState::toggle));
    if let Some(theme) = toggled {
        apply(theme);
        state::store_theme(key, theme);
        debug!(%theme, "theme toggled");
    }
}
