//! Global page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Each component's state object lives in `SiteState`; handlers reach it
//! through `with` / `with_mut` and never hold a borrow across an `await`.

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use tp_site_core::contact::ContactFormState;
use tp_site_core::gallery::GalleryState;
use tp_site_core::navigation::NavigationState;
use tp_site_core::reveal::RevealTracker;
use tp_site_core::theme::{Theme, ThemeState};
use tp_site_core::toast::ToastState;
use tp_site_core::viewer::ViewerState;
use tp_site_core::SiteConfig;
use tracing::warn;
use web_sys::Element;

#[derive(Default)]
pub struct SiteState {
    pub config: SiteConfig,
    pub nav: NavigationState,
    pub gallery: GalleryState,
    pub viewer: ViewerState,
    pub form: ContactFormState,
    pub toasts: ToastState,
    pub theme: Option<ThemeState>,
    pub reveal: RevealTracker,
    /// Toast auto-dismiss. Replacing it cancels the old one if still pending.
    pub toast_timer: Option<Timeout>,
    pub pending_replay: Option<PendingReplay>,
}

/// An entry animation that was cleared and is waiting to be restored.
pub struct PendingReplay {
    pub element: Element,
    pub timer: Timeout,
}

thread_local! {
    static STATE: RefCell<SiteState> = RefCell::new(SiteState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&SiteState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut SiteState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn config() -> SiteConfig {
    with(|s| s.config.clone())
}

pub fn set_config(config: SiteConfig) {
    with_mut(|s| s.config = config);
}

// ── localStorage helpers ──

// The theme is kept as a bare name ("dark"), not JSON, so it goes through
// the raw `Storage` handle.

pub fn local_get(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok()?
}

pub fn local_set(key: &str, value: &str) {
    if let Err(e) = LocalStorage::raw().set_item(key, value) {
        warn!(error = ?e, key, "could not write local storage");
    }
}

pub fn stored_theme(key: &str) -> Option<Theme> {
    Theme::from_stored(local_get(key).as_deref())
}

pub fn store_theme(key: &str, theme: Theme) {
    local_set(key, theme.as_str());
}
