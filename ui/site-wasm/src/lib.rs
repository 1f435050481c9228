//! TechPrint3D site frontend.
//!
//! Rust + WASM interactivity for the marketing site: section toggles,
//! nav highlighting, gallery modal, CSS-driven model viewer, contact form,
//! scroll reveal and theme. State and transitions live in `tp-site-core`;
//! each module here binds its elements and renders that state.

pub mod contact;
pub mod dom;
pub mod effects;
pub mod events;
pub mod gallery;
pub mod navigation;
pub mod state;
pub mod theme;
pub mod viewer;

use tp_site_core::SiteConfig;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    when_ready(|| {
        if let Err(e) = init() {
            error!(error = ?e, "site initialisation failed");
        }
    })
}

/// Run `f` once the document has been parsed.
fn when_ready<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let document = dom::document();
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once(f);
    document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Initialise every module in order. The first failure aborts the rest.
fn init() -> Result<(), JsValue> {
    load_config();

    navigation::init()?;
    gallery::init()?;
    viewer::init()?;
    contact::init()?;

    effects::init()?;
    theme::init()?;

    info!("all site modules initialised");
    Ok(())
}

/// Apply the optional `#site-config` JSON override.
fn load_config() {
    let Some(el) = dom::by_id("site-config") else {
        return;
    };
    let raw = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => state::set_config(config),
        Err(e) => warn!(error = %e, "ignoring site config, using defaults"),
    }
}
