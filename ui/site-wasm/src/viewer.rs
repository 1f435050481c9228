//! Placeholder 3D viewer.
//!
//! Model switching and rotation are CSS-only: this module toggles `hidden`,
//! restarts the entry animation, and flips `animation-play-state`.

use gloo_timers::callback::Timeout;
use tp_site_core::viewer::ModelKind;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, ViewerElements};
use crate::events::{self, on_click};
use crate::state::{self, PendingReplay};

pub fn init() -> Result<(), JsValue> {
    let els = ViewerElements::bind()?;
    bind_model_buttons(&els)?;
    bind_controls(&els)?;
    Ok(())
}

fn bind_model_buttons(els: &ViewerElements) -> Result<(), JsValue> {
    for button in &els.model_buttons {
        let els2 = els.clone();
        let button2 = button.clone();
        events::listen(button, "click", move |_: web_sys::MouseEvent| {
            let kind = dom::data_attr(&button2, "model").unwrap_or_default();
            if load_model(&els2, ModelKind::parse(&kind)) {
                dom::set_active_button(&els2.model_buttons, &button2);
            }
        })?;
    }
    Ok(())
}

fn bind_controls(els: &ViewerElements) -> Result<(), JsValue> {
    on_click!(els.reset_btn, reset_view);
    let els2 = els.clone();
    on_click!(els.toggle_btn, move || toggle_rotation(&els2));
    Ok(())
}

fn present_models(els: &ViewerElements) -> Vec<ModelKind> {
    els.model_displays
        .iter()
        .filter_map(|el| el.id().strip_prefix("model-").map(ModelKind::parse))
        .collect()
}

/// Show the display for `kind` and replay its entry animation.
/// Returns `false` when the page has no such model.
pub fn load_model(els: &ViewerElements, kind: ModelKind) -> bool {
    let present = present_models(els);
    let loaded = state::with_mut(|s| {
        let kind = s.viewer.load_model(kind, &present).cloned()?;
        Some((kind, s.viewer.play_state()))
    });
    let Some((kind, play_state)) = loaded else {
        return false;
    };

    for display in &els.model_displays {
        dom::add_class(display, "hidden");
    }
    let Some(target) = dom::by_id(&kind.element_id()) else {
        return false;
    };
    dom::remove_class(&target, "hidden");
    if let Some(content) = target.first_element_child() {
        dom::set_style(&content, "animation-play-state", play_state.as_css());
    }
    replay_animation(target);
    debug!(model = %kind, "model loaded");
    true
}

/// Replay the current model's animation without switching models.
pub fn reset_view() {
    if let Some(content) = current_model_content() {
        replay_animation(content);
    }
}

pub fn toggle_rotation(els: &ViewerElements) {
    let (play_state, label) = state::with_mut(|s| {
        let play_state = s.viewer.toggle_rotation();
        (play_state, s.viewer.button_html())
    });
    if let Some(content) = current_model_content() {
        dom::set_style(&content, "animation-play-state", play_state.as_css());
    }
    els.toggle_btn.set_inner_html(label);
    debug!(state = play_state.as_css(), "rotation toggled");
}

fn current_model_content() -> Option<Element> {
    let id = state::with(|s| s.viewer.current().element_id());
    dom::by_id(&id)?.first_element_child()
}

/// Clear the inline `animation` and restore it after a short delay so the
/// browser restarts it. A newer replay supersedes a pending one.
fn replay_animation(element: Element) {
    if let Some(old) = state::with_mut(|s| s.pending_replay.take()) {
        // Dropping the timer cancels it; restore by hand instead.
        drop(old.timer);
        dom::clear_style(&old.element, "animation");
    }

    let delay = state::with(|s| s.config.animation_restart_ms);
    dom::set_style(&element, "animation", "none");
    let restore = element.clone();
    let timer = Timeout::new(delay, move || dom::clear_style(&restore, "animation"));
    state::with_mut(|s| s.pending_replay = Some(PendingReplay { element, timer }));
}
