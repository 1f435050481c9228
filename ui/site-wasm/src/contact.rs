//! Contact form: validation, simulated submission and toast feedback.

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use tp_site_core::contact::{ContactFields, FIELD_NAMES};
use tp_site_core::submit::{Delay, SimulatedSubmitter, Submitter};
use tp_site_core::toast::Toast;
use tp_site_core::ContactError;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{FormData, HtmlFormElement};

use crate::dom::{self, ContactElements};
use crate::events;
use crate::state;

/// `Delay` backed by the browser's `setTimeout`.
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

pub fn init() -> Result<(), JsValue> {
    let els = ContactElements::bind()?;
    let els2 = els.clone();
    events::listen(&els.form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        wasm_bindgen_futures::spawn_local(on_submit(els2.clone()));
    })
}

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            warn!(error = ?e, "could not read contact form");
            return ContactFields::default();
        }
    };
    ContactFields::from_pairs(
        FIELD_NAMES
            .iter()
            .map(|&name| (name, data.get(name).as_string().unwrap_or_default())),
    )
}

async fn on_submit(els: ContactElements) {
    let fields = read_fields(&els.form);
    match state::with_mut(|s| s.form.begin(&fields)) {
        Ok(()) => {}
        Err(ContactError::Busy) => {
            debug!("submission already pending");
            return;
        }
        Err(ContactError::Invalid(e)) => {
            debug!(error = ?e, "contact form rejected");
            show_toast(&els, Toast::error(e.to_string()));
            return;
        }
    }

    set_pending(&els, true);
    let delay_ms = state::with(|s| s.config.submit_delay_ms);
    let result = SimulatedSubmitter::new(TimerDelay, delay_ms)
        .submit(&fields)
        .await;
    if let Err(e) = &result {
        warn!(reason = %e.reason, "contact submission failed");
    }
    let outcome = state::with_mut(|s| s.form.finish(result));
    set_pending(&els, false);

    show_toast(&els, outcome.toast);
    if outcome.reset_form {
        els.form.reset();
        info!("contact form sent");
    }
}

fn set_pending(els: &ContactElements, pending: bool) {
    if let Some(button) = &els.submit_btn {
        button.set_disabled(pending);
    }
    let _ = els
        .form
        .set_attribute("aria-busy", if pending { "true" } else { "false" });
}

/// Show `toast`, replacing whatever is visible, and schedule its dismissal.
pub fn show_toast(els: &ContactElements, toast: Toast) {
    dom::set_text(&els.toast_message, &toast.message);
    dom::remove_class(&els.toast_alert, toast.kind.opposite_class());
    dom::add_class(&els.toast_alert, toast.kind.css_class());
    dom::remove_class(&els.toast, "hidden");

    let duration = state::with(|s| s.config.toast_duration_ms);
    let ticket = state::with_mut(|s| s.toasts.show(toast));
    let toast_el = els.toast.clone();
    let timer = Timeout::new(duration, move || {
        if state::with_mut(|s| s.toasts.dismiss(ticket)) {
            dom::add_class(&toast_el, "hidden");
        }
    });
    // Replacing the handle cancels the superseded dismissal.
    let superseded = state::with_mut(|s| s.toast_timer.replace(timer));
    drop(superseded);
}
