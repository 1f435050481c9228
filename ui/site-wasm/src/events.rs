//! Event listener plumbing.
//!
//! Every listener is registered once at init and lives as long as the page,
//! so closures are leaked with `forget()`. Async work is spawned from the
//! handler via `wasm_bindgen_futures::spawn_local`.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

/// Attach `handler` for `event` on `target`.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like `listen`, but passive: the handler promises not to call
/// `preventDefault`, which keeps scrolling smooth.
pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

/// Attach a click handler that ignores the event object.
macro_rules! on_click {
    ($el:expr, $handler:expr) => {{
        let handler = $handler;
        $crate::events::listen(&$el, "click", move |_: web_sys::MouseEvent| handler())?;
    }};
}

pub(crate) use on_click;
