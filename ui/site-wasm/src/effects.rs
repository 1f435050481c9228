//! Scroll-triggered fade-in.
//!
//! Cards and hero blocks get `fade-in-up` the first time they scroll into
//! view, then are unobserved. The class is never removed.

use js_sys::Array;
use tp_site_core::reveal::REVEAL_CLASS;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::state;

const KEY_ATTR: &str = "data-reveal-key";

pub fn init() -> Result<(), JsValue> {
    let (threshold, root_margin, selector) = state::with(|s| {
        (
            s.config.reveal_threshold,
            s.config.reveal_root_margin.clone(),
            s.config.reveal_selector.clone(),
        )
    });

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(key) = reveal_key(&target) else {
                continue;
            };
            if state::with_mut(|s| s.reveal.mark(key, entry.is_intersecting())) {
                dom::add_class(&target, REVEAL_CLASS);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    opts.set_root_margin(&root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;
    callback.forget();

    for (key, el) in dom::query_all(&selector).iter().enumerate() {
        el.set_attribute(KEY_ATTR, &key.to_string())?;
        observer.observe(el);
    }
    Ok(())
}

fn reveal_key(el: &Element) -> Option<u32> {
    el.get_attribute(KEY_ATTR)?.parse().ok()
}
