//! Gallery modal: open an item, step through images, keyboard shortcuts.

use tp_site_core::gallery::{GalleryImage, GalleryState, KeyOutcome};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::dom::{self, GalleryElements};
use crate::events::{self, on_click};
use crate::state;

pub fn init() -> Result<(), JsValue> {
    let els = GalleryElements::bind()?;
    let images = state::with(|s| s.config.images.clone());
    let gallery = GalleryState::new(images).map_err(dom::js_error)?;
    state::with_mut(|s| s.gallery = gallery);

    bind_gallery_items(&els)?;
    bind_modal_controls(&els)?;
    Ok(())
}

fn bind_gallery_items(els: &GalleryElements) -> Result<(), JsValue> {
    for (index, item) in els.items.iter().enumerate() {
        let els2 = els.clone();
        on_click!(item, move || open(&els2, index));
    }
    Ok(())
}

fn bind_modal_controls(els: &GalleryElements) -> Result<(), JsValue> {
    {
        let els2 = els.clone();
        on_click!(els.prev_btn, move || previous(&els2));
    }
    {
        let els2 = els.clone();
        on_click!(els.next_btn, move || next(&els2));
    }
    if let Some(close_btn) = &els.close_btn {
        let els2 = els.clone();
        on_click!(close_btn, move || close(&els2));
    }

    // The dialog can also close itself (native Escape handling, form
    // method=dialog), so keep state in sync with its `close` event.
    {
        let els2 = els.clone();
        events::listen(&els.modal, "close", move |_: web_sys::Event| {
            state::with_mut(|s| s.gallery.close());
            dom::remove_class(&els2.modal, "modal-open");
        })?;
    }

    let els2 = els.clone();
    events::listen(&dom::document(), "keydown", move |e: web_sys::KeyboardEvent| {
        let outcome = state::with_mut(|s| s.gallery.on_key(&e.key()));
        match outcome {
            KeyOutcome::Previous | KeyOutcome::Next => render(&els2),
            KeyOutcome::Close => hide_modal(&els2),
            KeyOutcome::Ignored => {}
        }
    })
}

pub fn open(els: &GalleryElements, index: usize) {
    let image = state::with_mut(|s| s.gallery.open(index).clone());
    render_image(els, &image);
    if let Err(e) = els.modal.show_modal() {
        warn!(error = ?e, "could not open gallery modal");
    }
    dom::add_class(&els.modal, "modal-open");
    debug!(index, "gallery opened");
}

pub fn next(els: &GalleryElements) {
    state::with_mut(|s| {
        s.gallery.next();
    });
    render(els);
}

pub fn previous(els: &GalleryElements) {
    state::with_mut(|s| {
        s.gallery.previous();
    });
    render(els);
}

pub fn close(els: &GalleryElements) {
    state::with_mut(|s| s.gallery.close());
    hide_modal(els);
}

fn hide_modal(els: &GalleryElements) {
    if dom::has_class(&els.modal, "modal-open") || els.modal.open() {
        els.modal.close();
    }
    dom::remove_class(&els.modal, "modal-open");
}

fn render(els: &GalleryElements) {
    let image = state::with(|s| s.gallery.current().clone());
    render_image(els, &image);
}

fn render_image(els: &GalleryElements, image: &GalleryImage) {
    els.modal_image.set_src(&image.path);
    els.modal_image.set_alt(&image.title);
    let _ = els.modal_image.set_attribute("title", &image.title);
}
