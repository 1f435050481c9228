//! DOM element bindings.
//!
//! Each component resolves the elements it needs once, when it initialises.
//! A missing required element fails that component's init; optional controls
//! are `Option`s. To add new UI elements, add a field to the matching group
//! and bind it in its `bind()`.

use tp_site_core::SiteError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlDialogElement, HtmlElement, HtmlFormElement,
    HtmlImageElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

/// `data-<name>` attribute, if set.
pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn clear_style(el: &Element, property: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().remove_property(property);
    }
}

/// Mark `active` as the selected button of a group: `btn-primary active`
/// on it, `btn-outline` on the rest.
pub fn set_active_button(buttons: &[Element], active: &Element) {
    for button in buttons {
        let _ = button.class_list().remove_2("btn-primary", "active");
        add_class(button, "btn-outline");
    }
    remove_class(active, "btn-outline");
    let _ = active.class_list().add_2("btn-primary", "active");
}

pub fn js_error(err: SiteError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| js_error(SiteError::MissingElement($id.to_owned())))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id).ok_or_else(|| js_error(SiteError::MissingElement($id.to_owned())))?
    };
}

// ── Element groups ──

#[derive(Clone)]
pub struct NavElements {
    pub nav_links: Vec<Element>,
    pub section_toggles: Vec<Element>,
    pub hero_sections: Vec<Element>,
    pub services_sections: Vec<Element>,
}

impl NavElements {
    pub fn bind() -> Result<Self, JsValue> {
        Ok(Self {
            nav_links: query_all(".nav-link"),
            section_toggles: query_all(".section-toggle"),
            hero_sections: query_all(".hero-section"),
            services_sections: query_all(".services-section"),
        })
    }
}

#[derive(Clone)]
pub struct GalleryElements {
    pub modal: HtmlDialogElement,
    pub modal_image: HtmlImageElement,
    pub prev_btn: HtmlElement,
    pub next_btn: HtmlElement,
    pub close_btn: Option<HtmlElement>,
    pub items: Vec<Element>,
}

impl GalleryElements {
    pub fn bind() -> Result<Self, JsValue> {
        Ok(Self {
            modal: get_typed!(HtmlDialogElement, "gallery-modal"),
            modal_image: get_typed!(HtmlImageElement, "modal-image"),
            prev_btn: get_typed!(HtmlElement, "prev-image"),
            next_btn: get_typed!(HtmlElement, "next-image"),
            close_btn: by_id_typed::<HtmlElement>("close-modal"),
            items: query_all(".gallery-item"),
        })
    }
}

#[derive(Clone)]
pub struct ViewerElements {
    pub model_buttons: Vec<Element>,
    pub model_displays: Vec<Element>,
    pub reset_btn: HtmlElement,
    pub toggle_btn: HtmlElement,
}

impl ViewerElements {
    pub fn bind() -> Result<Self, JsValue> {
        Ok(Self {
            model_buttons: query_all(".model-btn"),
            model_displays: query_all(".model-display"),
            reset_btn: get_typed!(HtmlElement, "reset-view"),
            toggle_btn: get_typed!(HtmlElement, "toggle-rotation"),
        })
    }
}

#[derive(Clone)]
pub struct ContactElements {
    pub form: HtmlFormElement,
    pub submit_btn: Option<HtmlButtonElement>,
    pub toast: Element,
    pub toast_alert: Element,
    pub toast_message: Element,
}

impl ContactElements {
    pub fn bind() -> Result<Self, JsValue> {
        let form = get_typed!(HtmlFormElement, "contact-form");
        let submit_btn = form
            .query_selector("[type=submit]")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok());
        let toast = get_el!("toast");
        let toast_alert = toast
            .query_selector(".alert")
            .ok()
            .flatten()
            .ok_or_else(|| js_error(SiteError::MissingElement("toast .alert".to_owned())))?;
        Ok(Self {
            form,
            submit_btn,
            toast,
            toast_alert,
            toast_message: get_el!("toast-message"),
        })
    }
}
