//! Section toggles, smooth-scroll nav links and scroll-driven highlighting.

use tp_site_core::navigation::{self, Section, SectionBounds};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, NavElements};
use crate::events;
use crate::state;

pub fn init() -> Result<(), JsValue> {
    let els = NavElements::bind()?;
    bind_section_toggles(&els)?;
    bind_smooth_scroll(&els)?;
    bind_active_navigation(&els)?;
    Ok(())
}

/// Sections that have both a hero and a services block in the markup.
fn present_sections(els: &NavElements) -> Vec<Section> {
    els.hero_sections
        .iter()
        .filter_map(|hero| hero.id().strip_prefix("hero-").map(Section::parse))
        .filter(|s| dom::by_id(&s.services_id()).is_some())
        .collect()
}

fn bind_section_toggles(els: &NavElements) -> Result<(), JsValue> {
    for button in &els.section_toggles {
        let els2 = els.clone();
        let button2 = button.clone();
        events::listen(button, "click", move |_: web_sys::MouseEvent| {
            let id = dom::data_attr(&button2, "section").unwrap_or_default();
            if select_section(&els2, &id) {
                dom::set_active_button(&els2.section_toggles, &button2);
            }
        })?;
    }
    Ok(())
}

/// Show the hero/services pair for `id`. Returns `false` (and changes
/// nothing) when the page has no such section.
pub fn select_section(els: &NavElements, id: &str) -> bool {
    let present = present_sections(els);
    let Some(section) = state::with_mut(|s| s.nav.select_section(id, &present).cloned()) else {
        debug!(section = id, "no such section");
        return false;
    };

    for el in els.hero_sections.iter().chain(&els.services_sections) {
        dom::add_class(el, "hidden");
    }
    for id in [section.hero_id(), section.services_id()] {
        if let Some(el) = dom::by_id(&id) {
            dom::remove_class(&el, "hidden");
            dom::add_class(&el, "fade-in-up");
        }
    }
    debug!(%section, "section selected");
    true
}

fn bind_smooth_scroll(els: &NavElements) -> Result<(), JsValue> {
    for link in &els.nav_links {
        let els2 = els.clone();
        let link2 = link.clone();
        events::listen(link, "click", move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let href = link2.get_attribute("href").unwrap_or_default();
            follow_link(&href);
            let anchor = navigation::anchor_target(&href).map(str::to_owned);
            state::with_mut(|s| s.nav.set_active_link(anchor.as_deref()));
            highlight_link(&els2, Some(&link2));
        })?;
    }
    Ok(())
}

/// Smooth-scroll to the anchor named by `href`, leaving room for the
/// fixed header. No-op when the target is absent.
pub fn follow_link(href: &str) {
    let Some(target) = navigation::anchor_target(href)
        .and_then(dom::by_id_typed::<HtmlElement>)
    else {
        return;
    };
    let header_offset = state::with(|s| s.config.header_offset);
    let opts = ScrollToOptions::new();
    opts.set_top(navigation::scroll_target(
        f64::from(target.offset_top()),
        header_offset,
    ));
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}

fn bind_active_navigation(els: &NavElements) -> Result<(), JsValue> {
    let els2 = els.clone();
    events::listen_passive(&dom::window(), "scroll", move |_: web_sys::Event| {
        sync_active_link_on_scroll(&els2);
    })
}

fn section_bounds() -> Vec<SectionBounds> {
    dom::query_all("section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

pub fn sync_active_link_on_scroll(els: &NavElements) {
    let scroll_y = dom::window().scroll_y().unwrap_or_default();
    let sections = section_bounds();
    let changed = state::with_mut(|s| {
        let lookahead = s.config.scroll_lookahead;
        s.nav
            .sync_on_scroll(&sections, scroll_y, lookahead)
            .map(str::to_owned)
    });
    if let Some(id) = changed {
        let link = dom::query(&format!(r##"a[href="#{id}"]"##));
        highlight_link(els, link.as_ref());
    }
}

/// Clear every nav link and mark `active`, if given.
fn highlight_link(els: &NavElements, active: Option<&Element>) {
    for link in &els.nav_links {
        dom::remove_class(link, "active");
    }
    if let Some(link) = active {
        dom::add_class(link, "active");
    }
}
