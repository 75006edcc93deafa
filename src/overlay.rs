use crate::constants::{ACTIVE_CLASS, ACTIVE_MODAL_SELECTOR, HIDDEN_CLASS};
use crate::dom;
use web_sys as web;

// Overlay modals (interior wizard, lead capture) are plain elements toggled
// with `hidden`/`active`; the page behind them stops scrolling while open.

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::remove_class(&el, HIDDEN_CLASS);
        dom::add_class(&el, ACTIVE_CLASS);
        _ = el.set_attribute("aria-hidden", "false");
        dom::set_body_overflow(document, "hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::remove_class(&el, ACTIVE_CLASS);
        dom::add_class(&el, HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
        dom::set_body_overflow(document, "");
    }
}

/// Id of whichever overlay is currently open.
pub fn active_id(document: &web::Document) -> Option<String> {
    dom::query_doc::<web::Element>(document, ACTIVE_MODAL_SELECTOR)
        .map(|el| el.id())
        .filter(|id| !id.is_empty())
}
