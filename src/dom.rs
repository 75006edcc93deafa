use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn query<T: JsCast>(root: &web::Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn query_doc<T: JsCast>(document: &web::Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn collect<T: JsCast>(list: Option<web::NodeList>) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_all<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    collect(root.query_selector_all(selector).ok())
}

pub fn query_all_doc<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    collect(document.query_selector_all(selector).ok())
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<E>(
    target: &impl AsRef<web::EventTarget>,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`] but registered as passive, for scroll and touch.
pub fn listen_passive<E>(
    target: &impl AsRef<web::EventTarget>,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    _ = target
        .as_ref()
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        );
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn has_class(el: &web::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Nearest ancestor (or self) of the event target matching `selector`.
pub fn closest(ev: &web::Event, selector: &str) -> Option<web::Element> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// `true` when the click landed on `el` itself rather than a child.
pub fn is_self_target(ev: &web::Event, el: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .is_some_and(|t| &t == el)
}

/// `scrollLeft` as a float; the typed binding rounds on some targets.
pub fn scroll_left(el: &web::Element) -> f64 {
    Reflect::get(el, &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn set_scroll_left(el: &web::Element, value: f64) {
    _ = Reflect::set(el, &JsValue::from_str("scrollLeft"), &JsValue::from_f64(value));
}

pub fn set_body_overflow(document: &web::Document, value: &str) {
    if let Some(body) = document.body() {
        if value.is_empty() {
            clear_style(&body, "overflow");
        } else {
            set_style(&body, "overflow", value);
        }
    }
}

pub fn page_scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_input_value(document: &web::Document, id: &str, value: &str) {
    if let Some(input) = by_id::<web::HtmlInputElement>(document, id) {
        input.set_value(value);
    }
}

pub fn input_value(document: &web::Document, id: &str) -> Option<String> {
    by_id::<web::HtmlInputElement>(document, id).map(|i| i.value())
}
