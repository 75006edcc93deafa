//! Hardening for every form except the contact form: input attributes,
//! live sanitizing, the CSRF field, inline validation and the resubmit
//! cooldown.

use crate::constants::{ERROR_CLASS, HARDENED_FORMS_SELECTOR, SHOW_CLASS};
use crate::dom;
use crate::popup::Popups;
use site_core::{
    csrf_token, sanitize_input, validate_field, FieldSpec, InputKind, RateLimiter,
    CSRF_FIELD_NAME, CSRF_STORAGE_KEY,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const FIELD_SELECTOR: &str = "input, textarea";
const ERROR_BORDER: &str = "#dc3545";
const ERROR_SHADOW: &str = "0 0 0 3px rgba(220, 53, 69, 0.1)";

/// A text-like control: `<input>` or `<textarea>`.
#[derive(Clone)]
enum Field {
    Input(web::HtmlInputElement),
    TextArea(web::HtmlTextAreaElement),
}

impl Field {
    fn from_element(el: web::Element) -> Option<Self> {
        match el.dyn_into::<web::HtmlInputElement>() {
            Ok(input) => Some(Field::Input(input)),
            Err(el) => el.dyn_into::<web::HtmlTextAreaElement>().ok().map(Field::TextArea),
        }
    }

    fn element(&self) -> &web::HtmlElement {
        match self {
            Field::Input(i) => i.as_ref(),
            Field::TextArea(t) => t.as_ref(),
        }
    }

    fn kind(&self) -> Option<InputKind> {
        match self {
            Field::Input(i) => InputKind::from_type(&i.type_()),
            Field::TextArea(_) => Some(InputKind::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            Field::Input(i) => i.value(),
            Field::TextArea(t) => t.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Field::Input(i) => i.set_value(value),
            Field::TextArea(t) => t.set_value(value),
        }
    }

    fn name(&self) -> String {
        match self {
            Field::Input(i) => i.name(),
            Field::TextArea(t) => t.name(),
        }
    }

    fn required(&self) -> bool {
        match self {
            Field::Input(i) => i.required(),
            Field::TextArea(t) => t.required(),
        }
    }
}

pub struct FormGuard {
    pub form: web::HtmlFormElement,
    fields: Vec<(Field, InputKind)>,
    limiter: RefCell<RateLimiter>,
    popups: Rc<Popups>,
}

impl FormGuard {
    fn attach(form: web::HtmlFormElement, token: &str, popups: Rc<Popups>) -> Rc<Self> {
        let fields: Vec<(Field, InputKind)> = dom::query_all::<web::Element>(&form, FIELD_SELECTOR)
            .into_iter()
            .filter_map(Field::from_element)
            .filter_map(|f| f.kind().map(|k| (f, k)))
            .collect();
        for (field, kind) in &fields {
            for (name, value) in kind.attributes() {
                _ = field.element().set_attribute(name, &value);
            }
            if kind.is_free_text() {
                wire_live_sanitize(field);
            }
        }
        add_csrf_field(&form, token);
        Rc::new(Self {
            form,
            fields,
            limiter: RefCell::new(RateLimiter::default()),
            popups,
        })
    }

    /// Validate every field and apply the cooldown. `false` means the submit
    /// must be blocked; the reason is already on screen.
    pub fn admit(&self) -> bool {
        let mut valid = true;
        for (field, kind) in &self.fields {
            let name = field.name();
            let spec = FieldSpec {
                kind: *kind,
                name: &name,
                required: field.required(),
            };
            clear_field_error(field.element());
            if let Err(e) = validate_field(&spec, &field.value()) {
                show_field_error(field.element(), &e.to_string());
                valid = false;
            }
        }
        if !valid {
            log::debug!("[form] {} blocked by validation", self.form.id());
            return false;
        }
        if let Err(e) = self.limiter.borrow_mut().try_acquire() {
            self.popups.show_form_error(&self.form, &e.to_string());
            log::warn!("[form] {} resubmitted too quickly", self.form.id());
            return false;
        }
        true
    }

    pub fn clear_errors(&self) {
        for (field, _) in &self.fields {
            clear_field_error(field.element());
        }
    }
}

pub struct Hardening {
    guards: Vec<Rc<FormGuard>>,
}

impl Hardening {
    pub fn install(document: &web::Document, popups: Rc<Popups>) -> Self {
        let token = session_token();
        let guards: Vec<Rc<FormGuard>> =
            dom::query_all_doc::<web::HtmlFormElement>(document, HARDENED_FORMS_SELECTOR)
                .into_iter()
                .map(|form| FormGuard::attach(form, &token, popups.clone()))
                .collect();
        log::info!("[form] hardened {} forms", guards.len());
        Self { guards }
    }

    pub fn guard(&self, form_id: &str) -> Option<Rc<FormGuard>> {
        self.guards.iter().find(|g| g.form.id() == form_id).cloned()
    }
}

/// One token per browser session, shared by every hardened form.
fn session_token() -> String {
    let storage = web::window().and_then(|w| w.session_storage().ok().flatten());
    if let Some(existing) = storage
        .as_ref()
        .and_then(|s| s.get_item(CSRF_STORAGE_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
    {
        return existing;
    }
    let token = csrf_token(&mut rand::thread_rng());
    if let Some(s) = storage {
        _ = s.set_item(CSRF_STORAGE_KEY, &token);
    }
    token
}

fn add_csrf_field(form: &web::HtmlFormElement, token: &str) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    let Some(input) = doc
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    input.set_type("hidden");
    input.set_name(CSRF_FIELD_NAME);
    input.set_value(token);
    _ = form.append_child(&input);
}

/// Scrub as the user types. A paste also fires `input` once the text has
/// landed. Leading and trailing whitespace is left alone while typing so
/// words can still be separated.
fn wire_live_sanitize(field: &Field) {
    let on_input = field.clone();
    dom::listen(field.element(), "input", move |_: web::Event| scrub(&on_input));
}

fn scrub(field: &Field) {
    let raw = field.value();
    let clean = sanitize_input(&raw);
    if clean != raw.trim() {
        field.set_value(&clean);
    }
}

fn show_field_error(el: &web::HtmlElement, message: &str) {
    dom::add_class(el, ERROR_CLASS);
    dom::set_style(el, "border-color", ERROR_BORDER);
    dom::set_style(el, "box-shadow", ERROR_SHADOW);
    if let Some(msg) = described_by(el) {
        dom::set_text(&msg, message);
        dom::add_class(&msg, SHOW_CLASS);
    }
}

fn clear_field_error(el: &web::HtmlElement) {
    dom::remove_class(el, ERROR_CLASS);
    dom::clear_style(el, "border-color");
    dom::clear_style(el, "box-shadow");
    if let Some(msg) = described_by(el) {
        dom::set_text(&msg, "");
        dom::remove_class(&msg, SHOW_CLASS);
    }
}

fn described_by(el: &web::HtmlElement) -> Option<web::Element> {
    let id = el.get_attribute("aria-describedby")?;
    dom::window_document()?.get_element_by_id(&id)
}
