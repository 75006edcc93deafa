//! Lead forms: the five-step interior wizard, the scroll-triggered lead
//! capture popup and the contact form. All three post natively to the form
//! relay and share the same optimistic submit flow.

use crate::constants::*;
use crate::dom;
use crate::input;
use crate::lifecycle::{Lifecycle, TimerSlot};
use crate::overlay;
use crate::popup::Popups;
use crate::validation::{FormGuard, Hardening};
use site_core::{
    progress_label, progress_percent, Advance, FormKey, FormWizard, ScrollTrigger, StepOptions,
    SubmitLifecycle, SubmitStep, FORM_FOCUS_DELAY_MS, FORM_STEP_COUNT, HIDDEN_FIELDS,
    LEAD_CAPTURE_DELAY_MS, LEAD_CAPTURE_FOCUS_MS, OPTION_FEEDBACK_MS, STEP_ACTIVATE_MS,
    SUBMIT_PROCESSING_MS, SUBMIT_RESET_MS, SUCCESS_MESSAGE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Messages shown while a submission is "processing".
#[derive(Clone, Copy)]
pub struct SubmitTexts {
    pub progress: &'static str,
    pub busy: &'static str,
}

/// Extra work a form does at points of the submit timeline.
pub struct SubmitHooks {
    /// Runs before the browser posts the form.
    pub before: Box<dyn Fn()>,
    /// Runs just before the success popup appears.
    pub on_success: Box<dyn Fn()>,
    /// Clears the form once the flow is over.
    pub reset: Box<dyn Fn()>,
}

impl SubmitHooks {
    pub fn reset_only(form: &web::HtmlFormElement) -> Self {
        let form = form.clone();
        Self {
            before: Box::new(|| {}),
            on_success: Box::new(|| {}),
            reset: Box::new(move || form.reset()),
        }
    }
}

/// Optimistic submit: the relay's answer is never read. The button is
/// disabled at once, success is shown after the processing delay and the
/// form is re-enabled once, a little later.
pub struct SubmitFlow {
    form: web::HtmlFormElement,
    result: Option<web::HtmlElement>,
    button: Option<web::HtmlButtonElement>,
    idle_label: RefCell<String>,
    texts: SubmitTexts,
    state: RefCell<SubmitLifecycle>,
    hooks: SubmitHooks,
    guard: Option<Rc<FormGuard>>,
    popups: Rc<Popups>,
    lifecycle: Rc<Lifecycle>,
    success_slot: TimerSlot,
    reset_slot: TimerSlot,
}

impl SubmitFlow {
    pub fn attach(
        form: web::HtmlFormElement,
        result_id: &str,
        texts: SubmitTexts,
        hooks: SubmitHooks,
        guard: Option<Rc<FormGuard>>,
        popups: Rc<Popups>,
        lifecycle: Rc<Lifecycle>,
    ) -> Rc<Self> {
        let document = dom::window_document();
        let result = document
            .as_ref()
            .and_then(|d| dom::by_id::<web::HtmlElement>(d, result_id));
        let button = dom::query::<web::HtmlButtonElement>(&form, "button[type=\"submit\"]");
        let flow = Rc::new(Self {
            idle_label: RefCell::new(button.as_ref().and_then(|b| b.text_content()).unwrap_or_default()),
            success_slot: lifecycle.slot(),
            reset_slot: lifecycle.slot(),
            form,
            result,
            button,
            texts,
            state: RefCell::new(SubmitLifecycle::new()),
            hooks,
            guard,
            popups,
            lifecycle,
        });
        let f = flow.clone();
        dom::listen(&flow.form, "submit", move |ev: web::Event| f.on_submit(&ev));
        let r = flow.clone();
        flow.lifecycle.on_resume(move || r.recover());
        flow
    }

    /// A submission interrupted by the page being hidden never gets its
    /// timers back; put the form straight into its ready state.
    fn recover(&self) {
        let step = self.state.borrow_mut().recover();
        if let Some(step) = step {
            log::info!("[form] {} recovered after page restore", self.form.id());
            self.apply(step);
        }
    }

    fn on_submit(self: &Rc<Self>, ev: &web::Event) {
        if let Some(guard) = &self.guard {
            if !guard.admit() {
                ev.prevent_default();
                return;
            }
        }
        let begun = self.state.borrow_mut().begin();
        let step = match begun {
            Ok(step) => step,
            Err(e) => {
                ev.prevent_default();
                log::warn!("[form] {}: {e}", self.form.id());
                return;
            }
        };
        self.apply(step);
        log::info!("[form] {} submitted", self.form.id());

        let flow = self.clone();
        self.lifecycle.arm(&self.success_slot, SUBMIT_PROCESSING_MS, move || {
            let step = flow.state.borrow_mut().processing_elapsed();
            if let Some(step) = step {
                flow.apply(step);
                let again = flow.clone();
                flow.lifecycle.arm(&flow.reset_slot, SUBMIT_RESET_MS, move || {
                    let step = again.state.borrow_mut().reset_elapsed();
                    if let Some(step) = step {
                        again.apply(step);
                    }
                });
            }
        });
    }

    fn apply(&self, step: SubmitStep) {
        match step {
            SubmitStep::Disable => {
                (self.hooks.before)();
                if let Some(result) = &self.result {
                    result.set_inner_html(self.texts.progress);
                    _ = result.set_attribute("style", RESULT_PROGRESS_STYLE);
                }
                if let Some(btn) = &self.button {
                    *self.idle_label.borrow_mut() = btn.text_content().unwrap_or_default();
                    btn.set_text_content(Some(self.texts.busy));
                    btn.set_disabled(true);
                    dom::set_style(btn, "opacity", "0.7");
                }
            }
            SubmitStep::ShowSuccess => {
                if let Some(result) = &self.result {
                    dom::set_style(result, "display", "none");
                }
                (self.hooks.on_success)();
                self.popups.show_success(SUCCESS_MESSAGE);
            }
            SubmitStep::ResetAndEnable => {
                if let Some(result) = &self.result {
                    dom::set_style(result, "display", "none");
                }
                (self.hooks.reset)();
                if let Some(guard) = &self.guard {
                    guard.clear_errors();
                }
                if let Some(btn) = &self.button {
                    btn.set_text_content(Some(self.idle_label.borrow().as_str()));
                    btn.set_disabled(false);
                    dom::set_style(btn, "opacity", "1");
                }
                log::debug!("[form] {} ready again", self.form.id());
            }
        }
    }
}

/// Close button and backdrop click for an overlay modal.
fn wire_dismiss(document: &web::Document, modal_id: &str, close: impl Fn() + 'static) {
    let Some(modal) = document.get_element_by_id(modal_id) else {
        return;
    };
    let close = Rc::new(close);
    if let Some(btn) = dom::query::<web::Element>(&modal, MODAL_CLOSE_SELECTOR) {
        let c = close.clone();
        dom::listen(&btn, "click", move |_: web::Event| c());
    }
    let backdrop = modal.clone();
    dom::listen(&modal, "click", move |ev: web::Event| {
        if dom::is_self_target(&ev, &backdrop) {
            close();
        }
    });
}

fn wire_open_buttons(document: &web::Document, selector: &str, open: impl Fn() + 'static) {
    let open = Rc::new(open);
    for el in dom::query_all_doc::<web::Element>(document, selector) {
        let o = open.clone();
        dom::listen(&el, "click", move |ev: web::Event| {
            ev.prevent_default();
            o();
        });
    }
}

/// Five-step interior design questionnaire in `#interiorFormModal`.
pub struct InteriorForm {
    document: web::Document,
    form: web::HtmlFormElement,
    wizard: RefCell<FormWizard>,
    lifecycle: Rc<Lifecycle>,
    feedback_slot: TimerSlot,
    activate_slot: TimerSlot,
    focus_slot: TimerSlot,
}

impl InteriorForm {
    pub fn mount(
        document: &web::Document,
        hardening: &Hardening,
        popups: Rc<Popups>,
        lifecycle: Rc<Lifecycle>,
    ) -> Option<Rc<Self>> {
        document.get_element_by_id(INTERIOR_MODAL_ID)?;
        let form = dom::by_id::<web::HtmlFormElement>(document, INTERIOR_FORM_ID)?;
        let options = read_step_options(&form);
        let this = Rc::new(Self {
            document: document.clone(),
            form: form.clone(),
            wizard: RefCell::new(FormWizard::new(options)),
            feedback_slot: lifecycle.slot(),
            activate_slot: lifecycle.slot(),
            focus_slot: lifecycle.slot(),
            lifecycle: lifecycle.clone(),
        });

        let click = this.clone();
        dom::listen(&form, "click", move |ev: web::Event| click.on_click(&ev));
        this.wire_free_text();

        let (before, success, reset) = (this.clone(), this.clone(), this.clone());
        let hooks = SubmitHooks {
            before: Box::new(move || before.hydrate_hidden_fields()),
            on_success: Box::new(move || success.hide()),
            reset: Box::new(move || reset.reset()),
        };
        SubmitFlow::attach(
            form,
            INTERIOR_RESULT_ID,
            SubmitTexts {
                progress: INTERIOR_PROGRESS_TEXT,
                busy: INTERIOR_BUTTON_BUSY,
            },
            hooks,
            hardening.guard(INTERIOR_FORM_ID),
            popups,
            lifecycle,
        );

        let close = this.clone();
        wire_dismiss(document, INTERIOR_MODAL_ID, move || close.close());
        let open = this.clone();
        wire_open_buttons(document, INTERIOR_CTA_SELECTOR, move || open.open());
        Some(this)
    }

    pub fn open(self: &Rc<Self>) {
        log::info!("[form] opening interior design form");
        overlay::show(&self.document, INTERIOR_MODAL_ID);
        self.reset();
        self.go_to_step(1);
        let this = self.clone();
        self.lifecycle.arm(&self.focus_slot, FORM_FOCUS_DELAY_MS, move || {
            let first = dom::query::<web::HtmlElement>(&this.form, &format!(".{OPTION_BUTTON_CLASS}"));
            if let Some(first) = first {
                _ = first.focus();
            }
        });
    }

    /// Hide the modal and forget the answers given so far.
    pub fn close(&self) {
        self.hide();
        self.reset();
    }

    fn hide(&self) {
        overlay::hide(&self.document, INTERIOR_MODAL_ID);
    }

    fn on_click(self: &Rc<Self>, ev: &web::Event) {
        let Some(btn) = dom::closest(ev, &format!(".{OPTION_BUTTON_CLASS}")) else {
            return;
        };
        let Some(step_el) = btn.closest(FORM_STEP_SELECTOR).ok().flatten() else {
            return;
        };
        let Some(step) = input::parse_step(step_el.get_attribute("data-step").as_deref()) else {
            return;
        };
        let Some(value) = btn.get_attribute("data-value") else {
            return;
        };
        ev.prevent_default();

        let advance = match self.wizard.borrow_mut().select(step, &value) {
            Ok(advance) => advance,
            Err(e) => {
                log::warn!("[form] {e}");
                return;
            }
        };
        for sibling in dom::query_all::<web::HtmlElement>(&step_el, &format!(".{OPTION_BUTTON_CLASS}")) {
            dom::remove_class(&sibling, SELECTED_CLASS);
            dom::set_style(&sibling, "transform", "scale(1)");
        }
        dom::add_class(&btn, SELECTED_CLASS);
        let btn = btn.dyn_into::<web::HtmlElement>().ok();
        if let Some(b) = &btn {
            dom::set_style(b, "transform", "scale(1.05)");
        }

        let this = self.clone();
        self.lifecycle.arm(&self.feedback_slot, OPTION_FEEDBACK_MS, move || {
            if let Some(b) = &btn {
                dom::set_style(b, "transform", "scale(1)");
            }
            if let Advance::To(next) = advance {
                this.go_to_step(next);
            }
        });
    }

    pub fn go_to_step(self: &Rc<Self>, step: u8) {
        if let Err(e) = self.wizard.borrow_mut().go_to_step(step) {
            log::warn!("[form] {e}");
            return;
        }
        log::debug!("[form] navigating to step {step}");
        for el in dom::query_all::<web::HtmlElement>(&self.form, FORM_STEP_SELECTOR) {
            dom::remove_class(&el, ACTIVE_CLASS);
            dom::set_style(&el, "opacity", "0");
        }
        let this = self.clone();
        self.lifecycle.arm(&self.activate_slot, STEP_ACTIVATE_MS, move || {
            if let Some(el) = this.step_element(step) {
                dom::add_class(&el, ACTIVE_CLASS);
                dom::set_style(&el, "opacity", "1");
            }
        });

        if let Some(fill) = dom::by_id::<web::HtmlElement>(&self.document, PROGRESS_FILL_ID) {
            dom::set_style(&fill, "width", &input::progress_width(progress_percent(step)));
        }
        if let Some(text) = self.document.get_element_by_id(PROGRESS_TEXT_ID) {
            dom::set_text(&text, &progress_label(step));
        }
        self.restore_step(step);
    }

    fn step_element(&self, step: u8) -> Option<web::HtmlElement> {
        dom::query(&self.form, &format!("{FORM_STEP_SELECTOR}[data-step=\"{step}\"]"))
    }

    fn restore_step(&self, step: u8) {
        let wizard = self.wizard.borrow();
        if let (Some(el), Some(value)) = (self.step_element(step), wizard.restore_selection(step)) {
            let selector = format!(".{OPTION_BUTTON_CLASS}[data-value=\"{value}\"]");
            if let Some(btn) = dom::query::<web::Element>(&el, &selector) {
                dom::add_class(&btn, SELECTED_CLASS);
            }
        }
        if step == FORM_STEP_COUNT {
            for (key, id) in free_text_fields() {
                if let Some(value) = wizard.value(key) {
                    dom::set_input_value(&self.document, id, value);
                }
            }
        }
    }

    /// Remember budget, email and phone so they survive step changes.
    fn wire_free_text(self: &Rc<Self>) {
        for (key, id) in free_text_fields() {
            let Some(el) = self.document.get_element_by_id(id) else {
                continue;
            };
            let this = self.clone();
            dom::listen(&el, "input", move |_: web::Event| {
                let value = dom::input_value(&this.document, id).unwrap_or_default();
                if let Err(e) = this.wizard.borrow_mut().set_field(key, value.trim()) {
                    log::warn!("[form] {e}");
                }
            });
        }
    }

    fn hydrate_hidden_fields(&self) {
        let fields = self.wizard.borrow().hidden_fields();
        for (id, value) in &fields {
            dom::set_input_value(&self.document, id, value);
        }
        log::debug!("[form] hidden fields hydrated: {fields:?}");
    }

    pub fn reset(&self) {
        self.wizard.borrow_mut().reset();
        for btn in dom::query_all::<web::HtmlElement>(&self.form, &format!(".{OPTION_BUTTON_CLASS}.{SELECTED_CLASS}")) {
            dom::remove_class(&btn, SELECTED_CLASS);
            dom::set_style(&btn, "transform", "scale(1)");
        }
        for (_, id) in free_text_fields() {
            dom::set_input_value(&self.document, id, "");
        }
        for (id, _) in HIDDEN_FIELDS {
            dom::set_input_value(&self.document, id, "");
        }
        log::debug!("[form] interior form reset");
    }
}

fn free_text_fields() -> [(FormKey, &'static str); 3] {
    [
        (FormKey::Budget, BUDGET_INPUT_ID),
        (FormKey::Email, EMAIL_INPUT_ID),
        (FormKey::Phone, PHONE_INPUT_ID),
    ]
}

/// Option values offered by each step's buttons, in step order.
fn read_step_options(form: &web::HtmlFormElement) -> StepOptions {
    let steps = (1..=FORM_STEP_COUNT)
        .map(|step| {
            let selector = format!(
                "{FORM_STEP_SELECTOR}[data-step=\"{step}\"] .{OPTION_BUTTON_CLASS}"
            );
            dom::query_all::<web::Element>(form, &selector)
                .iter()
                .filter_map(|b| b.get_attribute("data-value"))
                .collect()
        })
        .collect();
    StepOptions::new(steps)
}

/// Short lead form that pops up once the visitor reaches the projects.
pub struct LeadCapture {
    document: web::Document,
    trigger: RefCell<ScrollTrigger>,
    lifecycle: Rc<Lifecycle>,
    focus_slot: TimerSlot,
}

impl LeadCapture {
    pub fn mount(
        document: &web::Document,
        hardening: &Hardening,
        popups: Rc<Popups>,
        lifecycle: Rc<Lifecycle>,
    ) -> Option<Rc<Self>> {
        document.get_element_by_id(LEAD_MODAL_ID)?;
        let form = dom::by_id::<web::HtmlFormElement>(document, LEAD_FORM_ID)?;
        let this = Rc::new(Self {
            document: document.clone(),
            trigger: RefCell::new(ScrollTrigger::default()),
            focus_slot: lifecycle.slot(),
            lifecycle: lifecycle.clone(),
        });

        let mut hooks = SubmitHooks::reset_only(&form);
        let hide = this.clone();
        hooks.on_success = Box::new(move || hide.close());
        SubmitFlow::attach(
            form,
            LEAD_RESULT_ID,
            SubmitTexts {
                progress: LEAD_PROGRESS_TEXT,
                busy: LEAD_BUTTON_BUSY,
            },
            hooks,
            hardening.guard(LEAD_FORM_ID),
            popups,
            lifecycle,
        );

        let close = this.clone();
        wire_dismiss(document, LEAD_MODAL_ID, move || close.close());
        let open = this.clone();
        wire_open_buttons(document, LEAD_CTA_SELECTOR, move || open.open());
        this.wire_scroll_trigger();
        Some(this)
    }

    pub fn open(self: &Rc<Self>) {
        log::info!("[form] opening lead capture popup");
        overlay::show(&self.document, LEAD_MODAL_ID);
        let doc = self.document.clone();
        self.lifecycle.arm(&self.focus_slot, LEAD_CAPTURE_FOCUS_MS, move || {
            let first = doc
                .get_element_by_id(LEAD_MODAL_ID)
                .and_then(|m| dom::query::<web::HtmlElement>(&m, "input"));
            if let Some(first) = first {
                _ = first.focus();
            }
        });
    }

    pub fn close(&self) {
        overlay::hide(&self.document, LEAD_MODAL_ID);
    }

    fn wire_scroll_trigger(self: &Rc<Self>) {
        let Some(window) = web::window() else {
            return;
        };
        let this = self.clone();
        dom::listen_passive(&window, "scroll", move |_: web::Event| {
            if this.trigger.borrow().has_fired() {
                return;
            }
            let Some(section) = dom::by_id::<web::HtmlElement>(&this.document, PROJECTS_SECTION_ID) else {
                return;
            };
            let fired = this
                .trigger
                .borrow_mut()
                .check(dom::page_scroll_y(), f64::from(section.offset_top()));
            if fired {
                log::info!("[form] projects section reached, lead popup queued");
                let open = this.clone();
                this.lifecycle.after(LEAD_CAPTURE_DELAY_MS, move || open.open());
            }
        });
    }
}

/// The page footer contact form. Not hardened; it only gets the submit flow.
pub fn mount_contact_form(
    document: &web::Document,
    popups: Rc<Popups>,
    lifecycle: Rc<Lifecycle>,
) -> Option<Rc<SubmitFlow>> {
    let form = dom::by_id::<web::HtmlFormElement>(document, CONTACT_FORM_ID)?;
    document.get_element_by_id(CONTACT_RESULT_ID)?;
    let hooks = SubmitHooks::reset_only(&form);
    Some(SubmitFlow::attach(
        form,
        CONTACT_RESULT_ID,
        SubmitTexts {
            progress: CONTACT_PROGRESS_TEXT,
            busy: CONTACT_BUTTON_BUSY,
        },
        hooks,
        None,
        popups,
        lifecycle,
    ))
}
