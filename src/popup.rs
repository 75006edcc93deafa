//! Success popup, toast notifications and inline form errors.

use crate::constants::FORM_ERROR_CLASS;
use crate::dom;
use crate::lifecycle::{Lifecycle, TimerSlot};
use site_core::{
    escape_html, NotificationKind, PopupKind, PopupSlot, FORM_ERROR_MS, NOTIFICATION_EXIT_MS,
    POPUP_EXIT_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const SUCCESS_OVERLAY_CLASS: &str = "success-popup-overlay";
const SUCCESS_CLOSE_CLASS: &str = "popup-close-btn";
const NOTIFICATION_SELECTOR: &str = ".notification";

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0, 0, 0, 0.6); display: flex; justify-content: center; align-items: center; z-index: 9999; opacity: 0; transition: opacity 0.3s ease; backdrop-filter: blur(3px);";
const CARD_STYLE: &str = "background: #fff; color: rgba(94, 82, 64, 1); padding: 40px 30px 45px 30px; border-radius: 20px; text-align: center; max-width: 450px; margin: 20px; box-shadow: 0 20px 60px rgba(0, 0, 0, 0.25); border: 3px solid rgba(94, 82, 64, 0.8); transform: translateY(30px) scale(0.9); transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1); position: relative;";
const NOTIFICATION_STYLE: &str = "position: fixed; top: 100px; right: 20px; z-index: 3000; max-width: 400px; padding: 15px 20px; border-radius: 12px; box-shadow: 0 6px 25px rgba(0,0,0,0.15); color: white; font-weight: 500; animation: slideInRight 0.4s cubic-bezier(0.4, 0, 0.2, 1);";
const FORM_ERROR_STYLE: &str = "color: #e74c3c; padding: 10px; margin: 10px 0; border: 1px solid #e74c3c; border-radius: 4px; background: #fdf2f2;";

struct Shown {
    id: u64,
    overlay: web::HtmlElement,
    card: web::HtmlElement,
}

pub struct Popups {
    lifecycle: Rc<Lifecycle>,
    slot: RefCell<PopupSlot>,
    shown: RefCell<Option<Shown>>,
    success_timer: TimerSlot,
    notice_timer: TimerSlot,
}

impl Popups {
    pub fn new(lifecycle: Rc<Lifecycle>) -> Rc<Self> {
        let popups = Rc::new(Self {
            success_timer: lifecycle.slot(),
            notice_timer: lifecycle.slot(),
            slot: RefCell::new(PopupSlot::new()),
            shown: RefCell::new(None),
            lifecycle: lifecycle.clone(),
        });
        let restored = popups.clone();
        lifecycle.on_resume(move || restored.dismiss_all());
        popups
    }

    /// Their dismissal timers were cancelled while the page was hidden.
    fn dismiss_all(&self) {
        self.close_success();
        if let Some(doc) = dom::window_document() {
            for el in dom::query_all_doc::<web::Element>(&doc, NOTIFICATION_SELECTOR) {
                el.remove();
            }
            for el in dom::query_all_doc::<web::Element>(&doc, &format!(".{FORM_ERROR_CLASS}")) {
                el.remove();
            }
        }
    }

    /// Show the success popup, replacing one that is still visible.
    pub fn show_success(self: &Rc<Self>, message: &str) {
        let Some(doc) = dom::window_document() else {
            return;
        };
        let (id, replaced) = self.slot.borrow_mut().open();
        if replaced.is_some() {
            if let Some(old) = self.shown.borrow_mut().take() {
                old.overlay.remove();
            }
        }
        let (overlay, card) = match build_success(&doc, message) {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("[popup] could not build success popup: {:?}", e);
                self.slot.borrow_mut().close(id);
                return;
            }
        };
        let Some(body) = doc.body() else {
            return;
        };
        _ = body.append_child(&overlay);

        let click = self.clone();
        let overlay_el: web::Element = overlay.clone().into();
        dom::listen(&overlay, "click", move |ev: web::Event| {
            let on_close = dom::closest(&ev, &format!(".{SUCCESS_CLOSE_CLASS}")).is_some();
            if on_close || dom::is_self_target(&ev, &overlay_el) {
                click.close_popup(id);
            }
        });

        animate_in(&overlay, &card);
        *self.shown.borrow_mut() = Some(Shown { id, overlay, card });

        let timer = self.clone();
        self.lifecycle.arm(
            &self.success_timer,
            PopupKind::Success.auto_dismiss_ms(),
            move || timer.close_popup(id),
        );
        log::info!("[popup] success popup shown");
    }

    /// Close the visible success popup, if any.
    pub fn close_success(&self) -> bool {
        let current = self.slot.borrow().current();
        current.is_some_and(|id| self.close_popup(id))
    }

    fn close_popup(&self, id: u64) -> bool {
        if !self.slot.borrow_mut().close(id) {
            return false;
        }
        let shown = self.shown.borrow_mut().take();
        let Some(shown) = shown.filter(|s| s.id == id) else {
            return true;
        };
        dom::set_style(&shown.overlay, "opacity", "0");
        dom::set_style(&shown.card, "transform", "translateY(-20px) scale(0.95)");
        let overlay = shown.overlay;
        self.lifecycle.after(POPUP_EXIT_MS, move || overlay.remove());
        true
    }

    /// Toast in the top-right corner. Existing toasts are removed first.
    pub fn show_notification(&self, message: &str, kind: NotificationKind) {
        let Some(doc) = dom::window_document() else {
            return;
        };
        for old in dom::query_all_doc::<web::Element>(&doc, NOTIFICATION_SELECTOR) {
            old.remove();
        }
        let Ok(el) = doc.create_element("div") else {
            return;
        };
        el.set_class_name(&kind.css_class());
        el.set_inner_html(&format!(
            "<div class=\"notification-content\" style=\"display:flex;align-items:center;gap:10px\">\
             <span class=\"notification-icon\">{}</span>\
             <span class=\"notification-message\">{}</span>\
             <button class=\"notification-close\" aria-label=\"Close notification\" \
             style=\"background:none;border:none;color:white;font-size:1.5rem;cursor:pointer\">×</button>\
             </div>",
            kind.icon(),
            escape_html(message)
        ));
        _ = el.set_attribute(
            "style",
            &format!("{NOTIFICATION_STYLE} background: {};", kind.color()),
        );
        if let Some(btn) = dom::query::<web::Element>(&el, ".notification-close") {
            let target = el.clone();
            dom::listen(&btn, "click", move |_: web::Event| target.remove());
        }
        let Some(body) = doc.body() else {
            return;
        };
        _ = body.append_child(&el);

        let lifecycle = self.lifecycle.clone();
        self.lifecycle.arm(
            &self.notice_timer,
            PopupKind::Notification.auto_dismiss_ms(),
            move || {
                if let Ok(html) = el.clone().dyn_into::<web::HtmlElement>() {
                    dom::set_style(&html, "animation", "slideOutRight 0.4s cubic-bezier(0.4, 0, 0.2, 1)");
                }
                lifecycle.after(NOTIFICATION_EXIT_MS, move || el.remove());
            },
        );
        log::debug!("[popup] {} notification shown", kind.as_str());
    }

    /// Error banner at the top of `form`, removed after a few seconds.
    pub fn show_form_error(&self, form: &web::HtmlFormElement, message: &str) {
        let existing = dom::query::<web::Element>(form, &format!(".{FORM_ERROR_CLASS}"));
        let banner = match existing {
            Some(el) => el,
            None => {
                let Some(doc) = dom::window_document() else {
                    return;
                };
                let Ok(el) = doc.create_element("div") else {
                    return;
                };
                el.set_class_name(FORM_ERROR_CLASS);
                _ = el.set_attribute("role", "alert");
                _ = el.set_attribute("style", FORM_ERROR_STYLE);
                _ = form.insert_before(&el, form.first_child().as_ref());
                el
            }
        };
        dom::set_text(&banner, message);
        self.lifecycle.after(FORM_ERROR_MS, move || banner.remove());
    }
}

fn build_success(
    doc: &web::Document,
    message: &str,
) -> Result<(web::HtmlElement, web::HtmlElement), JsValue> {
    let overlay = doc.create_element("div")?.dyn_into::<web::HtmlElement>()?;
    overlay.set_class_name(SUCCESS_OVERLAY_CLASS);
    overlay.set_attribute("style", OVERLAY_STYLE)?;
    overlay.set_attribute("role", "dialog")?;
    overlay.set_attribute("aria-modal", "true")?;

    let card = doc.create_element("div")?.dyn_into::<web::HtmlElement>()?;
    card.set_class_name("success-popup");
    card.set_attribute("style", CARD_STYLE)?;
    card.set_inner_html(&format!(
        "<button class=\"{SUCCESS_CLOSE_CLASS}\" aria-label=\"Close\">×</button>\
         <div class=\"success-popup-icon\">🎉</div>\
         <h3>Success!</h3>\
         <p>{}</p>\
         <div class=\"success-popup-timer\"><div class=\"progress-bar\" style=\"animation: shrink {:.1}s linear\"></div></div>\
         <p class=\"success-popup-hint\">Auto-closes in {:.1} seconds or click × to close</p>",
        escape_html(message),
        f64::from(PopupKind::Success.auto_dismiss_ms()) / 1000.0,
        f64::from(PopupKind::Success.auto_dismiss_ms()) / 1000.0,
    ));
    overlay.append_child(&card)?;
    Ok((overlay, card))
}

/// Fade the overlay in on the next frame so the transition runs.
fn animate_in(overlay: &web::HtmlElement, card: &web::HtmlElement) {
    let (overlay, card) = (overlay.clone(), card.clone());
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(move || {
        dom::set_style(&overlay, "opacity", "1");
        dom::set_style(&card, "transform", "translateY(0) scale(1)");
    });
    _ = w.request_animation_frame(cb.unchecked_ref());
}
