use crate::carousel::CarouselController;
use crate::chrome::Chrome;
use crate::constants::{INTERIOR_MODAL_ID, LEAD_MODAL_ID};
use crate::dom;
use crate::form::{InteriorForm, LeadCapture};
use crate::input;
use crate::modal::ProjectModal;
use crate::overlay;
use crate::popup::Popups;
use site_core::KEY_SETTLE_MS;
use std::rc::Rc;
use web_sys as web;

/// ArrowLeft / ArrowRight on the focused strip move it by one card.
pub fn wire_carousel_keys(c: &Rc<CarouselController>) {
    let k = c.clone();
    dom::listen(&c.container, "keydown", move |ev: web::KeyboardEvent| {
        let Some(direction) = input::arrow_direction(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        let (offset, token) = k.state.borrow_mut().step_cards(direction);
        k.write(offset);
        k.schedule_settle(token, KEY_SETTLE_MS);
    });
}

#[derive(Clone)]
pub struct KeyboardWiring {
    pub chrome: Rc<Chrome>,
    pub popups: Rc<Popups>,
    pub interior: Option<Rc<InteriorForm>>,
    pub lead: Option<Rc<LeadCapture>>,
    pub viewer: Option<Rc<ProjectModal>>,
}

/// Escape anywhere on the page dismisses the success popup, the open
/// overlay modal and the mobile menu. The project viewer handles its own keys.
pub fn wire_global_keydown(w: KeyboardWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let doc = document.clone();
    dom::listen(&document, "keydown", move |ev: web::KeyboardEvent| {
        if !input::is_escape(&ev.key()) || w.viewer.as_ref().is_some_and(|v| v.is_open()) {
            return;
        }
        w.popups.close_success();
        match overlay::active_id(&doc).as_deref() {
            Some(INTERIOR_MODAL_ID) => match &w.interior {
                Some(form) => form.close(),
                None => overlay::hide(&doc, INTERIOR_MODAL_ID),
            },
            Some(LEAD_MODAL_ID) => match &w.lead {
                Some(lead) => lead.close(),
                None => overlay::hide(&doc, LEAD_MODAL_ID),
            },
            Some(other) => overlay::hide(&doc, other),
            None => {}
        }
        if w.chrome.close_menu() {
            log::debug!("[nav] menu closed with Escape");
        }
    });
}
