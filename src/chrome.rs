//! Static page behaviour around the gallery: navigation, navbar styling,
//! mobile menu, hero slides, packages section, FAQ and scroll-in
//! animations. Every piece is skipped when its markup is missing.

use crate::constants::*;
use crate::dom;
use crate::input;
use crate::lifecycle::{Lifecycle, TimerSlot};
use site_core::{
    navbar_is_scrolled, section_scroll_target, Accordion, DropdownGroups, HeroRotation, MenuState,
    DROPDOWN_OPEN_MAX_HEIGHT_PX, HERO_SLIDE_MS, NAV_SCROLL_THROTTLE_MS, PACKAGES_FADE_IN_MS,
    PACKAGES_HIDE_MS, PACKAGES_SCROLL_MS, SECTION_FOCUS_DELAY_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Chrome {
    document: web::Document,
    lifecycle: Rc<Lifecycle>,
    menu: RefCell<MenuState>,
    hamburger: Option<web::Element>,
    nav_menu: Option<web::Element>,
    navbar_pending: Cell<bool>,
    navbar_slot: TimerSlot,
    packages_slot: TimerSlot,
    packages_scroll_slot: TimerSlot,
    focus_slot: TimerSlot,
    animations: Option<ScrollAnimations>,
}

impl Chrome {
    pub fn mount(document: &web::Document, lifecycle: Rc<Lifecycle>) -> Rc<Self> {
        let chrome = Rc::new(Self {
            document: document.clone(),
            menu: RefCell::new(MenuState::default()),
            hamburger: dom::query_doc(document, HAMBURGER_SELECTOR),
            nav_menu: dom::query_doc(document, NAV_MENU_SELECTOR),
            navbar_pending: Cell::new(false),
            navbar_slot: lifecycle.slot(),
            packages_slot: lifecycle.slot(),
            packages_scroll_slot: lifecycle.slot(),
            focus_slot: lifecycle.slot(),
            animations: ScrollAnimations::install(),
            lifecycle,
        });
        chrome.wire_nav_links();
        chrome.wire_navbar();
        chrome.wire_menu();
        chrome.wire_hero();
        chrome.wire_packages();
        wire_dropdowns(document);
        wire_faq(document);
        if let Some(anim) = &chrome.animations {
            anim.observe_all(document);
        }
        let restored = chrome.clone();
        chrome.lifecycle.on_resume(move || {
            // the throttle timer that clears this was cancelled
            restored.navbar_pending.set(false);
        });
        chrome
    }

    /// Fade in elements added after mount, such as gallery cards.
    pub fn animate_within(&self, root: &web::Element) {
        if let Some(anim) = &self.animations {
            for el in dom::query_all::<web::HtmlElement>(root, ANIMATED_SELECTOR) {
                anim.observe(&el);
            }
        }
    }

    fn wire_nav_links(self: &Rc<Self>) {
        for link in dom::query_all_doc::<web::Element>(&self.document, NAV_LINKS_SELECTOR) {
            let this = self.clone();
            let href = link.get_attribute("href").unwrap_or_default();
            dom::listen(&link, "click", move |ev: web::Event| {
                let Some(target) = input::anchor_target(&href) else {
                    return;
                };
                ev.prevent_default();
                if target == PACKAGES_ID {
                    this.show_packages();
                } else {
                    this.scroll_to_section(target);
                }
                this.close_menu();
            });
        }
    }

    /// Smooth-scroll so the section sits below the fixed navbar, then move
    /// focus to it once the scroll has had time to finish.
    pub fn scroll_to_section(&self, id: &str) {
        let Some(section) = dom::by_id::<web::HtmlElement>(&self.document, id) else {
            log::warn!("[nav] section not found: {id}");
            return;
        };
        let top = section_scroll_target(
            section.get_bounding_client_rect().top(),
            dom::page_scroll_y(),
        );
        dom::smooth_scroll_to(top);
        self.lifecycle.arm(&self.focus_slot, SECTION_FOCUS_DELAY_MS, move || {
            _ = section.set_attribute("tabindex", "-1");
            _ = section.focus();
            _ = section.remove_attribute("tabindex");
        });
    }

    fn wire_navbar(self: &Rc<Self>) {
        let (Some(window), Some(navbar)) = (
            web::window(),
            dom::query_doc::<web::HtmlElement>(&self.document, NAVBAR_SELECTOR),
        ) else {
            return;
        };
        let this = self.clone();
        dom::listen_passive(&window, "scroll", move |_: web::Event| {
            if this.navbar_pending.replace(true) {
                return;
            }
            let (pending, navbar) = (this.clone(), navbar.clone());
            this.lifecycle.arm(&this.navbar_slot, NAV_SCROLL_THROTTLE_MS, move || {
                let (background, shadow) = if navbar_is_scrolled(dom::page_scroll_y()) {
                    NAVBAR_SCROLLED_STYLE
                } else {
                    NAVBAR_TOP_STYLE
                };
                dom::set_style(&navbar, "background", background);
                dom::set_style(&navbar, "box-shadow", shadow);
                pending.navbar_pending.set(false);
            });
        });
    }

    fn wire_menu(self: &Rc<Self>) {
        let (Some(hamburger), Some(nav_menu)) = (&self.hamburger, &self.nav_menu) else {
            return;
        };
        let this = self.clone();
        dom::listen(hamburger, "click", move |_: web::Event| {
            let open = this.menu.borrow_mut().toggle();
            this.sync_menu(open);
        });

        let this = self.clone();
        let (hamburger, nav_menu) = (hamburger.clone(), nav_menu.clone());
        dom::listen(&self.document, "click", move |ev: web::Event| {
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            let inside = hamburger.contains(target.as_ref()) || nav_menu.contains(target.as_ref());
            if !inside {
                this.close_menu();
            }
        });
    }

    /// `true` if the mobile menu was open.
    pub fn close_menu(&self) -> bool {
        let closed = self.menu.borrow_mut().close();
        if closed {
            self.sync_menu(false);
        }
        closed
    }

    fn sync_menu(&self, open: bool) {
        if let Some(h) = &self.hamburger {
            _ = h.set_attribute("aria-expanded", if open { "true" } else { "false" });
            _ = h.class_list().toggle_with_force(ACTIVE_CLASS, open);
        }
        if let Some(m) = &self.nav_menu {
            _ = m.class_list().toggle_with_force(ACTIVE_CLASS, open);
        }
    }

    fn wire_hero(self: &Rc<Self>) {
        let slides = dom::query_all_doc::<web::Element>(&self.document, HERO_SLIDE_SELECTOR);
        let Some(first) = slides.first() else {
            return;
        };
        dom::add_class(first, ACTIVE_CLASS);
        let rotation = Rc::new(RefCell::new(HeroRotation::new(slides.len())));

        if let Some(hero) = dom::query_doc::<web::Element>(&self.document, HERO_SELECTOR) {
            for (event, paused) in [("mouseenter", true), ("mouseleave", false)] {
                let r = rotation.clone();
                dom::listen(&hero, event, move |_: web::Event| {
                    r.borrow_mut().set_paused(paused);
                });
            }
        }
        self.lifecycle.every(HERO_SLIDE_MS, move || {
            let step = rotation.borrow_mut().tick();
            if let Some((prev, next)) = step {
                if let (Some(a), Some(b)) = (slides.get(prev), slides.get(next)) {
                    dom::remove_class(a, ACTIVE_CLASS);
                    dom::add_class(b, ACTIVE_CLASS);
                }
            }
        });
    }

    fn wire_packages(self: &Rc<Self>) {
        let Some(btn) = self.document.get_element_by_id(VIEW_PACKAGES_ID) else {
            return;
        };
        let this = self.clone();
        dom::listen(&btn, "click", move |ev: web::Event| {
            ev.prevent_default();
            ev.stop_propagation();
            this.toggle_packages();
        });
    }

    fn packages(&self) -> Option<web::HtmlElement> {
        dom::by_id(&self.document, PACKAGES_ID)
    }

    pub fn toggle_packages(self: &Rc<Self>) {
        let Some(section) = self.packages() else {
            return;
        };
        let visible = !dom::has_class(&section, HIDDEN_CLASS) && dom::has_class(&section, SHOW_CLASS);
        if !visible {
            self.show_packages();
            return;
        }
        dom::remove_class(&section, SHOW_CLASS);
        self.lifecycle.arm(&self.packages_slot, PACKAGES_HIDE_MS, move || {
            dom::add_class(&section, HIDDEN_CLASS);
            dom::clear_style(&section, "display");
            dom::clear_style(&section, "opacity");
        });
    }

    /// Reveal the packages section, fade it in and scroll to it.
    pub fn show_packages(self: &Rc<Self>) {
        let Some(section) = self.packages() else {
            log::warn!("[nav] packages section not found");
            return;
        };
        dom::remove_class(&section, HIDDEN_CLASS);
        dom::set_style(&section, "display", "block");
        dom::set_style(&section, "opacity", "0");
        let this = self.clone();
        self.lifecycle.arm(&self.packages_slot, PACKAGES_FADE_IN_MS, move || {
            dom::add_class(&section, SHOW_CLASS);
            dom::set_style(&section, "opacity", "1");
            let scroll = this.clone();
            this.lifecycle
                .arm(&this.packages_scroll_slot, PACKAGES_SCROLL_MS, move || {
                    scroll.scroll_to_section(PACKAGES_ID)
                });
        });
    }
}

/// Package dropdown headers open and close together with every other
/// header carrying the same title.
fn wire_dropdowns(document: &web::Document) {
    let parts: Vec<(web::Element, web::HtmlElement, String)> =
        dom::query_all_doc::<web::Element>(document, PACKAGE_CATEGORY_SELECTOR)
            .iter()
            .filter_map(|section| {
                let header = dom::query::<web::Element>(section, DROPDOWN_TOGGLE_SELECTOR)?;
                let content = dom::query::<web::HtmlElement>(section, DROPDOWN_CONTENT_SELECTOR)?;
                let title = dom::query::<web::Element>(&header, DROPDOWN_TITLE_SELECTOR)
                    .and_then(|t| t.text_content())
                    .unwrap_or_default();
                Some((header, content, title))
            })
            .collect();
    if parts.is_empty() {
        return;
    }
    let groups = Rc::new(RefCell::new(DropdownGroups::new(
        parts.iter().map(|(_, _, title)| title.as_str()),
    )));
    let parts: Rc<Vec<(web::Element, web::HtmlElement)>> =
        Rc::new(parts.into_iter().map(|(h, c, _)| (h, c)).collect());

    for (i, (header, content)) in parts.iter().enumerate() {
        set_dropdown(header, content, false);
        let (groups, parts) = (groups.clone(), parts.clone());
        dom::listen(header, "click", move |ev: web::Event| {
            ev.prevent_default();
            ev.stop_propagation();
            let (touched, open) = groups.borrow_mut().toggle(i);
            for j in touched {
                if let Some((h, c)) = parts.get(j) {
                    set_dropdown(h, c, open);
                }
            }
        });
    }
    log::debug!("[nav] {} package dropdowns ready", parts.len());
}

fn set_dropdown(header: &web::Element, content: &web::HtmlElement, open: bool) {
    _ = header.class_list().toggle_with_force(ACTIVE_CLASS, open);
    _ = content.class_list().toggle_with_force(SHOW_CLASS, open);
    let max_height = if open {
        format!("{DROPDOWN_OPEN_MAX_HEIGHT_PX}px")
    } else {
        "0".to_string()
    };
    dom::set_style(content, "max-height", &max_height);
    dom::set_style(content, "opacity", if open { "1" } else { "0" });
}

/// One FAQ answer open at a time.
fn wire_faq(document: &web::Document) {
    let questions = Rc::new(dom::query_all_doc::<web::Element>(document, FAQ_QUESTION_SELECTOR));
    let accordion = Rc::new(RefCell::new(Accordion::default()));
    for (i, question) in questions.iter().enumerate() {
        let (questions, accordion) = (questions.clone(), accordion.clone());
        dom::listen(question, "click", move |_: web::Event| {
            let open = accordion.borrow_mut().toggle(i);
            for (j, q) in questions.iter().enumerate() {
                let active = open == Some(j);
                _ = q.class_list().toggle_with_force(ACTIVE_CLASS, active);
                let answer = q
                    .closest(FAQ_ITEM_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|item| dom::query::<web::Element>(&item, FAQ_ANSWER_SELECTOR));
                if let Some(answer) = answer {
                    _ = answer.class_list().toggle_with_force(SHOW_CLASS, active);
                }
            }
        });
    }
}

/// Fade and slide elements in the first time they scroll into view.
pub struct ScrollAnimations {
    observer: web::IntersectionObserver,
}

impl ScrollAnimations {
    /// `None` when the browser has no IntersectionObserver.
    pub fn install() -> Option<Self> {
        let window = web::window()?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            log::info!("[nav] IntersectionObserver unavailable, skipping scroll animations");
            return None;
        }
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    dom::add_class(&target, "animate-in");
                    if let Ok(el) = target.clone().dyn_into::<web::HtmlElement>() {
                        dom::set_style(&el, "transform", "translateY(0)");
                        dom::set_style(&el, "opacity", "1");
                    }
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ANIMATE_THRESHOLD));
        options.set_root_margin(ANIMATE_ROOT_MARGIN);
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        callback.forget();
        Some(Self { observer })
    }

    pub fn observe_all(&self, document: &web::Document) {
        for el in dom::query_all_doc::<web::HtmlElement>(document, ANIMATED_SELECTOR) {
            self.observe(&el);
        }
    }

    pub fn observe(&self, el: &web::HtmlElement) {
        dom::set_style(el, "transform", ANIMATE_START_TRANSFORM);
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transition", ANIMATE_TRANSITION);
        self.observer.observe(el);
    }
}
