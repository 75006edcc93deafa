use crate::constants::*;
use crate::dom;
use crate::input::{self, ViewerKey};
use site_core::{ModalNav, Project, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// The `<dialog>` that pages through one project's images.
pub struct ProjectModal {
    dialog: web::HtmlDialogElement,
    nav: RefCell<ModalNav>,
    project: RefCell<Option<Rc<Project>>>,
    config: Rc<SiteConfig>,
}

impl ProjectModal {
    /// Find the dialog and wire its buttons, keys and backdrop. `None` when
    /// the page has no viewer.
    pub fn mount(document: &web::Document, config: Rc<SiteConfig>) -> Option<Rc<Self>> {
        let dialog = dom::by_id::<web::HtmlDialogElement>(document, PROJECTS_MODAL_ID)?;
        let modal = Rc::new(Self {
            dialog,
            nav: RefCell::new(ModalNav::new()),
            project: RefCell::new(None),
            config,
        });
        modal.wire();
        Some(modal)
    }

    fn wire(self: &Rc<Self>) {
        let root: &web::Element = self.dialog.as_ref();
        let buttons: [(&str, Option<i32>); 3] = [
            (GALLERY_CLOSE_SELECTOR, None),
            (GALLERY_PREV_SELECTOR, Some(-1)),
            (GALLERY_NEXT_SELECTOR, Some(1)),
        ];
        for (selector, direction) in buttons {
            if let Some(btn) = dom::query::<web::Element>(root, selector) {
                let m = self.clone();
                dom::listen(&btn, "click", move |_: web::Event| match direction {
                    Some(d) => m.navigate(d),
                    None => m.close(),
                });
            }
        }

        let keys = self.clone();
        dom::listen(&self.dialog, "keydown", move |ev: web::KeyboardEvent| {
            match input::viewer_key(&ev.key()) {
                Some(ViewerKey::Close) => {
                    // keep the native cancel from closing behind our back
                    ev.prevent_default();
                    ev.stop_propagation();
                    keys.close();
                }
                Some(ViewerKey::Navigate(d)) => keys.navigate(d),
                None => {}
            }
        });

        let backdrop = self.clone();
        dom::listen(&self.dialog, "click", move |ev: web::Event| {
            if dom::is_self_target(&ev, backdrop.dialog.as_ref()) {
                backdrop.close();
            }
        });
    }

    pub fn is_open(&self) -> bool {
        self.nav.borrow().is_open()
    }

    pub fn open(&self, project: Rc<Project>) {
        self.nav.borrow_mut().open(&project);
        *self.project.borrow_mut() = Some(project.clone());
        let root: &web::Element = self.dialog.as_ref();
        if let Some(title) = dom::query::<web::Element>(root, &format!("#{PROJECTS_MODAL_TITLE_ID}")) {
            dom::set_text(&title, &project.title);
        }
        self.render_image();
        if let Err(e) = self.dialog.show_modal() {
            log::warn!("[viewer] showModal failed: {:?}", e);
        }
        if let Some(first) = dom::query::<web::HtmlElement>(root, FOCUSABLE_SELECTOR) {
            _ = first.focus();
        }
        log::debug!("[viewer] opened {}", project.id);
    }

    pub fn navigate(&self, direction: i32) {
        if self.nav.borrow_mut().navigate(direction).is_some() {
            self.render_image();
        }
    }

    /// Close and hand focus back to the card that opened the viewer.
    pub fn close(&self) {
        let closed = self.nav.borrow_mut().close();
        self.project.borrow_mut().take();
        self.dialog.close();
        let Some(id) = closed else {
            return;
        };
        let card = dom::window_document().and_then(|doc| {
            dom::query_doc::<web::HtmlElement>(&doc, &format!("[data-project-id=\"{id}\"]"))
        });
        if let Some(card) = card {
            _ = card.focus();
        }
    }

    fn render_image(&self) {
        let project = self.project.borrow();
        let (Some(project), Some(index)) = (project.as_ref(), self.nav.borrow().index()) else {
            return;
        };
        let Some(image) = project.images.get(index) else {
            return;
        };
        let root: &web::Element = self.dialog.as_ref();
        if let Some(container) = dom::query::<web::Element>(root, GALLERY_IMAGES_SELECTOR) {
            match self.build_image(&image.original.src, &image.original.alt) {
                Ok(img) => {
                    container.set_inner_html("");
                    _ = container.append_child(&img);
                }
                Err(e) => log::warn!("[viewer] image element: {:?}", e),
            }
        }
        if let Some((current, total)) = self.nav.borrow().counter() {
            if let Some(el) = dom::query::<web::Element>(root, GALLERY_CURRENT_SELECTOR) {
                dom::set_text(&el, &current.to_string());
            }
            if let Some(el) = dom::query::<web::Element>(root, GALLERY_TOTAL_SELECTOR) {
                dom::set_text(&el, &total.to_string());
            }
        }
    }

    fn build_image(&self, src: &str, alt: &str) -> Result<web::Element, JsValue> {
        let doc = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let img = doc.create_element("img")?;
        img.set_attribute("src", &self.config.asset_url(src))?;
        img.set_attribute("alt", alt)?;
        img.set_attribute("style", MODAL_IMAGE_STYLE)?;
        Ok(img)
    }
}
