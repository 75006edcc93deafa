//! Renders project cards into the carousel track.

use crate::constants::*;
use crate::dom;
use crate::modal::ProjectModal;
use site_core::{loop_sequence, ImageFormat, Project, ProjectImage, SiteConfig};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct Gallery {
    pub track: web::Element,
    config: Rc<SiteConfig>,
    modal: Option<Rc<ProjectModal>>,
    lcp_preloaded: Cell<bool>,
}

impl Gallery {
    pub fn new(track: web::Element, config: Rc<SiteConfig>, modal: Option<Rc<ProjectModal>>) -> Self {
        Self {
            track,
            config,
            modal,
            lcp_preloaded: Cell::new(false),
        }
    }

    /// Replace the track contents with two passes of the visible projects.
    /// Returns the number of cards rendered; zero when every project is
    /// excluded or the list is empty.
    pub fn render(&self, projects: &[Rc<Project>]) -> Result<usize, JsValue> {
        let doc = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let strip = loop_sequence(projects, &self.config.excluded_project_ids);
        if strip.is_empty() {
            log::warn!("[gallery] no projects to render ({} loaded)", projects.len());
            self.track
                .set_inner_html(&format!("<p>{NO_PROJECTS_TEXT}</p>"));
            return Ok(0);
        }
        self.track.set_inner_html("");
        self.preload_lcp(&doc, &strip);

        for (i, project) in strip.iter().enumerate() {
            let card = self.card(&doc, project, i == 0)?;
            self.track.append_child(&card)?;
        }
        log::info!(
            "[gallery] rendered {} cards for {} projects",
            strip.len(),
            projects.len()
        );
        Ok(strip.len())
    }

    /// Error panel with a retry button that runs `on_retry`.
    pub fn render_error(&self, on_retry: impl FnMut() + 'static) -> Result<(), JsValue> {
        let doc = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let panel = doc.create_element("div")?;
        panel.set_class_name(PROJECTS_LOADING_CLASS);
        let text = doc.create_element("p")?;
        dom::set_text(&text, LOAD_ERROR_TEXT);
        let button = doc.create_element("button")?;
        button.set_class_name("btn btn--primary");
        dom::set_text(&button, RETRY_TEXT);
        panel.append_child(&text)?;
        panel.append_child(&button)?;
        self.track.set_inner_html("");
        self.track.append_child(&panel)?;

        let mut on_retry = on_retry;
        dom::listen(&button, "click", move |_: web::Event| on_retry());
        Ok(())
    }

    fn card(&self, doc: &web::Document, project: &Rc<Project>, eager: bool) -> Result<web::Element, JsValue> {
        let card = doc.create_element("article")?;
        card.set_class_name(PROJECT_CARD_CLASS);
        card.set_attribute("data-project-id", &project.id)?;
        card.set_attribute("tabindex", "0")?;
        card.set_attribute("style", CARD_STYLE)?;

        let media = doc.create_element("div")?;
        media.set_class_name(PROJECT_IMAGE_CLASS);
        media.set_attribute("style", CARD_MEDIA_STYLE)?;
        if let Some(image) = project.cover() {
            let picture = self.picture(doc, image, eager)?;
            media.append_child(&picture)?;
            if let Some(img) = dom::query::<web::Element>(&picture, "img") {
                wire_image_fallback(&img, &media, &project.title);
            }
        }

        let info = doc.create_element("div")?;
        info.set_attribute("style", CARD_INFO_STYLE)?;
        let title = doc.create_element("h3")?;
        dom::set_text(&title, &project.title);
        let description = doc.create_element("p")?;
        dom::set_text(&description, &project.description);
        let count = doc.create_element("p")?;
        count.set_class_name("project-count");
        dom::set_text(&count, &format!("{} images", project.images.len()));
        info.append_child(&title)?;
        info.append_child(&description)?;
        info.append_child(&count)?;

        card.append_child(&media)?;
        card.append_child(&info)?;

        if let Some(modal) = &self.modal {
            let (m, p) = (modal.clone(), project.clone());
            dom::listen(&card, "click", move |_: web::Event| m.open(p.clone()));
            let (m, p) = (modal.clone(), project.clone());
            dom::listen(&card, "keydown", move |ev: web::KeyboardEvent| {
                if ev.key() == "Enter" {
                    m.open(p.clone());
                }
            });
        }
        Ok(card)
    }

    /// `<picture>` with AVIF/WebP sources when the image has variants.
    fn picture(&self, doc: &web::Document, image: &ProjectImage, eager: bool) -> Result<web::Element, JsValue> {
        let url_for = |src: &str| self.config.asset_url(src);
        let picture = doc.create_element("picture")?;
        for format in [ImageFormat::Avif, ImageFormat::Webp] {
            let (Some(srcset), Some(mime)) = (image.srcset(format, url_for), format.mime()) else {
                continue;
            };
            let source = doc.create_element("source")?;
            source.set_attribute("type", mime)?;
            source.set_attribute("srcset", &srcset)?;
            source.set_attribute("sizes", CARD_IMAGE_SIZES)?;
            picture.append_child(&source)?;
        }

        let img = doc.create_element("img")?;
        img.set_attribute("src", &url_for(&image.original.src))?;
        img.set_attribute("alt", &image.original.alt)?;
        img.set_attribute("width", &image.original.width.to_string())?;
        img.set_attribute("height", &image.original.height.to_string())?;
        img.set_attribute("style", CARD_IMAGE_STYLE)?;
        img.set_attribute("loading", if eager { "eager" } else { "lazy" })?;
        img.set_attribute("decoding", "async")?;
        if eager {
            img.set_attribute("fetchpriority", "high")?;
        }
        if let Some(srcset) = image.srcset(ImageFormat::Jpeg, url_for) {
            img.set_attribute("srcset", &srcset)?;
            img.set_attribute("sizes", CARD_IMAGE_SIZES)?;
        }
        picture.append_child(&img)?;
        Ok(picture)
    }

    /// Preload the LCP cover once per page.
    fn preload_lcp(&self, doc: &web::Document, projects: &[Rc<Project>]) {
        if self.lcp_preloaded.get() {
            return;
        }
        let Some(variant) = projects
            .iter()
            .filter_map(|p| p.cover())
            .find(|img| img.is_lcp)
            .and_then(ProjectImage::lcp_preload)
        else {
            return;
        };
        let Some(head) = doc.head() else {
            return;
        };
        let Ok(link) = doc.create_element("link") else {
            return;
        };
        _ = link.set_attribute("rel", "preload");
        _ = link.set_attribute("as", "image");
        _ = link.set_attribute("href", &self.config.asset_url(&variant.src));
        if let Some(mime) = variant.format.mime() {
            _ = link.set_attribute("type", mime);
        }
        _ = link.set_attribute("fetchpriority", "high");
        if head.append_child(&link).is_ok() {
            self.lcp_preloaded.set(true);
            log::debug!("[gallery] preloading {}", variant.src);
        }
    }
}

/// Swap a broken cover for an inline placeholder naming the project. One
/// attempt only; the image is not retried.
fn wire_image_fallback(img: &web::Element, media: &web::Element, title: &str) {
    let (img_el, media, title) = (img.clone(), media.clone(), title.to_string());
    dom::listen(img, "error", move |_: web::Event| {
        if img_el.get_attribute("data-failed").is_some() {
            return;
        }
        _ = img_el.set_attribute("data-failed", "");
        log::warn!(
            "[gallery] failed to load image: {}",
            img_el.get_attribute("src").unwrap_or_default()
        );
        _ = img_el.set_attribute("style", "display: none");
        let Some(doc) = dom::window_document() else {
            return;
        };
        if let Ok(placeholder) = doc.create_element("div") {
            _ = placeholder.set_attribute("style", IMAGE_PLACEHOLDER_STYLE);
            let label = doc.create_element("div").ok();
            let small = doc.create_element("small").ok();
            if let (Some(label), Some(small)) = (label, small) {
                dom::set_text(&small, &title);
                _ = label.append_with_str_1(IMAGE_UNAVAILABLE_TEXT);
                if let Ok(br) = doc.create_element("br") {
                    _ = label.append_child(&br);
                }
                _ = label.append_child(&small);
                _ = placeholder.append_child(&label);
            }
            _ = media.append_child(&placeholder);
        }
    });
}
