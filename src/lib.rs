#![cfg(target_arch = "wasm32")]
use constants::*;
use lifecycle::Lifecycle;
use site_core::{NotificationKind, SiteConfig};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod chrome;
mod constants;
mod dom;
mod events;
mod form;
mod gallery;
mod input;
mod lifecycle;
mod manifest;
mod modal;
mod overlay;
mod popup;
mod validation;

/// Defaults overridden by `data-*` attributes on the projects track.
fn site_config(track: &web::Element) -> SiteConfig {
    let mut config = SiteConfig::default();
    if let Some(csv) = track.get_attribute(EXCLUDE_ATTR) {
        config = config.with_excluded_ids(&csv);
    }
    if let Some(url) = track.get_attribute(MANIFEST_URL_ATTR).filter(|s| !s.is_empty()) {
        config.manifest_url = url;
    }
    if let Some(base) = track.get_attribute(ASSETS_BASE_ATTR) {
        config.assets_base = base;
    }
    config
}

/// Everything the projects strip needs to (re)load and render.
struct Projects {
    config: Rc<SiteConfig>,
    gallery: gallery::Gallery,
    carousel: Rc<carousel::CarouselController>,
    chrome: Rc<chrome::Chrome>,
    popups: Rc<popup::Popups>,
    started: Cell<bool>,
}

fn spawn_load(projects: Rc<Projects>) {
    spawn_local(async move {
        load_projects(projects).await;
    });
}

async fn load_projects(p: Rc<Projects>) {
    let rendered = match manifest::load(&p.config).await {
        Ok(list) => p.gallery.render(&list).map_err(|e| anyhow::anyhow!("{:?}", e)),
        Err(e) => Err(e),
    };
    match rendered {
        Ok(0) => {}
        Ok(_) => {
            p.chrome.animate_within(&p.gallery.track);
            if p.started.replace(true) {
                p.carousel.measure();
            } else {
                events::wire_carousel_input(&p.carousel);
                events::wire_carousel_keys(&p.carousel);
                p.carousel.start();
            }
        }
        Err(e) => {
            log::error!("[gallery] could not load projects: {e:#}");
            p.popups.show_notification(LOAD_ERROR_TEXT, NotificationKind::Error);
            let again = p.clone();
            if let Err(e) = p.gallery.render_error(move || spawn_load(again.clone())) {
                log::error!("[gallery] could not render retry panel: {:?}", e);
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("anelia-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let lifecycle = Lifecycle::new();
    let teardown = lifecycle.clone();
    dom::listen(&window, "pagehide", move |_: web::PageTransitionEvent| teardown.teardown());
    let restore = lifecycle.clone();
    dom::listen(&window, "pageshow", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            restore.resume();
        }
    });

    let chrome = chrome::Chrome::mount(&document, lifecycle.clone());
    let popups = popup::Popups::new(lifecycle.clone());
    let hardening = validation::Hardening::install(&document, popups.clone());
    let interior =
        form::InteriorForm::mount(&document, &hardening, popups.clone(), lifecycle.clone());
    let lead = form::LeadCapture::mount(&document, &hardening, popups.clone(), lifecycle.clone());
    if form::mount_contact_form(&document, popups.clone(), lifecycle.clone()).is_none() {
        log::warn!("[form] contact form or its result element not found");
    }

    let track = document
        .get_element_by_id(PROJECTS_TRACK_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{PROJECTS_TRACK_ID}"))?;
    let config = Rc::new(site_config(&track));
    let viewer = modal::ProjectModal::mount(&document, config.clone());

    events::wire_global_keydown(events::KeyboardWiring {
        chrome: chrome.clone(),
        popups: popups.clone(),
        interior,
        lead,
        viewer: viewer.clone(),
    });

    let carousel =
        carousel::CarouselController::new(track.clone(), config.carousel, lifecycle)?;
    let projects = Rc::new(Projects {
        gallery: gallery::Gallery::new(track, config.clone(), viewer),
        config,
        carousel,
        chrome,
        popups,
        started: Cell::new(false),
    });
    load_projects(projects).await;
    Ok(())
}
