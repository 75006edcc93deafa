//! Projects strip controller: owns the scroll container, the shared
//! [`CarouselState`] and the animation-frame loop that auto-scrolls it.

use crate::constants::PROJECT_CARD_CLASS;
use crate::dom;
use crate::lifecycle::{Lifecycle, TimerSlot};
use site_core::{
    CarouselConfig, CarouselState, CAROUSEL_START_DELAY_MS, SCROLL_RECHECK_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CarouselController {
    pub container: web::HtmlElement,
    pub track: web::Element,
    pub state: RefCell<CarouselState>,
    pub lifecycle: Rc<Lifecycle>,
    settle_slot: TimerSlot,
    recheck_slot: TimerSlot,
    running: Cell<bool>,
}

impl CarouselController {
    /// The scroll container is the track's parent element.
    pub fn new(
        track: web::Element,
        config: CarouselConfig,
        lifecycle: Rc<Lifecycle>,
    ) -> anyhow::Result<Rc<Self>> {
        let container = track
            .parent_element()
            .ok_or_else(|| anyhow::anyhow!("projects track has no scroll container"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = container.set_attribute("tabindex", "0");
        dom::set_style(&container, "cursor", "grab");
        dom::set_style(&container, "scroll-behavior", "auto");
        if let Ok(html_track) = track.clone().dyn_into::<web::HtmlElement>() {
            dom::set_style(&html_track, "animation", "none");
        }
        Ok(Rc::new(Self {
            settle_slot: lifecycle.slot(),
            recheck_slot: lifecycle.slot(),
            running: Cell::new(false),
            container,
            track,
            state: RefCell::new(CarouselState::new(config)),
            lifecycle,
        }))
    }

    /// Re-read card count and width from the rendered track.
    pub fn measure(&self) {
        let cards: Vec<web::HtmlElement> =
            dom::query_all(&self.track, &format!(".{PROJECT_CARD_CLASS}"));
        let width = cards.first().map(|c| f64::from(c.offset_width()));
        let mut state = self.state.borrow_mut();
        state.set_geometry(cards.len(), width);
        log::debug!(
            "[carousel] {} cards, stride {:.0}px, pass {:.0}px",
            cards.len(),
            state.stride(),
            state.pass_width()
        );
    }

    pub fn write(&self, offset: f64) {
        dom::set_scroll_left(&self.container, offset);
    }

    pub fn apply(&self, offset: Option<f64>) {
        if let Some(offset) = offset {
            self.write(offset);
        }
    }

    pub fn set_cursor(&self, cursor: &str) {
        dom::set_style(&self.container, "cursor", cursor);
    }

    /// Resume auto-scroll after `millis` unless a newer interaction began.
    pub fn schedule_settle(self: &Rc<Self>, token: u64, millis: u32) {
        let this = self.clone();
        self.lifecycle.arm(&self.settle_slot, millis, move || {
            if this.state.borrow_mut().settle(token) {
                log::debug!("[carousel] resumed auto-scroll");
            }
        });
    }

    /// Snap a native scroll (momentum, scrollbar, focus) back into range,
    /// then check again once it has settled.
    pub fn on_native_scroll(self: &Rc<Self>) {
        if !self.state.borrow().is_dragging {
            self.sync_from_dom();
        }
        let this = self.clone();
        self.lifecycle
            .arm(&self.recheck_slot, SCROLL_RECHECK_MS, move || this.sync_from_dom());
    }

    fn sync_from_dom(&self) {
        let dom_offset = dom::scroll_left(&self.container);
        let fix = self.state.borrow_mut().observe_scroll(dom_offset);
        self.apply(fix);
    }

    /// Measure once layout exists, place the strip at its start offset and
    /// run the animation loop. A page restored from the back/forward cache
    /// picks the loop up again.
    pub fn start(self: &Rc<Self>) {
        self.schedule_start();
        let this = self.clone();
        self.lifecycle.on_resume(move || this.resume());
    }

    fn schedule_start(self: &Rc<Self>) {
        let this = self.clone();
        self.lifecycle.after(CAROUSEL_START_DELAY_MS, move || {
            this.measure();
            let offset = this.state.borrow_mut().start();
            this.write(offset);
            this.running.set(true);
            start_loop(this.clone());
            log::info!("[carousel] infinite strip started");
        });
    }

    fn resume(self: &Rc<Self>) {
        if !self.running.get() {
            // hidden before the first start fired
            self.schedule_start();
            return;
        }
        self.set_cursor("grab");
        let offset = self.state.borrow_mut().resume();
        self.write(offset);
        start_loop(self.clone());
        log::debug!("[carousel] resumed after page restore");
    }

    fn frame(&self) {
        let next = self.state.borrow_mut().tick();
        self.apply(next);
    }
}

/// requestAnimationFrame loop. Stops when the page lifecycle is torn down;
/// a loop from an earlier epoch never restarts itself.
pub fn start_loop(carousel: Rc<CarouselController>) {
    let epoch = carousel.lifecycle.epoch();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let carousel_tick = carousel.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !carousel_tick.lifecycle.is_current(epoch) {
            tick_clone.borrow_mut().take();
            return;
        }
        carousel_tick.frame();
        request_frame(&carousel_tick.lifecycle, &tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&carousel.lifecycle, &tick);
}

fn request_frame(lifecycle: &Lifecycle, tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            lifecycle.set_raf(id);
        }
    }
}
