use crate::carousel::CarouselController;
use crate::dom;
use crate::input;
use site_core::{DragSource, DRAG_SETTLE_MS, WHEEL_SETTLE_MS};
use std::rc::Rc;
use web_sys as web;

/// Attach mouse, touch, wheel, scroll and resize handlers to the strip.
/// Called once per page; re-renders only re-measure.
pub fn wire_carousel_input(c: &Rc<CarouselController>) {
    wire_mouse(c);
    wire_touch(c);
    wire_wheel(c);
    wire_scroll(c);
    wire_resize(c);
}

fn wire_mouse(c: &Rc<CarouselController>) {
    let down = c.clone();
    dom::listen(&c.container, "mousedown", move |ev: web::MouseEvent| {
        ev.prevent_default();
        down.state
            .borrow_mut()
            .begin_drag(f64::from(ev.page_x()), DragSource::Mouse);
        down.set_cursor("grabbing");
    });

    let moved = c.clone();
    dom::listen(&c.container, "mousemove", move |ev: web::MouseEvent| {
        if !moved.state.borrow().is_dragging {
            return;
        }
        ev.prevent_default();
        let next = moved.state.borrow_mut().drag_to(f64::from(ev.page_x()));
        moved.apply(next);
    });

    let up = c.clone();
    dom::listen(&c.container, "mouseup", move |_: web::MouseEvent| {
        release(&up);
    });

    let leave = c.clone();
    dom::listen(&c.container, "mouseleave", move |_: web::MouseEvent| {
        if leave.state.borrow_mut().cancel_drag() {
            leave.set_cursor("grab");
        }
    });
}

fn wire_touch(c: &Rc<CarouselController>) {
    let start = c.clone();
    dom::listen_passive(&c.container, "touchstart", move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            start
                .state
                .borrow_mut()
                .begin_drag(f64::from(t.page_x()), DragSource::Touch);
        }
    });

    let moved = c.clone();
    dom::listen_passive(&c.container, "touchmove", move |ev: web::TouchEvent| {
        let Some(t) = ev.touches().get(0) else {
            return;
        };
        let next = moved.state.borrow_mut().drag_to(f64::from(t.page_x()));
        moved.apply(next);
    });

    for name in ["touchend", "touchcancel"] {
        let end = c.clone();
        dom::listen_passive(&c.container, name, move |_: web::TouchEvent| {
            release(&end);
        });
    }
}

fn release(c: &Rc<CarouselController>) {
    let ended = c.state.borrow_mut().end_drag();
    if let Some((offset, token)) = ended {
        c.set_cursor("grab");
        c.write(offset);
        c.schedule_settle(token, DRAG_SETTLE_MS);
    }
}

fn wire_wheel(c: &Rc<CarouselController>) {
    let w = c.clone();
    dom::listen(&c.container, "wheel", move |ev: web::WheelEvent| {
        let (dx, dy) = (ev.delta_x(), ev.delta_y());
        if !input::is_vertical_wheel(dx, dy) {
            return;
        }
        let captured = w.state.borrow_mut().wheel(dx, dy);
        if let Some((offset, token)) = captured {
            ev.prevent_default();
            w.write(offset);
            w.schedule_settle(token, WHEEL_SETTLE_MS);
        }
    });
}

fn wire_scroll(c: &Rc<CarouselController>) {
    let s = c.clone();
    dom::listen_passive(&c.container, "scroll", move |_: web::Event| {
        s.on_native_scroll();
    });
}

fn wire_resize(c: &Rc<CarouselController>) {
    let Some(window) = web::window() else {
        return;
    };
    let r = c.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        r.measure();
        let offset = r.state.borrow_mut().rewrap();
        r.write(offset);
    });
}
