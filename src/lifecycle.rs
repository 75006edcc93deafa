use gloo_timers::callback::{Interval, Timeout};
use site_core::PageLatch;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// A single pending delayed action. Arming it again replaces (and cancels)
/// whatever it held.
pub type TimerSlot = Rc<RefCell<Option<Timeout>>>;

/// A repeating action. The handle is dropped while the page is hidden and
/// recreated from `tick` when it comes back.
struct Repeating {
    millis: u32,
    tick: Rc<RefCell<dyn FnMut()>>,
    handle: Option<Interval>,
}

impl Repeating {
    fn schedule(&mut self) {
        let tick = self.tick.clone();
        self.handle = Some(Interval::new(self.millis, move || {
            (&mut *tick.borrow_mut())();
        }));
    }
}

/// Owns every timer and the animation-frame id the page starts, so they can
/// all be stopped together on `pagehide` and restarted on a back/forward
/// cache restore.
#[derive(Default)]
pub struct Lifecycle {
    latch: RefCell<PageLatch>,
    slots: RefCell<Vec<TimerSlot>>,
    oneshots: RefCell<Vec<(Rc<Cell<bool>>, Timeout)>>,
    repeating: RefCell<Vec<Repeating>>,
    resume_hooks: RefCell<Vec<Box<dyn Fn()>>>,
    raf_id: Cell<Option<i32>>,
}

impl Lifecycle {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a new timer slot.
    pub fn slot(&self) -> TimerSlot {
        let slot: TimerSlot = Rc::new(RefCell::new(None));
        self.slots.borrow_mut().push(slot.clone());
        slot
    }

    pub fn arm(&self, slot: &TimerSlot, millis: u32, f: impl FnOnce() + 'static) {
        if self.is_stopped() {
            return;
        }
        *slot.borrow_mut() = Some(Timeout::new(millis, f));
    }

    /// Fire-and-forget timer. Handles of timers that already ran are
    /// dropped the next time one is scheduled.
    pub fn after(&self, millis: u32, f: impl FnOnce() + 'static) {
        if self.is_stopped() {
            return;
        }
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        let timeout = Timeout::new(millis, move || {
            f();
            flag.set(true);
        });
        let mut oneshots = self.oneshots.borrow_mut();
        oneshots.retain(|(done, _)| !done.get());
        oneshots.push((done, timeout));
    }

    pub fn every(&self, millis: u32, f: impl FnMut() + 'static) {
        let mut repeating = Repeating {
            millis,
            tick: Rc::new(RefCell::new(f)),
            handle: None,
        };
        if !self.is_stopped() {
            repeating.schedule();
        }
        self.repeating.borrow_mut().push(repeating);
    }

    /// Run `f` each time the page is restored after [`teardown`](Self::teardown).
    pub fn on_resume(&self, f: impl Fn() + 'static) {
        self.resume_hooks.borrow_mut().push(Box::new(f));
    }

    pub fn set_raf(&self, id: i32) {
        self.raf_id.set(Some(id));
    }

    pub fn is_stopped(&self) -> bool {
        self.latch.borrow().is_stopped()
    }

    pub fn epoch(&self) -> u64 {
        self.latch.borrow().epoch()
    }

    /// Whether an animation loop started in `epoch` may keep going.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.latch.borrow().is_current(epoch)
    }

    /// Cancel everything. Timers armed afterwards are ignored until
    /// [`resume`](Self::resume).
    pub fn teardown(&self) {
        if !self.latch.borrow_mut().stop() {
            return;
        }
        let pending = self
            .slots
            .borrow()
            .iter()
            .filter(|s| s.borrow_mut().take().is_some())
            .count()
            + std::mem::take(&mut *self.oneshots.borrow_mut())
                .iter()
                .filter(|(done, _)| !done.get())
                .count();
        let mut intervals = 0;
        for r in self.repeating.borrow_mut().iter_mut() {
            if r.handle.take().is_some() {
                intervals += 1;
            }
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[lifecycle] stopped {pending} timers and {intervals} intervals");
    }

    /// The page was restored from the back/forward cache: accept timers
    /// again, restart intervals and let components pick up where they were.
    pub fn resume(&self) {
        let Some(epoch) = self.latch.borrow_mut().resume() else {
            return;
        };
        for r in self.repeating.borrow_mut().iter_mut() {
            r.schedule();
        }
        // hooks may register further hooks while running
        let hooks = std::mem::take(&mut *self.resume_hooks.borrow_mut());
        for hook in &hooks {
            hook();
        }
        let mut current = self.resume_hooks.borrow_mut();
        let added = std::mem::replace(&mut *current, hooks);
        current.extend(added);
        log::info!("[lifecycle] resumed (epoch {epoch}), {} hooks run", current.len());
    }
}
