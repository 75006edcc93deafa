//! Page visibility latch for timers and the animation loop.
//!
//! `pagehide` stops everything the page scheduled. A page kept in the
//! back/forward cache comes back through `pageshow` with the same state, so
//! stopping is not final: resuming reopens the latch under a new epoch and
//! loops started before the stop see that their epoch is gone.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLatch {
    stopped: bool,
    epoch: u64,
}

impl PageLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// New timers are refused while stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// `true` only for the call that actually stopped a running page.
    pub fn stop(&mut self) -> bool {
        !std::mem::replace(&mut self.stopped, true)
    }

    /// Reopen after a restore. Returns the new epoch, or `None` when the
    /// page was never stopped and nothing has to be restarted.
    pub fn resume(&mut self) -> Option<u64> {
        if !std::mem::replace(&mut self.stopped, false) {
            return None;
        }
        self.epoch = self.epoch.wrapping_add(1);
        Some(self.epoch)
    }

    /// Whether a loop started in `epoch` may keep running.
    pub fn is_current(&self, epoch: u64) -> bool {
        !self.stopped && self.epoch == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_reported_once() {
        let mut latch = PageLatch::new();
        assert!(latch.stop());
        assert!(!latch.stop());
        assert!(latch.is_stopped());
    }

    #[test]
    fn resume_without_stop_is_a_no_op() {
        let mut latch = PageLatch::new();
        assert_eq!(latch.resume(), None);
        assert_eq!(latch.epoch(), 0);
    }

    #[test]
    fn restored_page_accepts_timers_again() {
        let mut latch = PageLatch::new();
        let first = latch.epoch();
        latch.stop();
        assert!(!latch.is_current(first));
        let second = latch.resume().expect("page was stopped");
        assert!(!latch.is_stopped());
        assert_ne!(first, second);
        // a loop from before the stop must not come back to life
        assert!(!latch.is_current(first));
        assert!(latch.is_current(second));
    }

    #[test]
    fn repeated_hide_show_cycles() {
        let mut latch = PageLatch::new();
        for expected in 1..=3 {
            assert!(latch.stop());
            assert_eq!(latch.resume(), Some(expected));
        }
        assert!(latch.is_current(3));
    }
}
