//! Optimistic submit lifecycle shared by every lead form.
//!
//! The form POSTs natively to the third-party relay and the page never sees
//! its answer. Success is shown after a fixed processing delay and the form
//! is reset and re-enabled a little later.

use crate::constants::{SUBMIT_PROCESSING_MS, SUBMIT_RESET_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Ready,
    Processing,
    Resetting,
}

/// What the form does at each point of the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// Hydrate fields, show the progress message, disable the button.
    Disable,
    /// Hide the progress message, close the modal, show the success popup.
    ShowSuccess,
    /// Clear the form and re-enable the button.
    ResetAndEnable,
}

/// Offsets (ms from submit) of each step.
pub const SUBMIT_TIMELINE: [(u32, SubmitStep); 3] = [
    (0, SubmitStep::Disable),
    (SUBMIT_PROCESSING_MS, SubmitStep::ShowSuccess),
    (SUBMIT_PROCESSING_MS + SUBMIT_RESET_MS, SubmitStep::ResetAndEnable),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a submission is already in flight")]
pub struct SubmitInFlight;

#[derive(Clone, Debug)]
pub struct SubmitLifecycle {
    phase: SubmitPhase,
    enabled: bool,
}

impl SubmitLifecycle {
    pub fn new() -> Self {
        Self {
            phase: SubmitPhase::Ready,
            enabled: true,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start a submission: the button is disabled from here on.
    pub fn begin(&mut self) -> Result<SubmitStep, SubmitInFlight> {
        if self.phase != SubmitPhase::Ready {
            return Err(SubmitInFlight);
        }
        self.phase = SubmitPhase::Processing;
        self.enabled = false;
        Ok(SubmitStep::Disable)
    }

    pub fn processing_elapsed(&mut self) -> Option<SubmitStep> {
        if self.phase != SubmitPhase::Processing {
            return None;
        }
        self.phase = SubmitPhase::Resetting;
        Some(SubmitStep::ShowSuccess)
    }

    /// Returns `Some` exactly once per submission.
    pub fn reset_elapsed(&mut self) -> Option<SubmitStep> {
        if self.phase != SubmitPhase::Resetting {
            return None;
        }
        self.phase = SubmitPhase::Ready;
        self.enabled = true;
        Some(SubmitStep::ResetAndEnable)
    }

    /// Timers for an in-flight submission were cancelled (the page was
    /// hidden and later restored). Returns the step that puts the form back
    /// in its ready state, or `None` when nothing was in flight.
    pub fn recover(&mut self) -> Option<SubmitStep> {
        if self.phase == SubmitPhase::Ready {
            return None;
        }
        self.phase = SubmitPhase::Ready;
        self.enabled = true;
        Some(SubmitStep::ResetAndEnable)
    }
}

impl Default for SubmitLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_while_processing() {
        let mut s = SubmitLifecycle::new();
        assert_eq!(s.begin(), Ok(SubmitStep::Disable));
        assert_eq!(s.begin(), Err(SubmitInFlight));
    }

    #[test]
    fn steps_out_of_order_are_ignored() {
        let mut s = SubmitLifecycle::new();
        assert_eq!(s.reset_elapsed(), None);
        assert_eq!(s.processing_elapsed(), None);
        assert!(s.is_enabled());
    }

    #[test]
    fn interrupted_submission_recovers_once() {
        let mut s = SubmitLifecycle::new();
        assert_eq!(s.recover(), None);
        s.begin().unwrap();
        assert_eq!(s.recover(), Some(SubmitStep::ResetAndEnable));
        assert!(s.is_enabled());
        assert_eq!(s.recover(), None);
        // the cancelled timers can no longer fire; a new submit is accepted
        assert_eq!(s.processing_elapsed(), None);
        assert_eq!(s.begin(), Ok(SubmitStep::Disable));
    }
}
