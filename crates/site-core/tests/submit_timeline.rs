use site_core::{SubmitLifecycle, SubmitStep, SUBMIT_TIMELINE};

/// Drive the lifecycle through the timeline the way the front-end timers do
/// and record when the control is enabled again.
#[test]
fn control_is_re_enabled_exactly_once_after_three_seconds() {
    let mut s = SubmitLifecycle::new();
    let mut re_enabled_at = Vec::new();
    for (at, step) in SUBMIT_TIMELINE {
        let outcome = match step {
            SubmitStep::Disable => s.begin().ok(),
            SubmitStep::ShowSuccess => s.processing_elapsed(),
            SubmitStep::ResetAndEnable => s.reset_elapsed(),
        };
        assert_eq!(outcome, Some(step));
        if at == 0 {
            assert!(!s.is_enabled());
        }
        if step == SubmitStep::ResetAndEnable && s.is_enabled() {
            re_enabled_at.push(at);
        }
        // a duplicate timer firing is a no-op
        if step == SubmitStep::ResetAndEnable {
            assert_eq!(s.reset_elapsed(), None);
        }
    }
    assert_eq!(re_enabled_at, vec![3000]);
}

#[test]
fn a_second_submit_waits_for_the_first() {
    let mut s = SubmitLifecycle::new();
    s.begin().unwrap();
    assert!(s.begin().is_err());
    s.processing_elapsed();
    assert!(s.begin().is_err());
    s.reset_elapsed();
    assert!(s.begin().is_ok());
}
