//! Five-step interior design questionnaire.
//!
//! Step 1 asks for the space type. Picking `commercial` skips the BHK
//! question (step 2) by recording a synthetic answer for it.

use crate::constants::FORM_STEP_COUNT;
use std::collections::BTreeMap;
use std::fmt;

pub const COMMERCIAL: &str = "commercial";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormKey {
    Step(u8),
    Budget,
    Email,
    Phone,
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKey::Step(n) => write!(f, "step{n}"),
            FormKey::Budget => f.write_str("budget"),
            FormKey::Email => f.write_str("email"),
            FormKey::Phone => f.write_str("phone"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("step {0} is outside 1..=5")]
    InvalidStep(u8),
    #[error("{value:?} is not an option of step {step}")]
    InvalidOption { step: u8, value: String },
    #[error("{0} is not a free-text field")]
    NotAField(FormKey),
}

/// Where the wizard goes once the option's feedback delay has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    To(u8),
    Stay,
}

/// Valid option values per step, index 0 being step 1. A step with no
/// listed options accepts any value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOptions {
    steps: Vec<Vec<String>>,
}

impl StepOptions {
    pub fn new(steps: Vec<Vec<String>>) -> Self {
        Self { steps }
    }

    pub fn permits(&self, step: u8, value: &str) -> bool {
        match self.steps.get(usize::from(step).wrapping_sub(1)) {
            Some(opts) if !opts.is_empty() => opts.iter().any(|o| o == value),
            _ => true,
        }
    }
}

/// Hidden inputs hydrated from the step answers before the native POST.
pub const HIDDEN_FIELDS: [(&str, u8); 4] = [
    ("hiddenSpaceType", 1),
    ("hiddenBhkType", 2),
    ("hiddenPurpose", 3),
    ("hiddenInteriorStyle", 4),
];

#[derive(Clone, Debug)]
pub struct FormWizard {
    current_step: u8,
    data: BTreeMap<FormKey, String>,
    options: StepOptions,
}

impl FormWizard {
    pub fn new(options: StepOptions) -> Self {
        Self {
            current_step: 1,
            data: BTreeMap::new(),
            options,
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn value(&self, key: FormKey) -> Option<&str> {
        self.data.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (FormKey, &str)> {
        self.data.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Record the option picked at `step`, replacing any earlier pick there,
    /// and report the transition to run after the feedback delay.
    pub fn select(&mut self, step: u8, value: &str) -> Result<Advance, WizardError> {
        check_step(step)?;
        if !self.options.permits(step, value) {
            log::warn!("[form] rejected option {value:?} at step {step}");
            return Err(WizardError::InvalidOption {
                step,
                value: value.to_string(),
            });
        }
        self.data.insert(FormKey::Step(step), value.to_string());
        log::debug!("[form] step {step} selected: {value}");

        if step == 1 && value == COMMERCIAL {
            self.data.insert(FormKey::Step(2), COMMERCIAL.to_string());
            Ok(Advance::To(3))
        } else if step < FORM_STEP_COUNT {
            Ok(Advance::To(step + 1))
        } else {
            Ok(Advance::Stay)
        }
    }

    pub fn go_to_step(&mut self, step: u8) -> Result<u8, WizardError> {
        check_step(step)?;
        self.current_step = step;
        Ok(step)
    }

    /// `select` followed straight away by its transition.
    pub fn choose(&mut self, step: u8, value: &str) -> Result<u8, WizardError> {
        match self.select(step, value)? {
            Advance::To(next) => self.go_to_step(next),
            Advance::Stay => Ok(self.current_step),
        }
    }

    pub fn set_field(&mut self, key: FormKey, value: &str) -> Result<(), WizardError> {
        if matches!(key, FormKey::Step(_)) {
            return Err(WizardError::NotAField(key));
        }
        if value.is_empty() {
            self.data.remove(&key);
        } else {
            self.data.insert(key, value.to_string());
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.data.clear();
        self.current_step = 1;
    }

    /// Stored answer for `step`, used to re-mark its option button.
    pub fn restore_selection(&self, step: u8) -> Option<&str> {
        self.value(FormKey::Step(step))
    }

    pub fn hidden_fields(&self) -> Vec<(&'static str, String)> {
        HIDDEN_FIELDS
            .iter()
            .map(|(id, step)| {
                let v = self.value(FormKey::Step(*step)).unwrap_or_default();
                (*id, v.to_string())
            })
            .collect()
    }
}

impl Default for FormWizard {
    fn default() -> Self {
        Self::new(StepOptions::default())
    }
}

fn check_step(step: u8) -> Result<(), WizardError> {
    if (1..=FORM_STEP_COUNT).contains(&step) {
        Ok(())
    } else {
        Err(WizardError::InvalidStep(step))
    }
}

pub fn progress_percent(step: u8) -> f64 {
    f64::from(step) * 100.0 / f64::from(FORM_STEP_COUNT)
}

pub fn progress_label(step: u8) -> String {
    format!("Step {step} of {FORM_STEP_COUNT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_keys_render_as_field_names() {
        assert_eq!(FormKey::Step(3).to_string(), "step3");
        assert_eq!(FormKey::Budget.to_string(), "budget");
    }

    #[test]
    fn last_step_does_not_advance() {
        let mut w = FormWizard::default();
        w.go_to_step(5).unwrap();
        assert_eq!(w.select(5, "anything"), Ok(Advance::Stay));
        assert_eq!(w.current_step(), 5);
    }

    #[test]
    fn out_of_range_steps_are_rejected() {
        let mut w = FormWizard::default();
        assert_eq!(w.go_to_step(0), Err(WizardError::InvalidStep(0)));
        assert_eq!(w.go_to_step(6), Err(WizardError::InvalidStep(6)));
        assert!(w.select(9, "x").is_err());
    }

    #[test]
    fn progress_matches_step() {
        assert_eq!(progress_percent(1), 20.0);
        assert_eq!(progress_percent(5), 100.0);
        assert_eq!(progress_label(2), "Step 2 of 5");
    }

    #[test]
    fn free_text_fields_reject_step_keys() {
        let mut w = FormWizard::default();
        assert!(w.set_field(FormKey::Step(1), "x").is_err());
        w.set_field(FormKey::Email, "a@b.co").unwrap();
        assert_eq!(w.value(FormKey::Email), Some("a@b.co"));
        w.set_field(FormKey::Email, "").unwrap();
        assert_eq!(w.value(FormKey::Email), None);
    }
}
