use site_core::{Advance, FormKey, FormWizard, StepOptions, WizardError};

fn options() -> StepOptions {
    let list = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    StepOptions::new(vec![
        list(&["residential", "commercial"]),
        list(&["1bhk", "2bhk", "3bhk", "4bhk"]),
        list(&["self-use", "rental"]),
        list(&["modern", "minimal", "traditional"]),
        Vec::new(),
    ])
}

#[test]
fn commercial_skips_the_bhk_step() {
    let mut w = FormWizard::new(options());
    assert_eq!(w.select(1, "commercial"), Ok(Advance::To(3)));
    assert_eq!(w.choose(1, "commercial"), Ok(3));
    assert_eq!(w.current_step(), 3);
    assert_eq!(w.value(FormKey::Step(2)), Some("commercial"));
}

#[test]
fn other_space_types_go_to_step_two() {
    let mut w = FormWizard::new(options());
    assert_eq!(w.choose(1, "residential"), Ok(2));
    assert_eq!(w.value(FormKey::Step(2)), None);
}

#[test]
fn reset_then_first_step_is_empty() {
    let mut w = FormWizard::new(options());
    w.choose(1, "residential").unwrap();
    w.choose(2, "3bhk").unwrap();
    w.set_field(FormKey::Budget, "10-15L").unwrap();
    w.reset();
    assert_eq!(w.go_to_step(1), Ok(1));
    assert!(w.is_empty());
    assert_eq!(w.current_step(), 1);
}

#[test]
fn stored_values_are_always_valid_options() {
    let opts = options();
    let mut w = FormWizard::new(opts.clone());
    assert!(matches!(
        w.select(2, "penthouse"),
        Err(WizardError::InvalidOption { step: 2, .. })
    ));
    w.choose(1, "residential").unwrap();
    w.choose(2, "2bhk").unwrap();
    w.choose(2, "4bhk").unwrap();
    w.choose(1, "commercial").unwrap();
    for (key, value) in w.entries() {
        if let FormKey::Step(n) = key {
            assert!(
                opts.permits(n, value) || (n == 2 && value == "commercial"),
                "step{n} holds {value}"
            );
        }
    }
    assert_eq!(w.restore_selection(2), Some("commercial"));
}

#[test]
fn hidden_fields_follow_the_answers() {
    let mut w = FormWizard::new(options());
    w.choose(1, "commercial").unwrap();
    w.choose(3, "rental").unwrap();
    let hidden = w.hidden_fields();
    assert_eq!(
        hidden,
        vec![
            ("hiddenSpaceType", "commercial".to_string()),
            ("hiddenBhkType", "commercial".to_string()),
            ("hiddenPurpose", "rental".to_string()),
            ("hiddenInteriorStyle", String::new()),
        ]
    );
}
