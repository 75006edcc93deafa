// Host-side tests for the front-end DOM hooks and their agreement with the
// shared core. The main crate is wasm-only, so we include the pure-Rust
// modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn id_selectors_are_bare_ids() {
    for id in [
        PROJECTS_TRACK_ID,
        PROJECTS_MODAL_ID,
        INTERIOR_MODAL_ID,
        LEAD_MODAL_ID,
        INTERIOR_FORM_ID,
        LEAD_FORM_ID,
        CONTACT_FORM_ID,
        PROGRESS_FILL_ID,
        PACKAGES_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.starts_with('.'), "{id}");
        assert!(!id.contains(' '), "{id}");
    }
}

#[test]
fn contact_form_is_left_unhardened() {
    assert_eq!(HARDENED_FORMS_SELECTOR, format!("form:not(#{CONTACT_FORM_ID})"));
}

#[test]
fn cta_selectors_name_their_targets() {
    assert!(INTERIOR_CTA_SELECTOR.contains("interior-form"));
    assert!(LEAD_CTA_SELECTOR.contains("lead-capture"));
}

#[test]
fn project_cards_are_animated() {
    let classes: Vec<&str> = ANIMATED_SELECTOR.split(", ").collect();
    assert!(classes.contains(&format!(".{PROJECT_CARD_CLASS}").as_str()));
    assert!(classes.iter().all(|c| c.starts_with('.')));
}

#[test]
fn card_sizes_match_card_width() {
    // the 350px desktop card in CARD_STYLE is the second `sizes` slot
    assert!(CARD_STYLE.contains("min-width: 350px"));
    assert!(CARD_IMAGE_SIZES.ends_with("350px"));
}

#[test]
fn scroll_animation_threshold_is_a_ratio() {
    assert!((0.0..=1.0).contains(&ANIMATE_THRESHOLD));
    assert_eq!(ANIMATE_ROOT_MARGIN.split_whitespace().count(), 4);
}

#[test]
fn card_stride_fallback_matches_card_style() {
    // 350px card plus the 25px gap
    assert_eq!(
        site_core::DEFAULT_CARD_STRIDE_PX,
        350.0 + site_core::CARD_GAP_PX
    );
}
