// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn arrows_map_to_directions() {
    assert_eq!(arrow_direction("ArrowLeft"), Some(-1));
    assert_eq!(arrow_direction("ArrowRight"), Some(1));
    assert_eq!(arrow_direction("ArrowUp"), None);
    assert_eq!(arrow_direction("a"), None);
}

#[test]
fn escape_has_two_spellings() {
    assert!(is_escape("Escape"));
    assert!(is_escape("Esc"));
    assert!(!is_escape("Enter"));
}

#[test]
fn viewer_keys() {
    assert_eq!(viewer_key("Escape"), Some(ViewerKey::Close));
    assert_eq!(viewer_key("ArrowLeft"), Some(ViewerKey::Navigate(-1)));
    assert_eq!(viewer_key("ArrowRight"), Some(ViewerKey::Navigate(1)));
    assert_eq!(viewer_key(" "), None);
}

#[test]
fn only_vertical_wheel_is_captured() {
    assert!(is_vertical_wheel(0.0, 40.0));
    assert!(is_vertical_wheel(-3.0, -12.0));
    assert!(!is_vertical_wheel(40.0, 10.0));
    // a tie is treated as horizontal
    assert!(!is_vertical_wheel(5.0, 5.0));
}

#[test]
fn step_attributes() {
    assert_eq!(parse_step(Some("3")), Some(3));
    assert_eq!(parse_step(Some(" 5 ")), Some(5));
    assert_eq!(parse_step(Some("0")), None);
    assert_eq!(parse_step(Some("two")), None);
    assert_eq!(parse_step(None), None);
}

#[test]
fn anchor_targets() {
    assert_eq!(anchor_target("#packages"), Some("packages"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
}

#[test]
fn progress_width_is_a_css_percentage() {
    assert_eq!(progress_width(20.0), "20%");
    assert_eq!(progress_width(100.0), "100%");
    assert_eq!(progress_width(62.5), "62.5%");
}
