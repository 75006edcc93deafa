// Pure helpers for keyboard, wheel and form input. No web_sys here so the
// host-side tests can include this file.

/// Direction for ArrowLeft / ArrowRight, `None` for any other key.
#[inline]
pub fn arrow_direction(key: &str) -> Option<i32> {
    match key {
        "ArrowLeft" => Some(-1),
        "ArrowRight" => Some(1),
        _ => None,
    }
}

#[inline]
pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// What a key does while the project viewer is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Close,
    Navigate(i32),
}

#[inline]
pub fn viewer_key(key: &str) -> Option<ViewerKey> {
    if is_escape(key) {
        return Some(ViewerKey::Close);
    }
    arrow_direction(key).map(ViewerKey::Navigate)
}

/// Only wheel gestures that are mostly vertical drive the strip sideways.
#[inline]
pub fn is_vertical_wheel(delta_x: f64, delta_y: f64) -> bool {
    delta_y.abs() > delta_x.abs()
}

/// Parse a `data-step` attribute into a step number.
#[inline]
pub fn parse_step(attr: Option<&str>) -> Option<u8> {
    attr.and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|n| *n >= 1)
}

/// Section id for an in-page link, e.g. `#packages` -> `packages`.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Inline width for the wizard progress bar.
#[inline]
pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}
