//! State for the static page chrome: navbar, mobile menu, hero slides,
//! package dropdowns, FAQ accordion and the scroll-triggered lead popup.

use crate::constants::{LEAD_CAPTURE_LEAD_PX, NAV_SCROLL_THRESHOLD_PX, SECTION_SCROLL_OFFSET_PX};

/// Navbar switches to its solid style past this scroll position.
pub fn navbar_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

/// Document-relative scroll target for a section, leaving room for the
/// fixed navbar. Never negative.
pub fn section_scroll_target(section_top: f64, page_scroll_y: f64) -> f64 {
    (section_top + page_scroll_y + SECTION_SCROLL_OFFSET_PX).max(0.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// `true` if this actually closed an open menu.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Hero slide rotation. Ticks are ignored while the hero is hovered.
#[derive(Clone, Debug)]
pub struct HeroRotation {
    count: usize,
    current: usize,
    paused: bool,
}

impl HeroRotation {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            paused: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Returns `(previous, next)` slide indices when the slide changes.
    pub fn tick(&mut self) -> Option<(usize, usize)> {
        if self.paused || self.count < 2 {
            return None;
        }
        let prev = self.current;
        self.current = (self.current + 1) % self.count;
        Some((prev, self.current))
    }
}

/// FAQ accordion: at most one answer open.
#[derive(Clone, Debug, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Clicking the open item closes it; any other item replaces it.
    pub fn toggle(&mut self, item: usize) -> Option<usize> {
        self.open = if self.open == Some(item) { None } else { Some(item) };
        self.open
    }
}

/// Package dropdowns grouped by their trimmed title. Headers sharing a title
/// (the same category shown in several package tiers) open and close together.
#[derive(Clone, Debug, Default)]
pub struct DropdownGroups {
    titles: Vec<String>,
    open: Vec<bool>,
}

impl DropdownGroups {
    pub fn new<S: AsRef<str>>(titles: impl IntoIterator<Item = S>) -> Self {
        let titles: Vec<String> = titles
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .collect();
        let open = vec![false; titles.len()];
        Self { titles, open }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip the dropdown at `index` and every dropdown with the same title.
    /// Returns the indices touched and whether they are now open.
    pub fn toggle(&mut self, index: usize) -> (Vec<usize>, bool) {
        let Some(title) = self.titles.get(index) else {
            return (Vec::new(), false);
        };
        let now_open = !self.open[index];
        let members: Vec<usize> = self
            .titles
            .iter()
            .enumerate()
            .filter(|(_, t)| *t == title)
            .map(|(i, _)| i)
            .collect();
        for &i in &members {
            self.open[i] = now_open;
        }
        (members, now_open)
    }
}

/// Fires once when the page scrolls within reach of a section.
#[derive(Clone, Debug, Default)]
pub struct ScrollTrigger {
    fired: bool,
}

impl ScrollTrigger {
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn check(&mut self, scroll_y: f64, section_top: f64) -> bool {
        if self.fired || scroll_y < section_top - LEAD_CAPTURE_LEAD_PX {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_is_scrolled(100.0));
        assert!(navbar_is_scrolled(100.5));
    }

    #[test]
    fn section_target_accounts_for_navbar() {
        assert_eq!(section_scroll_target(500.0, 200.0), 620.0);
        assert_eq!(section_scroll_target(10.0, 0.0), 0.0);
    }

    #[test]
    fn menu_close_reports_change() {
        let mut m = MenuState::default();
        assert!(!m.close());
        assert!(m.toggle());
        assert!(m.close());
        assert!(!m.is_open());
    }

    #[test]
    fn hero_rotation_wraps_and_pauses() {
        let mut h = HeroRotation::new(3);
        assert_eq!(h.tick(), Some((0, 1)));
        assert_eq!(h.tick(), Some((1, 2)));
        h.set_paused(true);
        assert_eq!(h.tick(), None);
        h.set_paused(false);
        assert_eq!(h.tick(), Some((2, 0)));
        assert_eq!(HeroRotation::new(1).tick(), None);
    }

    #[test]
    fn accordion_keeps_one_open() {
        let mut a = Accordion::default();
        assert_eq!(a.toggle(2), Some(2));
        assert_eq!(a.toggle(0), Some(0));
        assert_eq!(a.toggle(0), None);
        assert_eq!(a.open_item(), None);
    }

    #[test]
    fn dropdowns_with_same_title_move_together() {
        let mut d = DropdownGroups::new(["Kitchen ", "Wardrobe", " Kitchen", "Living"]);
        let (touched, open) = d.toggle(0);
        assert_eq!(touched, vec![0, 2]);
        assert!(open);
        assert!(d.is_open(2));
        assert!(!d.is_open(1));
        let (touched, open) = d.toggle(2);
        assert_eq!(touched, vec![0, 2]);
        assert!(!open);
        assert_eq!(d.toggle(9), (Vec::new(), false));
    }

    #[test]
    fn scroll_trigger_fires_once() {
        let mut t = ScrollTrigger::default();
        assert!(!t.check(700.0, 1000.0));
        assert!(t.check(800.0, 1000.0));
        assert!(!t.check(900.0, 1000.0));
        assert!(t.has_fired());
    }
}
