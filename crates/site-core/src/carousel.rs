//! Infinite projects strip: interaction phases and seam correction.
//!
//! The rendered card list is the project list twice over. The scroll offset
//! is kept inside one pass of width `W` by teleporting it whenever it gets
//! within `buffer` of either edge, so the strip appears endless. Every path
//! that moves the offset (animation tick, drag, wheel, keys, native scroll)
//! goes through [`correct_seam`] before the value is written back.

use crate::constants::{
    AUTO_SCROLL_PX_PER_FRAME, CARD_GAP_PX, DEFAULT_CARD_STRIDE_PX, INITIAL_SCROLL_OFFSET_PX,
    MOUSE_DRAG_MULTIPLIER, SCROLL_ECHO_TOLERANCE_PX, SEAM_BUFFER_PX, TOUCH_DRAG_MULTIPLIER,
    WHEEL_MULTIPLIER,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    AutoScrolling,
    UserDragging,
    UserScrollingWheel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub buffer: f64,
    pub auto_scroll_speed: f64,
    pub initial_offset: f64,
    pub card_gap: f64,
    pub mouse_drag_multiplier: f64,
    pub touch_drag_multiplier: f64,
    pub wheel_multiplier: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            buffer: SEAM_BUFFER_PX,
            auto_scroll_speed: AUTO_SCROLL_PX_PER_FRAME,
            initial_offset: INITIAL_SCROLL_OFFSET_PX,
            card_gap: CARD_GAP_PX,
            mouse_drag_multiplier: MOUSE_DRAG_MULTIPLIER,
            touch_drag_multiplier: TOUCH_DRAG_MULTIPLIER,
            wheel_multiplier: WHEEL_MULTIPLIER,
        }
    }
}

/// Keep `offset` within `[buffer, pass_width - buffer]`.
///
/// Crossing the right soft edge lands near `buffer`, crossing the left one
/// lands near `pass_width - buffer`; any overshoot past the edge is carried
/// over, so a fast drag that jumps several periods still lands in range and
/// a corrected value is a fixed point. With a pass too narrow to loop, the
/// offset is only clamped at zero.
pub fn correct_seam(offset: f64, pass_width: f64, buffer: f64) -> f64 {
    let period = pass_width - 2.0 * buffer;
    if !(period > 0.0) || !period.is_finite() {
        return if offset.is_finite() { offset.max(0.0) } else { 0.0 };
    }
    if !offset.is_finite() {
        return buffer;
    }
    if offset >= pass_width - buffer || offset < buffer {
        // rem_euclid can round up to `period` for tiny negative inputs
        (buffer + (offset - buffer).rem_euclid(period)).min(pass_width - buffer)
    } else {
        offset
    }
}

/// Distance from one card's left edge to the next.
pub fn card_stride(card_offset_width: Option<f64>, gap: f64) -> f64 {
    match card_offset_width {
        Some(w) if w > 0.0 => w + gap,
        _ => DEFAULT_CARD_STRIDE_PX,
    }
}

/// Width of one un-duplicated pass given the number of rendered cards.
pub fn loop_pass_width(rendered_cards: usize, stride: f64) -> f64 {
    (rendered_cards / 2) as f64 * stride
}

/// Carousel view state. Owned by the front-end controller and mutated only
/// through these methods; each returns the offset to write back to the
/// scroll container, already seam-corrected.
#[derive(Clone, Debug)]
pub struct CarouselState {
    pub scroll_offset: f64,
    pub is_user_interacting: bool,
    pub is_dragging: bool,
    pub drag_start_x: f64,
    pub drag_start_scroll: f64,
    phase: CarouselPhase,
    drag_source: DragSource,
    generation: u64,
    pass_width: f64,
    stride: f64,
    config: CarouselConfig,
}

impl CarouselState {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            scroll_offset: 0.0,
            is_user_interacting: false,
            is_dragging: false,
            drag_start_x: 0.0,
            drag_start_scroll: 0.0,
            phase: CarouselPhase::Idle,
            drag_source: DragSource::Mouse,
            generation: 0,
            pass_width: 0.0,
            stride: DEFAULT_CARD_STRIDE_PX,
            config,
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn pass_width(&self) -> f64 {
        self.pass_width
    }

    pub fn stride(&self) -> f64 {
        self.stride
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Record layout measurements; call after render and on resize.
    pub fn set_geometry(&mut self, rendered_cards: usize, card_offset_width: Option<f64>) {
        self.stride = card_stride(card_offset_width, self.config.card_gap);
        self.pass_width = loop_pass_width(rendered_cards, self.stride);
    }

    /// Re-apply the seam correction after the geometry changed.
    pub fn rewrap(&mut self) -> f64 {
        self.correct()
    }

    fn correct(&mut self) -> f64 {
        let before = self.scroll_offset;
        self.scroll_offset = correct_seam(before, self.pass_width, self.config.buffer);
        if self.is_dragging {
            // keep the drag anchored to the teleported position
            self.drag_start_scroll += self.scroll_offset - before;
        }
        self.scroll_offset
    }

    fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Place the strip at its initial offset and begin auto-scrolling.
    pub fn start(&mut self) -> f64 {
        self.scroll_offset = self.config.initial_offset;
        self.phase = CarouselPhase::AutoScrolling;
        self.correct()
    }

    /// One animation frame. Returns `None` while suspended.
    pub fn tick(&mut self) -> Option<f64> {
        if self.is_user_interacting || self.phase != CarouselPhase::AutoScrolling {
            return None;
        }
        self.scroll_offset += self.config.auto_scroll_speed;
        Some(self.correct())
    }

    /// Adopt an offset reported by the scroll container itself. Returns the
    /// corrected value only when it differs and must be written back.
    ///
    /// Containers round `scrollLeft` to whole (device) pixels, so a report
    /// within a pixel of the tracked offset is our own write echoing back and
    /// keeps the sub-pixel position.
    pub fn observe_scroll(&mut self, dom_offset: f64) -> Option<f64> {
        if (dom_offset - self.scroll_offset).abs() < SCROLL_ECHO_TOLERANCE_PX {
            return None;
        }
        self.scroll_offset = dom_offset;
        let corrected = self.correct();
        ((corrected - dom_offset).abs() > f64::EPSILON).then_some(corrected)
    }

    pub fn begin_drag(&mut self, x: f64, source: DragSource) {
        self.next_generation();
        self.is_dragging = true;
        self.is_user_interacting = true;
        self.drag_source = source;
        self.drag_start_x = x;
        self.drag_start_scroll = self.scroll_offset;
        self.phase = CarouselPhase::UserDragging;
        log::debug!("[carousel] drag start x={x:.1} offset={:.1}", self.scroll_offset);
    }

    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        if !self.is_dragging {
            return None;
        }
        let multiplier = match self.drag_source {
            DragSource::Mouse => self.config.mouse_drag_multiplier,
            DragSource::Touch => self.config.touch_drag_multiplier,
        };
        let walk = (x - self.drag_start_x) * multiplier;
        self.scroll_offset = self.drag_start_scroll - walk;
        Some(self.correct())
    }

    /// Release. Returns the corrected offset and the token to pass to
    /// [`settle`](Self::settle) after the grace delay.
    pub fn end_drag(&mut self) -> Option<(f64, u64)> {
        if !self.is_dragging {
            return None;
        }
        self.is_dragging = false;
        self.phase = CarouselPhase::Idle;
        let offset = self.correct();
        Some((offset, self.generation))
    }

    /// Pointer left the strip mid-drag: stop at once with no grace delay.
    pub fn cancel_drag(&mut self) -> bool {
        if !self.is_dragging {
            return false;
        }
        self.is_dragging = false;
        self.is_user_interacting = false;
        self.phase = CarouselPhase::AutoScrolling;
        true
    }

    /// Vertical-dominant wheel input scrolls the strip sideways. Horizontal
    /// wheel input is left to the browser and yields `None`.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) -> Option<(f64, u64)> {
        if delta_y.abs() <= delta_x.abs() {
            return None;
        }
        let token = self.next_generation();
        self.is_user_interacting = true;
        self.phase = CarouselPhase::UserScrollingWheel;
        self.scroll_offset += delta_y * self.config.wheel_multiplier;
        Some((self.correct(), token))
    }

    /// Arrow-key navigation by whole cards.
    pub fn step_cards(&mut self, direction: i32) -> (f64, u64) {
        let token = self.next_generation();
        self.is_user_interacting = true;
        if !self.is_dragging {
            self.phase = CarouselPhase::Idle;
        }
        self.scroll_offset += self.stride * direction as f64;
        (self.correct(), token)
    }

    /// The page came back from the back/forward cache with its settle timers
    /// gone. Drop any half-finished interaction, invalidate outstanding
    /// tokens and auto-scroll again from the current offset.
    pub fn resume(&mut self) -> f64 {
        self.next_generation();
        self.is_dragging = false;
        self.is_user_interacting = false;
        self.phase = CarouselPhase::AutoScrolling;
        self.correct()
    }

    /// End of an interaction's grace period. Ignored when a newer interaction
    /// has started since `token` was issued or a pointer is still down.
    pub fn settle(&mut self, token: u64) -> bool {
        if token != self.generation || self.is_dragging {
            return false;
        }
        self.is_user_interacting = false;
        self.phase = CarouselPhase::AutoScrolling;
        true
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(cards: usize) -> CarouselState {
        let mut s = CarouselState::default();
        s.set_geometry(cards, Some(350.0));
        s.start();
        s
    }

    #[test]
    fn seam_leaves_interior_offsets_alone() {
        assert_eq!(correct_seam(500.0, 1000.0, 10.0), 500.0);
        assert_eq!(correct_seam(10.0, 1000.0, 10.0), 10.0);
    }

    #[test]
    fn seam_wraps_right_edge_to_buffer() {
        assert_eq!(correct_seam(990.0, 1000.0, 10.0), 10.0);
        assert_eq!(correct_seam(995.0, 1000.0, 10.0), 15.0);
    }

    #[test]
    fn seam_wraps_left_edge_to_far_side() {
        assert_eq!(correct_seam(9.0, 1000.0, 10.0), 989.0);
        assert_eq!(correct_seam(-30.0, 1000.0, 10.0), 950.0);
    }

    #[test]
    fn degenerate_pass_only_clamps() {
        assert_eq!(correct_seam(-4.0, 15.0, 10.0), 0.0);
        assert_eq!(correct_seam(7.0, 0.0, 10.0), 7.0);
        assert_eq!(correct_seam(f64::NAN, 1000.0, 10.0), 10.0);
    }

    #[test]
    fn stride_falls_back_before_layout() {
        assert_eq!(card_stride(None, 25.0), 375.0);
        assert_eq!(card_stride(Some(0.0), 25.0), 375.0);
        assert_eq!(card_stride(Some(280.0), 25.0), 305.0);
        assert_eq!(loop_pass_width(16, 375.0), 3000.0);
    }

    #[test]
    fn tick_is_suspended_during_interaction() {
        let mut s = ready(8);
        assert_eq!(s.tick(), Some(50.5));
        s.begin_drag(100.0, DragSource::Mouse);
        assert_eq!(s.tick(), None);
        let (_, token) = s.end_drag().unwrap();
        assert_eq!(s.tick(), None);
        assert!(s.settle(token));
        assert!(s.tick().is_some());
    }

    #[test]
    fn stale_settle_does_not_resume() {
        let mut s = ready(8);
        let (_, first) = s.wheel(0.0, 40.0).unwrap();
        let (_, second) = s.wheel(0.0, 40.0).unwrap();
        assert!(!s.settle(first));
        assert!(s.is_user_interacting);
        assert!(s.settle(second));
        assert_eq!(s.phase(), CarouselPhase::AutoScrolling);
    }

    #[test]
    fn horizontal_wheel_is_ignored() {
        let mut s = ready(8);
        assert!(s.wheel(30.0, 5.0).is_none());
        assert!(!s.is_user_interacting);
    }

    #[test]
    fn drag_across_seam_stays_anchored() {
        // pass width 4 * 375 = 1500
        let mut s = ready(8);
        s.begin_drag(0.0, DragSource::Touch);
        // pull right by 60px: offset 50 -> -10 wraps to 1470
        let wrapped = s.drag_to(60.0).unwrap();
        assert_eq!(wrapped, 1470.0);
        // a further 5px continues from the teleported position
        assert_eq!(s.drag_to(65.0), Some(1465.0));
    }

    #[test]
    fn rounded_echo_keeps_sub_pixel_progress() {
        let mut s = ready(8);
        s.tick();
        s.tick();
        assert_eq!(s.scroll_offset, 51.0);
        s.tick();
        // the container reports the rounded value of our own write
        assert_eq!(s.observe_scroll(51.0), None);
        assert_eq!(s.scroll_offset, 51.5);
    }

    #[test]
    fn cancel_drag_resumes_immediately() {
        let mut s = ready(8);
        s.begin_drag(10.0, DragSource::Mouse);
        assert!(s.cancel_drag());
        assert!(!s.is_user_interacting);
        assert_eq!(s.phase(), CarouselPhase::AutoScrolling);
        assert!(!s.cancel_drag());
    }

    #[test]
    fn resume_drops_interrupted_interaction() {
        let mut s = ready(8);
        s.begin_drag(100.0, DragSource::Mouse);
        let (_, stale) = s.wheel(0.0, 40.0).unwrap();
        assert_eq!(s.resume(), 70.0);
        assert!(!s.is_dragging);
        assert!(!s.settle(stale));
        assert_eq!(s.tick(), Some(70.5));
    }

    #[test]
    fn keys_move_by_stride() {
        let mut s = ready(8);
        let (offset, _) = s.step_cards(1);
        assert_eq!(offset, 425.0);
        let (offset, _) = s.step_cards(-1);
        assert_eq!(offset, 50.0);
    }
}
