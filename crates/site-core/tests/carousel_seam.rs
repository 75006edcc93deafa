use site_core::{correct_seam, CarouselState, DragSource, SEAM_BUFFER_PX};

fn in_range(offset: f64, pass_width: f64) -> bool {
    offset >= SEAM_BUFFER_PX && offset <= pass_width - SEAM_BUFFER_PX
}

#[test]
fn corrected_offsets_stay_within_the_pass() {
    let pass_width = 2625.0;
    let mut offset = -5000.0;
    while offset < 8000.0 {
        let c = correct_seam(offset, pass_width, SEAM_BUFFER_PX);
        assert!(in_range(c, pass_width), "{offset} -> {c}");
        // already-corrected values are left alone
        assert_eq!(correct_seam(c, pass_width, SEAM_BUFFER_PX), c);
        offset += 7.25;
    }
}

#[test]
fn long_auto_scroll_never_leaves_the_pass() {
    let mut s = CarouselState::default();
    s.set_geometry(6, Some(350.0));
    let pass_width = s.pass_width();
    assert_eq!(pass_width, 1125.0);
    s.start();
    for _ in 0..10_000 {
        let offset = s.tick().expect("auto-scroll is running");
        assert!(in_range(offset, pass_width), "tick produced {offset}");
    }
}

#[test]
fn wild_drags_never_leave_the_pass() {
    let mut s = CarouselState::default();
    s.set_geometry(10, Some(280.0));
    let pass_width = s.pass_width();
    s.start();
    for (i, source) in [DragSource::Mouse, DragSource::Touch].into_iter().enumerate() {
        s.begin_drag(400.0, source);
        let mut x = 400.0;
        for step in 0..400 {
            // sweep left then right, several passes each way
            x += if step < 200 { -37.0 } else { 53.0 } * (i + 1) as f64;
            let offset = s.drag_to(x).expect("dragging");
            assert!(in_range(offset, pass_width), "drag produced {offset}");
        }
        let (offset, token) = s.end_drag().expect("was dragging");
        assert!(in_range(offset, pass_width));
        assert!(s.settle(token));
    }
}

#[test]
fn wheel_and_keys_stay_in_range() {
    let mut s = CarouselState::default();
    s.set_geometry(8, None);
    let pass_width = s.pass_width();
    s.start();
    for i in 0..200 {
        let dy = if i % 3 == 0 { -240.0 } else { 180.0 };
        let (offset, _) = s.wheel(0.0, dy).expect("vertical wheel is captured");
        assert!(in_range(offset, pass_width));
        let (offset, _) = s.step_cards(if i % 2 == 0 { 1 } else { -1 });
        assert!(in_range(offset, pass_width));
    }
}

#[test]
fn native_scroll_is_written_back_only_when_wrapped() {
    let mut s = CarouselState::default();
    s.set_geometry(8, Some(350.0));
    s.start();
    assert_eq!(s.observe_scroll(700.0), None);
    assert_eq!(s.observe_scroll(1495.0), Some(15.0));
}

#[test]
fn input_scale_factors() {
    let started = || {
        let mut s = CarouselState::default();
        s.set_geometry(8, Some(350.0));
        assert_eq!(s.start(), 50.0);
        s
    };

    // mouse drags move 1.5x the pointer delta
    let mut s = started();
    s.begin_drag(100.0, DragSource::Mouse);
    assert_eq!(s.drag_to(80.0), Some(80.0));

    // touch follows the finger 1:1
    let mut s = started();
    s.begin_drag(100.0, DragSource::Touch);
    assert_eq!(s.drag_to(80.0), Some(70.0));

    // wheel moves half of deltaY
    let mut s = started();
    assert_eq!(s.wheel(0.0, 40.0).map(|(offset, _)| offset), Some(70.0));
    assert_eq!(s.wheel(0.0, -100.0).map(|(offset, _)| offset), Some(20.0));
}
