use super::*;

/// 200x40 toolbar centered-ish in a 1000x600 viewport.
fn toolbar() -> ToolbarState {
    ToolbarState::new(400.0, 300.0, 200.0, 40.0, (1000.0, 600.0))
}

#[test]
fn empty_region_press_drags_immediately() {
    let mut t = toolbar();
    assert!(t.pointer_down(Point::new(410.0, 310.0), PressTarget::Empty, 0));
    t.pointer_move(Point::new(460.0, 360.0), 10);
    assert_eq!(t.position(), Point::new(450.0, 350.0));
    t.pointer_up();
    assert!(!t.is_dragging());
}

#[test]
fn handle_press_drags_immediately() {
    let mut t = toolbar();
    assert!(t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0));
    assert!(t.is_dragging());
}

#[test]
fn control_press_drags_only_after_long_hold() {
    let mut t = toolbar();
    assert!(!t.pointer_down(Point::new(410.0, 310.0), PressTarget::Control, 0));
    t.pointer_move(Point::new(500.0, 400.0), 1999);
    // Still a tap; the toolbar has not moved.
    assert!(!t.is_dragging());
    assert_eq!(t.position(), Point::new(400.0, 300.0));

    assert!(t.poll_long_press(2000));
    t.pointer_move(Point::new(460.0, 360.0), 2010);
    assert_eq!(t.position(), Point::new(450.0, 350.0));
}

#[test]
fn release_disarms_the_long_press() {
    let mut t = toolbar();
    t.pointer_down(Point::new(410.0, 310.0), PressTarget::Control, 0);
    t.pointer_up();
    assert!(!t.poll_long_press(5000));
}

#[test]
fn position_is_clamped_to_viewport() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);
    // Dragged far past the bottom-right corner: clamped to the viewport,
    // which lands on the right edge, snaps, and flips vertical (40x200).
    t.pointer_move(Point::new(5000.0, 5000.0), 10);
    assert_eq!(t.snapped_edge(), Some(Edge::Right));
    assert_eq!(t.position(), Point::new(960.0, 400.0));
}

#[test]
fn snapping_to_a_side_edge_goes_vertical() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);
    // Within 3px of the left edge: pinned to it and flipped vertical.
    t.pointer_move(Point::new(2.0, 300.0), 10);
    assert_eq!(t.position().x, 0.0);
    assert_eq!(t.snapped_edge(), Some(Edge::Left));
    assert_eq!(t.orientation(), Orientation::Vertical);
}

#[test]
fn snapping_to_the_bottom_stays_horizontal() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);
    t.pointer_move(Point::new(400.0, 559.0), 10);
    assert_eq!(t.position().y, 560.0);
    assert_eq!(t.snapped_edge(), Some(Edge::Bottom));
    assert_eq!(t.orientation(), Orientation::Horizontal);
}

#[test]
fn leaving_the_edge_clears_the_snap() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);
    t.pointer_move(Point::new(2.0, 300.0), 10);
    assert!(t.snapped_edge().is_some());
    t.pointer_move(Point::new(400.0, 300.0), 20);
    assert!(t.snapped_edge().is_none());
}

#[test]
fn orientation_flips_are_rate_limited() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);

    t.pointer_move(Point::new(2.0, 300.0), 100);
    assert_eq!(t.orientation(), Orientation::Vertical);

    // Hovering back across the threshold immediately: flip suppressed.
    t.pointer_move(Point::new(400.0, 598.0), 200);
    assert_eq!(t.snapped_edge(), Some(Edge::Bottom));
    assert_eq!(t.orientation(), Orientation::Vertical);

    // Still inside the settle lock at +599ms.
    t.pointer_move(Point::new(400.0, 598.0), 699);
    assert_eq!(t.orientation(), Orientation::Vertical);

    // After the lock expires the flip goes through.
    t.pointer_move(Point::new(400.0, 598.0), 701);
    assert_eq!(t.orientation(), Orientation::Horizontal);
}

#[test]
fn flip_swaps_toolbar_dimensions() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);
    t.pointer_move(Point::new(2.0, 300.0), 10);
    // Vertical now: 40 wide, 200 tall, so the bottom clamp limit shrinks.
    t.pointer_move(Point::new(2.0, 5000.0), 20);
    assert_eq!(t.position().y, 400.0);
}

#[test]
fn corner_prefers_the_side_edge() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);
    t.pointer_move(Point::new(1.0, 1.0), 10);
    assert_eq!(t.snapped_edge(), Some(Edge::Left));
    assert_eq!(t.orientation(), Orientation::Vertical);
}

#[test]
fn snapped_edge_survives_viewport_resize() {
    let mut t = toolbar();
    t.pointer_down(Point::new(400.0, 300.0), PressTarget::Handle, 0);
    t.pointer_move(Point::new(997.0, 300.0), 10);
    t.pointer_up();
    assert_eq!(t.snapped_edge(), Some(Edge::Right));
    let before = t.position().x;

    t.set_viewport(1400.0, 600.0);
    assert!(t.position().x > before);
    // Vertical toolbar is 40 wide; pinned to the new right edge.
    assert_eq!(t.position().x, 1360.0);
}

#[test]
fn unsnapped_toolbar_only_reclamps_on_resize() {
    let mut t = toolbar();
    t.set_viewport(500.0, 320.0);
    assert_eq!(t.position(), Point::new(300.0, 280.0));
    assert!(t.snapped_edge().is_none());
}
