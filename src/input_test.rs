use super::*;

#[test]
fn pointer_is_the_default_tool() {
    assert_eq!(Tool::default(), Tool::Pointer);
}

#[test]
fn freehand_tools_accumulate_points() {
    assert!(Tool::Pencil.is_freehand());
    assert!(Tool::Eraser.is_freehand());
    assert!(!Tool::Rectangle.is_freehand());
    assert!(!Tool::Text.is_freehand());
    assert!(!Tool::Pointer.is_freehand());
}

#[test]
fn two_point_tools_commit_on_release() {
    assert!(Tool::Rectangle.is_two_point());
    assert!(Tool::Circle.is_two_point());
    assert!(Tool::Arrow.is_two_point());
    assert!(!Tool::Pencil.is_two_point());
    assert!(!Tool::Pointer.is_two_point());
}

#[test]
fn idle_state_reports_idle() {
    assert!(InputState::Idle.is_idle());
    assert!(!InputState::Stroking { id: "a-1".to_owned() }.is_idle());
}
