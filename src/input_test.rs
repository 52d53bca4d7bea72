use uuid::Uuid;

use super::*;
use crate::doc::Room;
use crate::drag::DragTarget;
use crate::resize::ResizeHandle;
use crate::units::Point;

#[test]
fn input_state_default_is_idle() {
    let s = InputState::default();
    assert!(s.is_idle());
    assert!(!s.is_resizing());
}

#[test]
fn dragging_is_not_resizing() {
    let g = DragGesture::begin(DragTarget::Item(Uuid::new_v4()), Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    let s = InputState::Dragging(g);
    assert!(!s.is_idle());
    assert!(!s.is_resizing());
}

#[test]
fn resizing_sets_suppression() {
    let room = Room {
        id: Uuid::new_v4(),
        name: "R".into(),
        width: 2.0,
        height: 2.0,
        x: 0.0,
        y: 0.0,
        color: "#fff".into(),
    };
    let s = InputState::Resizing(ResizeGesture::begin(&room, ResizeHandle::Se, Point::new(20.0, 20.0)));
    assert!(s.is_resizing());
    assert!(!s.is_idle());
}

#[test]
fn ui_state_default_has_no_selection() {
    let ui = UiState::default();
    assert!(ui.selected_room.is_none());
    assert!(ui.selected_item.is_none());
}

#[test]
fn button_equality() {
    assert_eq!(Button::Primary, Button::Primary);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}
