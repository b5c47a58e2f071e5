// SPDX-License-Identifier: MPL-2.0
use iced::{touch, Point};
use iced_compare::ui::comparison::{
    ContainerGeometry, Effect, Message, Pointer, PointerListeners, SliderPosition, State,
};

fn frame() -> ContainerGeometry {
    ContainerGeometry::new(100.0, 40.0, 400.0, 225.0)
}

fn press(pointer: Pointer, x: f32) -> Message {
    Message::Pressed {
        pointer,
        position: Point::new(x, 100.0),
        geometry: frame(),
    }
}

fn moved(pointer: Pointer, x: f32) -> Message {
    Message::Moved {
        pointer,
        position: Point::new(x, 100.0),
    }
}

#[test]
fn test_full_mouse_drag_lifecycle() {
    let listeners = PointerListeners::new();
    let mut slider = State::new(listeners.clone());

    assert_eq!(slider.position(), SliderPosition::default());
    assert_eq!(listeners.active_count(), 0);

    // Click-jump to a quarter of the frame.
    let effect = slider.update(press(Pointer::Mouse, 200.0));
    assert_eq!(effect, Effect::DragStarted(SliderPosition::new(25.0)));
    assert!(slider.is_dragging());
    assert!(listeners.is_attached(slider.id()));

    // Dragging past the right edge clamps.
    let effect = slider.update(moved(Pointer::Mouse, 900.0));
    assert_eq!(effect, Effect::PositionChanged(SliderPosition::new(100.0)));

    // Dragging past the left edge clamps.
    slider.update(moved(Pointer::Mouse, -50.0));
    assert_eq!(slider.position().value(), 0.0);

    let effect = slider.update(Message::Released(Pointer::Mouse));
    assert_eq!(effect, Effect::DragEnded(SliderPosition::new(0.0)));
    assert!(!slider.is_dragging());
    assert_eq!(listeners.active_count(), 0);

    // Moves after the release are ignored.
    assert_eq!(slider.update(moved(Pointer::Mouse, 300.0)), Effect::None);
    assert_eq!(slider.position().value(), 0.0);
}

#[test]
fn test_unmount_while_dragging_releases_listeners() {
    let listeners = PointerListeners::new();
    let mut slider = State::new(listeners.clone());

    slider.update(press(Pointer::Mouse, 300.0));
    assert_eq!(listeners.active_count(), 1);

    slider.unmount();
    assert_eq!(listeners.active_count(), 0);

    let before = slider.position();
    assert_eq!(slider.update(moved(Pointer::Mouse, 450.0)), Effect::None);
    assert_eq!(slider.position(), before);
}

#[test]
fn test_dropping_state_while_dragging_releases_listeners() {
    let listeners = PointerListeners::new();
    {
        let mut slider = State::new(listeners.clone());
        slider.update(press(Pointer::Mouse, 300.0));
        assert_eq!(listeners.active_count(), 1);
    }
    assert_eq!(listeners.active_count(), 0);
}

#[test]
fn test_two_sliders_share_the_registry() {
    let listeners = PointerListeners::new();
    let mut left = State::new(listeners.clone());
    let mut right = State::new(listeners.clone());

    left.update(press(Pointer::Mouse, 200.0));
    right.update(press(Pointer::Finger(touch::Finger(1)), 400.0));
    assert_eq!(listeners.active_count(), 2);

    left.update(Message::Released(Pointer::Mouse));
    assert!(!listeners.is_attached(left.id()));
    assert!(listeners.is_attached(right.id()));

    // The first slider no longer follows the pointer.
    left.update(moved(Pointer::Mouse, 500.0));
    assert_eq!(left.position().value(), 25.0);

    right.update(moved(Pointer::Finger(touch::Finger(1)), 500.0));
    assert_eq!(right.position().value(), 100.0);
}

#[test]
fn test_touch_drag_follows_its_own_finger() {
    let mut slider = State::default();
    let finger = Pointer::Finger(touch::Finger(7));

    slider.update(press(finger, 300.0));
    assert_eq!(slider.position().value(), 50.0);

    assert_eq!(
        slider.update(moved(Pointer::Finger(touch::Finger(8)), 100.0)),
        Effect::None
    );
    assert_eq!(slider.position().value(), 50.0);

    slider.update(moved(finger, 400.0));
    assert_eq!(slider.position().value(), 75.0);
}

#[test]
fn test_resized_frame_is_used_for_later_moves() {
    let mut slider = State::default();
    slider.update(press(Pointer::Mouse, 300.0));

    slider.update(Message::GeometryChanged(ContainerGeometry::new(
        0.0, 0.0, 1000.0, 562.5,
    )));
    slider.update(moved(Pointer::Mouse, 100.0));
    assert_eq!(slider.position().value(), 10.0);
}
