// SPDX-License-Identifier: MPL-2.0
//! Before/after image comparison slider.
//!
//! Shows the "after" image across a 16:9 frame and the "before" image only in
//! the left part of it, up to a divider the user drags. Pressing anywhere on the
//! frame jumps the divider to the pointer; moving with the button (or finger)
//! held keeps updating it, even outside the frame, until the release.
//!
//! The component follows the usual Iced split: [`State::update`] consumes a
//! [`Message`] and reports an [`Effect`], [`State::view`] renders, and
//! [`State::subscription`] yields window-wide pointer events only while a drag
//! session holds a listener registration.
//!
//! Both images use `ContentFit::Contain` inside the same frame. Images with
//! different aspect ratios are letterboxed differently and will not line up
//! under the divider.

mod inputs;
mod position;
mod session;
mod view;

pub use inputs::{image_reference, ComparisonInputs};
pub use position::{ContainerGeometry, SliderPosition};
pub use session::{DragPhase, DragSession, ListenerGuard, Pointer, PointerListeners, SliderId};

use iced::{event, mouse, touch, window, Event, Point, Subscription};

/// Comparison component state.
#[derive(Debug)]
pub struct State {
    id: SliderId,
    position: SliderPosition,
    phase: DragPhase,
    geometry: Option<ContainerGeometry>,
    listeners: PointerListeners,
}

/// Messages for the comparison component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Press on the frame: jump to the pointer and start dragging.
    Pressed {
        pointer: Pointer,
        position: Point,
        geometry: ContainerGeometry,
    },
    /// Window-wide pointer movement.
    Moved { pointer: Pointer, position: Point },
    /// Window-wide button/finger release.
    Released(Pointer),
    /// The frame was laid out at new bounds.
    GeometryChanged(ContainerGeometry),
}

/// Effects produced by comparison operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    DragStarted(SliderPosition),
    PositionChanged(SliderPosition),
    DragEnded(SliderPosition),
}

impl Default for State {
    fn default() -> Self {
        Self::new(PointerListeners::new())
    }
}

impl State {
    /// Creates a component registering its drag listeners in `listeners`.
    #[must_use]
    pub fn new(listeners: PointerListeners) -> Self {
        Self {
            id: SliderId::unique(),
            position: SliderPosition::default(),
            phase: DragPhase::Idle,
            geometry: None,
            listeners,
        }
    }

    /// Handle a comparison message.
    ///
    /// Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Pressed {
                pointer,
                position,
                geometry,
            } => {
                self.geometry = Some(geometry);
                if let Some(jump) = geometry.position_at(position.x) {
                    self.position = jump;
                }
                // Release any previous session before registering again.
                self.phase = DragPhase::Idle;
                self.phase = DragPhase::Dragging(DragSession::begin(
                    pointer,
                    self.listeners.attach(self.id),
                ));
                Effect::DragStarted(self.position)
            }
            Message::Moved { pointer, position } => {
                let Some(session) = self.phase.session() else {
                    return Effect::None;
                };
                if !session.tracks(pointer) {
                    return Effect::None;
                }
                let Some(geometry) = self.geometry else {
                    return Effect::None;
                };
                match geometry.position_at(position.x) {
                    Some(next) if next != self.position => {
                        self.position = next;
                        Effect::PositionChanged(next)
                    }
                    _ => Effect::None,
                }
            }
            Message::Released(_) => {
                if self.phase.is_dragging() {
                    self.phase = DragPhase::Idle;
                    Effect::DragEnded(self.position)
                } else {
                    Effect::None
                }
            }
            Message::GeometryChanged(geometry) => {
                self.geometry = Some(geometry);
                Effect::None
            }
        }
    }

    /// Tears the component down: forgets the frame bounds and ends any drag,
    /// releasing its window-wide listeners.
    pub fn unmount(&mut self) {
        self.phase = DragPhase::Idle;
        self.geometry = None;
    }

    /// Window-wide pointer events, present only while this component holds a
    /// listener registration.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.listeners.is_attached(self.id) {
            event::listen_with(drag_event)
        } else {
            Subscription::none()
        }
    }

    #[must_use]
    pub fn id(&self) -> SliderId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> SliderPosition {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    #[must_use]
    pub fn geometry(&self) -> Option<ContainerGeometry> {
        self.geometry
    }

    #[must_use]
    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }
}

/// Maps raw window events to drag messages. Status is ignored on purpose:
/// a drag keeps following the pointer over other widgets.
fn drag_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::Moved {
            pointer: Pointer::Mouse,
            position,
        }),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Released(Pointer::Mouse))
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => Some(Message::Moved {
            pointer: Pointer::Finger(id),
            position,
        }),
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) => Some(Message::Released(Pointer::Finger(id))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ContainerGeometry {
        ContainerGeometry::new(0.0, 0.0, 200.0, 112.5)
    }

    fn press(x: f32) -> Message {
        Message::Pressed {
            pointer: Pointer::Mouse,
            position: Point::new(x, 10.0),
            geometry: geometry(),
        }
    }

    fn mouse_move(x: f32) -> Message {
        Message::Moved {
            pointer: Pointer::Mouse,
            position: Point::new(x, 10.0),
        }
    }

    #[test]
    fn starts_idle_at_even_split() {
        let state = State::default();
        assert!(!state.is_dragging());
        assert_eq!(state.position().value(), 50.0);
        assert!(state.geometry().is_none());
    }

    #[test]
    fn press_jumps_and_starts_drag() {
        let mut state = State::default();
        let effect = state.update(press(50.0));

        assert_eq!(effect, Effect::DragStarted(SliderPosition::new(25.0)));
        assert!(state.is_dragging());
        assert!(state.listeners().is_attached(state.id()));
    }

    #[test]
    fn move_while_dragging_updates_position() {
        let mut state = State::default();
        state.update(press(50.0));

        let effect = state.update(mouse_move(150.0));
        assert_eq!(effect, Effect::PositionChanged(SliderPosition::new(75.0)));
        assert_eq!(state.position().value(), 75.0);
    }

    #[test]
    fn move_outside_frame_clamps() {
        let mut state = State::default();
        state.update(press(50.0));

        state.update(mouse_move(-300.0));
        assert_eq!(state.position().value(), 0.0);

        state.update(mouse_move(900.0));
        assert_eq!(state.position().value(), 100.0);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut state = State::default();
        state.update(Message::GeometryChanged(geometry()));

        let effect = state.update(mouse_move(20.0));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.position().value(), 50.0);
    }

    #[test]
    fn release_ends_drag_and_detaches() {
        let mut state = State::default();
        state.update(press(50.0));

        let effect = state.update(Message::Released(Pointer::Mouse));
        assert_eq!(effect, Effect::DragEnded(SliderPosition::new(25.0)));
        assert!(!state.is_dragging());
        assert!(!state.listeners().is_attached(state.id()));

        state.update(mouse_move(180.0));
        assert_eq!(state.position().value(), 25.0);
    }

    #[test]
    fn press_on_frame_with_nan_left_keeps_position() {
        let mut state = State::default();
        state.update(press(50.0));
        state.update(Message::Released(Pointer::Mouse));

        state.update(Message::Pressed {
            pointer: Pointer::Mouse,
            position: Point::new(150.0, 10.0),
            geometry: ContainerGeometry::new(f32::NAN, 0.0, 200.0, 112.5),
        });

        assert_eq!(state.position().value(), 25.0);
    }

    #[test]
    fn duplicate_release_ends_drag_once() {
        let mut state = State::default();
        state.update(press(50.0));

        assert_eq!(
            state.update(Message::Released(Pointer::Mouse)),
            Effect::DragEnded(SliderPosition::new(25.0))
        );
        assert_eq!(state.update(Message::Released(Pointer::Mouse)), Effect::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn release_when_idle_is_a_no_op() {
        let mut state = State::default();
        assert_eq!(state.update(Message::Released(Pointer::Mouse)), Effect::None);
    }

    #[test]
    fn second_press_restarts_session_without_leaking() {
        let listeners = PointerListeners::new();
        let mut state = State::new(listeners.clone());

        state.update(press(20.0));
        state.update(press(150.0));

        assert!(state.is_dragging());
        assert_eq!(state.position().value(), 75.0);
        assert_eq!(listeners.active_count(), 1);
    }

    #[test]
    fn foreign_finger_does_not_move_divider() {
        let mut state = State::default();
        state.update(Message::Pressed {
            pointer: Pointer::Finger(touch::Finger(1)),
            position: Point::new(100.0, 10.0),
            geometry: geometry(),
        });

        let effect = state.update(Message::Moved {
            pointer: Pointer::Finger(touch::Finger(2)),
            position: Point::new(10.0, 10.0),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.position().value(), 50.0);

        state.update(Message::Moved {
            pointer: Pointer::Finger(touch::Finger(1)),
            position: Point::new(150.0, 10.0),
        });
        assert_eq!(state.position().value(), 75.0);
    }

    #[test]
    fn unmount_mid_drag_releases_listeners() {
        let listeners = PointerListeners::new();
        let mut state = State::new(listeners.clone());
        state.update(press(50.0));
        assert_eq!(listeners.active_count(), 1);

        state.unmount();
        assert_eq!(listeners.active_count(), 0);
        assert!(!state.is_dragging());

        state.update(mouse_move(190.0));
        assert_eq!(state.position().value(), 25.0);
    }

    #[test]
    fn dropping_state_mid_drag_releases_listeners() {
        let listeners = PointerListeners::new();
        let mut state = State::new(listeners.clone());
        state.update(press(50.0));

        drop(state);
        assert_eq!(listeners.active_count(), 0);
    }

    #[test]
    fn geometry_change_is_used_by_next_move() {
        let mut state = State::default();
        state.update(press(50.0));
        state.update(Message::GeometryChanged(ContainerGeometry::new(
            100.0, 0.0, 400.0, 225.0,
        )));

        state.update(mouse_move(200.0));
        assert_eq!(state.position().value(), 25.0);
    }

    #[test]
    fn drag_event_maps_pointer_events() {
        let id = window::Id::unique();
        let status = event::Status::Ignored;

        let moved = drag_event(
            Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(3.0, 4.0),
            }),
            status,
            id,
        );
        assert!(matches!(
            moved,
            Some(Message::Moved {
                pointer: Pointer::Mouse,
                ..
            })
        ));

        let released = drag_event(
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            event::Status::Captured,
            id,
        );
        assert!(matches!(released, Some(Message::Released(Pointer::Mouse))));

        let lifted = drag_event(
            Event::Touch(touch::Event::FingerLifted {
                id: touch::Finger(7),
                position: Point::ORIGIN,
            }),
            status,
            id,
        );
        assert!(matches!(
            lifted,
            Some(Message::Released(Pointer::Finger(touch::Finger(7))))
        ));

        let wheel = drag_event(
            Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            status,
            id,
        );
        assert!(wheel.is_none());
    }
}
