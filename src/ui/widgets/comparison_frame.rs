// SPDX-License-Identifier: MPL-2.0
//! Fixed-aspect frame that stacks two images and clips the upper one.
//!
//! Children are laid out as `[after, before, handle]`. Both images get the whole
//! frame; the "before" image is drawn inside a clip layer as wide as the
//! current divider position, followed by the divider line and the handle.
//! The frame reports presses (mouse or touch) together with its own bounds, and
//! publishes its bounds again whenever they change. Releases of a press that
//! started on the frame are reported too, so a release delivered in the same
//! event batch as its press still ends the drag.

use crate::config::defaults::{FALLBACK_FRAME_WIDTH, FRAME_ASPECT_HEIGHT, FRAME_ASPECT_WIDTH};
use crate::ui::comparison::{ContainerGeometry, Pointer, SliderPosition};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Color, Element, Event, Length, Point, Rectangle, Size};

type OnPress<'a, Message> = Box<dyn Fn(Pointer, Point, ContainerGeometry) -> Message + 'a>;
type OnGeometry<'a, Message> = Box<dyn Fn(ContainerGeometry) -> Message + 'a>;
type OnRelease<'a, Message> = Box<dyn Fn(Pointer) -> Message + 'a>;

pub struct ComparisonFrame<'a, Message, Theme, Renderer> {
    after: Element<'a, Message, Theme, Renderer>,
    before: Element<'a, Message, Theme, Renderer>,
    handle: Element<'a, Message, Theme, Renderer>,
    position: SliderPosition,
    dragging: bool,
    on_press: OnPress<'a, Message>,
    on_geometry: Option<OnGeometry<'a, Message>>,
    on_release: Option<OnRelease<'a, Message>>,
    divider: Color,
    divider_width: f32,
}

impl<'a, Message, Theme, Renderer> ComparisonFrame<'a, Message, Theme, Renderer> {
    pub fn new(
        after: impl Into<Element<'a, Message, Theme, Renderer>>,
        before: impl Into<Element<'a, Message, Theme, Renderer>>,
        handle: impl Into<Element<'a, Message, Theme, Renderer>>,
        position: SliderPosition,
        on_press: impl Fn(Pointer, Point, ContainerGeometry) -> Message + 'a,
    ) -> Self {
        Self {
            after: after.into(),
            before: before.into(),
            handle: handle.into(),
            position,
            dragging: false,
            on_press: Box::new(on_press),
            on_geometry: None,
            on_release: None,
            divider: Color::WHITE,
            divider_width: 2.0,
        }
    }

    /// Message published whenever the frame's on-screen bounds change.
    #[must_use]
    pub fn on_geometry(mut self, on_geometry: impl Fn(ContainerGeometry) -> Message + 'a) -> Self {
        self.on_geometry = Some(Box::new(on_geometry));
        self
    }

    /// Message published when the pointer that pressed the frame is released.
    #[must_use]
    pub fn on_release(mut self, on_release: impl Fn(Pointer) -> Message + 'a) -> Self {
        self.on_release = Some(Box::new(on_release));
        self
    }

    /// Keeps the resize cursor while a drag is in progress, even off the handle.
    #[must_use]
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    #[must_use]
    pub fn divider(mut self, color: Color, width: f32) -> Self {
        self.divider = color;
        self.divider_width = width;
        self
    }
}

#[derive(Debug, Default)]
struct FrameState {
    last_geometry: Option<ContainerGeometry>,
    pressed: Option<Pointer>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ComparisonFrame<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<FrameState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(FrameState::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![
            widget::Tree::new(&self.after),
            widget::Tree::new(&self.before),
            widget::Tree::new(&self.handle),
        ]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.after, &self.before, &self.handle]);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = frame_size(limits.max());
        let full = layout::Limits::new(size, size);

        let after = self
            .after
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &full);
        let before = self
            .before
            .as_widget_mut()
            .layout(&mut tree.children[1], renderer, &full);
        let handle = self.handle.as_widget_mut().layout(
            &mut tree.children[2],
            renderer,
            &layout::Limits::new(Size::ZERO, size),
        );
        let origin = handle_origin(size, handle.size(), self.position);

        layout::Node::with_children(size, vec![after, before, handle.move_to(origin)])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let mut children = layout.children();
        let (Some(after_layout), Some(before_layout), Some(handle_layout)) =
            (children.next(), children.next(), children.next())
        else {
            return;
        };

        self.after.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            after_layout,
            cursor,
            viewport,
        );

        let clip = clip_bounds(bounds, self.position);
        if clip.width > 0.0 {
            renderer.with_layer(clip, |renderer| {
                self.before.as_widget().draw(
                    &tree.children[1],
                    renderer,
                    theme,
                    style,
                    before_layout,
                    cursor,
                    &clip,
                );
            });
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds: divider_bounds(bounds, self.position, self.divider_width),
                ..renderer::Quad::default()
            },
            self.divider,
        );

        self.handle.as_widget().draw(
            &tree.children[2],
            renderer,
            theme,
            style,
            handle_layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let geometry = ContainerGeometry::from(bounds);

        let state = tree.state.downcast_mut::<FrameState>();
        if state.last_geometry != Some(geometry) {
            state.last_geometry = Some(geometry);
            if let Some(on_geometry) = &self.on_geometry {
                shell.publish(on_geometry(geometry));
            }
        }

        if let Some((pointer, position)) = press_in(event, cursor, bounds) {
            state.pressed = Some(pointer);
            shell.publish((self.on_press)(pointer, position, geometry));
            shell.capture_event();
            return;
        }

        if let Some(pointer) = release_of(event) {
            let own_press = state.pressed == Some(pointer);
            if own_press {
                state.pressed = None;
            }
            if own_press || self.dragging {
                if let Some(on_release) = &self.on_release {
                    shell.publish(on_release(pointer));
                }
            }
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let over_handle = layout
            .children()
            .nth(2)
            .is_some_and(|handle| cursor.is_over(handle.bounds()));

        if self.dragging || over_handle {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Theme, Renderer> From<ComparisonFrame<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(frame: ComparisonFrame<'a, Message, Theme, Renderer>) -> Self {
        Self::new(frame)
    }
}

/// Detects a primary press inside `bounds`.
fn press_in(event: &Event, cursor: mouse::Cursor, bounds: Rectangle) -> Option<(Pointer, Point)> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
            .position_over(bounds)
            .map(|position| (Pointer::Mouse, position)),
        Event::Touch(touch::Event::FingerPressed { id, position }) if bounds.contains(*position) => {
            Some((Pointer::Finger(*id), *position))
        }
        _ => None,
    }
}

/// Detects a primary button or finger release anywhere in the window.
fn release_of(event: &Event) -> Option<Pointer> {
    match event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Pointer::Mouse),
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) => Some(Pointer::Finger(*id)),
        _ => None,
    }
}

/// Largest 16:9 size fitting in `max`.
///
/// Unbounded width falls back to [`FALLBACK_FRAME_WIDTH`].
fn frame_size(max: Size) -> Size {
    let mut width = if max.width.is_finite() {
        max.width
    } else {
        FALLBACK_FRAME_WIDTH
    };
    let mut height = width * FRAME_ASPECT_HEIGHT / FRAME_ASPECT_WIDTH;

    if max.height.is_finite() && height > max.height {
        height = max.height;
        width = height * FRAME_ASPECT_WIDTH / FRAME_ASPECT_HEIGHT;
    }

    Size::new(width, height)
}

/// Top-left corner of the handle relative to the frame: centered on the
/// divider horizontally and on the frame vertically.
fn handle_origin(frame: Size, handle: Size, position: SliderPosition) -> Point {
    Point::new(
        frame.width * position.as_fraction() - handle.width / 2.0,
        (frame.height - handle.height) / 2.0,
    )
}

/// Visible region of the "before" image.
fn clip_bounds(bounds: Rectangle, position: SliderPosition) -> Rectangle {
    Rectangle {
        width: bounds.width * position.as_fraction(),
        ..bounds
    }
}

/// Divider line just right of the clip edge, kept inside the frame.
fn divider_bounds(bounds: Rectangle, position: SliderPosition, width: f32) -> Rectangle {
    let edge = bounds.x + bounds.width * position.as_fraction();
    let x = edge.min(bounds.x + bounds.width - width).max(bounds.x);
    Rectangle {
        x,
        width,
        ..bounds
    }
}
