//! Per-frame pointer input supplied by the host event loop.

use bitflags::bitflags;
use softdesk_core::types::Point;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
        const X1 = 1 << 3;
        const X2 = 1 << 4;
    }
}

/// State of one button for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub pressed: bool,
    /// The button went down or up since the previous frame.
    pub changed: bool,
}

/// Input snapshot for a single frame. The pointer is already clamped to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub pointer: Point,
    pub previous_pointer: Point,
    /// Buttons held this frame.
    pub pressed: MouseButtons,
    /// Buttons whose pressed state differs from the previous frame.
    pub changed: MouseButtons,
}

impl FrameInput {
    /// No buttons held or changing.
    pub fn new(pointer: Point, previous_pointer: Point) -> Self {
        FrameInput {
            pointer,
            previous_pointer,
            pressed: MouseButtons::empty(),
            changed: MouseButtons::empty(),
        }
    }

    pub fn button(&self, button: MouseButtons) -> ButtonState {
        ButtonState {
            pressed: self.pressed.contains(button),
            changed: self.changed.contains(button),
        }
    }

    /// The left button, which drives every window interaction.
    pub fn primary(&self) -> ButtonState {
        self.button(MouseButtons::LEFT)
    }

    /// Pointer movement since the previous frame.
    pub fn delta(&self) -> Point {
        self.pointer - self.previous_pointer
    }
}

/// Turns absolute pointer and button samples into [`FrameInput`]s by
/// remembering the previous sample.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    pointer: Point,
    pressed: MouseButtons,
}

impl InputTracker {
    pub fn new(pointer: Point) -> Self {
        InputTracker {
            pointer,
            pressed: MouseButtons::empty(),
        }
    }

    pub fn next(&mut self, pointer: Point, pressed: MouseButtons) -> FrameInput {
        let input = FrameInput {
            pointer,
            previous_pointer: self.pointer,
            pressed,
            changed: pressed ^ self.pressed,
        };
        self.pointer = pointer;
        self.pressed = pressed;
        input
    }
}
