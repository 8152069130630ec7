use crate::layout::Point;

/// Input events the stepper responds to.
///
/// Pointer events carry the number of contacts currently down so the stepper
/// can cancel on multi-touch.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A pointer went down.
    PointerPressed { position: Point, touches: usize },
    /// A tracked pointer moved.
    PointerMoved { position: Point, touches: usize },
    /// The tracked pointer was lifted.
    PointerReleased { position: Point },
    /// The platform canceled the pointer (e.g. gesture takeover).
    PointerCanceled,
    /// The value field was tapped and wants to enter edit mode.
    BeginEditing,
    /// Text was typed or pasted into the value field. `"\n"` means return.
    TextInserted { text: String },
    /// Backspace in the value field.
    DeleteBackward,
    /// The value field lost focus.
    FocusLost,
}

impl Event {
    /// Single-contact press.
    pub fn press(x: f32, y: f32) -> Self {
        Event::PointerPressed {
            position: Point::new(x, y),
            touches: 1,
        }
    }

    /// Single-contact move.
    pub fn move_to(x: f32, y: f32) -> Self {
        Event::PointerMoved {
            position: Point::new(x, y),
            touches: 1,
        }
    }

    pub fn release(x: f32, y: f32) -> Self {
        Event::PointerReleased {
            position: Point::new(x, y),
        }
    }
}
