// Window-independent input events. The window layer produces these; the
// controller consumes them. Keeping them free of minifb types lets the
// controller be driven directly from tests.

use crate::types::Point;

/// A single key press, already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Escape,
    /// Letters arrive lowercase, digits as '0'..'9'.
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Key(KeyPress),
}
