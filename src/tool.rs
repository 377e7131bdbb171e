//! Drawing tool selection.

use std::fmt;

/// The active drawing tool. Exactly one is selected at a time; keys 1-4 pick it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Straight line from press point to release point
    #[default]
    Line,
    /// Rectangle outline, press and release points are opposite corners
    Rectangle,
    /// Circle outline centered on the press point
    Circle,
    /// Continuous stroke committed segment by segment while dragging
    Freehand,
}

impl Mode {
    /// Map a shortcut key ('1'..'4') to its mode.
    pub fn from_shortcut(key: char) -> Option<Self> {
        match key {
            '1' => Some(Mode::Line),
            '2' => Some(Mode::Rectangle),
            '3' => Some(Mode::Circle),
            '4' => Some(Mode::Freehand),
            _ => None,
        }
    }

    /// Whether the mode draws a live preview between press and release.
    pub fn has_preview(self) -> bool {
        !matches!(self, Mode::Freehand)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Line => "LINE",
            Mode::Rectangle => "RECT",
            Mode::Circle => "CIRCLE",
            Mode::Freehand => "FREE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
