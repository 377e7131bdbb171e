//! Interactive canvas controller.
//!
//! Owns the persistent canvas and the small amount of UI state around it
//! (active tool, in-progress gesture). The event loop feeds it pointer and
//! key events and asks it to render one frame per tick; it never polls.

use crate::config::{Config, StyleConfig};
use crate::error::Error;
use crate::export;
use crate::input::{InputEvent, KeyPress};
use crate::raster::{self, draw_circle, draw_line, draw_rect};
use crate::tool::Mode;
use crate::types::{rgb, FrameBuffer, Point, BLACK, WHITE};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub const HELP_BAR_HEIGHT: i32 = 30;
const HELP_BAR_COLOR: u32 = rgb(240, 240, 240);
const HELP_TEXT: &str = "[1] LINE  [2] RECT  [3] CIRCLE  [4] FREE  |  [C] CLEAR  [S] SAVE  [ESC] QUIT";

/// One press-move-release interaction.
///
/// `anchor` and `current` are both set while `active` is true. In freehand
/// mode `anchor` trails the pointer so each move commits one short segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gesture {
    pub active: bool,
    pub anchor: Option<Point>,
    pub current: Option<Point>,
}

impl Gesture {
    /// Anchor and current point, only while the gesture is in progress.
    fn span(&self) -> Option<(Point, Point)> {
        match (self.active, self.anchor, self.current) {
            (true, Some(a), Some(c)) => Some((a, c)),
            _ => None,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Escape: the loop should stop
    Exit,
    Cleared,
    Saved(PathBuf),
    ModeChanged(Mode),
    /// Key has no binding
    Ignored,
}

pub struct CanvasController {
    canvas: FrameBuffer,
    mode: Mode,
    gesture: Gesture,
    style: StyleConfig,
    save_path: PathBuf,
}

impl CanvasController {
    /// A white canvas sized from `config`, in Line mode.
    pub fn new(config: &Config) -> Self {
        Self {
            canvas: FrameBuffer::filled(config.width, config.height, WHITE),
            mode: Mode::default(),
            gesture: Gesture::default(),
            style: config.style.clone(),
            save_path: config.save_path.clone(),
        }
    }

    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Switch tools. Allowed mid-gesture: the shape committed on release uses
    /// whatever mode is active at that moment.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("Mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Route one input event. Only key events produce an outcome.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Option<KeyOutcome>, Error> {
        match event {
            InputEvent::PointerDown(p) => self.on_pointer_down(p),
            InputEvent::PointerMove(p) => self.on_pointer_move(p),
            InputEvent::PointerUp(p) => self.on_pointer_up(p),
            InputEvent::Key(key) => return self.on_key(key).map(Some),
        }
        Ok(None)
    }

    pub fn on_pointer_down(&mut self, p: Point) {
        self.gesture = Gesture { active: true, anchor: Some(p), current: Some(p) };
    }

    pub fn on_pointer_move(&mut self, p: Point) {
        self.gesture.current = Some(p);

        if self.mode == Mode::Freehand {
            if let Some((anchor, _)) = self.gesture.span() {
                let color = self.style.color_for(Mode::Freehand);
                draw_line(&mut self.canvas, anchor, p, color, self.style.stroke_width);
                self.gesture.anchor = Some(p);
            }
        }
    }

    /// End the gesture and commit its shape. Ignored when no gesture is active.
    pub fn on_pointer_up(&mut self, p: Point) {
        let Some(anchor) = self.gesture.anchor.filter(|_| self.gesture.active) else {
            return;
        };
        self.gesture.active = false;
        self.gesture.current = Some(p);

        // Freehand was committed move by move.
        if self.mode.has_preview() {
            let color = self.style.color_for(self.mode);
            let width = self.style.stroke_width;
            draw_shape(&mut self.canvas, self.mode, anchor, p, color, width);
        }
    }

    pub fn on_key(&mut self, key: KeyPress) -> Result<KeyOutcome, Error> {
        let ch = match key {
            KeyPress::Escape => return Ok(KeyOutcome::Exit),
            KeyPress::Char(ch) => ch.to_ascii_lowercase(),
        };

        match ch {
            'c' => {
                self.clear();
                Ok(KeyOutcome::Cleared)
            }
            's' => {
                export::save_image(&self.canvas, &self.save_path)?;
                info!("Saved canvas to {}", self.save_path.display());
                Ok(KeyOutcome::Saved(self.save_path.clone()))
            }
            _ => match Mode::from_shortcut(ch) {
                Some(mode) => {
                    self.set_mode(mode);
                    Ok(KeyOutcome::ModeChanged(mode))
                }
                None => Ok(KeyOutcome::Ignored),
            },
        }
    }

    /// Paint every canvas pixel white, reusing the existing buffer.
    pub fn clear(&mut self) {
        self.canvas.fill(WHITE);
        info!("Canvas cleared");
    }

    /// Compose the frame to show: canvas, live preview, help bar.
    /// The persistent canvas is only read.
    pub fn render_frame(&self, scratch: &mut FrameBuffer) {
        scratch.copy_from(&self.canvas);

        if self.mode.has_preview() {
            if let Some((anchor, current)) = self.gesture.span() {
                let color = self.style.color_for(self.mode);
                draw_shape(scratch, self.mode, anchor, current, color, self.style.preview_width);
            }
        }

        self.draw_help_bar(scratch);
    }

    fn draw_help_bar(&self, fb: &mut FrameBuffer) {
        let width = fb.width as i32;
        let text_y = (HELP_BAR_HEIGHT - 7) / 2;
        raster::fill_rect(fb, 0, 0, width, HELP_BAR_HEIGHT, HELP_BAR_COLOR);
        raster::draw_text_5x7(fb, 10, text_y, HELP_TEXT, BLACK);

        let status = format!("MODE: {}", self.mode);
        let x = width - 10 - raster::text_width_5x7(&status);
        raster::draw_text_5x7(fb, x, text_y, &status, BLACK);
    }
}

/// Draw the two-point shape for `mode`. Freehand has no two-point shape here;
/// its segments are drawn directly as the pointer moves.
fn draw_shape(fb: &mut FrameBuffer, mode: Mode, a: Point, b: Point, color: u32, width: u32) {
    match mode {
        Mode::Line => draw_line(fb, a, b, color, width),
        Mode::Rectangle => draw_rect(fb, a, b, color, width),
        Mode::Circle => draw_circle(fb, a, a.distance_to(b), color, width),
        Mode::Freehand => {}
    }
}
