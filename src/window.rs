// Window + input plumbing on top of minifb.
// minifb only exposes polled state (is the button down, where is the mouse),
// so the Drawer turns frame-to-frame changes of that state into InputEvents.

use crate::error::Error;
use crate::input::{InputEvent, KeyPress};
use crate::types::{FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    pointer: PointerTracker,
}

impl Drawer {
    /// Open a fixed-size window capped at `target_fps`.
    /// The cap is what makes each loop iteration wait briefly for input.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: false, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self { window, pointer: PointerTracker::default() })
    }

    /// Push the pixels for this frame to the screen.
    /// This is also where minifb pumps OS events and sleeps to hold the frame rate.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Everything that happened since the last poll: pointer events first, then keys.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let pos = self
            .window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point::new(x as i32, y as i32));
        let down = self.window.get_mouse_down(MouseButton::Left);
        self.pointer.update(pos, down, &mut events);

        events.extend(
            self.window
                .get_keys_pressed(KeyRepeat::No)
                .into_iter()
                .filter_map(key_press)
                .map(InputEvent::Key),
        );
        events
    }
}

/// Edge detection for the left button plus motion tracking.
#[derive(Debug, Default)]
struct PointerTracker {
    was_down: bool,
    last_pos: Option<Point>,
}

impl PointerTracker {
    fn update(&mut self, pos: Option<Point>, down: bool, out: &mut Vec<InputEvent>) {
        let moved = pos.is_some() && pos != self.last_pos;

        if down && !self.was_down {
            if let Some(p) = pos.or(self.last_pos) {
                out.push(InputEvent::PointerDown(p));
                self.was_down = true;
            }
        } else if let (true, Some(p)) = (moved, pos) {
            out.push(InputEvent::PointerMove(p));
        }

        if !down && self.was_down {
            if let Some(p) = pos.or(self.last_pos) {
                out.push(InputEvent::PointerUp(p));
            }
            self.was_down = false;
        }

        if pos.is_some() {
            self.last_pos = pos;
        }
    }
}

/// Decode the keys the canvas cares about: Escape, letters, digits.
fn key_press(key: Key) -> Option<KeyPress> {
    let ch = match key {
        Key::Escape => return Some(KeyPress::Escape),
        Key::Key0 | Key::NumPad0 => '0',
        Key::Key1 | Key::NumPad1 => '1',
        Key::Key2 | Key::NumPad2 => '2',
        Key::Key3 | Key::NumPad3 => '3',
        Key::Key4 | Key::NumPad4 => '4',
        Key::Key5 | Key::NumPad5 => '5',
        Key::Key6 | Key::NumPad6 => '6',
        Key::Key7 | Key::NumPad7 => '7',
        Key::Key8 | Key::NumPad8 => '8',
        Key::Key9 | Key::NumPad9 => '9',
        Key::A => 'a',
        Key::B => 'b',
        Key::C => 'c',
        Key::D => 'd',
        Key::E => 'e',
        Key::F => 'f',
        Key::G => 'g',
        Key::H => 'h',
        Key::I => 'i',
        Key::J => 'j',
        Key::K => 'k',
        Key::L => 'l',
        Key::M => 'm',
        Key::N => 'n',
        Key::O => 'o',
        Key::P => 'p',
        Key::Q => 'q',
        Key::R => 'r',
        Key::S => 's',
        Key::T => 't',
        Key::U => 'u',
        Key::V => 'v',
        Key::W => 'w',
        Key::X => 'x',
        Key::Y => 'y',
        Key::Z => 'z',
        Key::Space => ' ',
        _ => return None,
    };
    Some(KeyPress::Char(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(t: &mut PointerTracker, pos: (i32, i32), down: bool) -> Vec<InputEvent> {
        let mut out = Vec::new();
        t.update(Some(pos.into()), down, &mut out);
        out
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut t = PointerTracker::default();
        assert_eq!(step(&mut t, (5, 5), false), vec![InputEvent::PointerMove(Point::new(5, 5))]);
        assert_eq!(step(&mut t, (5, 5), true), vec![InputEvent::PointerDown(Point::new(5, 5))]);
        assert_eq!(step(&mut t, (5, 5), true), vec![]);
        assert_eq!(step(&mut t, (9, 7), true), vec![InputEvent::PointerMove(Point::new(9, 7))]);
        assert_eq!(
            step(&mut t, (12, 8), false),
            vec![InputEvent::PointerMove(Point::new(12, 8)), InputEvent::PointerUp(Point::new(12, 8))]
        );
        assert_eq!(step(&mut t, (12, 8), false), vec![]);
    }

    #[test]
    fn press_reports_the_new_position() {
        let mut t = PointerTracker::default();
        step(&mut t, (1, 1), false);
        assert_eq!(step(&mut t, (30, 40), true), vec![InputEvent::PointerDown(Point::new(30, 40))]);
    }

    #[test]
    fn release_without_position_uses_last_known() {
        let mut t = PointerTracker::default();
        step(&mut t, (3, 4), true);
        let mut out = Vec::new();
        t.update(None, false, &mut out);
        assert_eq!(out, vec![InputEvent::PointerUp(Point::new(3, 4))]);
    }

    #[test]
    fn keys_decode_to_lowercase_and_digits() {
        assert_eq!(key_press(Key::Escape), Some(KeyPress::Escape));
        assert_eq!(key_press(Key::C), Some(KeyPress::Char('c')));
        assert_eq!(key_press(Key::S), Some(KeyPress::Char('s')));
        assert_eq!(key_press(Key::Key3), Some(KeyPress::Char('3')));
        assert_eq!(key_press(Key::NumPad4), Some(KeyPress::Char('4')));
        assert_eq!(key_press(Key::LeftShift), None);
    }
}
