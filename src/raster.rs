// Software rasterization onto a FrameBuffer.
// Everything here clips silently: shapes may hang off the canvas edge and only
// the on-canvas part gets drawn.

use crate::types::{FrameBuffer, Point};

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Stamp a `width` x `width` square brush whose top-left sits `(width-1)/2`
/// pixels up and left of (x,y). Width 1 is a single pixel.
#[inline]
fn stamp(fb: &mut FrameBuffer, x: i32, y: i32, width: u32, color: u32) {
    let w = width.max(1) as i32;
    let lo = -((w - 1) / 2);
    let hi = w / 2;
    for dy in lo..=hi {
        for dx in lo..=hi {
            put_pixel(fb, x + dx, y + dy, color);
        }
    }
}

/// Draw a line between `a` and `b` (both endpoints included) using Bresenham.
pub fn draw_line(fb: &mut FrameBuffer, a: Point, b: Point, color: u32, width: u32) {
    let (mut x0, mut y0, x1, y1) = (a.x, a.y, b.x, b.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(fb, x0, y0, width, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw an axis-aligned rectangle outline with `a` and `b` as opposite corners.
/// Corners can be given in any order.
pub fn draw_rect(fb: &mut FrameBuffer, a: Point, b: Point, color: u32, width: u32) {
    let (left, right) = (a.x.min(b.x), a.x.max(b.x));
    let (top, bottom) = (a.y.min(b.y), a.y.max(b.y));
    let tl = Point::new(left, top);
    let tr = Point::new(right, top);
    let bl = Point::new(left, bottom);
    let br = Point::new(right, bottom);
    draw_line(fb, tl, tr, color, width);
    draw_line(fb, tr, br, color, width);
    draw_line(fb, br, bl, color, width);
    draw_line(fb, bl, tl, color, width);
}

/// Draw a circle outline around `center` with the midpoint algorithm.
/// Radius 0 marks only the center; negative radii draw nothing.
pub fn draw_circle(fb: &mut FrameBuffer, center: Point, radius: i32, color: u32, width: u32) {
    if radius < 0 {
        return;
    }
    let (cx, cy) = (center.x, center.y);
    let mut x = radius;
    let mut y = 0;
    let mut d = 1 - radius;
    while x >= y {
        // one computed octant point, mirrored into all eight
        for (px, py) in [
            (cx + x, cy + y), (cx + y, cy + x),
            (cx - y, cy + x), (cx - x, cy + y),
            (cx - x, cy - y), (cx - y, cy - x),
            (cx + y, cy - x), (cx + x, cy - y),
        ] {
            stamp(fb, px, py, width, color);
        }
        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
}

/// Fill the half-open rectangle [x0,x1) x [y0,y1), clipped to the buffer.
pub fn fill_rect(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let x0 = x0.clamp(0, fb.width as i32) as usize;
    let x1 = x1.clamp(0, fb.width as i32) as usize;
    let y0 = y0.clamp(0, fb.height as i32) as usize;
    let y1 = y1.clamp(0, fb.height as i32) as usize;
    if x0 >= x1 {
        return;
    }
    for y in y0..y1 {
        let row = y * fb.width;
        fb.pixels[row + x0..row + x1].fill(color);
    }
}

/* ---------- 5x7 bitmap font (uppercase, digits, help-bar punctuation) ---------- */

pub const GLYPH_ADVANCE: i32 = 6; // 5 pixels glyph width + 1 pixel spacing

/// Return a 5x7 glyph bitmap. Lowercase letters share the uppercase shapes.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '[' => g!(0b01110,0b01000,0b01000,0b01000,0b01000,0b01000,0b01110),
        ']' => g!(0b01110,0b00010,0b00010,0b00010,0b00010,0b00010,0b01110),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),

        _ => None,
    }
}

fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs with (x,y) as the top-left corner.
/// Characters without a glyph still take up a cell.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += GLYPH_ADVANCE;
    }
}

/// Width in pixels that `draw_text_5x7` would cover for `text`.
pub fn text_width_5x7(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, WHITE};

    fn blank() -> FrameBuffer {
        FrameBuffer::filled(64, 48, WHITE)
    }

    fn painted(fb: &FrameBuffer) -> usize {
        fb.pixels.iter().filter(|&&p| p != WHITE).count()
    }

    #[test]
    fn put_pixel_clips_outside() {
        let mut fb = blank();
        put_pixel(&mut fb, -1, 3, BLACK);
        put_pixel(&mut fb, 64, 3, BLACK);
        put_pixel(&mut fb, 3, 48, BLACK);
        assert_eq!(painted(&fb), 0);
        put_pixel(&mut fb, 63, 47, BLACK);
        assert_eq!(fb.get(63, 47), Some(BLACK));
    }

    #[test]
    fn line_includes_both_endpoints() {
        let mut fb = blank();
        draw_line(&mut fb, Point::new(2, 3), Point::new(40, 20), BLACK, 1);
        assert_eq!(fb.get(2, 3), Some(BLACK));
        assert_eq!(fb.get(40, 20), Some(BLACK));
    }

    #[test]
    fn diagonal_line_is_one_pixel_per_step() {
        let mut fb = blank();
        draw_line(&mut fb, Point::new(0, 0), Point::new(9, 9), BLACK, 1);
        assert_eq!(painted(&fb), 10);
        for i in 0..10 {
            assert_eq!(fb.get(i, i), Some(BLACK));
        }
    }

    #[test]
    fn degenerate_line_is_a_dot() {
        let mut fb = blank();
        draw_line(&mut fb, Point::new(5, 5), Point::new(5, 5), BLACK, 1);
        assert_eq!(painted(&fb), 1);
    }

    #[test]
    fn wide_brush_covers_a_square() {
        let mut fb = blank();
        draw_line(&mut fb, Point::new(10, 10), Point::new(10, 10), BLACK, 2);
        assert_eq!(painted(&fb), 4);
        assert_eq!(fb.get(11, 11), Some(BLACK));

        let mut fb = blank();
        draw_line(&mut fb, Point::new(10, 10), Point::new(10, 10), BLACK, 3);
        assert_eq!(painted(&fb), 9);
        assert_eq!(fb.get(9, 9), Some(BLACK));
    }

    #[test]
    fn rect_corner_order_does_not_matter() {
        let mut a = blank();
        let mut b = blank();
        draw_rect(&mut a, Point::new(5, 6), Point::new(30, 25), BLACK, 1);
        draw_rect(&mut b, Point::new(30, 25), Point::new(5, 6), BLACK, 1);
        assert_eq!(a, b);
        assert_eq!(a.get(5, 6), Some(BLACK));
        assert_eq!(a.get(30, 25), Some(BLACK));
        assert_eq!(a.get(17, 15), Some(WHITE));
    }

    #[test]
    fn circle_hits_cardinal_points() {
        let mut fb = blank();
        let c = Point::new(30, 24);
        draw_circle(&mut fb, c, 10, BLACK, 1);
        for (x, y) in [(40, 24), (20, 24), (30, 34), (30, 14)] {
            assert_eq!(fb.get(x, y), Some(BLACK), "({x},{y})");
        }
        assert_eq!(fb.get(30, 24), Some(WHITE));
    }

    #[test]
    fn negative_radius_draws_nothing() {
        let mut fb = blank();
        draw_circle(&mut fb, Point::new(30, 24), -1, BLACK, 1);
        assert_eq!(painted(&fb), 0);
    }

    #[test]
    fn fill_rect_clips() {
        let mut fb = blank();
        fill_rect(&mut fb, -10, -10, 4, 2, BLACK);
        assert_eq!(painted(&fb), 8);
        fill_rect(&mut fb, 60, 0, 100, 1, BLACK);
        assert_eq!(painted(&fb), 12);
    }

    #[test]
    fn text_uses_upper_glyphs_for_lowercase() {
        let mut upper = blank();
        let mut lower = blank();
        draw_text_5x7(&mut upper, 1, 1, "SAVE", BLACK);
        draw_text_5x7(&mut lower, 1, 1, "save", BLACK);
        assert_eq!(upper, lower);
        assert!(painted(&upper) > 0);
        assert_eq!(text_width_5x7("SAVE"), 24);
    }
}
