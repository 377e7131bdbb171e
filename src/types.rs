// Core types shared by the controller, the rasterizer and the window.

pub const WHITE: u32 = 0x00_FF_FF_FF;
pub const BLACK: u32 = 0x00_00_00_00;

/// Pack an RGB triplet as 0x00RRGGBB (the layout minifb expects).
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split a 0x00RRGGBB pixel back into its channels.
#[inline]
pub const fn channels(px: u32) -> [u8; 3] {
    [((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8]
}

/// A pointer position in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, truncated to whole pixels.
    pub fn distance_to(self, other: Point) -> i32 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt() as i32
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the buffer is on screen (pixels)
    pub height: usize,     // how tall the buffer is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A `width` x `height` buffer with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Overwrite every pixel in place (no reallocation).
    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Copy `src` into this buffer. Both must have the same dimensions.
    pub fn copy_from(&mut self, src: &FrameBuffer) {
        debug_assert_eq!((self.width, self.height), (src.width, src.height));
        self.pixels.copy_from_slice(&src.pixels);
    }

    /// Pixel at (x,y), or None when outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}
