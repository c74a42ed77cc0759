//! Bounds-checked view over the host's pixel buffer
//!
//! Pixels are `0xAARRGGBB` words, row-major. Every write goes through
//! [`Canvas::set`], which silently drops anything outside the view, so
//! sprites may hang off any edge.

use super::image::Image;

/// Alpha blend a single channel
#[inline]
fn blend_channel(src: u32, dst: u32, alpha: f32) -> u32 {
    (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u32
}

/// Source-over blend of `src` onto `dst`; the destination alpha is kept
#[inline]
pub fn blend_argb(src: u32, dst: u32) -> u32 {
    let alpha = (src >> 24) & 0xFF;
    match alpha {
        0 => return dst,
        255 => return (dst & 0xFF00_0000) | (src & 0x00FF_FFFF),
        _ => {}
    }
    let a = alpha as f32 / 255.0;
    let r = blend_channel((src >> 16) & 0xFF, (dst >> 16) & 0xFF, a);
    let g = blend_channel((src >> 8) & 0xFF, (dst >> 8) & 0xFF, a);
    let b = blend_channel(src & 0xFF, dst & 0xFF, a);
    (dst & 0xFF00_0000) | (r << 16) | (g << 8) | b
}

/// Mutable `width × height` window onto a pixel slice
pub struct Canvas<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Wrap `pixels`. The height is reduced if the slice is too short for
    /// `width × height`.
    pub fn new(pixels: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width == 0 {
            0
        } else {
            height.min(pixels.len() / width)
        };
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = x + y * self.width;
        (i < self.pixels.len()).then_some(i)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite one pixel; out of range writes are skipped
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Blend one pixel over the current contents
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = blend_argb(color, self.pixels[i]);
        }
    }

    pub fn fill(&mut self, color: u32) {
        let n = self.width * self.height;
        self.pixels[..n].fill(color);
    }

    /// Alpha-blit `image` centred on `(cx, cy)`
    pub fn blit(&mut self, image: &Image, cx: i32, cy: i32) {
        let left = cx - (image.width / 2) as i32;
        let top = cy - (image.height / 2) as i32;
        for j in 0..image.height {
            for i in 0..image.width {
                let src = image.data[i + j * image.width];
                self.blend(left + i as i32, top + j as i32, src);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        for j in -radius..radius {
            for i in -radius..radius {
                if i * i + j * j < radius * radius {
                    self.set(cx + i, cy + j, color);
                }
            }
        }
    }

    /// Bresenham line, end point excluded
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        while x != x1 || y != y1 {
            self.set(x, y, color);
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }
}
