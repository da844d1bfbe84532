//! Drawable surface contract and the CPU framebuffer

use bytemuck::{Pod, Zeroable};
use std::convert::Infallible;

/// Opaque 8-bit sRGB color, laid out as RGBA bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 0xFF])
    }
}

/// Colors for the star field
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::new(0x00, 0x00, 0x00);
    pub const STAR: Rgba = Rgba::new(0xFF, 0xFF, 0xFF);
}

/// Something the frame loop can draw into and present
pub trait Surface {
    /// Presentation failure, logged by the frame loop and otherwise ignored
    type Error: std::fmt::Display;

    /// Current size in pixels. (0, 0) means the size is unknown.
    fn extent(&self) -> (u32, u32);

    /// Set one pixel. Coordinates outside the surface are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba);

    /// Fill the whole surface with one color
    fn clear(&mut self, color: Rgba);

    /// Show the completed frame
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Current drawable extent of `surface`
#[inline]
pub fn query_extent<S: Surface + ?Sized>(surface: &S) -> (u32, u32) {
    surface.extent()
}

/// Row-major RGBA framebuffer
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![colors::BACKGROUND; width as usize * height as usize],
        }
    }

    /// Change size, discarding contents
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.pixels = vec![colors::BACKGROUND; width as usize * height as usize];
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Color at (x, y), None outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw RGBA bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels currently set to `color`
    pub fn count(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl Surface for PixelBuffer {
    type Error = Infallible;

    fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
