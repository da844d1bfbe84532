//! A single drifting star

use glam::Vec2;

/// Circular particle moving at constant velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Surface pixel coordinates, origin top-left
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Radius in pixels
    pub size: u32,
}

impl Star {
    pub fn new(pos: Vec2, vel: Vec2, size: u32) -> Self {
        Self { pos, vel, size }
    }

    /// Move by one frame of velocity
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Whether the star lies inside [-edge, extent + edge] on both axes.
    /// An unknown (zero) extent contains nothing.
    pub fn within(&self, extent: (u32, u32), edge: f32) -> bool {
        let (width, height) = extent;
        if width == 0 || height == 0 {
            return false;
        }
        let max_x = width as f32 + edge;
        let max_y = height as f32 + edge;
        self.pos.x >= -edge && self.pos.y >= -edge && self.pos.x <= max_x && self.pos.y <= max_y
    }
}
