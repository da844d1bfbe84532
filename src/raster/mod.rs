//! Rasterization onto a drawable surface
//!
//! Stars are drawn on the CPU into a framebuffer; the renderer only uploads
//! and presents the finished frame.

pub mod circle;
pub mod surface;

pub use circle::{draw_filled_circle, draw_symmetric_octant};
pub use surface::{PixelBuffer, Rgba, Surface, colors, query_extent};
