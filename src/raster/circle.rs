//! Filled circles via the midpoint (Bresenham) circle algorithm
//!
//! Works entirely in integer steps plus one running decision value, so a
//! star of radius r costs O(r) column sweeps and no sqrt/trig per pixel.

use super::surface::{Surface, colors};

/// Plot the 8 reflections of octant point (x, y) around the center
pub fn draw_symmetric_octant<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    center_x: i32,
    center_y: i32,
) {
    let color = colors::STAR;
    // Saturate so a far-off center clips instead of overflowing
    let (left, right) = (center_x.saturating_sub(x), center_x.saturating_add(x));
    let (top, bottom) = (center_y.saturating_sub(y), center_y.saturating_add(y));
    surface.set_pixel(right, top, color);
    surface.set_pixel(right, bottom, color);
    surface.set_pixel(left, top, color);
    surface.set_pixel(left, bottom, color);

    let (left, right) = (center_x.saturating_sub(y), center_x.saturating_add(y));
    let (top, bottom) = (center_y.saturating_sub(x), center_y.saturating_add(x));
    surface.set_pixel(right, top, color);
    surface.set_pixel(right, bottom, color);
    surface.set_pixel(left, top, color);
    surface.set_pixel(left, bottom, color);
}

/// Boundary point (x, y) plus every point in its column down to the diagonal
fn draw_span<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, center_x: i32, center_y: i32) {
    draw_symmetric_octant(surface, x, y, center_x, center_y);
    for inner_y in (x..y).rev() {
        draw_symmetric_octant(surface, x, inner_y, center_x, center_y);
    }
}

/// Draw a filled disk of `radius` pixels centered at (center_x, center_y)
pub fn draw_filled_circle<S: Surface + ?Sized>(
    surface: &mut S,
    center_x: i32,
    center_y: i32,
    radius: u32,
) {
    let mut x = 0i32;
    let mut y = radius.min(i32::MAX as u32) as i32;
    // Decision value at the midpoint between the east and southeast candidates
    let mut dist = 5.0f32 / 4.0 - y as f32;

    draw_span(surface, x, y, center_x, center_y);

    while x < y {
        if dist <= 0.0 {
            // East
            x += 1;
            dist += (2 * x + 3) as f32;
        } else {
            // Southeast
            x += 1;
            y -= 1;
            dist += (2 * x - 2 * y - 5) as f32;
        }
        draw_span(surface, x, y, center_x, center_y);
    }
}
