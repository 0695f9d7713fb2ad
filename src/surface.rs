//! Drawing-target abstraction
//!
//! The simulation draws through this trait and never touches wgpu; the
//! concrete implementation lives in `renderer`.

use glam::Vec2;

/// A 2D drawing target with centered primitives
pub trait Surface {
    /// Reset the frame to the background
    fn clear(&mut self);

    /// Filled circle centered at `center`
    fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Filled axis-aligned rectangle centered at `center`, `size` = (width, height)
    fn rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]);
}
