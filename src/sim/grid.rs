//! Brick grid layout
//!
//! Laid out once at game start: row-major, fixed spacing, one palette color
//! per row cycling through `BRICK_PALETTE`. The grid is never resized;
//! bricks are only individually killed.

use glam::Vec2;

use crate::consts::*;

use super::entities::Brick;

/// Fixed cols × rows collection of bricks
#[derive(Debug, Clone)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
    cols: u32,
    rows: u32,
}

impl BrickGrid {
    /// Lay out the grid across the full playfield width
    pub fn new(screen_width: f32, cols: u32, rows: u32) -> Self {
        let pitch = screen_width / cols as f32;
        let size = Vec2::new(pitch - BRICK_GAP, BRICK_HEIGHT);

        let mut bricks = Vec::with_capacity((cols * rows) as usize);
        for row in 0..rows {
            let color = BRICK_PALETTE[row as usize % BRICK_PALETTE.len()];
            let y = BRICK_TOP_OFFSET + row as f32 * BRICK_ROW_PITCH;
            for col in 0..cols {
                let x = pitch / 2.0 + col as f32 * pitch;
                bricks.push(Brick::new(Vec2::new(x, y), size, color));
            }
        }

        Self { bricks, cols, rows }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Bricks still standing
    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }
}
