//! Gridbreak - a classic brick-grid Breakout game
//!
//! Core modules:
//! - `sim`: game logic (entities, collision, per-frame update)
//! - `surface`: drawing-target abstraction the sim draws through
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: construction parameters

pub mod config;
pub mod renderer;
pub mod sim;
pub mod surface;

pub use config::GameConfig;
pub use surface::Surface;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield size in pixels (origin top-left, y grows downward)
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 780.0;

    /// Brick grid defaults
    pub const BRICK_COLS: u32 = 20;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_HEIGHT: f32 = 18.0;
    /// Horizontal gap between neighboring bricks (column pitch is screen width / cols)
    pub const BRICK_GAP: f32 = 4.0;
    /// Center-to-center distance between brick rows
    pub const BRICK_ROW_PITCH: f32 = 24.0;
    /// y of the topmost brick row's centers
    pub const BRICK_TOP_OFFSET: f32 = 60.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Distance of the paddle centerline from the bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    /// Horizontal velocity per pixel of offset from paddle center on a bounce
    pub const PADDLE_DEFLECTION: f32 = 0.01;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Scales velocity * delta (ms) into per-frame displacement
    pub const BALL_DAMPING: f32 = 0.3;
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(0.25, 1.0);

    /// Row-cycling brick palette (RGBA), applied top row first
    pub const BRICK_PALETTE: [[f32; 4]; 7] = [
        [0.90, 0.22, 0.21, 1.0], // red
        [0.96, 0.55, 0.20, 1.0], // orange
        [0.95, 0.85, 0.25, 1.0], // yellow
        [0.30, 0.78, 0.36, 1.0], // green
        [0.25, 0.55, 0.95, 1.0], // blue
        [0.40, 0.30, 0.85, 1.0], // indigo
        [0.70, 0.30, 0.85, 1.0], // violet
    ];

    pub const BALL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE_COLOR: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
}
