//! Game simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform dependencies: drawing goes through the `Surface` trait and input
//! arrives as host key identifier strings.

pub mod collision;
pub mod entities;
pub mod game;
pub mod grid;
pub mod input;

pub use collision::{Region, circle_rect};
pub use entities::{Ball, Brick, Paddle};
pub use game::Game;
pub use grid::BrickGrid;
pub use input::{Action, InputState, KeyBindings};
