//! Per-frame game orchestration
//!
//! `update` runs a strict sequence: move entities, resolve the paddle
//! bounce, sweep the brick grid, then correct against the walls. `draw`
//! renders bricks, ball, paddle in that z-order.

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::*;
use crate::surface::Surface;

use super::collision::{Region, circle_rect};
use super::entities::{Ball, Paddle};
use super::grid::BrickGrid;
use super::input::{InputState, KeyBindings};

/// Owns all entities and input state for one run of the game
pub struct Game {
    pub bricks: BrickGrid,
    pub paddle: Paddle,
    pub ball: Ball,
    pub input: InputState,
    bindings: KeyBindings,
    screen: Vec2,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let screen = Vec2::new(config.screen_width, config.screen_height);
        Self {
            bricks: BrickGrid::new(config.screen_width, config.brick_cols, config.brick_rows),
            paddle: Paddle::new(config.screen_width, config.screen_height),
            ball: Ball::new(screen / 2.0, BALL_START_VELOCITY),
            input: InputState::default(),
            bindings: KeyBindings::default(),
            screen,
        }
    }

    /// Feed a host key event through the binding table; unbound keys are ignored
    pub fn handle_key(&mut self, key: &str, pressed: bool) {
        if let Some(action) = self.bindings.resolve(key) {
            self.input.set(action, pressed);
        }
    }

    /// Advance one frame; `delta` is elapsed milliseconds since the previous one
    pub fn update(&mut self, delta: f32) {
        // Movement first: bricks (static), then ball, then paddle
        for brick in self.bricks.iter_mut() {
            brick.update(delta);
        }
        self.ball.update(delta);
        self.paddle.update(delta, &self.input);

        // Paddle bounce: horizontal deflection proportional to the offset
        // from paddle center, vertical always upward
        let paddle_hit = circle_rect(
            self.ball.pos,
            self.ball.radius,
            self.paddle.pos,
            self.paddle.size,
        );
        if paddle_hit.is_some() {
            self.ball.vel.x = (self.ball.pos.x - self.paddle.pos.x) * PADDLE_DEFLECTION;
            self.ball.vel.y = -self.ball.vel.y.abs();
        }

        // Brick sweep: every live brick hit this frame dies, but the flip is
        // accumulated across the whole pass and applied once
        let mut flip_x = 1.0;
        let mut flip_y = 1.0;
        for brick in self.bricks.iter_mut() {
            if !brick.alive {
                continue;
            }
            match circle_rect(self.ball.pos, self.ball.radius, brick.pos, brick.size) {
                Some(Region::TopOrBottom) => {
                    brick.alive = false;
                    flip_y = -1.0;
                }
                Some(Region::LeftOrRight) => {
                    brick.alive = false;
                    flip_x = -1.0;
                }
                Some(Region::Corner) => {
                    brick.alive = false;
                    flip_x = -1.0;
                    flip_y = -1.0;
                }
                None => {}
            }
        }
        self.ball.flip(flip_x, flip_y);

        // Wall corrections force the velocity sign instead of flipping it;
        // they may co-occur with brick hits in the same frame
        if self.ball.pos.x - self.ball.radius < 0.0 {
            self.ball.vel.x = self.ball.vel.x.abs();
        }
        if self.ball.pos.x + self.ball.radius > self.screen.x {
            self.ball.vel.x = -self.ball.vel.x.abs();
        }
        if self.ball.pos.y - self.ball.radius < 0.0 {
            self.ball.vel.y = self.ball.vel.y.abs();
        }
        // No floor: a ball past the bottom edge leaves play for good and the
        // game restarts only via page reload
    }

    /// Draw the frame: live bricks, then ball, then paddle
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.clear();
        for brick in self.bricks.iter() {
            brick.draw(surface);
        }
        self.ball.draw(surface);
        self.paddle.draw(surface);
    }
}
