//! Playfield entities: ball, paddle, bricks
//!
//! Each entity mutates only itself on update and draws through the
//! `Surface` trait.

use glam::Vec2;

use crate::consts::*;
use crate::surface::Surface;

use super::input::{Action, InputState};

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    /// Advance along the velocity; `delta` is elapsed milliseconds
    pub fn update(&mut self, delta: f32) {
        self.pos += self.vel * delta * BALL_DAMPING;
    }

    /// Multiply the velocity components by ±1 to reverse direction per axis
    pub fn flip(&mut self, x_sign: f32, y_sign: f32) {
        self.vel.x *= x_sign;
        self.vel.y *= y_sign;
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.circle(self.pos, self.radius, BALL_COLOR);
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Playfield width the paddle is clamped against
    screen_width: f32,
}

impl Paddle {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                screen_width / 2.0,
                screen_height - PADDLE_BOTTOM_OFFSET,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            screen_width,
        }
    }

    /// Move by ±delta per held action, then clamp the full width on-screen
    pub fn update(&mut self, delta: f32, input: &InputState) {
        if input.held(Action::Left) {
            self.pos.x -= delta;
        }
        if input.held(Action::Right) {
            self.pos.x += delta;
        }
        let half = self.size.x / 2.0;
        self.pos.x = self.pos.x.clamp(half, self.screen_width - half);
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.rect(self.pos, self.size, PADDLE_COLOR);
    }
}

/// A single brick; a dead brick is neither drawn nor collidable
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    pub alive: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            pos,
            size,
            color,
            alive: true,
        }
    }

    /// Bricks are static
    pub fn update(&mut self, _delta: f32) {}

    pub fn draw(&self, surface: &mut impl Surface) {
        if self.alive {
            surface.rect(self.pos, self.size, self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ball_advances_by_damped_velocity() {
        let mut ball = Ball::new(Vec2::new(50.0, 50.0), Vec2::new(0.1, 1.0));
        ball.update(16.7);

        // pos += vel * delta * 0.3 per axis
        assert!((ball.pos.x - 50.501).abs() < 1e-3);
        assert!((ball.pos.y - 55.01).abs() < 1e-3);
        assert_eq!(ball.vel, Vec2::new(0.1, 1.0));
    }

    #[test]
    fn test_ball_flip() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(0.4, -1.2));

        ball.flip(-1.0, 1.0);
        assert_eq!(ball.vel, Vec2::new(-0.4, -1.2));

        ball.flip(-1.0, -1.0);
        assert_eq!(ball.vel, Vec2::new(0.4, 1.2));

        ball.flip(1.0, 1.0);
        assert_eq!(ball.vel, Vec2::new(0.4, 1.2));
    }

    #[test]
    fn test_paddle_moves_by_delta() {
        let mut paddle = Paddle::new(900.0, 780.0);
        assert_eq!(paddle.pos.x, 450.0);

        let mut input = InputState::default();
        input.set(Action::Left, true);
        paddle.update(10.0, &input);
        assert_eq!(paddle.pos.x, 440.0);

        input.set(Action::Left, false);
        input.set(Action::Right, true);
        paddle.update(25.0, &input);
        assert_eq!(paddle.pos.x, 465.0);
    }

    #[test]
    fn test_paddle_opposing_actions_cancel() {
        let mut paddle = Paddle::new(900.0, 780.0);
        let mut input = InputState::default();
        input.set(Action::Left, true);
        input.set(Action::Right, true);

        paddle.update(50.0, &input);
        assert_eq!(paddle.pos.x, 450.0);
    }

    #[test]
    fn test_paddle_clamped_from_outside_range() {
        let mut paddle = Paddle::new(900.0, 780.0);
        paddle.pos.x = -200.0;

        paddle.update(5.0, &InputState::default());
        assert_eq!(paddle.pos.x, paddle.size.x / 2.0);

        paddle.pos.x = 2000.0;
        paddle.update(5.0, &InputState::default());
        assert_eq!(paddle.pos.x, 900.0 - paddle.size.x / 2.0);
    }

    #[test]
    fn test_dead_brick_not_drawn() {
        struct CountingSurface(usize);
        impl Surface for CountingSurface {
            fn clear(&mut self) {}
            fn circle(&mut self, _: Vec2, _: f32, _: [f32; 4]) {
                self.0 += 1;
            }
            fn rect(&mut self, _: Vec2, _: Vec2, _: [f32; 4]) {
                self.0 += 1;
            }
        }

        let mut brick = Brick::new(Vec2::new(50.0, 60.0), Vec2::new(41.0, 18.0), [1.0; 4]);
        let mut surface = CountingSurface(0);

        brick.draw(&mut surface);
        assert_eq!(surface.0, 1);

        brick.alive = false;
        brick.draw(&mut surface);
        assert_eq!(surface.0, 1);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_screen(
            start_x in -2000.0f32..2000.0,
            delta in 0.0f32..100.0,
            left in proptest::bool::ANY,
            right in proptest::bool::ANY,
            steps in 1usize..50,
        ) {
            let mut paddle = Paddle::new(900.0, 780.0);
            paddle.pos.x = start_x;

            let mut input = InputState::default();
            input.set(Action::Left, left);
            input.set(Action::Right, right);

            for _ in 0..steps {
                paddle.update(delta, &input);
                let half = paddle.size.x / 2.0;
                prop_assert!(paddle.pos.x >= half);
                prop_assert!(paddle.pos.x <= 900.0 - half);
            }
        }
    }
}
