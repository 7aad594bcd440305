use glam::Vec2;
use rand::Rng;

use crate::Config;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // Left, driven by keyboard and pointer
    Opponent, // Right, driven by the heuristic
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to the surface
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Strict vertical containment, so a ball level with an edge misses
    pub fn spans(&self, y: f32, config: &Config) -> bool {
        y > self.y && y < self.y + config.paddle_height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from the center: random side, random vertical slope
    pub fn reset(&mut self, config: &Config, rng: &mut crate::GameRng) {
        self.pos = config.ball_spawn();

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let slope: f32 = rng.0.gen_range(-1.0..1.0);

        self.vel = Vec2::new(config.ball_speed * dir, config.ball_speed * slope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_reset_serves_from_center_at_fixed_speed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-40.0, 3.0), Vec2::ZERO);

        for _ in 0..100 {
            ball.reset(&config, &mut rng);
            assert_eq!(ball.pos, config.ball_spawn());
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
            assert!(ball.vel.y.abs() <= config.ball_speed);
        }
    }

    #[test]
    fn test_reset_serves_both_directions() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        let mut left = 0;
        let mut right = 0;
        for _ in 0..200 {
            ball.reset(&config, &mut rng);
            if ball.vel.x > 0.0 {
                right += 1;
            } else {
                left += 1;
            }
        }
        assert!(left > 0 && right > 0, "Serve direction should vary");
    }

    #[test]
    fn test_paddle_span_is_strict() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Player, 100.0);
        assert!(!paddle.spans(100.0, &config), "Top edge is outside");
        assert!(paddle.spans(150.0, &config));
        assert!(!paddle.spans(200.0, &config), "Bottom edge is outside");
        assert_eq!(paddle.center_y(&config), 150.0);
    }
}
