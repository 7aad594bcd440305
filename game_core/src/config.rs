use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
///
/// Fixed tuning from [`Params`] resolved against a concrete surface size.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub spin_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_surface(Params::SURFACE_WIDTH, Params::SURFACE_HEIGHT)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            spin_factor: Params::SPIN_FACTOR,
        }
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp a paddle's top edge to the surface
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn max_paddle_y(&self) -> f32 {
        (self.height - self.paddle_height).max(0.0)
    }

    /// Top edge that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.clamp_paddle_y((self.height - self.paddle_height) / 2.0)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
