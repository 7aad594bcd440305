use hecs::World;

use crate::systems::apply_pointer;
use crate::{
    ball, create_ball, create_paddle, paddle, step, Ball, Config, Events, GameRng, InputState,
    Score, Side,
};

/// The single game in progress: entities plus every resource the step needs
pub struct Game {
    pub world: World,
    pub config: Config,
    pub input: InputState,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    ticks: u64,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Player, spawn_y);
        create_paddle(&mut world, Side::Opponent, spawn_y);

        // Create ball
        let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
        ball.reset(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            config,
            input: InputState::new(),
            score: Score::new(),
            events: Events::new(),
            rng,
            ticks: 0,
        }
    }

    /// Run one simulation tick
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.ticks += 1;
    }

    /// Keyboard press/release; returns false for keys the game ignores
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        self.input.set_key(key, pressed)
    }

    /// Pointer moved to `y` in surface coordinates
    pub fn set_pointer(&mut self, y: f32) {
        apply_pointer(&mut self.world, y, &self.config);
    }

    pub fn player_y(&self) -> Option<f32> {
        paddle(&self.world, Side::Player).map(|p| p.y)
    }

    pub fn opponent_y(&self) -> Option<f32> {
        paddle(&self.world, Side::Opponent).map(|p| p.y)
    }

    pub fn ball(&self) -> Option<Ball> {
        ball(&self.world)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}
