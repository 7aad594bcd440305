pub mod components;
pub mod config;
pub mod frame_loop;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame_loop::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one tick
///
/// There is no delta time: one call is one display refresh.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Player paddle from held keys
    move_player_paddle(world, input, config);

    // 2. Move ball
    move_ball(world);

    // 3. Top/bottom walls
    check_wall_collisions(world, config, events);

    // 4-5. Player then opponent paddle
    check_paddle_collisions(world, config, events);

    // 6. Goals (ball crossed a side edge)
    check_scoring(world, config, score, events, rng);

    // 7. Opponent follows the ball
    move_opponent(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Copy of the paddle on the given side, if spawned
pub fn paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

/// Copy of the ball, if spawned
pub fn ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
}
