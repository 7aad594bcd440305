use hecs::World;

use crate::{Config, InputState, Paddle, Side};

/// Apply held keys to the player paddle
pub fn move_player_paddle(world: &mut World, input: &InputState, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        if input.up_held {
            paddle.y -= config.paddle_speed;
        }
        if input.down_held {
            paddle.y += config.paddle_speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Center the player paddle on a pointer position (surface-local y)
pub fn apply_pointer(world: &mut World, pointer_y: f32, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
        }
    }
}
