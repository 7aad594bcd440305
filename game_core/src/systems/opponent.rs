use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Track the ball vertically, holding still inside the dead-zone
pub fn move_opponent(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let center = paddle.center_y(config);
        if ball_y < center - config.opponent_dead_zone {
            paddle.y -= config.opponent_speed;
        } else if ball_y > center + config.opponent_dead_zone {
            paddle.y += config.opponent_speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
