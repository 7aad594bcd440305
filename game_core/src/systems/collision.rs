use crate::{paddle, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - radius < 0.0 {
            ball.pos.y = radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y + radius > config.height {
            ball.pos.y = config.height - radius;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if events.ball_hit_wall {
            log::trace!("wall bounce at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
        }
    }
}

/// Bounce the ball off either paddle, player first
///
/// Only the paddle's face is tested horizontally. A ball that has already
/// slipped past the face but is still level with the paddle bounces again,
/// so a slow ball can re-trigger on consecutive ticks.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy paddles out before borrowing the ball mutably
    let player = paddle(world, Side::Player);
    let opponent = paddle(world, Side::Opponent);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(player) = player {
            let face = config.paddle_x(Side::Player) + config.paddle_width;
            if ball.pos.x - config.ball_radius < face && player.spans(ball.pos.y, config) {
                ball.pos.x = face + config.ball_radius;
                deflect(ball, &player, config);
                events.ball_hit_paddle = true;
            }
        }

        if let Some(opponent) = opponent {
            let face = config.paddle_x(Side::Opponent);
            if ball.pos.x + config.ball_radius > face && opponent.spans(ball.pos.y, config) {
                ball.pos.x = face - config.ball_radius;
                deflect(ball, &opponent, config);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reverse horizontally and add spin from the contact offset
fn deflect(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let offset = ball.pos.y - paddle.center_y(config);
    ball.vel.x = -ball.vel.x;
    ball.vel.y = offset * config.spin_factor;
    log::trace!(
        "{:?} paddle hit, offset {:.1}, vel ({:.2}, {:.2})",
        paddle.side,
        offset,
        ball.vel.x,
        ball.vel.y
    );
}
