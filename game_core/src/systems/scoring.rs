use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if ball crossed a goal line
///
/// Both lines are checked in the same tick; a reset ball sits at the center
/// so at most one goal is counted.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - radius < 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
            log::debug!("opponent scores: {}-{}", score.player, score.opponent);

            ball.reset(config, rng);
        }
        if ball.pos.x + radius > config.width {
            if score.increment_player() {
                events.new_high_score = true;
                log::debug!("new high score: {}", score.high);
            }
            events.player_scored = true;
            log::debug!("player scores: {}-{}", score.player, score.opponent);

            ball.reset(config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 40.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.opponent, 1, "Opponent should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert_eq!(score.high, 0);
        assert!(events.opponent_scored);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.width - 5.0, 40.0),
            Vec2::new(5.0, 0.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.opponent, 0, "Opponent should not score");
        assert_eq!(score.high, 1, "High score follows player score");
        assert!(events.player_scored);
        assert!(events.new_high_score);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 40.0), Vec2::new(-5.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.ball_spawn(), "Ball should reset to center");
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
            assert!(ball.vel.y.abs() <= config.ball_speed);
        }
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(5.0, 4.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 0, "No score when ball in bounds");
        assert_eq!(score.opponent, 0, "No score when ball in bounds");
        assert!(!events.player_scored && !events.opponent_scored);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();

        create_ball(&mut world, Vec2::ZERO, Vec2::new(5.0, 0.0));

        for _ in 0..3 {
            for (_entity, ball) in world.query_mut::<&mut Ball>() {
                ball.pos = Vec2::new(config.width + 1.0, 40.0);
            }
            check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
            events.clear();
        }

        assert_eq!(score.player, 3, "Scores should accumulate");
        assert_eq!(score.high, 3);
        assert_eq!(score.opponent, 0);
    }
}
