//! Projection of game state onto a 2D drawing surface
//!
//! The host supplies a [`Surface`]; [`render`] issues the same sequence of
//! draw calls for the same state, so frames are reproducible.

use std::convert::Infallible;

use crate::{Game, Side};

pub const BACKGROUND_COLOR: &str = "#222";
pub const NET_COLOR: &str = "#888";
pub const FOREGROUND_COLOR: &str = "#fff";
pub const SCORE_FONT: &str = "32px Arial";

// Net dashes
const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 16.0;
const NET_SPACING: f32 = 32.0;

const SCORE_BASELINE: f32 = 50.0;

/// Primitive drawing operations a host surface must provide
pub trait Surface {
    type Error;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str)
        -> Result<(), Self::Error>;

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str)
        -> Result<(), Self::Error>;

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        color: &str,
        font: &str,
    ) -> Result<(), Self::Error>;

    /// Overwrite the external high-score display
    fn set_high_score_label(&mut self, text: &str) -> Result<(), Self::Error>;
}

pub fn high_score_label(high: u32) -> String {
    format!("High Score: {}", high)
}

/// Redraw the whole frame. Read-only with respect to the game.
pub fn render<S: Surface>(game: &Game, surface: &mut S) -> Result<(), S::Error> {
    let config = &game.config;

    // Clear
    surface.fill_rect(0.0, 0.0, config.width, config.height, BACKGROUND_COLOR)?;

    // Net
    let mut y = 0.0;
    while y < config.height {
        surface.fill_rect(
            config.width / 2.0 - NET_WIDTH / 2.0,
            y,
            NET_WIDTH,
            NET_DASH,
            NET_COLOR,
        )?;
        y += NET_SPACING;
    }

    // Paddles
    for (side, paddle_y) in [
        (Side::Player, game.player_y()),
        (Side::Opponent, game.opponent_y()),
    ] {
        if let Some(paddle_y) = paddle_y {
            surface.fill_rect(
                config.paddle_x(side),
                paddle_y,
                config.paddle_width,
                config.paddle_height,
                FOREGROUND_COLOR,
            )?;
        }
    }

    // Ball
    if let Some(ball) = game.ball() {
        surface.fill_circle(ball.pos.x, ball.pos.y, config.ball_radius, FOREGROUND_COLOR)?;
    }

    // Scores
    surface.fill_text(
        &game.score.player.to_string(),
        config.width / 4.0,
        SCORE_BASELINE,
        FOREGROUND_COLOR,
        SCORE_FONT,
    )?;
    surface.fill_text(
        &game.score.opponent.to_string(),
        config.width * 3.0 / 4.0,
        SCORE_BASELINE,
        FOREGROUND_COLOR,
        SCORE_FONT,
    )?;

    surface.set_high_score_label(&high_score_label(game.score.high))
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: String,
        font: String,
    },
    HighScoreLabel(String),
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return and forget everything drawn so far
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &str,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        color: &str,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        color: &str,
        font: &str,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
            font: font.to_string(),
        });
        Ok(())
    }

    fn set_high_score_label(&mut self, text: &str) -> Result<(), Infallible> {
        self.commands
            .push(DrawCommand::HighScoreLabel(text.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn render_commands(game: &Game) -> Vec<DrawCommand> {
        let mut surface = RecordingSurface::new();
        render(game, &mut surface).unwrap();
        surface.take()
    }

    #[test]
    fn test_frame_starts_with_background() {
        let game = Game::default();
        let commands = render_commands(&game);
        assert_eq!(
            commands[0],
            DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 500.0,
                color: BACKGROUND_COLOR.to_string(),
            }
        );
    }

    #[test]
    fn test_net_is_dashed_down_the_middle() {
        let game = Game::default();
        let dashes: Vec<_> = render_commands(&game)
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { x, y, color, .. } if color == NET_COLOR => Some((x, y)),
                _ => None,
            })
            .collect();

        // 0, 32, ..., 480
        assert_eq!(dashes.len(), 16);
        assert!(dashes.iter().all(|(x, _)| *x == 398.0));
        assert_eq!(dashes[1].1, 32.0);
        assert_eq!(dashes.last().map(|(_, y)| *y), Some(480.0));
    }

    #[test]
    fn test_paddles_ball_and_scores_drawn() {
        let mut game = Game::new(Config::new(), 1);
        game.score.player = 3;
        game.score.opponent = 7;
        game.score.high = 4;
        let ball = game.ball().unwrap();

        let commands = render_commands(&game);

        assert!(commands.contains(&DrawCommand::Rect {
            x: 20.0,
            y: 200.0,
            w: 12.0,
            h: 100.0,
            color: FOREGROUND_COLOR.to_string(),
        }));
        assert!(commands.contains(&DrawCommand::Rect {
            x: 768.0,
            y: 200.0,
            w: 12.0,
            h: 100.0,
            color: FOREGROUND_COLOR.to_string(),
        }));
        assert!(commands.contains(&DrawCommand::Circle {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: 10.0,
            color: FOREGROUND_COLOR.to_string(),
        }));
        assert!(commands.contains(&DrawCommand::Text {
            text: "3".to_string(),
            x: 200.0,
            y: 50.0,
            color: FOREGROUND_COLOR.to_string(),
            font: SCORE_FONT.to_string(),
        }));
        assert!(commands.contains(&DrawCommand::Text {
            text: "7".to_string(),
            x: 600.0,
            y: 50.0,
            color: FOREGROUND_COLOR.to_string(),
            font: SCORE_FONT.to_string(),
        }));
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::HighScoreLabel("High Score: 4".to_string()))
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let game = Game::default();
        let first = render_commands(&game);
        let second = render_commands(&game);
        assert_eq!(first, second);
        assert_eq!(game.ticks(), 0, "Rendering does not advance the game");
    }

    struct FailingSurface {
        calls: usize,
    }

    impl Surface for FailingSurface {
        type Error = String;

        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: &str) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn fill_circle(&mut self, _: f32, _: f32, _: f32, _: &str) -> Result<(), String> {
            self.calls += 1;
            Err("arc failed".to_string())
        }

        fn fill_text(&mut self, _: &str, _: f32, _: f32, _: &str, _: &str) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn set_high_score_label(&mut self, _: &str) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn test_render_stops_at_first_failed_draw() {
        let game = Game::default();
        let mut surface = FailingSurface { calls: 0 };
        assert_eq!(render(&game, &mut surface), Err("arc failed".to_string()));
        // background + 16 dashes + 2 paddles + ball
        assert_eq!(surface.calls, 20);
    }
}
