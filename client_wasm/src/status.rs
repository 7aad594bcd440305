//! Console summaries of what happened during a tick

use game_core::{Events, Score};

/// One line describing a goal, or None when nothing worth logging happened
pub fn tick_summary(events: &Events, score: &Score) -> Option<String> {
    let scorer = if events.player_scored {
        "Player"
    } else if events.opponent_scored {
        "Opponent"
    } else {
        return None;
    };

    let mut line = format!("{} scores, {}-{}", scorer, score.player, score.opponent);
    if events.new_high_score {
        line.push_str(&format!(" (new high score {})", score.high));
    }
    Some(line)
}
