//! Keyboard and pointer input handling

use game_core::Game;

/// Forward a key press/release to the game
///
/// Returns true when the key drives the paddle, so the host can suppress the
/// browser's default action (page scrolling for the arrow keys).
pub fn handle_key(game: &mut Game, key: &str, pressed: bool) -> bool {
    let handled = game.set_key(key, pressed);
    if handled {
        log::trace!("key {} {}", key, if pressed { "down" } else { "up" });
    }
    handled
}

/// Translate a viewport y coordinate to canvas-local y
pub fn pointer_to_surface_y(client_y: f64, rect_top: f64) -> f32 {
    (client_y - rect_top) as f32
}

/// Center the player paddle on the pointer
pub fn handle_pointer_move(game: &mut Game, client_y: f64, rect_top: f64) {
    game.set_pointer(pointer_to_surface_y(client_y, rect_top));
}
