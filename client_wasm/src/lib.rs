//! Browser client for Pong
//!
//! Draws with the canvas 2D API and schedules frames with
//! `requestAnimationFrame`. The simulation itself lives in `game_core`.

pub mod input;
pub mod status;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{high_score, start, stop_game};
