//! Update-then-render driver
//!
//! The host decides when a frame happens (an animation-frame callback in the
//! browser, a closure in tests). The loop runs until its [`StopHandle`] fires.

use std::cell::Cell;
use std::rc::Rc;

use crate::{render, Game, Surface};

/// Shared flag that halts a [`FrameLoop`] before its next frame
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub struct FrameLoop {
    game: Game,
    stop: StopHandle,
    frames: u64,
}

impl FrameLoop {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            stop: StopHandle::new(),
            frames: 0,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Input handlers write through here between frames
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tick once and redraw, unless stopped
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<LoopControl, S::Error> {
        if self.stop.is_stopped() {
            return Ok(LoopControl::Stop);
        }

        self.game.tick();
        self.frames += 1;
        render(&self.game, surface)?;

        Ok(LoopControl::Continue)
    }

    /// Drive frames until stopped, blocking on `wait_for_frame` before each one
    ///
    /// Returns the total number of frames run by this loop.
    pub fn run<S, W>(&mut self, surface: &mut S, mut wait_for_frame: W) -> Result<u64, S::Error>
    where
        S: Surface,
        W: FnMut(),
    {
        loop {
            wait_for_frame();
            if self.frame(surface)? == LoopControl::Stop {
                log::debug!("frame loop stopped after {} frames", self.frames);
                return Ok(self.frames);
            }
        }
    }
}
