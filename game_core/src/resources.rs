/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
    pub high: u32, // Best player score this session
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the goal set a new high score
    pub fn increment_player(&mut self) -> bool {
        self.player += 1;
        if self.player > self.high {
            self.high = self.player;
            true
        } else {
            false
        }
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub new_high_score: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Keys the player paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Held-key state for the player paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up_held: bool,
    pub down_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release. Unrecognized keys are ignored and return false.
    pub fn set_key(&mut self, key: &str, pressed: bool) -> bool {
        match Key::from_dom(key) {
            Some(Key::Up) => self.up_held = pressed,
            Some(Key::Down) => self.down_held = pressed,
            None => return false,
        }
        true
    }
}
