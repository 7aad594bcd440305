/// Game tuning parameters for Pong
///
/// Distances are in surface pixels, speeds in pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (used when the host does not supply one)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between paddle and side edge
    pub const PADDLE_SPEED: f32 = 6.0;

    // Opponent
    pub const OPPONENT_SPEED: f32 = 5.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const SPIN_FACTOR: f32 = 0.2; // vy per pixel of offset from paddle center
}
