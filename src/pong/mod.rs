//! Mouse-vs-CPU Pong simulation
//!
//! First to five wins. The human paddle follows the pointer, the CPU
//! paddle tracks the ball at a capped speed with a small dead zone. Motion
//! is integrated once per rendered frame (the simulation rate equals the
//! 60 Hz display rate) with integer-truncated vector addition, the way the
//! classic used whole-pixel rectangles.

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Ball, Paddle, PongState, Winner};
pub use tick::{FrameInput, apply, tick};

/// Game configuration constants
pub mod consts {
    use crate::render::frame::Color;

    /// Playfield size (16:9), rendered 1:1
    pub const LOGICAL_W: u32 = 800;
    pub const LOGICAL_H: u32 = 450;
    pub const WIDTH: f32 = LOGICAL_W as f32;
    pub const HEIGHT: f32 = LOGICAL_H as f32;

    /// Paddle dimensions and horizontal inset from the side walls
    pub const PADDLE_W: f32 = 12.0;
    pub const PADDLE_H: f32 = 90.0;
    pub const PADDLE_INSET: f32 = 40.0;

    /// Ball edge (drawn as a filled ellipse in its bounding square)
    pub const BALL_SIZE: f32 = 14.0;
    /// Velocity component magnitudes, pixels per frame
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 4.0;

    /// CPU paddle tracking speed cap, pixels per frame
    pub const AI_MAX_SPEED: f32 = 4.0;
    /// CPU tracking dead zone, pixels (avoids jitter around the ball)
    pub const AI_DEAD_ZONE: f32 = 5.0;

    /// Score that ends the game
    pub const WIN_SCORE: u32 = 5;

    /// Palette
    pub const BG_COLOR: Color = [30, 30, 30, 255];
    pub const FG_COLOR: Color = [240, 240, 240, 255];

    /// HUD text scale over the built-in 5x7 glyphs
    pub const FONT_SCALE: u32 = 6;
}
