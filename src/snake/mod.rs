//! Atari-style Snake simulation
//!
//! The classic Nokia Snake with the Atari rule set: no wrap-around (the
//! wall kills), and the move interval shrinks with every food consumed,
//! down to a fixed cap. The playfield is a 21x12 cell grid over an 84x48
//! logical surface.
//!
//! Everything here is pure and deterministic: fixed rules, seeded RNG
//! passed into every randomizing entry point, no rendering or platform
//! dependencies.

pub mod state;
pub mod tick;

pub use state::{Cell, Direction, SnakeState};
pub use tick::{apply, step, tick};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    use crate::render::frame::Color;

    /// Logical surface size (Nokia 3310 LCD resolution)
    pub const LOGICAL_W: u32 = 84;
    pub const LOGICAL_H: u32 = 48;
    /// Window scale over the logical surface
    pub const WINDOW_SCALE: u32 = 8;
    /// Cell edge in logical pixels
    pub const CELL: u32 = 4;

    /// Grid dimensions in cells (21 x 12)
    pub const GRID_W: i32 = (LOGICAL_W / CELL) as i32;
    pub const GRID_H: i32 = (LOGICAL_H / CELL) as i32;

    /// Starting move interval (10 Hz)
    pub const INITIAL_MOVE_INTERVAL: Duration = Duration::from_millis(100);
    /// Fastest move interval (25 Hz)
    pub const MIN_MOVE_INTERVAL: Duration = Duration::from_millis(40);
    /// Interval decrease per food consumed
    pub const SPEED_STEP: Duration = Duration::from_millis(5);

    /// Death-overlay blink period
    pub const BLINK_PERIOD_MS: u64 = 300;

    /// LCD palette
    pub const COL_FG: Color = [150, 255, 150, 255];
    pub const COL_BG: Color = [20, 20, 20, 255];
}
