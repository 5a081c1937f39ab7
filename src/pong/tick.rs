//! Per-frame simulation step
//!
//! Pong has no separate tick rate: every rendered frame integrates the
//! ball, steps the CPU paddle and applies the collision and scoring rules
//! in a fixed order. The whole step is skipped in the terminal state; only
//! a restart intent leaves it.

use rand::Rng;

use crate::input::PongIntent;

use super::consts::*;
use super::state::{PongState, Winner};

/// Inputs sampled for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Latest pointer y in surface coordinates; `None` until the pointer
    /// first moves over the window
    pub pointer_y: Option<f32>,
}

/// Apply one drained input intent. `Restart` is accepted only in the
/// terminal state; `Quit` is the caller's business.
pub fn apply(state: &mut PongState, intent: PongIntent, rng: &mut impl Rng) {
    match intent {
        PongIntent::Restart if state.game_over => state.restart(rng),
        PongIntent::Restart | PongIntent::Quit => {}
    }
}

/// Advance the simulation by one frame.
pub fn tick(state: &mut PongState, input: &FrameInput, rng: &mut impl Rng) {
    if state.game_over {
        return;
    }

    // Human paddle follows the sampled pointer, clamped to the playfield
    if let Some(y) = input.pointer_y {
        state.player.set_center_y(y);
    }

    // CPU paddle tracks the ball center at a capped speed, with a dead
    // zone so it does not jitter around the target
    let ball_cy = state.ball.rect().center_y();
    let cpu_cy = state.cpu.center_y();
    if ball_cy < cpu_cy - AI_DEAD_ZONE {
        state.cpu.set_center_y(cpu_cy - AI_MAX_SPEED);
    } else if ball_cy > cpu_cy + AI_DEAD_ZONE {
        state.cpu.set_center_y(cpu_cy + AI_MAX_SPEED);
    }

    // Integrate the ball, truncated per axis to whole pixels
    state.ball.pos += state.ball.vel.trunc();

    // Top/bottom reflection, with the position clamped back onto the
    // bound so the ball cannot linger outside the playfield
    let rect = state.ball.rect();
    if rect.top() <= 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = state.ball.vel.y.abs();
    } else if rect.bottom() >= HEIGHT {
        state.ball.pos.y = HEIGHT - BALL_SIZE;
        state.ball.vel.y = -state.ball.vel.y.abs();
    }

    // Paddle contact: only while the ball moves toward the paddle, so a
    // single overlap span flips the velocity exactly once. The leading
    // edge snaps to the paddle's trailing edge.
    if state.ball.rect().intersects(&state.player.rect()) && state.ball.vel.x < 0.0 {
        state.ball.pos.x = state.player.rect().right();
        state.ball.vel.x = -state.ball.vel.x;
    }
    if state.ball.rect().intersects(&state.cpu.rect()) && state.ball.vel.x > 0.0 {
        state.ball.pos.x = state.cpu.rect().left() - BALL_SIZE;
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Scoring: crossing a side bound awards the opposite side and serves
    // a fresh ball from the center
    if state.ball.rect().left() <= 0.0 {
        state.cpu_score += 1;
        state.ball.reset(rng);
    }
    if state.ball.rect().right() >= WIDTH {
        state.player_score += 1;
        state.ball.reset(rng);
    }

    // Terminal check, after both side rules: the strictly higher score
    // names the winner
    if state.player_score == WIN_SCORE || state.cpu_score == WIN_SCORE {
        state.game_over = true;
        state.winner = Some(if state.player_score > state.cpu_score {
            Winner::Player
        } else {
            Winner::Cpu
        });
    }
}
