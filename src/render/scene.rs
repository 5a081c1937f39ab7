//! Game-state to framebuffer composition
//!
//! Pure reads: the scenes take the simulation state by shared reference
//! and paint the current frame. Terminal-state dressing (death blink,
//! winner banner) lives here, not in the simulations.

use crate::pong::PongState;
use crate::pong::Winner;
use crate::snake::SnakeState;

use super::font;
use super::frame::Frame;

/// Paint one Snake frame onto the 84x48 logical surface.
///
/// While dead, the playfield blinks: every other blink period the whole
/// frame is blanked so the final position flashes on and off.
pub fn draw_snake(state: &SnakeState, frame: &mut Frame, now_ms: u64) {
    use crate::snake::consts::*;

    frame.clear(COL_BG);

    for cell in &state.body {
        frame.fill_rect(
            cell.x * CELL as i32,
            cell.y * CELL as i32,
            CELL,
            CELL,
            COL_FG,
        );
    }
    if let Some(food) = state.food {
        frame.fill_rect(
            food.x * CELL as i32,
            food.y * CELL as i32,
            CELL,
            CELL,
            COL_FG,
        );
    }

    if !state.alive && (now_ms / BLINK_PERIOD_MS) % 2 == 1 {
        frame.clear(COL_BG);
    }
}

/// Paint one Pong frame onto the 800x450 surface.
pub fn draw_pong(state: &PongState, frame: &mut Frame) {
    use crate::pong::consts::*;

    frame.clear(BG_COLOR);

    // Center dividing line
    frame.vline(LOGICAL_W as i32 / 2, 2, FG_COLOR);

    let player = state.player.rect();
    frame.fill_rect(
        player.left() as i32,
        player.top() as i32,
        PADDLE_W as u32,
        PADDLE_H as u32,
        FG_COLOR,
    );
    let cpu = state.cpu.rect();
    frame.fill_rect(
        cpu.left() as i32,
        cpu.top() as i32,
        PADDLE_W as u32,
        PADDLE_H as u32,
        FG_COLOR,
    );

    let ball = state.ball.rect();
    frame.fill_ellipse(
        ball.left() as i32,
        ball.top() as i32,
        BALL_SIZE as u32,
        BALL_SIZE as u32,
        FG_COLOR,
    );

    let score = format!("{}   {}", state.player_score, state.cpu_score);
    font::draw_text_centered(frame, LOGICAL_W as i32 / 2, 40, FONT_SCALE, FG_COLOR, &score);

    if state.game_over {
        let banner = match state.winner {
            Some(Winner::Player) => "PLAYER WINS!",
            Some(Winner::Cpu) | None => "CPU WINS!",
        };
        let cx = LOGICAL_W as i32 / 2;
        let cy = LOGICAL_H as i32 / 2;
        font::draw_text_centered(frame, cx, cy - 40, FONT_SCALE, FG_COLOR, banner);
        font::draw_text_centered(frame, cx, cy + 40, FONT_SCALE, FG_COLOR, "PLAY AGAIN?  Y / N");
    }
}
