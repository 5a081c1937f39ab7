//! Pong game state and core types

use glam::Vec2;
use rand::Rng;

use super::consts::*;
use super::rect::Rect;

/// Which side took the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Cpu,
}

/// The ball: top-left position plus per-frame velocity
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Centered ball with randomized diagonal velocity
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            pos: center_pos(),
            vel: random_vel(rng),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_SIZE, BALL_SIZE)
    }

    /// Re-center after a point with a freshly randomized velocity
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.pos = center_pos();
        self.vel = random_vel(rng);
    }
}

fn center_pos() -> Vec2 {
    Vec2::new((WIDTH - BALL_SIZE) / 2.0, (HEIGHT - BALL_SIZE) / 2.0)
}

/// Diagonal velocity with each axis sign chosen independently
fn random_vel(rng: &mut impl Rng) -> Vec2 {
    let vx = if rng.random_bool(0.5) {
        BALL_SPEED_X
    } else {
        -BALL_SPEED_X
    };
    let vy = if rng.random_bool(0.5) {
        BALL_SPEED_Y
    } else {
        -BALL_SPEED_Y
    };
    Vec2::new(vx, vy)
}

/// A paddle: fixed x, movable y (top edge)
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    /// Vertically centered paddle at the given x
    pub fn new(x: f32) -> Self {
        Self {
            x,
            y: (HEIGHT - PADDLE_H) / 2.0,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_W, PADDLE_H)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_H / 2.0
    }

    /// Move the paddle center, clamped so it stays fully on the playfield
    pub fn set_center_y(&mut self, center_y: f32) {
        let clamped = center_y.clamp(PADDLE_H / 2.0, HEIGHT - PADDLE_H / 2.0);
        self.y = clamped - PADDLE_H / 2.0;
    }
}

/// Complete Pong state, owned by the game loop
#[derive(Debug, Clone)]
pub struct PongState {
    pub ball: Ball,
    /// Left paddle, pointer-driven
    pub player: Paddle,
    /// Right paddle, ball-tracking AI
    pub cpu: Paddle,
    pub player_score: u32,
    pub cpu_score: u32,
    /// Terminal flag; gameplay freezes while set
    pub game_over: bool,
    /// Set exactly when `game_over` flips on
    pub winner: Option<Winner>,
}

impl PongState {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            ball: Ball::new(rng),
            player: Paddle::new(PADDLE_INSET),
            cpu: Paddle::new(WIDTH - PADDLE_INSET - PADDLE_W),
            player_score: 0,
            cpu_score: 0,
            game_over: false,
            winner: None,
        }
    }

    /// Leave the terminal state: zero the scores, clear the winner and
    /// serve a fresh ball. Paddles keep their positions.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.player_score = 0;
        self.cpu_score = 0;
        self.game_over = false;
        self.winner = None;
        self.ball.reset(rng);
    }
}
