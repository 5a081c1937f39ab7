//! Snake game state and core types

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::consts::*;

/// A grid cell. Signed so that out-of-bounds head candidates are
/// representable before the rule check rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies on the playfield
    #[inline]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_W && self.y >= 0 && self.y < GRID_H
    }
}

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid delta for one movement step (y grows downward)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Complete Snake state, owned by the game loop
#[derive(Debug, Clone)]
pub struct SnakeState {
    /// Body cells, head first. Never empty; no duplicates while alive.
    pub body: VecDeque<Cell>,
    /// Current movement direction, applied at the next step
    pub dir: Direction,
    /// Food cell; `None` only when the grid is fully occupied
    pub food: Option<Cell>,
    /// Current step period; non-increasing over a run
    pub move_interval: Duration,
    /// Time accumulated toward the next step
    pub since_step: Duration,
    /// False after wall or self collision; never flips back within a run
    pub alive: bool,
}

impl SnakeState {
    /// Fresh game: single segment in the grid center, moving right.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut state = Self {
            body: VecDeque::from([Cell::new(GRID_W / 2, GRID_H / 2)]),
            dir: Direction::Right,
            food: None,
            move_interval: INITIAL_MOVE_INTERVAL,
            since_step: Duration::ZERO,
            alive: true,
        };
        state.food = state.spawn_food(rng);
        state
    }

    /// Head cell
    #[inline]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Request a direction change, to take effect at the next step.
    ///
    /// The guard compares raw vector components: the change is ignored when
    /// either component of the new delta is the negation of the current
    /// one. That rejects exact reversals (which would be an instant self
    /// collision), and also swallows re-pressing the current direction,
    /// which is a no-op anyway. A single-segment snake may turn anywhere.
    pub fn set_direction(&mut self, dir: Direction) {
        if self.body.len() > 1 {
            let (cx, cy) = self.dir.delta();
            let (nx, ny) = dir.delta();
            if nx == -cx || ny == -cy {
                return;
            }
        }
        self.dir = dir;
    }

    /// Pick a food cell uniformly at random among the free cells.
    /// Returns `None` when the body covers the whole grid.
    pub fn spawn_food(&self, rng: &mut impl Rng) -> Option<Cell> {
        let free: Vec<Cell> = (0..GRID_W)
            .flat_map(|x| (0..GRID_H).map(move |y| Cell::new(x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        free.choose(rng).copied()
    }
}
