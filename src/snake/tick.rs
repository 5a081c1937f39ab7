//! Edge-triggered simulation step
//!
//! A movement step fires when the time accumulated since the last step
//! reaches the current move interval; the accumulator then resets to zero
//! (overshoot is dropped, matching a step clock reset to "now"). Direction
//! intents applied between steps only take effect at the next step.

use std::time::Duration;

use rand::Rng;

use crate::audio::Cue;
use crate::input::SnakeIntent;

use super::consts::*;
use super::state::{Cell, SnakeState};

/// Apply one drained input intent.
///
/// `Turn` is subject to the reversal guard; `Restart` is accepted only in
/// the terminal state and rebuilds the whole game.
pub fn apply(state: &mut SnakeState, intent: SnakeIntent, rng: &mut impl Rng) {
    match intent {
        SnakeIntent::Turn(dir) => state.set_direction(dir),
        SnakeIntent::Restart if !state.alive => *state = SnakeState::new(rng),
        SnakeIntent::Restart => {}
    }
}

/// Advance the simulation clock by one rendered frame.
///
/// At most one movement step fires per call; the render rate (60 Hz) is
/// higher than the fastest step rate (25 Hz) by construction. Cues emitted
/// by the rule step are pushed onto `cues` for the caller to dispatch.
pub fn tick(state: &mut SnakeState, dt: Duration, rng: &mut impl Rng, cues: &mut Vec<Cue>) {
    if !state.alive {
        return;
    }
    state.since_step += dt;
    if state.since_step >= state.move_interval {
        state.since_step = Duration::ZERO;
        step(state, rng, cues);
    }
}

/// One movement step: candidate head, rule check, grow or slide.
pub fn step(state: &mut SnakeState, rng: &mut impl Rng, cues: &mut Vec<Cue>) {
    let (dx, dy) = state.dir.delta();
    let head = state.head();
    let candidate = Cell::new(head.x + dx, head.y + dy);

    // No wrap-around: the wall kills. The body check runs before the tail
    // vacates, so moving into the current tail cell is also fatal.
    if !candidate.in_bounds() || state.body.contains(&candidate) {
        state.alive = false;
        cues.push(Cue::Death);
        return;
    }

    state.body.push_front(candidate);
    if state.food == Some(candidate) {
        cues.push(Cue::Eat);
        state.move_interval = state
            .move_interval
            .saturating_sub(SPEED_STEP)
            .max(MIN_MOVE_INTERVAL);
        state.food = state.spawn_food(rng);
        // Tail stays: net growth by one cell
    } else {
        state.body.pop_back();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use crate::snake::Direction;

    use super::*;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    /// Build a state with an explicit body (head first) and direction.
    fn state_with(body: &[Cell], dir: Direction, food: Option<Cell>) -> SnakeState {
        let mut state = SnakeState::new(&mut rng());
        state.body = body.iter().copied().collect();
        state.dir = dir;
        state.food = food;
        state
    }

    #[test]
    fn test_eating_grows_speeds_up_and_respawns_food() {
        let mut state = state_with(
            &[Cell::new(5, 5)],
            Direction::Right,
            Some(Cell::new(6, 5)),
        );
        let mut cues = Vec::new();

        step(&mut state, &mut rng(), &mut cues);

        assert_eq!(
            state.body,
            [Cell::new(6, 5), Cell::new(5, 5)]
        );
        assert_eq!(state.move_interval, INITIAL_MOVE_INTERVAL - SPEED_STEP);
        assert_eq!(cues, [Cue::Eat]);

        let food = state.food.expect("grid is nowhere near full");
        assert!(!state.body.contains(&food));
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let mut state = state_with(
            &[Cell::new(5, 5), Cell::new(4, 5)],
            Direction::Right,
            Some(Cell::new(0, 0)),
        );
        let mut cues = Vec::new();

        step(&mut state, &mut rng(), &mut cues);

        assert_eq!(
            state.body,
            [Cell::new(6, 5), Cell::new(5, 5)]
        );
        assert_eq!(state.move_interval, INITIAL_MOVE_INTERVAL);
        assert!(cues.is_empty());
    }

    #[test]
    fn test_wall_collision_kills_and_leaves_body_unchanged() {
        let mut state = state_with(
            &[Cell::new(0, 5), Cell::new(1, 5)],
            Direction::Left,
            None,
        );
        let mut cues = Vec::new();

        step(&mut state, &mut rng(), &mut cues);

        assert!(!state.alive);
        assert_eq!(
            state.body,
            [Cell::new(0, 5), Cell::new(1, 5)]
        );
        assert_eq!(cues, [Cue::Death]);
    }

    #[test]
    fn test_self_collision_kills() {
        // Head curls down into a mid-body cell (not the tail)
        let mut state = state_with(
            &[
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(1, 3),
                Cell::new(2, 3),
                Cell::new(3, 3),
            ],
            Direction::Down,
            None,
        );
        let mut cues = Vec::new();

        step(&mut state, &mut rng(), &mut cues);

        assert!(!state.alive);
        assert_eq!(cues, [Cue::Death]);
    }

    #[test]
    fn test_moving_into_current_tail_is_fatal() {
        // A 2x2 loop: the candidate equals the tail cell, which has not
        // vacated when the check runs.
        let mut state = state_with(
            &[
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(1, 2),
            ],
            Direction::Down,
            None,
        );
        let mut cues = Vec::new();

        step(&mut state, &mut rng(), &mut cues);

        assert!(!state.alive);
    }

    #[test]
    fn test_move_interval_floors_at_minimum() {
        let mut state = state_with(
            &[Cell::new(5, 5)],
            Direction::Right,
            Some(Cell::new(6, 5)),
        );
        state.move_interval = MIN_MOVE_INTERVAL + Duration::from_millis(2);
        let mut cues = Vec::new();

        step(&mut state, &mut rng(), &mut cues);
        assert_eq!(state.move_interval, MIN_MOVE_INTERVAL);

        // Another meal at the floor stays at the floor
        state.food = Some(Cell::new(7, 5));
        step(&mut state, &mut rng(), &mut cues);
        assert_eq!(state.move_interval, MIN_MOVE_INTERVAL);
    }

    #[test]
    fn test_tick_fires_only_at_interval_boundary() {
        let mut state = state_with(
            &[Cell::new(5, 5)],
            Direction::Right,
            Some(Cell::new(0, 0)),
        );
        let mut cues = Vec::new();

        tick(&mut state, Duration::from_millis(50), &mut rng(), &mut cues);
        assert_eq!(state.head(), Cell::new(5, 5));

        tick(&mut state, Duration::from_millis(50), &mut rng(), &mut cues);
        assert_eq!(state.head(), Cell::new(6, 5));

        // Accumulator reset: another 50 ms is not enough again
        tick(&mut state, Duration::from_millis(50), &mut rng(), &mut cues);
        assert_eq!(state.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_no_steps_after_death() {
        let mut state = state_with(
            &[Cell::new(0, 5), Cell::new(1, 5)],
            Direction::Left,
            None,
        );
        let mut cues = Vec::new();

        step(&mut state, &mut rng(), &mut cues);
        assert!(!state.alive);
        cues.clear();

        tick(&mut state, Duration::from_secs(1), &mut rng(), &mut cues);
        assert_eq!(
            state.body,
            [Cell::new(0, 5), Cell::new(1, 5)]
        );
        assert!(cues.is_empty());
    }

    #[test]
    fn test_restart_only_accepted_when_dead() {
        let mut state = state_with(
            &[Cell::new(5, 5), Cell::new(4, 5)],
            Direction::Up,
            None,
        );

        apply(&mut state, SnakeIntent::Restart, &mut rng());
        assert_eq!(state.body.len(), 2);

        state.alive = false;
        apply(&mut state, SnakeIntent::Restart, &mut rng());
        assert!(state.alive);
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.move_interval, INITIAL_MOVE_INTERVAL);
    }
}
