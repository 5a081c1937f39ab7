//! Raw key events to abstract game intents
//!
//! The binaries collect intents from `winit` key presses into a pending
//! queue and drain it exactly once per displayed frame; events that arrive
//! mid-frame wait for the next drain. Pointer position is not an intent:
//! Pong samples the latest cursor position every frame directly.
//!
//! Intent validity (reversal guard, restart-only-when-terminal) is the
//! rule engine's business, not the sampler's; translation is a pure
//! key-to-intent mapping.

use winit::keyboard::KeyCode;

use crate::snake::Direction;

/// Abstract Snake inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeIntent {
    /// Change movement direction at the next step
    Turn(Direction),
    /// Start a fresh game (terminal state only)
    Restart,
}

/// Abstract Pong inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongIntent {
    /// Reset scores and ball (terminal state only)
    Restart,
    /// Leave the game (terminal state only; closing the window always quits)
    Quit,
}

/// WASD steer the snake; Space restarts after death.
pub fn snake_intent(key: KeyCode) -> Option<SnakeIntent> {
    match key {
        KeyCode::KeyW => Some(SnakeIntent::Turn(Direction::Up)),
        KeyCode::KeyS => Some(SnakeIntent::Turn(Direction::Down)),
        KeyCode::KeyA => Some(SnakeIntent::Turn(Direction::Left)),
        KeyCode::KeyD => Some(SnakeIntent::Turn(Direction::Right)),
        KeyCode::Space => Some(SnakeIntent::Restart),
        _ => None,
    }
}

/// Y replays, N or Escape quits at the game-over prompt.
pub fn pong_intent(key: KeyCode) -> Option<PongIntent> {
    match key {
        KeyCode::KeyY => Some(PongIntent::Restart),
        KeyCode::KeyN | KeyCode::Escape => Some(PongIntent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_key_mapping() {
        assert_eq!(
            snake_intent(KeyCode::KeyW),
            Some(SnakeIntent::Turn(Direction::Up))
        );
        assert_eq!(
            snake_intent(KeyCode::KeyA),
            Some(SnakeIntent::Turn(Direction::Left))
        );
        assert_eq!(snake_intent(KeyCode::Space), Some(SnakeIntent::Restart));
        assert_eq!(snake_intent(KeyCode::ArrowUp), None);
    }

    #[test]
    fn test_pong_key_mapping() {
        assert_eq!(pong_intent(KeyCode::KeyY), Some(PongIntent::Restart));
        assert_eq!(pong_intent(KeyCode::KeyN), Some(PongIntent::Quit));
        assert_eq!(pong_intent(KeyCode::Escape), Some(PongIntent::Quit));
        assert_eq!(pong_intent(KeyCode::KeyW), None);
    }
}
