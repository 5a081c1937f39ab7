//! Pocket Arcade - two zero-asset arcade games
//!
//! Core modules:
//! - `snake`: Atari-style Snake (deterministic grid simulation)
//! - `pong`: mouse-vs-CPU Pong (deterministic per-frame simulation)
//! - `render`: CPU raster renderer over an RGBA framebuffer
//! - `input`: raw key events to abstract game intents
//! - `audio`: fire-and-forget procedural tone playback
//! - `platform`: frame pacing and seed derivation
//!
//! The simulations are pure and deterministic: fixed rules, seeded RNG
//! injected at every randomizing entry point, no rendering or platform
//! dependencies. The two binaries under `src/bin/` own all mutable state
//! and wire input -> simulation -> renderer -> pacer.

pub mod audio;
pub mod input;
pub mod platform;
pub mod pong;
pub mod render;
pub mod snake;
