//! CPU raster renderer
//!
//! Draws directly into the RGBA framebuffer handed out by `pixels`:
//! - `frame`: clipped fill primitives (rect, ellipse, vertical line)
//! - `font`: built-in 5x7 glyphs for the HUD strings
//! - `scene`: pure game-state -> framebuffer composition
//!
//! Rendering reads simulation state and never mutates it.

pub mod font;
pub mod frame;
pub mod scene;

pub use frame::{Color, Frame};
