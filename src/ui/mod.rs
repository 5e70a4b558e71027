//! Rendering and input collaborators.
//!
//! - `Canvas` / `CharGrid`: character grid render target
//! - `Color`: palette indices
//! - `InputSource` / `Key`: non-blocking key polling

pub mod color;
pub mod grid;
pub mod input;

pub use color::Color;
pub use grid::{display_value, Canvas, CharGrid, Region, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use input::{InputSource, Key, ScriptedInput};
