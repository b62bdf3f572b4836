//! Braille canvas library crate.
//!
//! Draws lines and triangles onto a sparse grid of Unicode Braille cells
//! (2×4 dots per terminal character) and renders the grid as colored
//! terminal text.

pub mod canvas;
pub mod color;
pub mod config;
pub mod driver;
pub mod glyph;
pub mod terminal;

pub use canvas::{BoundingBox, Canvas, Point};
pub use color::NamedColor;
pub use driver::{CancelToken, FrameLoop};
pub use glyph::PixelCell;
pub use terminal::TerminalSize;
