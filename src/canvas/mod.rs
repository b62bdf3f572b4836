// src/canvas/mod.rs

//! The Braille canvas: a sparse grid of `PixelCell`s addressed by
//! sub-pixel coordinates.
//!
//! Drawing never fails and never clips. The grid grows to whatever area
//! the drawing touches, including negative coordinates, and is emptied by
//! `clear()` between frames. Rasterization lives in `raster`, bounding box
//! and text serialization in `frame`.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::glyph::{CELL_COLS, CELL_ROWS, PixelCell};
use crate::terminal::{self, TerminalSize};

pub mod coords;
mod frame;
mod raster;

pub use coords::{DotLocation, cell_index, cell_pos};
pub use frame::BoundingBox;
pub use raster::Point;


/// Cells of one row, keyed by cell column.
type CellRow = BTreeMap<i32, PixelCell>;

/// A drawing surface of Braille cells.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// cell row -> cell column -> cell
    grid: BTreeMap<i32, CellRow>,
    size: TerminalSize,
    anchor_origin: bool,
}

impl Canvas {
    /// Creates an empty canvas for a terminal of the given size.
    ///
    /// The size is only reported back through `terminal_size`,
    /// `canvas_width` and `canvas_height`; it does not bound drawing.
    pub fn new(size: TerminalSize) -> Self {
        debug!("Creating canvas for {}x{} terminal", size.cols, size.rows);
        Canvas {
            grid: BTreeMap::new(),
            size,
            anchor_origin: false,
        }
    }

    /// Creates a canvas sized to the terminal on stdout, or 80x24 if the
    /// size cannot be read.
    pub fn from_terminal() -> Self {
        Self::new(terminal::query_or_default())
    }

    /// When set, `display_bounds` always includes cell (0, 0), so a
    /// drawing around the origin keeps a stable position on screen.
    pub fn with_anchor_origin(mut self, anchor: bool) -> Self {
        self.anchor_origin = anchor;
        self
    }

    pub fn anchor_origin(&self) -> bool {
        self.anchor_origin
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.size
    }

    /// Nominal width in sub-pixels (two per terminal column).
    pub fn canvas_width(&self) -> i32 {
        i32::from(self.size.cols) * CELL_COLS
    }

    /// Nominal height in sub-pixels (four per terminal row).
    pub fn canvas_height(&self) -> i32 {
        i32::from(self.size.rows) * CELL_ROWS
    }

    /// Sets the dot at sub-pixel (`x`, `y`) and colors its cell.
    pub fn set_dot(&mut self, x: i32, y: i32, color: u8) {
        let loc = DotLocation::from_sub_pixel(x, y);
        trace!("set_dot ({}, {}) -> {:?}", x, y, loc);
        self.cell_mut(loc.col, loc.row)
            .set_dot(loc.sub_x, loc.sub_y, color);
    }

    /// Returns the cell at (`col`, `row`), creating an empty one if needed.
    pub fn cell_mut(&mut self, col: i32, row: i32) -> &mut PixelCell {
        self.grid.entry(row).or_default().entry(col).or_default()
    }

    /// Looks up the cell at (`col`, `row`) without creating it.
    pub fn cell(&self, col: i32, row: i32) -> Option<&PixelCell> {
        self.grid.get(&row).and_then(|cells| cells.get(&col))
    }

    /// Number of cells currently stored, including materialized blanks.
    pub fn cell_count(&self) -> usize {
        self.grid.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.values().all(BTreeMap::is_empty)
    }

    /// Discards every cell; the next frame starts from an empty grid.
    pub fn clear(&mut self) {
        trace!("Clearing {} cells", self.cell_count());
        self.grid.clear();
    }
}
