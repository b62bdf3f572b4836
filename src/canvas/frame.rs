// src/canvas/frame.rs

//! Bounding boxes over the sparse grid and serialization of the grid into
//! printable frame text.

use log::debug;

use super::Canvas;
use super::coords::cell_pos;
use crate::glyph::{CELL_COLS, CELL_ROWS};

const NEWLINE: char = '\n';

/// Inclusive rectangle of cell positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub min_col: i32,
    pub min_row: i32,
    pub max_col: i32,
    pub max_row: i32,
}

impl BoundingBox {
    pub fn new(min_col: i32, min_row: i32, max_col: i32, max_row: i32) -> Self {
        BoundingBox {
            min_col,
            min_row,
            max_col,
            max_row,
        }
    }

    /// The single cell at (`col`, `row`).
    pub fn cell(col: i32, row: i32) -> Self {
        Self::new(col, row, col, row)
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        (self.min_col..=self.max_col).contains(&col) && (self.min_row..=self.max_row).contains(&row)
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_col: self.min_col.min(other.min_col),
            min_row: self.min_row.min(other.min_row),
            max_col: self.max_col.max(other.max_col),
            max_row: self.max_row.max(other.max_row),
        }
    }

    /// Width in cells.
    pub fn width(&self) -> i64 {
        i64::from(self.max_col) - i64::from(self.min_col) + 1
    }

    /// Height in cells.
    pub fn height(&self) -> i64 {
        i64::from(self.max_row) - i64::from(self.min_row) + 1
    }

    fn extend(&mut self, col: i32, row: i32) {
        *self = self.union(&BoundingBox::cell(col, row));
    }
}

impl Canvas {
    /// Smallest box containing every stored cell.
    ///
    /// An empty grid yields the degenerate box at the origin, `(0, 0, 0, 0)`,
    /// which still renders as one blank row.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut cells = self
            .grid
            .iter()
            .flat_map(|(row, cells)| cells.keys().map(move |col| (*col, *row)));

        let Some((col, row)) = cells.next() else {
            return BoundingBox::default();
        };
        let mut bounds = BoundingBox::cell(col, row);
        for (col, row) in cells {
            bounds.extend(col, row);
        }
        bounds
    }

    /// The box `render_frame` displays: `bounding_box()`, widened to cover
    /// cell (0, 0) when the canvas is anchored to the origin.
    pub fn display_bounds(&self) -> BoundingBox {
        let bounds = self.bounding_box();
        if self.anchor_origin {
            bounds.union(&BoundingBox::default())
        } else {
            bounds
        }
    }

    /// Smallest sub-pixel x of the displayed area.
    pub fn min_x(&self) -> i32 {
        self.display_bounds().min_col.saturating_mul(CELL_COLS)
    }

    /// Smallest sub-pixel y of the displayed area.
    pub fn min_y(&self) -> i32 {
        self.display_bounds().min_row.saturating_mul(CELL_ROWS)
    }

    /// Sub-pixel x of the first dot column in the right-most displayed cell.
    pub fn max_x(&self) -> i32 {
        self.display_bounds().max_col.saturating_mul(CELL_COLS)
    }

    /// Sub-pixel y of the first dot row in the bottom displayed cell.
    pub fn max_y(&self) -> i32 {
        self.display_bounds().max_row.saturating_mul(CELL_ROWS)
    }

    /// Renders every cell row from `min_row` to `max_row` (inclusive), each
    /// row being the cells `min_col..=max_col` left to right.
    ///
    /// Positions without a cell are filled in with blank cells, which stay
    /// in the grid until the next `clear()`.
    pub fn render_rows(
        &mut self,
        min_col: i32,
        min_row: i32,
        max_col: i32,
        max_row: i32,
    ) -> Vec<String> {
        (min_row..=max_row)
            .map(|row| {
                let cells = self.grid.entry(row).or_default();
                (min_col..=max_col)
                    .map(|col| cells.entry(col).or_default().to_text())
                    .collect::<String>()
            })
            .collect()
    }

    /// Renders the cells covering the sub-pixel rectangle from
    /// (`min_x`, `min_y`) to (`max_x`, `max_y`) as newline-terminated rows.
    pub fn render_region(&mut self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> String {
        self.render_bounds(BoundingBox::new(
            cell_pos(min_x, CELL_COLS),
            cell_pos(min_y, CELL_ROWS),
            cell_pos(max_x, CELL_COLS),
            cell_pos(max_y, CELL_ROWS),
        ))
    }

    /// Renders the whole drawing (see `display_bounds`) as one frame of
    /// text, every row terminated by a newline.
    pub fn render_frame(&mut self) -> String {
        let bounds = self.display_bounds();
        debug!(
            "Rendering frame: {} cells stored, bounds {:?}",
            self.cell_count(),
            bounds
        );
        self.render_bounds(bounds)
    }

    fn render_bounds(&mut self, bounds: BoundingBox) -> String {
        let mut frame = String::new();
        for row in self.render_rows(bounds.min_col, bounds.min_row, bounds.max_col, bounds.max_row) {
            frame.push_str(&row);
            frame.push(NEWLINE);
        }
        frame
    }
}

