// src/glyph.rs

//! Defines `PixelCell`, a single Braille character cell on the canvas, and
//! the `BrailleDots` flags that make up its 2×4 dot pattern.
//!
//! A cell covers a block of 2 columns × 4 rows of sub-pixels ("dots"). Each
//! dot maps to one bit of an 8-bit mask, following the standard Braille dot
//! numbering, so that `U+2800 + mask` is the visually correct glyph:
//!
//! ```text
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//! | 7 | 8 |
//! +---+---+
//! ```

use bitflags::bitflags;
use std::fmt;

use crate::color::{SGR_RESET, sgr_fg_indexed};

/// Start of the Unicode Braille Patterns block (U+2800, the blank pattern).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Number of dot rows in one cell.
pub const CELL_ROWS: i32 = 4;
/// Number of dot columns in one cell.
pub const CELL_COLS: i32 = 2;

bitflags! {
    /// The eight dots of a Braille cell, named by their Braille dot number.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BrailleDots: u8 {
        const DOT_1 = 1 << 0;
        const DOT_2 = 1 << 1;
        const DOT_3 = 1 << 2;
        const DOT_4 = 1 << 3;
        const DOT_5 = 1 << 4;
        const DOT_6 = 1 << 5;
        const DOT_7 = 1 << 6;
        const DOT_8 = 1 << 7;
    }
}

/// Dot lookup indexed by `[row_in_cell][col_in_cell]`.
///
/// This table is the single source of truth for which bit a sub-pixel sets.
pub const DOT_TABLE: [[BrailleDots; CELL_COLS as usize]; CELL_ROWS as usize] = [
    [BrailleDots::DOT_1, BrailleDots::DOT_4],
    [BrailleDots::DOT_2, BrailleDots::DOT_5],
    [BrailleDots::DOT_3, BrailleDots::DOT_6],
    [BrailleDots::DOT_7, BrailleDots::DOT_8],
];

/// One Braille character on the canvas: a dot mask plus a palette color.
///
/// A freshly created cell has no dots set and color index 0. Dots are only
/// ever added; the color is overwritten by every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelCell {
    dots: BrailleDots,
    color: u8,
}

impl PixelCell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dot at cell-local position (`sub_x`, `sub_y`) and makes
    /// `color` the cell's color.
    ///
    /// `sub_x` must be in `0..2` and `sub_y` in `0..4`; the canvas reduces
    /// coordinates before calling this.
    pub fn set_dot(&mut self, sub_x: usize, sub_y: usize, color: u8) {
        debug_assert!(sub_x < CELL_COLS as usize && sub_y < CELL_ROWS as usize);
        self.dots |= DOT_TABLE[sub_y][sub_x];
        self.color = color;
    }

    pub fn dots(&self) -> BrailleDots {
        self.dots
    }

    /// Raw 8-bit dot mask.
    pub fn mask(&self) -> u8 {
        self.dots.bits()
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// The Braille character for the current dot pattern. An empty cell
    /// yields the blank pattern U+2800, never a space.
    pub fn braille_char(&self) -> char {
        // Every value of BRAILLE_BASE + u8 lies inside the Braille block.
        char::from_u32(BRAILLE_BASE + self.mask() as u32).unwrap_or('\u{2800}')
    }

    /// Renders the cell as `ESC[38;5;<color>m`, the glyph, then `ESC[m`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PixelCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            sgr_fg_indexed(self.color),
            self.braille_char(),
            SGR_RESET
        )
    }
}
