// src/canvas/coords.rs

//! Decomposition of sub-pixel coordinates into a cell position and an
//! in-cell dot position.
//!
//! The canvas has no fixed origin, so coordinates are routinely negative.
//! Both halves of the decomposition round toward negative infinity: `-1`
//! is the last dot of cell `-1`, not the first dot of cell `0`. For every
//! coordinate `v` and modulus `m`, `m * cell_pos(v, m) + cell_index(v, m) == v`.

use crate::glyph::{CELL_COLS, CELL_ROWS};

/// Reduces `coord` to its dot index within a cell, always in `[0, modulus)`.
pub fn cell_index(coord: i32, modulus: i32) -> usize {
    let index = if coord >= 0 {
        coord % modulus
    } else {
        (modulus - 1) + (coord + 1) % modulus
    };
    index as usize
}

/// Cell row or column containing `coord`, using floor division.
pub fn cell_pos(coord: i32, modulus: i32) -> i32 {
    coord.div_euclid(modulus)
}

/// Location of one dot on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DotLocation {
    pub col: i32,
    pub row: i32,
    pub sub_x: usize,
    pub sub_y: usize,
}

impl DotLocation {
    pub fn from_sub_pixel(x: i32, y: i32) -> Self {
        DotLocation {
            col: cell_pos(x, CELL_COLS),
            row: cell_pos(y, CELL_ROWS),
            sub_x: cell_index(x, CELL_COLS),
            sub_y: cell_index(y, CELL_ROWS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn negative_coordinates_wrap_mathematically() {
        assert_eq!(cell_index(-1, 4), 3);
        assert_eq!(cell_index(-4, 4), 0);
        assert_eq!(cell_index(-5, 4), 3);
        assert_eq!(cell_index(-1, 2), 1);
        assert_eq!(cell_index(-2, 2), 0);
        assert_eq!(cell_pos(-1, 4), -1);
        assert_eq!(cell_pos(-4, 4), -1);
        assert_eq!(cell_pos(-5, 4), -2);
        assert_eq!(cell_pos(-1, 2), -1);
        assert_eq!(cell_pos(3, 2), 1);
    }

    #[test]
    fn decomposition_reconstructs_coordinate() {
        for v in -37..=37 {
            for m in [CELL_COLS, CELL_ROWS] {
                let index = cell_index(v, m);
                assert!(index < m as usize, "index {} out of range for {} mod {}", index, v, m);
                assert_eq!(m * cell_pos(v, m) + index as i32, v, "v = {}, m = {}", v, m);
            }
        }
    }

    #[test]
    fn extreme_coordinates_stay_in_range() {
        for v in [i32::MIN, i32::MIN + 1, i32::MAX] {
            let loc = DotLocation::from_sub_pixel(v, v);
            assert!(loc.sub_x < 2);
            assert!(loc.sub_y < 4);
        }
    }
}
