// src/color.rs

//! Palette colors for canvas cells and the SGR escapes that select them.
//!
//! Cells carry a 256-color palette index. `NamedColor` gives names to the
//! 16 standard ANSI entries (indices 0-15); any other `u8` is used as-is.

use log::warn;
use serde::{Deserialize, Serialize};

const SGR_PREFIX: &str = "\x1b[";
const SGR_SUFFIX: char = 'm';
/// Extended foreground color selector (`38;5;<n>`).
const SGR_FG_INDEXED: &str = "38;5;";

/// Resets all SGR attributes. Emitted after every rendered cell.
pub const SGR_RESET: &str = "\x1b[m";

/// Standard ANSI named colors (indices 0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl NamedColor {
    const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// Converts a palette index to a `NamedColor`, or `None` for indices
    /// outside 0-15 (those have no ANSI name).
    pub fn from_index(idx: u8) -> Option<Self> {
        let named = Self::ALL.get(idx as usize).copied();
        if named.is_none() {
            warn!("No NamedColor for palette index {}", idx);
        }
        named
    }

    /// Palette index of this color.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<NamedColor> for u8 {
    fn from(color: NamedColor) -> Self {
        color.index()
    }
}

/// Builds the escape that sets the foreground to palette entry `index`.
pub fn sgr_fg_indexed(index: u8) -> String {
    format!("{}{}{}{}", SGR_PREFIX, SGR_FG_INDEXED, index, SGR_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn fg_escape_uses_256_color_form() {
        assert_eq!(sgr_fg_indexed(0), "\x1b[38;5;0m");
        assert_eq!(sgr_fg_indexed(255), "\x1b[38;5;255m");
        assert_eq!(SGR_RESET, "\x1b[m");
    }

    #[test]
    fn named_color_round_trips_through_index() {
        for idx in 0..16u8 {
            let named = NamedColor::from_index(idx).unwrap();
            assert_eq!(u8::from(named), idx);
        }
        assert_eq!(NamedColor::from_index(16), None);
        assert_eq!(NamedColor::BrightWhite.index(), 15);
    }
}
