// src/terminal.rs

//! Terminal size detection and the escapes the frame loop writes around
//! each frame.

use anyhow::{Context, Result};
use libc::{STDOUT_FILENO, TIOCGWINSZ, winsize};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::mem;
use std::os::unix::io::RawFd;

pub const CURSOR_HIDE: &str = "\x1b[?25l";
pub const CURSOR_SHOW: &str = "\x1b[?25h";
pub const CLEAR_SCREEN_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Used when the terminal reports zero or cannot be queried.
pub const DEFAULT_WIDTH_CHARS: u16 = 80;
pub const DEFAULT_HEIGHT_CHARS: u16 = 24;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl TerminalSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        TerminalSize { cols, rows }
    }

    /// Replaces zero dimensions with the 80x24 defaults.
    fn or_defaults(self) -> Self {
        TerminalSize {
            cols: if self.cols == 0 { DEFAULT_WIDTH_CHARS } else { self.cols },
            rows: if self.rows == 0 { DEFAULT_HEIGHT_CHARS } else { self.rows },
        }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        TerminalSize::new(DEFAULT_WIDTH_CHARS, DEFAULT_HEIGHT_CHARS)
    }
}

/// Queries the size of the terminal attached to stdout.
pub fn query() -> Result<TerminalSize> {
    query_fd(STDOUT_FILENO)
}

/// Queries the size of the terminal behind `fd` with `ioctl(TIOCGWINSZ)`.
pub fn query_fd(fd: RawFd) -> Result<TerminalSize> {
    // SAFETY: `winsz` is a plain C struct, zero-initialized and only written
    // by the kernel through the pointer we pass.
    let winsz = unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(fd, TIOCGWINSZ, &mut winsz) == -1 {
            return Err(std::io::Error::last_os_error())
                .with_context(|| format!("ioctl(TIOCGWINSZ) failed on fd {}", fd));
        }
        winsz
    };
    let size = TerminalSize::new(winsz.ws_col, winsz.ws_row).or_defaults();
    debug!("Terminal size on fd {}: {}x{} cells", fd, size.cols, size.rows);
    Ok(size)
}

/// Like [`query`], but falls back to 80x24 instead of failing.
pub fn query_or_default() -> TerminalSize {
    query().unwrap_or_else(|e| {
        warn!(
            "Failed to get terminal size: {:#}. Using {}x{}.",
            e, DEFAULT_WIDTH_CHARS, DEFAULT_HEIGHT_CHARS
        );
        TerminalSize::default()
    })
}
