// src/driver.rs

//! The animation loop around a [`Canvas`]: draw, display, pause, clear.
//!
//! Termination is cooperative. The loop checks a [`CancelToken`] once per
//! frame; [`install_interrupt_handler`] wires SIGINT/SIGTERM to a token
//! without any process-global flag.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use nix::sys::signal::{SigSet, Signal};

use crate::canvas::Canvas;
use crate::config::Config;
use crate::terminal::{CLEAR_SCREEN_AND_HOME, CURSOR_HIDE, CURSOR_SHOW};

/// Printed once the loop has stopped.
pub const EXIT_MESSAGE: &str = "program exited";

/// Shared stop request. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Cancels `token` on the first SIGINT or SIGTERM.
///
/// The signals are blocked on the calling thread and picked up by a
/// dedicated thread with `sigwait`. Call this from `main` before spawning
/// any other thread so that every thread inherits the blocked mask.
pub fn install_interrupt_handler(token: CancelToken) -> Result<()> {
    let mut signals = SigSet::empty();
    signals.add(Signal::SIGINT);
    signals.add(Signal::SIGTERM);
    signals
        .thread_block()
        .context("Failed to block SIGINT/SIGTERM")?;

    thread::Builder::new()
        .name("signal-watcher".into())
        .spawn(move || match signals.wait() {
            Ok(signal) => {
                info!("Received {:?}, stopping frame loop.", signal);
                token.cancel();
            }
            Err(e) => warn!("sigwait failed: {}. Interrupts will not stop the loop.", e),
        })
        .context("Failed to spawn signal watcher thread")?;
    debug!("Interrupt handler installed.");
    Ok(())
}

/// Drives a canvas frame by frame.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    frame_interval: Duration,
    max_frames: Option<u64>,
    clear_screen: bool,
}

impl FrameLoop {
    pub fn new(config: &Config) -> Self {
        FrameLoop {
            frame_interval: Duration::from_millis(config.frame_interval_ms),
            max_frames: config.max_frames,
            clear_screen: config.clear_screen,
        }
    }

    /// Runs until `cancel` fires or `max_frames` frames were shown and
    /// returns the number of frames shown.
    ///
    /// Each cycle calls `draw` with the canvas and the frame number, writes
    /// the rendered frame to `out`, waits one frame interval and clears the
    /// canvas. The cursor is hidden while running and shown again on exit,
    /// also when writing fails.
    pub fn run<W, F>(
        &self,
        canvas: &mut Canvas,
        out: &mut W,
        cancel: &CancelToken,
        mut draw: F,
    ) -> Result<u64>
    where
        W: Write,
        F: FnMut(&mut Canvas, u64),
    {
        info!(
            "Starting frame loop: interval {:?}, max frames {:?}",
            self.frame_interval, self.max_frames
        );
        write!(out, "{}", CURSOR_HIDE).context("Failed to hide cursor")?;

        let result = self.cycle(canvas, out, cancel, &mut draw);

        let restore = writeln!(out, "{}{}", CURSOR_SHOW, EXIT_MESSAGE)
            .and_then(|_| out.flush())
            .context("Failed to restore cursor");
        let frames = result?;
        restore?;
        info!("Frame loop stopped after {} frames.", frames);
        Ok(frames)
    }

    fn cycle<W, F>(
        &self,
        canvas: &mut Canvas,
        out: &mut W,
        cancel: &CancelToken,
        draw: &mut F,
    ) -> Result<u64>
    where
        W: Write,
        F: FnMut(&mut Canvas, u64),
    {
        let mut frame = 0u64;
        while !cancel.is_cancelled() && self.max_frames.map_or(true, |max| frame < max) {
            draw(canvas, frame);

            let text = canvas.render_frame();
            if self.clear_screen {
                out.write_all(CLEAR_SCREEN_AND_HOME.as_bytes())
                    .context("Failed to clear screen")?;
            }
            out.write_all(text.as_bytes())
                .with_context(|| format!("Failed to write frame {}", frame))?;
            out.flush().context("Failed to flush frame")?;
            trace!("Frame {}: {} bytes written", frame, text.len());

            if !self.frame_interval.is_zero() {
                thread::sleep(self.frame_interval);
            }
            canvas.clear();
            frame += 1;
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::TerminalSize;
    use test_log::test;

    fn config(max_frames: Option<u64>) -> Config {
        Config {
            frame_interval_ms: 0,
            max_frames,
            clear_screen: true,
            anchor_origin: false,
            color: 1,
        }
    }

    fn canvas() -> Canvas {
        Canvas::new(TerminalSize::new(80, 24))
    }

    #[test]
    fn runs_until_max_frames() {
        let mut out = Vec::new();
        let mut seen = Vec::new();
        let frames = FrameLoop::new(&config(Some(3)))
            .run(&mut canvas(), &mut out, &CancelToken::new(), |c, n| {
                seen.push(n);
                c.draw_line(0.0, 0.0, 1.0, 0.0, 1);
            })
            .unwrap();
        assert_eq!(frames, 3);
        assert_eq!(seen, vec![0, 1, 2]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(CURSOR_HIDE));
        assert_eq!(text.matches(CLEAR_SCREEN_AND_HOME).count(), 3);
        assert_eq!(text.matches("\u{2809}").count(), 3);
        assert!(text.ends_with(&format!("{}{}\n", CURSOR_SHOW, EXIT_MESSAGE)));
    }

    #[test]
    fn canvas_is_cleared_between_frames() {
        let mut c = canvas();
        let mut counts = Vec::new();
        FrameLoop::new(&config(Some(2)))
            .run(&mut c, &mut Vec::<u8>::new(), &CancelToken::new(), |c, n| {
                counts.push(c.cell_count());
                c.set_dot(n as i32 * 10, 0, 1);
            })
            .unwrap();
        assert_eq!(counts, vec![0, 0]);
        assert!(c.is_empty());
    }

    #[test]
    fn cancelled_token_stops_before_first_frame() {
        let token = CancelToken::new();
        token.cancel();
        let mut out = Vec::new();
        let frames = FrameLoop::new(&config(None))
            .run(&mut canvas(), &mut out, &token, |_, _| panic!("must not draw"))
            .unwrap();
        assert_eq!(frames, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}{}{}\n", CURSOR_HIDE, CURSOR_SHOW, EXIT_MESSAGE)
        );
    }

    #[test]
    fn cancel_is_checked_once_per_frame() {
        let token = CancelToken::new();
        let inner = token.clone();
        let frames = FrameLoop::new(&config(None))
            .run(&mut canvas(), &mut Vec::<u8>::new(), &token, |_, n| {
                if n == 1 {
                    inner.cancel();
                }
            })
            .unwrap();
        assert_eq!(frames, 2);
    }

    #[test]
    fn frames_are_written_without_clear_when_disabled() {
        let mut cfg = config(Some(1));
        cfg.clear_screen = false;
        let mut out = Vec::new();
        FrameLoop::new(&cfg)
            .run(&mut canvas(), &mut out, &CancelToken::new(), |_, _| {})
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(CLEAR_SCREEN_AND_HOME));
        assert!(text.contains("\x1b[38;5;0m\u{2800}\x1b[m\n"));
    }
}
