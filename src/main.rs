// src/main.rs

//! Demo binary: a triangle spinning around the origin until Ctrl-C.

use std::io::stdout;

use anyhow::Context;
use log::info;

use braille_canvas::config::CONFIG;
use braille_canvas::driver::{self, CancelToken, FrameLoop};
use braille_canvas::{Canvas, Point};

/// Degrees the triangle turns per frame.
const DEGREES_PER_FRAME: f32 = 6.0;

/// Vertices of an equilateral triangle of circumradius `radius`, turned by
/// `angle_deg`.
fn triangle(radius: f32, angle_deg: f32) -> [Point; 3] {
    [0.0f32, 120.0, 240.0].map(|offset| {
        let theta = (angle_deg + offset).to_radians();
        (radius * theta.cos(), radius * theta.sin())
    })
}

fn main() -> anyhow::Result<()> {
    // Frames go to stdout; keep logging on stderr quiet unless asked for.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let config = CONFIG.clone();
    info!("Configuration: {:?}", config);

    let cancel = CancelToken::new();
    driver::install_interrupt_handler(cancel.clone())
        .context("Failed to install interrupt handler")?;

    let mut canvas = Canvas::from_terminal().with_anchor_origin(config.anchor_origin);
    // Fit the triangle in the smaller half-extent of the terminal.
    let radius = ((canvas.canvas_width().min(canvas.canvas_height()) / 2) - 1).max(1) as f32;
    info!(
        "Canvas {}x{} sub-pixels, triangle radius {}",
        canvas.canvas_width(),
        canvas.canvas_height(),
        radius
    );

    let color = config.color;
    let mut out = stdout().lock();
    FrameLoop::new(&config)
        .run(&mut canvas, &mut out, &cancel, |canvas, frame| {
            let [p1, p2, p3] = triangle(radius, frame as f32 * DEGREES_PER_FRAME);
            canvas.draw_triangle(p1, p2, p3, color);
        })
        .context("Frame loop failed")?;
    Ok(())
}
