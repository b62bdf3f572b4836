//! Runs the demo binary in a pseudo-terminal.

use std::process::Command;

use rexpect::session::spawn_command;

const TIMEOUT_MS: Option<u64> = Some(10_000);

fn demo_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_braille-canvas"));
    command.env("BRAILLE_CANVAS_FRAME_MS", "10");
    command.env_remove("BRAILLE_CANVAS_CONFIG");
    command
}

#[test]
fn demo_stops_after_configured_frames() {
    let mut command = demo_command();
    command.env("BRAILLE_CANVAS_MAX_FRAMES", "3");
    let mut session = spawn_command(command, TIMEOUT_MS).expect("failed to spawn demo");

    // Default color is bright white (palette index 15).
    session
        .exp_string("\x1b[38;5;15m")
        .expect("no colored cell in output");
    session
        .exp_string("program exited")
        .expect("no exit message");
    session.exp_eof().expect("demo did not exit");
}

#[test]
fn demo_stops_on_interrupt() {
    let mut command = demo_command();
    command.env_remove("BRAILLE_CANVAS_MAX_FRAMES");
    let mut session = spawn_command(command, TIMEOUT_MS).expect("failed to spawn demo");

    session
        .exp_string("\x1b[m")
        .expect("no frame rendered");
    session.send_control('c').expect("failed to send Ctrl-C");
    session
        .exp_string("program exited")
        .expect("no exit message after interrupt");
    session.exp_eof().expect("demo did not exit");
}
