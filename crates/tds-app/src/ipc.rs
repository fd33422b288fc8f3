//! JSON-lines host protocol.
//!
//! Input: one `PlayerCommand` per line. Output: one `GameStateSnapshot` per line.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread::JoinHandle;

use tds_core::commands::PlayerCommand;
use tds_core::state::GameStateSnapshot;

use crate::state::GameLoopCommand;

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command_line(line: &str) -> Result<Option<PlayerCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| format!("Invalid command {line:?}: {e}"))
}

/// Serialise a snapshot as a single JSON line (no trailing newline).
pub fn encode_snapshot(snapshot: &GameStateSnapshot) -> Result<String, String> {
    serde_json::to_string(snapshot).map_err(|e| format!("Failed to encode snapshot: {e}"))
}

/// Forward commands read from `input` to the game loop.
///
/// Malformed lines are logged and skipped. At end of input the sender is
/// dropped, and `Shutdown` is sent first when `shutdown_on_eof` is set.
pub fn spawn_input_reader<R>(
    input: R,
    commands: mpsc::Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("tds-input".into())
        .spawn(move || forward_commands(input, &commands, shutdown_on_eof))
}

fn forward_commands<R: BufRead>(
    input: R,
    commands: &mpsc::Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                break;
            }
        };
        match parse_command_line(&line) {
            Ok(Some(command)) => {
                if commands.send(GameLoopCommand::PlayerCommand(command)).is_err() {
                    // Game loop already stopped.
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("{e}"),
        }
    }

    if shutdown_on_eof {
        let _ = commands.send(GameLoopCommand::Shutdown);
    }
}

/// Write every snapshot received until the game loop hangs up.
/// Returns the number of lines written.
pub fn write_snapshots<W: Write>(
    mut output: W,
    snapshots: &mpsc::Receiver<GameStateSnapshot>,
) -> io::Result<u64> {
    let mut written = 0;
    for snapshot in snapshots.iter() {
        let line = encode_snapshot(&snapshot).map_err(io::Error::other)?;
        writeln!(output, "{line}")?;
        output.flush()?;
        written += 1;
    }
    Ok(written)
}
