//! tds: run the top-down shooter simulation headless.
//!
//! Usage:
//!   tds [--seed N] [--config game.json] [--ticks N] [--every N] [--fast]
//!
//! Reads one JSON command per line on stdin and writes one JSON snapshot per
//! line on stdout. Logs go to stderr.

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use tds_app::game_loop::spawn_game_loop;
use tds_app::ipc;
use tds_app::state::LoopOptions;
use tds_sim::{GameConfig, SimConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    if let Some(unknown) = unknown_flag(&args) {
        eprintln!("Unknown argument: {unknown}");
        print_usage();
        process::exit(1);
    }

    let seed = match parse_value::<u64>(&args, "--seed") {
        Ok(seed) => seed.unwrap_or(SimConfig::default().seed),
        Err(e) => fail(&e),
    };
    let max_ticks = match parse_value::<u64>(&args, "--ticks") {
        Ok(ticks) => ticks,
        Err(e) => fail(&e),
    };
    let snapshot_every = match parse_value::<u64>(&args, "--every") {
        Ok(every) => every.unwrap_or(1),
        Err(e) => fail(&e),
    };
    let game = match parse_value::<PathBuf>(&args, "--config") {
        Ok(Some(path)) => GameConfig::load_or_default(&path),
        Ok(None) => GameConfig::default(),
        Err(e) => fail(&e),
    };

    let config = SimConfig {
        seed,
        game,
        ..Default::default()
    };
    let mut options = LoopOptions {
        max_ticks,
        snapshot_every,
        ..Default::default()
    };
    if args.iter().any(|a| a == "--fast") {
        options.tick_duration = Duration::ZERO;
    }

    if let Err(e) = run(config, options) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(config: SimConfig, options: LoopOptions) -> io::Result<()> {
    let shutdown_on_eof = options.max_ticks.is_none();
    let handle = spawn_game_loop(config, options)?;

    // The input thread is detached: it may stay blocked on stdin after the
    // game loop has finished.
    ipc::spawn_input_reader(
        io::BufReader::new(io::stdin()),
        handle.commands,
        shutdown_on_eof,
    )?;

    let written = ipc::write_snapshots(io::stdout().lock(), &handle.snapshots)?;
    if handle.thread.join().is_err() {
        return Err(io::Error::other("game loop thread panicked"));
    }
    log::info!("Wrote {written} snapshots");
    Ok(())
}

fn print_usage() {
    eprintln!(
        "tds: headless top-down shooter simulation\n\
         \n\
         Reads JSON commands from stdin, one per line, e.g.\n\
           {{\"type\":\"KeyDown\",\"key\":\"Up\"}}\n\
           {{\"type\":\"Aim\",\"screen_x\":320.0,\"screen_y\":240.0}}\n\
         and writes one JSON snapshot per tick to stdout.\n\
         \n\
         Options:\n\
         \n\
           --seed <N>       RNG seed (default: 42)\n\
           --config <path>  Game config JSON (missing fields use defaults)\n\
           --ticks <N>      Stop after N ticks (default: run until stdin closes)\n\
           --every <N>      Emit every N-th snapshot (default: 1)\n\
           --fast           Run ticks back to back instead of at 60Hz\n\
           --help           Show this message\n\
         \n\
         Examples:\n\
         \n\
           echo '{{\"type\":\"KeyDown\",\"key\":\"Right\"}}' | tds --ticks 120 --every 60\n\
           tds --seed 7 --config game.json --fast --ticks 600 < inputs.jsonl\n"
    );
}

const VALUE_FLAGS: [&str; 4] = ["--seed", "--config", "--ticks", "--every"];
const SWITCHES: [&str; 3] = ["--fast", "--help", "-h"];

fn unknown_flag(args: &[String]) -> Option<&str> {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if VALUE_FLAGS.contains(&arg) {
            i += 2;
        } else if SWITCHES.contains(&arg) {
            i += 1;
        } else {
            return Some(arg);
        }
    }
    None
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    for i in 0..args.len() {
        if args[i] == flag {
            let raw = args
                .get(i + 1)
                .ok_or_else(|| format!("{flag} needs a value"))?;
            return raw
                .parse()
                .map(Some)
                .map_err(|_| format!("Invalid value for {flag}: {raw}"));
        }
    }
    Ok(None)
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    print_usage();
    process::exit(1);
}
