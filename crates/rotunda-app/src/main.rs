//! Rotunda console entry point.
//!
//! Drives the kiosk controller against the system clock. Operator input is
//! read line by line from stdin (see `help`), and every scene change is
//! printed. Type `quit` or close stdin to exit.

mod input;
mod render;

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};

use rotunda_core::config::KioskConfig;
use rotunda_core::platform::{Clock, SystemClock};
use rotunda_core::scene::Scene;
use rotunda_core::{Dispatch, Kiosk};

use render::ConsoleView;

const DEFAULT_CONFIG: &str = "rotunda.toml";
const MAX_WAIT: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting Rotunda (interval {}s, idle {}s, {}x{})",
        config.interval_secs,
        config.idle_secs,
        config.viewport.width,
        config.viewport.height,
    );

    let clock = SystemClock::new();
    let mut kiosk = Kiosk::new(&config, Scene::standard(), clock.now_ms());
    let mut view = ConsoleView::new();
    print_lines(view.update(&kiosk));
    println!("{}", input::HELP);

    // Stdin blocks, so it gets its own thread.
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        let now = clock.now_ms();
        let wait = kiosk
            .next_deadline()
            .map(|at| Duration::from_millis(at.saturating_sub(now)))
            .map_or(MAX_WAIT, |d| d.min(MAX_WAIT));

        match rx.recv_timeout(wait) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match input::parse_command(&line) {
                    Ok(event) => {
                        let result = kiosk.handle_input(clock.now_ms(), &event);
                        if result == Dispatch::Quit {
                            break;
                        }
                        if result == Dispatch::PassThrough {
                            println!("click delivered to embedded page");
                        }
                    },
                    Err(msg) => println!("{msg}"),
                }
            },
            Err(RecvTimeoutError::Timeout) => kiosk.tick(clock.now_ms()),
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("stdin closed");
                break;
            },
        }
        print_lines(view.update(&kiosk));
    }

    log::info!("Rotunda shut down");
    Ok(())
}

/// Resolve the config from the CLI arg, `ROTUNDA_CONFIG`, or `rotunda.toml`.
///
/// A file that is missing falls back to built-in defaults. A file that
/// exists but fails to parse is an error.
fn load_config() -> Result<KioskConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ROTUNDA_CONFIG").ok())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    if !path.exists() {
        log::warn!("Config {} not found, using defaults", path.display());
        return Ok(KioskConfig::default());
    }
    let config = KioskConfig::from_file(&path)
        .with_context(|| format!("loading config {}", path.display()))?;
    log::info!("Loaded config: {}", path.display());
    Ok(config)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
