//! Cheetah Jump entry point
//!
//! Headless native driver: owns the session, runs the fixed-rate tick loop
//! and prints what a renderer would show.
//!
//! Usage: `cheetah-jump [--settings FILE] [--seed N] [--demo [TICKS]] [--json]`
//!
//! Interactive controls (one per line on stdin): empty line or `j` = jump,
//! `r` = restart, `q` = quit.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use cheetah_jump::Settings;
use cheetah_jump::sim::{GameState, Presenter, TickInput, tick};

/// Default length of a `--demo` run (one minute at 60 Hz)
const DEMO_TICKS: u64 = 3600;

/// Commands marshalled from the input thread into the tick thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Jump,
    Restart,
    Quit,
}

#[derive(Debug, Default)]
struct Options {
    settings: Option<PathBuf>,
    seed: Option<u64>,
    demo: Option<u64>,
    json: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                let path = args.next().ok_or("--settings needs a file")?;
                opts.settings = Some(PathBuf::from(path));
            }
            "--seed" => {
                let seed = args.next().ok_or("--seed needs a number")?;
                opts.seed = Some(seed.parse().map_err(|_| format!("bad seed: {seed}"))?);
            }
            "--demo" => {
                let ticks = match args.peek() {
                    Some(next) if !next.starts_with("--") => {
                        let ticks = args.next().unwrap_or_default();
                        ticks.parse().map_err(|_| format!("bad tick count: {ticks}"))?
                    }
                    _ => DEMO_TICKS,
                };
                opts.demo = Some(ticks);
            }
            "--json" => opts.json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(opts)
}

/// Prints events to the terminal in place of sounds and dialogs
#[derive(Debug, Default)]
struct Console {
    /// Snapshots go to stdout as JSON lines; keep human output on stderr
    json: bool,
    best: u64,
    runs: u32,
}

impl Console {
    fn say(&self, msg: &str) {
        if self.json {
            eprintln!("{msg}");
        } else {
            println!("{msg}");
        }
    }
}

impl Presenter for Console {
    fn on_game_started(&mut self) {
        self.runs += 1;
        self.say(&format!("Run {} - go!", self.runs));
    }

    fn on_jump(&mut self) {
        log::trace!("jump");
    }

    fn on_score_changed(&mut self, score: u64) {
        self.say(&format!("Score: {score}"));
    }

    fn on_milestone(&mut self, speed: f32, spacing: f32) {
        log::info!("Speed up: speed={speed} spacing={spacing}");
    }

    fn on_game_over(&mut self, final_score: u64) {
        self.best = self.best.max(final_score);
        self.say(&format!(
            "GAME OVER - score {final_score} (best {})",
            self.best
        ));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is a library on the web; there is no native driver
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_args()?;

    let settings = match &opts.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(settings, seed)?;
    log::info!("Cheetah Jump starting (seed {seed})");

    let mut console = Console {
        json: opts.json,
        ..Default::default()
    };

    match opts.demo {
        Some(ticks) => run_demo(&mut state, &mut console, ticks),
        None => run_interactive(&mut state, &mut console),
    }
}

/// Let the autopilot play as fast as possible, restarting after each crash
fn run_demo(
    state: &mut GameState,
    console: &mut Console,
    ticks: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    state.start();
    for _ in 0..ticks {
        // Restart lazily so a crash on the final tick doesn't open an empty run
        if !state.is_running() {
            state.start_with_seed(state.seed.wrapping_add(1));
        }
        tick(state, &input);
        state.flush_events(console);
        if console.json {
            println!("{}", serde_json::to_string(&state.snapshot())?);
        }
    }
    state.flush_events(console);

    console.say(&format!(
        "Demo finished: {} run(s), best score {}",
        console.runs, console.best
    ));
    Ok(())
}

/// Player-requested restart: a new course every time, like the shipped game
fn restart_fresh(state: &mut GameState) {
    state.start_with_seed(rand::random());
}

/// Read stdin on its own thread; the session never leaves the tick thread
fn spawn_input() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let cmd = match line.trim() {
                "" | "j" => Command::Jump,
                "r" => Command::Restart,
                "q" => Command::Quit,
                other => {
                    log::warn!("Unknown command: {other}");
                    continue;
                }
            };
            if tx.send(cmd).is_err() {
                return;
            }
        }
        let _ = tx.send(Command::Quit);
    });
    rx
}

fn run_interactive(
    state: &mut GameState,
    console: &mut Console,
) -> Result<(), Box<dyn std::error::Error>> {
    let rx = spawn_input();
    let period = Duration::from_millis(state.settings().tick_ms);

    state.start();
    state.flush_events(console);
    let mut next_tick = Instant::now();

    loop {
        if !state.is_running() {
            // Tick source is stopped until an explicit restart
            match rx.recv() {
                Ok(Command::Restart) => {
                    restart_fresh(state);
                    state.flush_events(console);
                    next_tick = Instant::now();
                }
                Ok(Command::Jump) => {}
                Ok(Command::Quit) | Err(_) => return Ok(()),
            }
            continue;
        }

        // Apply everything that arrived since the last tick
        let mut input = TickInput::default();
        loop {
            match rx.try_recv() {
                Ok(Command::Jump) => input.jump = true,
                Ok(Command::Restart) => restart_fresh(state),
                Ok(Command::Quit) | Err(TryRecvError::Disconnected) => return Ok(()),
                Err(TryRecvError::Empty) => break,
            }
        }

        tick(state, &input);
        state.flush_events(console);
        if console.json {
            println!("{}", serde_json::to_string(&state.snapshot())?);
        }

        next_tick += period;
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        } else {
            // Fell behind; don't try to catch up with a burst of ticks
            next_tick = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheetah_jump::sim::GamePhase;

    #[test]
    fn test_restart_fresh_draws_new_seed() {
        let mut state = GameState::new(Settings::default(), 7).unwrap();
        state.start();
        state.game_over();

        let mut seeds = Vec::new();
        for _ in 0..4 {
            restart_fresh(&mut state);
            assert_eq!(state.phase, GamePhase::Running);
            assert_eq!(state.field.len(), 1);
            seeds.push(state.seed);
        }
        seeds.dedup();
        assert!(seeds.len() > 1);
    }

    #[test]
    fn test_demo_counts_only_ticked_runs() {
        // Gravity strong enough that every run dies on its first tick
        let settings = Settings {
            gravity: 5000.0,
            ..Settings::default()
        };
        let mut state = GameState::new(settings, 1).unwrap();
        let mut console = Console::default();

        run_demo(&mut state, &mut console, 3).unwrap();
        assert_eq!(console.runs, 3);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_demo_without_ticks_is_one_run() {
        let mut state = GameState::new(Settings::default(), 1).unwrap();
        let mut console = Console::default();
        run_demo(&mut state, &mut console, 0).unwrap();
        assert_eq!(console.runs, 1);
    }
}
