use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use scooter_hunter::compute;
use scooter_hunter::config::{ConfigError, GameConfig, DEFAULT_HAZARDS, DEFAULT_TARGETS};
use scooter_hunter::display::{self, Screen};
use scooter_hunter::entities::{GameSession, Level};
use scooter_hunter::input::{self, Command};

#[derive(Parser)]
#[command(
    name = "scooter_hunter",
    about = "Capture all the scooters while avoiding the students walking around campus",
    allow_negative_numbers = true
)]
struct Cli {
    /// Choose difficulty level of the game
    #[arg(value_enum, default_value_t = Level::Normal)]
    level: Level,

    /// How many scooters do you want to hunt?
    #[arg(default_value_t = DEFAULT_TARGETS as i64)]
    num_scooter: i64,

    /// How many students do you want to appear?
    #[arg(default_value_t = DEFAULT_HAZARDS as i64)]
    num_student: i64,

    /// Print details (debug-level logging)
    #[arg(short, long)]
    verbose: bool,

    /// Seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "15")]
    tick_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &cli.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drain pending key events, tick once, render, then sleep out the rest of
/// the interval. Finished sessions keep rendering so the result stays up
/// until the player starts a new game or quits.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    interval: Duration,
) -> std::io::Result<()> {
    loop {
        let tick_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match input::command_for(&key) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Restart) => compute::restart(session, rng),
                Some(Command::Move(direction)) => {
                    compute::move_player(session, direction);
                }
                None => {}
            }
        }

        compute::tick(session);

        let (width, height) = terminal::size()?;
        display::render(out, &compute::frame(session), Screen { width, height })?;

        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    // Bad counts fail before the terminal is touched.
    let config = GameConfig::from_counts(cli.level, cli.num_scooter, cli.num_student)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = compute::init_state(config, &mut rng)?;
    let interval = Duration::from_millis(cli.tick_ms.max(1));

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Release events let the input layer drop key-ups cleanly; terminals
    // without the protocol just never send them.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the loop never stalls.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &rx, &mut rng, interval);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Some(outcome) = session.outcome() {
        log::info!("last session ended {:?} with score {}", outcome, session.score);
    }

    result.map_err(AppError::from)
}
