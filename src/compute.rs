//! Session state machine.
//!
//! `Idle → Running → Finished(Won | Lost)`, with `restart` going back to
//! `Running` from any state. Sessions are mutated in place by reference;
//! all randomness comes through an injected RNG so callers control
//! determinism (tests pass a seeded one).

use rand::Rng;

use crate::collision;
use crate::config::{ConfigError, GameConfig};
use crate::entities::{
    Direction, EntityStore, Frame, GameSession, GameStatus, Hazard, Outcome, Player, Target,
};
use crate::field::{
    speed_range, Field, MOVE_MARGIN_BOTTOM, MOVE_MARGIN_LEFT, MOVE_MARGIN_RIGHT, MOVE_MARGIN_TOP,
    PLAYER_START, PLAYER_STEP, SPAWN_INSET,
};
use crate::motion;

// ── Entity store ─────────────────────────────────────────────────────────────

/// Scatter targets and hazards uniformly inside the spawn inset. Overlaps
/// are allowed.
pub fn spawn_store(config: &GameConfig, field: &Field, rng: &mut impl Rng) -> EntityStore {
    let (min_speed, max_speed) = speed_range(&config.level);
    let x_range = SPAWN_INSET..=field.width - SPAWN_INSET;
    let y_range = SPAWN_INSET..=field.height - SPAWN_INSET;

    let targets = (0..config.num_targets)
        .map(|_| Target {
            x: rng.gen_range(x_range.clone()),
            y: rng.gen_range(y_range.clone()),
        })
        .collect();

    let hazards = (0..config.num_hazards)
        .map(|_| Hazard {
            x: rng.gen_range(x_range.clone()),
            y: rng.gen_range(y_range.clone()),
            vx: rng.gen_range(min_speed..=max_speed),
            vy: rng.gen_range(min_speed..=max_speed),
        })
        .collect();

    EntityStore { hazards, targets }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Validate `config` and `field` and build an idle session with an empty
/// store. Call [`start`] to populate it.
pub fn new_session(config: GameConfig, field: Field) -> Result<GameSession, ConfigError> {
    config.validate()?;
    field.validate()?;
    Ok(GameSession {
        config,
        field,
        player: start_position(),
        store: EntityStore::default(),
        score: 0,
        status: GameStatus::Idle,
        message: None,
        ticks: 0,
    })
}

/// Build and start a session on the default field.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> Result<GameSession, ConfigError> {
    let mut session = new_session(config, Field::default())?;
    start(&mut session, rng);
    Ok(session)
}

fn start_position() -> Player {
    Player {
        x: PLAYER_START.0,
        y: PLAYER_START.1,
    }
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

/// Reset score and message, reseed the store and put the player back at the
/// start position. Works from any state.
pub fn start(session: &mut GameSession, rng: &mut impl Rng) {
    session.store = spawn_store(&session.config, &session.field, rng);
    session.player = start_position();
    session.score = 0;
    session.message = None;
    session.ticks = 0;
    session.status = GameStatus::Running;
    log::info!(
        "Starting a {} level game: {} scooters, {} students",
        session.config.level,
        session.config.num_targets,
        session.config.num_hazards
    );
}

/// Throw away the current store and begin again with the same config.
pub fn restart(session: &mut GameSession, rng: &mut impl Rng) {
    log::debug!(
        "restart requested at score {} with {} scooters left",
        session.score,
        session.store.targets.len()
    );
    start(session, rng);
}

fn finish(session: &mut GameSession, outcome: Outcome) {
    let headline = match outcome {
        Outcome::Won => "YOU WON!",
        Outcome::Lost => "GAME OVER!",
    };
    session.message = Some(format!(
        "{headline}\nYOUR SCORE: {}\nPRESS N FOR A NEW GAME",
        session.score
    ));
    session.status = GameStatus::Finished(outcome);
    log::info!("{:?} after {} ticks with score {}", outcome, session.ticks, session.score);
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Move the player one step. Returns whether the move was accepted; moves
/// outside the margins or while not running are ignored.
pub fn move_player(session: &mut GameSession, direction: Direction) -> bool {
    if !session.is_running() {
        return false;
    }

    let Player { x, y } = session.player;
    let field = &session.field;
    let (dx, dy) = match direction {
        Direction::Left if x > MOVE_MARGIN_LEFT => (-PLAYER_STEP, 0),
        Direction::Right if x < field.width - MOVE_MARGIN_RIGHT => (PLAYER_STEP, 0),
        Direction::Up if y > MOVE_MARGIN_TOP => (0, -PLAYER_STEP),
        Direction::Down if y < field.height - MOVE_MARGIN_BOTTOM => (0, PLAYER_STEP),
        _ => {
            log::trace!("move {:?} rejected at ({}, {})", direction, x, y);
            return false;
        }
    };

    session.player.x += dx;
    session.player.y += dy;
    true
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick: move hazards, resolve collisions,
/// then check for a terminal outcome. No-op unless running.
pub fn tick(session: &mut GameSession) {
    if !session.is_running() {
        return;
    }
    session.ticks += 1;

    motion::step_all(&mut session.store.hazards, &session.field);

    let report = collision::resolve(
        &session.player,
        &session.store.hazards,
        &mut session.store.targets,
    );
    if report.hit_hazard {
        finish(session, Outcome::Lost);
        return;
    }

    if report.collected > 0 {
        session.score += report.collected;
        log::debug!(
            "collected {} scooter(s), score {}, {} left",
            report.collected,
            session.score,
            session.store.targets.len()
        );
    }

    if session.store.targets.is_empty() {
        finish(session, Outcome::Won);
    }
}

/// Snapshot for the renderer.
pub fn frame(session: &GameSession) -> Frame<'_> {
    let terminal = match (session.outcome(), session.message.as_deref()) {
        (Some(outcome), Some(message)) => Some((outcome, message)),
        _ => None,
    };
    Frame {
        width: session.field.width,
        height: session.field.height,
        gate: session.field.gate,
        player: session.player,
        hazards: &session.store.hazards,
        targets: &session.store.targets,
        score: session.score,
        level: session.config.level,
        total_targets: session.config.num_targets,
        total_hazards: session.config.num_hazards,
        terminal,
    }
}
