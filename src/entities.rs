//! All game entity types — pure data, no game logic.

use std::fmt;

use clap::ValueEnum;

use crate::config::GameConfig;
use crate::field::{Field, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Level {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Easy => "easy",
            Level::Normal => "normal",
            Level::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Built but never started.
    Idle,
    Running,
    /// Terminal; only `restart` leaves this state.
    Finished(Outcome),
}

// ── Player, hazards & targets ────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

/// A student wandering the field. Speed per axis is fixed for life; only
/// the sign of `vx`/`vy` ever changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hazard {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

/// A parked scooter waiting to be collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub x: i32,
    pub y: i32,
}

/// Authoritative positions of everything except the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityStore {
    pub hazards: Vec<Hazard>,
    /// Remaining targets; collected ones are removed.
    pub targets: Vec<Target>,
}

// ── Master game state ────────────────────────────────────────────────────────

/// One play-through. A restart replaces the store wholesale.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub field: Field,
    pub player: Player,
    pub store: EntityStore,
    pub score: u32,
    pub status: GameStatus,
    /// Set together with `GameStatus::Finished`.
    pub message: Option<String>,
    pub ticks: u64,
}

impl GameSession {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Read-only snapshot handed to the renderer once per tick.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub width: i32,
    pub height: i32,
    pub gate: Rect,
    pub player: Player,
    pub hazards: &'a [Hazard],
    pub targets: &'a [Target],
    pub score: u32,
    pub level: Level,
    pub total_targets: usize,
    pub total_hazards: usize,
    /// Present only once the session has finished.
    pub terminal: Option<(Outcome, &'a str)>,
}
