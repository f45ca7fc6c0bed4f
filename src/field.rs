//! Field geometry and difficulty tables — constants only, no logic beyond
//! lookups and a sanity check.

use crate::config::ConfigError;
use crate::entities::Level;

// ── Field constants ──────────────────────────────────────────────────────────

pub const FIELD_WIDTH: i32 = 1000;
pub const FIELD_HEIGHT: i32 = 700;

/// Pixels the player travels per accepted move.
pub const PLAYER_STEP: i32 = 30;

/// Where the player appears at the start of every session.
pub const PLAYER_START: (i32, i32) = (500, 670);

/// Entities are spawned at least this far from every edge.
pub const SPAWN_INSET: i32 = 50;

/// Offset added to a hazard's position before testing it against the gate.
pub const GATE_LOOKAHEAD: i32 = 20;

// Move margins, checked against the pre-move position.
pub const MOVE_MARGIN_LEFT: i32 = 30;
pub const MOVE_MARGIN_RIGHT: i32 = 30;
pub const MOVE_MARGIN_TOP: i32 = 48;
pub const MOVE_MARGIN_BOTTOM: i32 = 50;

// ── Gate ─────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, `x0 < x1` and `y0 < y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Strict containment on both axes — points on an edge are outside.
    pub fn strictly_contains(&self, x: i32, y: i32) -> bool {
        self.x0 < x && x < self.x1 && self.y0 < y && y < self.y1
    }
}

// ── Field ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    pub gate: Rect,
}

impl Default for Field {
    fn default() -> Self {
        Field {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            gate: Rect {
                x0: 350,
                y0: 630,
                x1: 650,
                y1: 699,
            },
        }
    }
}

impl Field {
    /// The gate must sit strictly inside the field and the spawn inset must
    /// leave a non-empty area to place entities in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.gate;
        if g.x0 >= g.x1 || g.y0 >= g.y1 {
            return Err(ConfigError::InvalidField("gate rectangle is empty"));
        }
        if g.x0 <= 0 || g.y0 <= 0 || g.x1 >= self.width || g.y1 >= self.height {
            return Err(ConfigError::InvalidField("gate must lie strictly inside the field"));
        }
        if self.width <= 2 * SPAWN_INSET || self.height <= 2 * SPAWN_INSET {
            return Err(ConfigError::InvalidField("field is smaller than the spawn inset"));
        }
        Ok(())
    }
}

// ── Difficulty table ─────────────────────────────────────────────────────────

/// Inclusive `(min, max)` range each hazard velocity component is drawn from.
pub fn speed_range(level: &Level) -> (i32, i32) {
    match level {
        Level::Easy => (1, 3),
        Level::Normal => (2, 4),
        Level::Hard => (3, 5),
    }
}

// ── Collision thresholds ─────────────────────────────────────────────────────

/// Hazards are narrower than they are tall.
pub const HAZARD_REACH_X: i32 = 15;
pub const HAZARD_REACH_Y: i32 = 30;
pub const TARGET_REACH_X: i32 = 30;
pub const TARGET_REACH_Y: i32 = 30;
