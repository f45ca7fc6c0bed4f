//! Scooter Hunter — collect every scooter on campus without bumping into
//! a student.
//!
//! - `field`: geometry constants and difficulty speed tables
//! - `entities`: pure game data and the entity store
//! - `motion` / `collision`: per-tick hazard movement and proximity checks
//! - `compute`: the session state machine (start, tick, move, restart)
//! - `config`: validated session configuration
//! - `input` / `display`: terminal adapters driven by the binary

pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod field;
pub mod input;
pub mod motion;
