//! Proximity checks between the player and everything else.
//!
//! Boxes are axis-aligned and centred on entity positions; reach is
//! inclusive on both axes.

use crate::entities::{Hazard, Player, Target};
use crate::field::{HAZARD_REACH_X, HAZARD_REACH_Y, TARGET_REACH_X, TARGET_REACH_Y};

/// What one collision pass found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hit_hazard: bool,
    pub collected: u32,
}

fn within(ax: i32, ay: i32, bx: i32, by: i32, reach_x: i32, reach_y: i32) -> bool {
    (ax - bx).abs() <= reach_x && (ay - by).abs() <= reach_y
}

pub fn hazard_hits(hazard: &Hazard, player: &Player) -> bool {
    within(hazard.x, hazard.y, player.x, player.y, HAZARD_REACH_X, HAZARD_REACH_Y)
}

pub fn target_reached(target: &Target, player: &Player) -> bool {
    within(target.x, target.y, player.x, player.y, TARGET_REACH_X, TARGET_REACH_Y)
}

/// Check the player against all hazards, then collect every target in
/// reach. Targets are left alone once a hazard has been hit.
pub fn resolve(player: &Player, hazards: &[Hazard], targets: &mut Vec<Target>) -> CollisionReport {
    if hazards.iter().any(|h| hazard_hits(h, player)) {
        return CollisionReport {
            hit_hazard: true,
            collected: 0,
        };
    }

    let before = targets.len();
    targets.retain(|t| !target_reached(t, player));
    CollisionReport {
        hit_hazard: false,
        collected: (before - targets.len()) as u32,
    }
}
