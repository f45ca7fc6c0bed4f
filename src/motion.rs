//! Hazard motion: boundary reflection, gate deflection, then one step.

use crate::entities::Hazard;
use crate::field::{Field, GATE_LOOKAHEAD};

/// Advance a single hazard by one tick.
///
/// Both checks look at the pre-move position. The gate rule runs after the
/// boundary rule and wins when they disagree on `vy`.
pub fn step_hazard(hazard: &mut Hazard, field: &Field) {
    if hazard.x >= field.width {
        hazard.vx = -hazard.vx.abs();
    }
    if hazard.x <= 0 {
        hazard.vx = hazard.vx.abs();
    }
    if hazard.y >= field.height {
        hazard.vy = -hazard.vy.abs();
    }
    if hazard.y <= 0 {
        hazard.vy = hazard.vy.abs();
    }

    // Deflects regardless of the current direction of travel.
    if field
        .gate
        .strictly_contains(hazard.x + GATE_LOOKAHEAD, hazard.y + GATE_LOOKAHEAD)
    {
        hazard.vx = -hazard.vx.abs();
        hazard.vy = -hazard.vy.abs();
    }

    hazard.x += hazard.vx;
    hazard.y += hazard.vy;
}

/// Advance every hazard by one tick.
pub fn step_all(hazards: &mut [Hazard], field: &Field) {
    for hazard in hazards.iter_mut() {
        step_hazard(hazard, field);
    }
}
