//! Advances object phases along the path by elapsed time.

use crate::geometry::tolerance::EPS_LEN;
use crate::model::MovingObject;

/// Advance every object's phase by `speed · dt / total_length`, wrapping
/// into `[0, 1)`.
///
/// A zero or near-zero total length leaves all phases stationary instead of
/// dividing by it; the objects simply hold position until the path regains
/// extent.
pub fn advance_phases(objects: &mut [MovingObject], dt: f32, total_length: f32) {
    if total_length <= EPS_LEN {
        return;
    }
    for obj in objects {
        obj.phase = (obj.phase + obj.speed * dt / total_length).rem_euclid(1.0);
    }
}
