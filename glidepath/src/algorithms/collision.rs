//! Pairwise overlap flags for the current tick's object positions.

use crate::model::Point;

/// For each `(position, radius)` pair, whether it overlaps any other.
///
/// Two circles collide iff their center distance is strictly less than the
/// sum of their radii; touching exactly does not count. O(n²), which is fine
/// at the object counts this demo runs.
pub fn collision_flags(circles: &[(Point, f32)]) -> Vec<bool> {
    let mut flags = vec![false; circles.len()];
    for i in 0..circles.len() {
        for j in (i + 1)..circles.len() {
            let (pi, ri) = circles[i];
            let (pj, rj) = circles[j];
            let dx = pj.x - pi.x;
            let dy = pj.y - pi.y;
            let reach = ri + rj;
            if dx * dx + dy * dy < reach * reach {
                flags[i] = true;
                flags[j] = true;
            }
        }
    }
    flags
}
