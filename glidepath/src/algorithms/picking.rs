use crate::model::{Handle, Point};

/// Hit-test distance threshold around a handle, in surface units.
pub const HIT_RADIUS: f32 = 8.0;

/// First handle within `tol` of `pos`, in handle order.
///
/// Deliberately first-match rather than nearest-match: handle order is the
/// tie-breaker, so picking stays deterministic when handles overlap.
pub fn pick_handle(handles: &[Handle], pos: Point, tol: f32) -> Option<Handle> {
    handles.iter().copied().find(|h| h.pos.distance(pos) < tol)
}
