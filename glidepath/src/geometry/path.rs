//! Arc-length parameterization over a whole path.
//!
//! Provides the total length of a segment sequence and the point at a
//! normalized parameter, measured along accumulated arc length so motion at
//! constant speed looks uniform regardless of each segment's parametric shape.

use crate::geometry::segment::{length, point_at};
use crate::geometry::tolerance::{clamp01, EPS_LEN};
use crate::model::{PathSegment, Point};

/// Sum of per-segment lengths.
pub fn total_length(segments: &[PathSegment]) -> f32 {
    segments.iter().map(length).sum()
}

/// Point at global normalized parameter `t ∈ [0, 1]` along `segments`.
///
/// Walks the sequence accumulating length until the segment containing the
/// target arc length is found, then resolves the local parameter on it.
/// Segments shorter than `EPS_LEN` contribute nothing and are skipped, so no
/// local parameter is ever derived from a near-zero denominator. If `t = 1`
/// or rounding leaves the target uncontained (including a path whose every
/// segment is degenerate), the last segment's endpoint is returned.
///
/// `None` only for an empty path.
pub fn point_on_path(segments: &[PathSegment], t: f32) -> Option<Point> {
    let last = segments.last()?;
    let target = clamp01(t) * total_length(segments);

    let mut accumulated = 0.0;
    for seg in segments {
        let seg_len = length(seg);
        if seg_len <= EPS_LEN {
            continue;
        }
        if target <= accumulated + seg_len {
            let local = (target - accumulated) / seg_len;
            return Some(point_at(seg, local));
        }
        accumulated += seg_len;
    }

    Some(point_at(last, 1.0))
}
