//! Per-segment evaluation: point at a parameter, and segment length.
//!
//! Quadratic length is a chord-sum approximation over a fixed number of
//! sub-intervals. The same sampling backs both length computation and
//! arc-length position lookup, so the two never drift apart.

use crate::geometry::tolerance::lerp;
use crate::model::{PathSegment, Point};

/// Sub-intervals used to approximate a quadratic segment's length.
pub const QUAD_LENGTH_STEPS: u32 = 20;

/// Evaluate `seg` at local parameter `t ∈ [0, 1]`.
pub fn point_at(seg: &PathSegment, t: f32) -> Point {
    match *seg {
        PathSegment::Line { from, to } => Point {
            x: lerp(from.x, to.x, t),
            y: lerp(from.y, to.y, t),
        },
        PathSegment::Quadratic { from, ctrl, to } => {
            let mt = 1.0 - t;
            Point {
                x: mt * mt * from.x + 2.0 * mt * t * ctrl.x + t * t * to.x,
                y: mt * mt * from.y + 2.0 * mt * t * ctrl.y + t * t * to.y,
            }
        }
        PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => {
            let theta = lerp(start_angle, end_angle, t);
            Point {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        }
    }
}

/// Length of `seg`: exact for lines and arcs, chord-sampled for quadratics.
pub fn length(seg: &PathSegment) -> f32 {
    match *seg {
        PathSegment::Line { from, to } => from.distance(to),
        PathSegment::Quadratic { .. } => {
            let mut total = 0.0;
            let mut prev = point_at(seg, 0.0);
            for i in 1..=QUAD_LENGTH_STEPS {
                let next = point_at(seg, i as f32 / QUAD_LENGTH_STEPS as f32);
                total += prev.distance(next);
                prev = next;
            }
            total
        }
        PathSegment::Arc { radius, start_angle, end_angle, .. } => {
            (end_angle - start_angle).abs() * radius
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn line_endpoints_exact() {
        let seg = PathSegment::Line {
            from: Point::new(1.0, 2.0),
            to: Point::new(7.0, -3.0),
        };
        assert_eq!(point_at(&seg, 0.0), Point::new(1.0, 2.0));
        assert_eq!(point_at(&seg, 1.0), Point::new(7.0, -3.0));
    }

    #[test]
    fn quadratic_endpoints() {
        let seg = PathSegment::Quadratic {
            from: Point::new(0.0, 0.0),
            ctrl: Point::new(5.0, 9.0),
            to: Point::new(10.0, 0.0),
        };
        assert_eq!(point_at(&seg, 0.0), Point::new(0.0, 0.0));
        assert_eq!(point_at(&seg, 1.0), Point::new(10.0, 0.0));
    }

    #[test]
    fn arc_endpoints_on_circle() {
        let center = Point::new(3.0, 4.0);
        let seg = PathSegment::Arc {
            center,
            radius: 2.5,
            start_angle: 0.3,
            end_angle: 2.1,
        };
        let start = point_at(&seg, 0.0);
        let end = point_at(&seg, 1.0);
        assert!((start.distance(center) - 2.5).abs() < 1e-5);
        assert!((end.distance(center) - 2.5).abs() < 1e-5);
        assert!(((start.y - center.y).atan2(start.x - center.x) - 0.3).abs() < 1e-5);
        assert!(((end.y - center.y).atan2(end.x - center.x) - 2.1).abs() < 1e-5);
    }

    #[test]
    fn line_length_three_four_five() {
        let seg = PathSegment::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(3.0, 4.0),
        };
        assert_eq!(length(&seg), 5.0);
    }

    #[test]
    fn arc_length_angle_times_radius() {
        let seg = PathSegment::Arc {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            start_angle: 0.0,
            end_angle: PI,
        };
        assert!((length(&seg) - PI * 10.0).abs() < 1e-4);

        // Reversed sweep has the same length.
        let rev = PathSegment::Arc {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            start_angle: PI,
            end_angle: 0.0,
        };
        assert!((length(&rev) - PI * 10.0).abs() < 1e-4);
    }

    #[test]
    fn quadratic_length_of_straight_control_polygon() {
        // Control point on the chord: the curve is the straight segment.
        let seg = PathSegment::Quadratic {
            from: Point::new(0.0, 0.0),
            ctrl: Point::new(5.0, 0.0),
            to: Point::new(10.0, 0.0),
        };
        assert!((length(&seg) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn lengths_are_non_negative() {
        let segs = [
            PathSegment::Line {
                from: Point::new(2.0, 2.0),
                to: Point::new(2.0, 2.0),
            },
            PathSegment::Quadratic {
                from: Point::new(0.0, 0.0),
                ctrl: Point::new(-4.0, 1.0),
                to: Point::new(-8.0, -3.0),
            },
            PathSegment::Arc {
                center: Point::new(0.0, 0.0),
                radius: 1.0,
                start_angle: 2.0,
                end_angle: -1.0,
            },
        ];
        for seg in &segs {
            assert!(length(seg) >= 0.0);
        }
    }
}
