use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// One atomic piece of a composite path.
///
/// Arc direction follows the sign of `end_angle - start_angle`; angles are in
/// radians. Segments need not be contiguous with their neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    Line {
        from: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
}

impl PathSegment {
    /// The point at local parameter 0.
    pub fn start(&self) -> Point {
        crate::geometry::segment::point_at(self, 0.0)
    }

    /// The point at local parameter 1.
    pub fn end(&self) -> Point {
        crate::geometry::segment::point_at(self, 1.0)
    }

    /// Copy of this segment with the point identified by `role` moved to `pos`.
    ///
    /// Returns `None` when the role does not exist on this variant (e.g.
    /// `Ctrl` on a line, or anything but `Center` on an arc).
    pub fn with_point(self, role: HandleRole, pos: Point) -> Option<PathSegment> {
        match (self, role) {
            (PathSegment::Line { to, .. }, HandleRole::From) => {
                Some(PathSegment::Line { from: pos, to })
            }
            (PathSegment::Line { from, .. }, HandleRole::To) => {
                Some(PathSegment::Line { from, to: pos })
            }
            (PathSegment::Quadratic { ctrl, to, .. }, HandleRole::From) => {
                Some(PathSegment::Quadratic { from: pos, ctrl, to })
            }
            (PathSegment::Quadratic { from, to, .. }, HandleRole::Ctrl) => {
                Some(PathSegment::Quadratic { from, ctrl: pos, to })
            }
            (PathSegment::Quadratic { from, ctrl, .. }, HandleRole::To) => {
                Some(PathSegment::Quadratic { from, ctrl, to: pos })
            }
            (
                PathSegment::Arc {
                    radius,
                    start_angle,
                    end_angle,
                    ..
                },
                HandleRole::Center,
            ) => Some(PathSegment::Arc {
                center: pos,
                radius,
                start_angle,
                end_angle,
            }),
            _ => None,
        }
    }
}

/// Ordered segment sequence. The editable shape of the sketch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Path { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// New path value with exactly the segment at `index` replaced.
    ///
    /// Untouched segments carry over unchanged, so a drag never perturbs the
    /// rest of the sequence. Returns `None` for an out-of-range index.
    pub fn with_segment(&self, index: usize, segment: PathSegment) -> Option<Path> {
        if index >= self.segments.len() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments[index] = segment;
        Some(Path { segments })
    }
}

/// Which editable point of a segment a handle refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleRole {
    From = 0,
    Ctrl = 1,
    To = 2,
    Center = 3,
}

/// A draggable control point, derived from the path on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handle {
    pub segment: usize,
    pub role: HandleRole,
    pub pos: Point,
}

/// Extract the draggable handles of `path` in stable order: segment order,
/// then from/ctrl/to (center only, for arcs). Hit testing relies on this
/// order being deterministic.
pub fn handles_of(path: &Path) -> Vec<Handle> {
    let mut out = Vec::new();
    for (i, seg) in path.segments().iter().enumerate() {
        match *seg {
            PathSegment::Line { from, to } => {
                out.push(Handle { segment: i, role: HandleRole::From, pos: from });
                out.push(Handle { segment: i, role: HandleRole::To, pos: to });
            }
            PathSegment::Quadratic { from, ctrl, to } => {
                out.push(Handle { segment: i, role: HandleRole::From, pos: from });
                out.push(Handle { segment: i, role: HandleRole::Ctrl, pos: ctrl });
                out.push(Handle { segment: i, role: HandleRole::To, pos: to });
            }
            PathSegment::Arc { center, .. } => {
                out.push(Handle { segment: i, role: HandleRole::Center, pos: center });
            }
        }
    }
    out
}

/// A circle that travels along the path at constant speed.
///
/// `phase` is the fraction of total arc length covered, in `[0, 1)`; it is
/// the only field the simulator mutates frame to frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MovingObject {
    pub radius: f32,
    pub color: Color,
    pub speed: f32,
    pub phase: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_ish() -> Path {
        Path::new(vec![
            PathSegment::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 0.0),
            },
            PathSegment::Quadratic {
                from: Point::new(10.0, 0.0),
                ctrl: Point::new(15.0, 5.0),
                to: Point::new(10.0, 10.0),
            },
            PathSegment::Arc {
                center: Point::new(5.0, 10.0),
                radius: 5.0,
                start_angle: 0.0,
                end_angle: std::f32::consts::PI,
            },
        ])
    }

    #[test]
    fn handle_extraction_order() {
        let path = square_ish();
        let handles = handles_of(&path);
        let tags: Vec<(usize, HandleRole)> = handles.iter().map(|h| (h.segment, h.role)).collect();
        assert_eq!(
            tags,
            vec![
                (0, HandleRole::From),
                (0, HandleRole::To),
                (1, HandleRole::From),
                (1, HandleRole::Ctrl),
                (1, HandleRole::To),
                (2, HandleRole::Center),
            ]
        );
    }

    #[test]
    fn handle_extraction_is_stable() {
        let path = square_ish();
        assert_eq!(handles_of(&path), handles_of(&path));
    }

    #[test]
    fn with_segment_replaces_only_target() {
        let path = square_ish();
        let before = path.segments().to_vec();
        let moved = path.segments()[0]
            .with_point(HandleRole::From, Point::new(10.0, 10.0))
            .unwrap();
        let next = path.with_segment(0, moved).unwrap();
        assert_eq!(
            next.segments()[0],
            PathSegment::Line {
                from: Point::new(10.0, 10.0),
                to: Point::new(10.0, 0.0),
            }
        );
        assert_eq!(&next.segments()[1..], &before[1..]);
        // Source path is untouched.
        assert_eq!(path.segments(), &before[..]);
    }

    #[test]
    fn with_point_rejects_foreign_roles() {
        let line = PathSegment::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 0.0),
        };
        assert!(line.with_point(HandleRole::Ctrl, Point::new(0.5, 1.0)).is_none());
        assert!(line.with_point(HandleRole::Center, Point::new(0.5, 1.0)).is_none());

        let arc = PathSegment::Arc {
            center: Point::new(0.0, 0.0),
            radius: 1.0,
            start_angle: 0.0,
            end_angle: 1.0,
        };
        assert!(arc.with_point(HandleRole::From, Point::new(2.0, 0.0)).is_none());
    }

    #[test]
    fn with_segment_out_of_range() {
        let path = square_ish();
        let seg = path.segments()[0];
        assert!(path.with_segment(3, seg).is_none());
    }
}
