pub mod engine;
pub mod input;
pub mod model;
pub mod motion;
pub mod geometry {
    pub mod path;
    pub mod segment;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod collision;
    pub mod picking;
}

use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;

use geometry::tolerance::{EPS_POS, EPS_LEN};
use model::{handles_of, Color, Handle, HandleRole, MovingObject, Path, PathSegment, Point};

/// The editable sketch: one composite path plus the objects traveling it.
///
/// Geometry mutations bump `geom_ver`; the total-length cache is keyed on it,
/// so a drag invalidates the cached length on the next query. Phase updates
/// do not touch geometry and leave the cache valid.
pub struct Scene {
    path: Path,
    objects: Vec<MovingObject>,
    geom_ver: u64,
    length_cache: RefCell<Option<(u64, f32)>>,
}

impl Scene {
    pub fn new(path: Path, objects: Vec<MovingObject>) -> Self {
        Scene {
            path,
            objects,
            geom_ver: 1,
            length_cache: RefCell::new(None),
        }
    }

    /// The fixed initial shape the demo boots with: a line into a quadratic
    /// sweep into a half-circle, with two objects at opposite phases.
    pub fn demo() -> Self {
        let path = Path::new(vec![
            PathSegment::Line {
                from: Point::new(60.0, 300.0),
                to: Point::new(180.0, 140.0),
            },
            PathSegment::Quadratic {
                from: Point::new(180.0, 140.0),
                ctrl: Point::new(300.0, 40.0),
                to: Point::new(420.0, 160.0),
            },
            PathSegment::Arc {
                center: Point::new(420.0, 260.0),
                radius: 100.0,
                start_angle: -FRAC_PI_2,
                end_angle: FRAC_PI_2,
            },
        ]);
        let objects = vec![
            MovingObject {
                radius: 10.0,
                color: Color { r: 216, g: 68, b: 58, a: 255 },
                speed: 120.0,
                phase: 0.0,
            },
            MovingObject {
                radius: 14.0,
                color: Color { r: 64, g: 118, b: 200, a: 255 },
                speed: 80.0,
                phase: 0.5,
            },
        ];
        Scene::new(path, objects)
    }

    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn objects(&self) -> &[MovingObject] {
        &self.objects
    }

    /// Total path length, recomputed only when geometry changed.
    pub fn total_length(&self) -> f32 {
        let mut cache = self.length_cache.borrow_mut();
        if let Some((ver, len)) = *cache {
            if ver == self.geom_ver {
                return len;
            }
        }
        let len = geometry::path::total_length(self.path.segments());
        *cache = Some((self.geom_ver, len));
        len
    }

    pub fn point_on_path(&self, t: f32) -> Option<Point> {
        geometry::path::point_on_path(self.path.segments(), t)
    }

    pub fn handles(&self) -> Vec<Handle> {
        handles_of(&self.path)
    }

    /// Move the handle `(segment, role)` to `pos`, swapping in a new path
    /// value with only that segment replaced.
    ///
    /// Rejects non-finite targets and roles foreign to the segment variant;
    /// a move within `EPS_POS` of the current position is a no-op that still
    /// reports success.
    pub fn move_handle(&mut self, segment: usize, role: HandleRole, pos: Point) -> bool {
        if !pos.is_finite() {
            return false;
        }
        let Some(&seg) = self.path.segments().get(segment) else {
            return false;
        };
        let Some(updated) = seg.with_point(role, pos) else {
            return false;
        };
        if let Some(current) = self.handles().iter().find(|h| h.segment == segment && h.role == role) {
            if current.pos.distance(pos) <= EPS_POS {
                return true;
            }
        }
        match self.path.with_segment(segment, updated) {
            Some(path) => {
                self.path = path;
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Advance all phases by `dt` seconds at the current total length.
    pub fn advance(&mut self, dt: f32) {
        let total = self.total_length();
        motion::advance_phases(&mut self.objects, dt, total);
    }

    pub fn set_object_speed(&mut self, index: usize, speed: f32) -> bool {
        if !speed.is_finite() || speed < 0.0 {
            return false;
        }
        match self.objects.get_mut(index) {
            Some(obj) => {
                obj.speed = speed;
                true
            }
            None => false,
        }
    }

    /// Whether the path currently has measurable extent.
    pub fn has_extent(&self) -> bool {
        self.total_length() > EPS_LEN
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }
}
