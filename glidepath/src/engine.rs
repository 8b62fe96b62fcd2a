//! Per-frame orchestration and pointer handling.
//!
//! `EngineCore` holds everything that does not depend on a browser surface:
//! the scene, the drag state machine, and the most recent resolved frame.
//! The wasm shell wraps it, feeds it pointer events and elapsed time, and
//! draws whatever `frame()` reports. Keeping the split here means the whole
//! simulate → detect → resolve pass is testable with the native toolchain.

use crate::algorithms::collision::collision_flags;
use crate::algorithms::picking::{pick_handle, HIT_RADIUS};
use crate::input::DragState;
use crate::model::Point;
use crate::Scene;

/// Phase offset used to sample a second point just ahead of an object, from
/// which its heading is derived.
pub const DIRECTION_EPSILON: f32 = 0.002;

/// One object's resolved state for the current tick.
#[derive(Clone, Copy, Debug)]
pub struct ObjectFrame {
    pub pos: Point,
    /// Heading along the path at the object's position, radians.
    pub angle: f32,
    /// Overlapping another object this tick.
    pub colliding: bool,
}

pub struct EngineCore {
    scene: Scene,
    drag: DragState,
    frame: Vec<ObjectFrame>,
}

impl EngineCore {
    pub fn new(scene: Scene) -> Self {
        let mut core = EngineCore {
            scene,
            drag: DragState::Idle,
            frame: Vec::new(),
        };
        // Resolve an initial frame so a render before the first tick has
        // positions to draw.
        core.tick(0.0);
        core
    }

    pub fn demo() -> Self {
        Self::new(Scene::demo())
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn frame(&self) -> &[ObjectFrame] {
        &self.frame
    }

    // --- Pointer events ---

    /// Grab the first handle within `HIT_RADIUS` of `pos`, if any.
    pub fn on_pointer_down(&mut self, pos: Point) -> bool {
        if !pos.is_finite() {
            return false;
        }
        match pick_handle(&self.scene.handles(), pos, HIT_RADIUS) {
            Some(handle) => {
                self.drag = DragState::DraggingHandle {
                    segment: handle.segment,
                    role: handle.role,
                    last: pos,
                };
                true
            }
            None => false,
        }
    }

    /// Drag the grabbed handle to `pos`. Returns whether the path changed.
    pub fn on_pointer_move(&mut self, pos: Point) -> bool {
        if !pos.is_finite() {
            return false;
        }
        let DragState::DraggingHandle { segment, role, .. } = self.drag else {
            return false;
        };
        let moved = self.scene.move_handle(segment, role, pos);
        if moved {
            self.drag = DragState::DraggingHandle { segment, role, last: pos };
        }
        moved
    }

    /// Release the grabbed handle; the path keeps its current shape.
    pub fn on_pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Pointer left the surface: treated exactly like a release.
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }

    // --- Frame ---

    /// One simulation step: advance phases by `dt` seconds, resolve each
    /// object's position and heading, and flag pairwise overlaps.
    pub fn tick(&mut self, dt: f32) {
        self.scene.advance(dt);

        let objects = self.scene.objects();
        let mut resolved: Vec<(Point, f32, f32)> = Vec::with_capacity(objects.len());
        for obj in objects {
            let Some(pos) = self.scene.point_on_path(obj.phase) else {
                continue;
            };
            let ahead = self
                .scene
                .point_on_path(obj.phase + DIRECTION_EPSILON)
                .unwrap_or(pos);
            let angle = (ahead.y - pos.y).atan2(ahead.x - pos.x);
            resolved.push((pos, angle, obj.radius));
        }

        let circles: Vec<(Point, f32)> = resolved.iter().map(|&(p, _, r)| (p, r)).collect();
        let flags = collision_flags(&circles);

        self.frame = resolved
            .iter()
            .zip(flags)
            .map(|(&(pos, angle, _), colliding)| ObjectFrame { pos, angle, colliding })
            .collect();
    }
}
