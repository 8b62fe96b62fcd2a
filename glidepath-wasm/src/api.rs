use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use glidepath::model::Point;

use crate::{error, interop, Animator};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Animator {
    /// Bind a new animator to the given canvas, seeded with the demo scene.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Animator {
        Animator::rs_new(canvas)
    }

    // --- Animation loop lifecycle ---

    /// Start the self-rescheduling frame loop. Idempotent while running.
    pub fn start(&self) {
        let app = Rc::clone(&self.app);
        self.frames.start(move |ts| app.borrow_mut().frame(ts));
    }

    /// Cancel the pending frame and release the callback. The next `start`
    /// begins a fresh clock, so its first frame has `dt = 0`.
    pub fn stop(&self) {
        self.frames.stop();
        self.app.borrow_mut().prev_ts = None;
    }

    pub fn is_running(&self) -> bool {
        self.frames.running()
    }

    /// Drive one frame manually with a host-provided timestamp (ms). Lets
    /// hosts and tests run the clock without a real animation loop.
    pub fn tick(&self, timestamp_ms: f64) {
        self.app.borrow_mut().frame(timestamp_ms);
    }

    /// Redraw the current state without advancing the simulation.
    pub fn render(&self) {
        self.app.borrow_mut().render();
    }

    // --- Pointer events (canvas-local coordinates) ---

    pub fn pointer_down(&self, x: f32, y: f32) -> bool {
        self.app
            .borrow_mut()
            .engine
            .on_pointer_down(Point::new(x, y))
    }
    pub fn pointer_down_res(&self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::ok(JsValue::from_bool(self.pointer_down(x, y)))
    }

    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.app
            .borrow_mut()
            .engine
            .on_pointer_move(Point::new(x, y))
    }

    pub fn pointer_up(&self) {
        self.app.borrow_mut().engine.on_pointer_up();
    }

    /// Pointer left the surface; ends any drag exactly like a release.
    pub fn pointer_leave(&self) {
        self.app.borrow_mut().engine.on_pointer_leave();
    }

    pub fn is_dragging(&self) -> bool {
        self.app.borrow().engine.drag_state().is_dragging()
    }

    // --- Queries ---

    pub fn handle_count(&self) -> u32 {
        self.app.borrow().engine.scene().handles().len() as u32
    }

    pub fn object_count(&self) -> u32 {
        self.app.borrow().engine.scene().objects().len() as u32
    }

    pub fn total_length(&self) -> f32 {
        self.app.borrow().engine.scene().total_length()
    }

    pub fn geom_version(&self) -> u64 {
        self.app.borrow().engine.scene().geom_version()
    }

    /// `[x, y]` at normalized arc-length parameter `t`, or `null` for an
    /// empty path.
    pub fn point_on_path(&self, t: f32) -> JsValue {
        match self.app.borrow().engine.scene().point_on_path(t) {
            Some(p) => serde_wasm_bindgen::to_value(&vec![p.x, p.y]).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    // --- Object mutation ---

    pub fn set_object_speed(&self, index: u32, speed: f32) -> bool {
        self.app
            .borrow_mut()
            .engine
            .scene_mut()
            .set_object_speed(index as usize, speed)
    }
    pub fn set_object_speed_res(&self, index: u32, speed: f32) -> JsValue {
        if !speed.is_finite() {
            return error::non_finite("speed");
        }
        if speed < 0.0 {
            return error::out_of_range("speed", 0.0, f32::INFINITY, speed);
        }
        if index >= self.object_count() {
            return error::invalid_id("object", index);
        }
        error::ok(JsValue::from_bool(self.set_object_speed(index, speed)))
    }

    // --- Typed-array exports for the host ---

    /// Handle metadata: `{segments: Uint32Array, roles: Uint8Array,
    /// positions: Float32Array}` with positions packed as `[x0, y0, x1, …]`.
    pub fn get_handle_data(&self) -> JsValue {
        let app = self.app.borrow();
        let handles = app.engine.scene().handles();
        let mut segments = Vec::with_capacity(handles.len());
        let mut roles = Vec::with_capacity(handles.len());
        let mut positions = Vec::with_capacity(handles.len() * 2);
        for h in &handles {
            segments.push(h.segment as u32);
            roles.push(h.role as u8);
            positions.push(h.pos.x);
            positions.push(h.pos.y);
        }
        let obj = interop::new_obj();
        interop::set_kv(&obj, "segments", &interop::arr_u32(&segments).into());
        interop::set_kv(&obj, "roles", &interop::arr_u8(&roles).into());
        interop::set_kv(&obj, "positions", &interop::arr_f32(&positions).into());
        obj.into()
    }

    /// Object state for the current frame: positions, phases, radii, RGBA
    /// colors, and per-object collision flags. Positions are `NaN` while the
    /// path is empty and nothing can be resolved.
    pub fn get_object_data(&self) -> JsValue {
        let app = self.app.borrow();
        let objects = app.engine.scene().objects();
        let frame = app.engine.frame();
        let mut positions = Vec::with_capacity(objects.len() * 2);
        let mut phases = Vec::with_capacity(objects.len());
        let mut radii = Vec::with_capacity(objects.len());
        let mut colors = Vec::with_capacity(objects.len() * 4);
        let mut colliding = Vec::with_capacity(objects.len());
        for (i, obj) in objects.iter().enumerate() {
            match frame.get(i) {
                Some(f) => {
                    positions.push(f.pos.x);
                    positions.push(f.pos.y);
                    colliding.push(u8::from(f.colliding));
                }
                None => {
                    positions.push(f32::NAN);
                    positions.push(f32::NAN);
                    colliding.push(0);
                }
            }
            phases.push(obj.phase);
            radii.push(obj.radius);
            colors.extend_from_slice(&[obj.color.r, obj.color.g, obj.color.b, obj.color.a]);
        }
        let obj = interop::new_obj();
        interop::set_kv(&obj, "positions", &interop::arr_f32(&positions).into());
        interop::set_kv(&obj, "phases", &interop::arr_f32(&phases).into());
        interop::set_kv(&obj, "radii", &interop::arr_f32(&radii).into());
        interop::set_kv(&obj, "colors", &interop::arr_u8(&colors).into());
        interop::set_kv(&obj, "colliding", &interop::arr_u8(&colliding).into());
        obj.into()
    }
}
