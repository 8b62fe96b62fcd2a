//! Browser shell for the path-animation sketch.
//!
//! Owns the canvas element, the animation-frame loop, and the JS-facing API;
//! all simulation and interaction logic lives in the `glidepath` core crate.
//! The host wires DOM pointer events to the `Animator` and calls `start()`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

mod api;
mod error;
mod interop;
mod raf;
mod render;

use glidepath::engine::EngineCore;

/// State shared between the JS-facing methods and the frame callback.
pub(crate) struct App {
    pub(crate) engine: EngineCore,
    canvas: HtmlCanvasElement,
    /// Timestamp of the previous frame; `None` until the first frame has
    /// run, which makes the first `dt` exactly zero.
    pub(crate) prev_ts: Option<f64>,
    warned_no_ctx: bool,
}

impl App {
    /// One full frame: elapsed time, simulation step, redraw.
    pub(crate) fn frame(&mut self, timestamp_ms: f64) {
        let dt = match self.prev_ts {
            Some(prev) => ((timestamp_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.prev_ts = Some(timestamp_ms);
        self.engine.tick(dt);
        self.render();
    }

    /// Redraw the current state. A surface that cannot hand out a 2D context
    /// makes this a no-op instead of failing the loop.
    pub(crate) fn render(&mut self) {
        let Some(ctx) = render::context_of(&self.canvas) else {
            if !self.warned_no_ctx {
                self.warned_no_ctx = true;
                web_sys::console::warn_1(&"glidepath: no 2d context, skipping frames".into());
            }
            return;
        };
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        if let Err(e) = render::draw(&ctx, &self.engine, width, height) {
            web_sys::console::warn_2(&"glidepath: draw failed".into(), &e);
        }
    }
}

/// The canvas engine handed to JavaScript.
#[wasm_bindgen]
pub struct Animator {
    pub(crate) app: Rc<RefCell<App>>,
    pub(crate) frames: raf::FrameLoop,
}

impl Animator {
    pub fn rs_new(canvas: HtmlCanvasElement) -> Animator {
        Animator {
            app: Rc::new(RefCell::new(App {
                engine: EngineCore::demo(),
                canvas,
                prev_ts: None,
                warned_no_ctx: false,
            })),
            frames: raf::FrameLoop::new(),
        }
    }
}
