//! Self-rescheduling animation-frame loop with an explicit start/stop
//! lifecycle.
//!
//! The registered closure requests the next frame at the end of each tick,
//! so the loop keeps itself alive until `stop()` cancels the pending request
//! and drops the closure. Stopping releases everything the callback holds;
//! nothing keeps firing against a torn-down view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

pub(crate) struct FrameLoop {
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        FrameLoop {
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn running(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Run `tick` once per animation frame until `stop()`. Starting an
    /// already-running loop is a no-op.
    pub fn start(&self, mut tick: impl FnMut(f64) + 'static) {
        if self.running() {
            return;
        }
        let Some(window) = web_sys::window() else {
            web_sys::console::warn_1(&"glidepath: no window, animation loop unavailable".into());
            return;
        };

        let callback = Rc::clone(&self.callback);
        let pending = Rc::clone(&self.pending);
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            // A cancel that raced the delivered frame wins.
            if pending.get().is_none() {
                return;
            }
            tick(ts);
            let next = web_sys::window().and_then(|w| {
                let guard = callback.borrow();
                let f = guard.as_ref()?;
                w.request_animation_frame(f.as_ref().unchecked_ref()).ok()
            });
            pending.set(next);
        }) as Box<dyn FnMut(f64)>));

        let first = {
            let guard = self.callback.borrow();
            guard.as_ref().and_then(|f| {
                window
                    .request_animation_frame(f.as_ref().unchecked_ref())
                    .ok()
            })
        };
        match first {
            Some(id) => self.pending.set(Some(id)),
            None => {
                self.callback.borrow_mut().take();
            }
        }
    }

    /// Cancel the pending frame and drop the callback.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}
