//! Browser schedulers
//!
//! Both schedulers fire the same installed callback; the facade installs
//! one that upgrades a `Weak` to the simulation and calls `tick()`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::simulation::{FrameHandle, Scheduler};

use super::js_error;

/// Shared slot for the per-frame callback. Filled once the simulation it
/// drives exists.
#[derive(Clone, Default)]
pub struct FrameCallbackSlot {
    inner: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameCallbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, callback: Closure<dyn FnMut()>) {
        *self.inner.borrow_mut() = Some(callback);
    }

    fn with_function<T>(
        &self,
        f: impl FnOnce(&js_sys::Function) -> Result<T, String>,
    ) -> Result<T, String> {
        let slot = self.inner.borrow();
        match slot.as_ref() {
            Some(callback) => f(callback.as_ref().unchecked_ref()),
            None => Err("frame callback not installed".to_string()),
        }
    }
}

/// One tick per display refresh (`requestAnimationFrame`).
pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallbackSlot,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, callback: FrameCallbackSlot) -> Self {
        Self { window, callback }
    }
}

impl Scheduler for AnimationFrameScheduler {
    fn schedule_next(&mut self) -> Result<FrameHandle, String> {
        let window = &self.window;
        self.callback
            .with_function(|f| window.request_animation_frame(f).map_err(js_error))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({handle}) failed: {}", js_error(e));
        }
    }
}

/// One tick every `interval_ms` (`setTimeout`), for a fixed pace that does
/// not follow the display rate.
pub struct TimeoutScheduler {
    window: Window,
    callback: FrameCallbackSlot,
    interval_ms: i32,
}

impl TimeoutScheduler {
    pub fn new(window: Window, callback: FrameCallbackSlot, interval_ms: u32) -> Self {
        Self {
            window,
            callback,
            interval_ms: interval_ms.min(i32::MAX as u32) as i32,
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule_next(&mut self) -> Result<FrameHandle, String> {
        let window = &self.window;
        let interval = self.interval_ms;
        self.callback.with_function(|f| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(f, interval)
                .map_err(js_error)
        })
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.window.clear_timeout_with_handle(handle);
    }
}
