//! Frame scheduling seam
//!
//! A scheduler arranges for `Simulation::tick` to be called once, later.
//! Browser implementations live in `api::frame`; `ManualScheduler` only
//! records requests so a caller can step deterministically.

use std::cell::RefCell;
use std::rc::Rc;

/// Opaque id of a scheduled frame (what `requestAnimationFrame` returns).
pub type FrameHandle = i32;

pub trait Scheduler {
    /// Request one future tick.
    fn schedule_next(&mut self) -> Result<FrameHandle, String>;

    /// Forget a tick requested earlier. Unknown handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

#[derive(Debug, Default)]
struct ManualLog {
    next_handle: FrameHandle,
    scheduled: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    fail_next: bool,
}

/// Scheduler that never fires on its own.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    log: Rc<RefCell<ManualLog>>,
}

/// Read side of a `ManualScheduler`, kept by whoever owns the test.
#[derive(Clone, Debug)]
pub struct ManualProbe {
    log: Rc<RefCell<ManualLog>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&self) -> ManualProbe {
        ManualProbe { log: Rc::clone(&self.log) }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_next(&mut self) -> Result<FrameHandle, String> {
        let mut log = self.log.borrow_mut();
        if log.fail_next {
            log.fail_next = false;
            return Err("manual scheduler refused the frame".to_string());
        }
        log.next_handle += 1;
        let handle = log.next_handle;
        log.scheduled.push(handle);
        Ok(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.log.borrow_mut().cancelled.push(handle);
    }
}

impl ManualProbe {
    /// Every handle handed out, in order.
    pub fn scheduled(&self) -> Vec<FrameHandle> {
        self.log.borrow().scheduled.clone()
    }

    pub fn cancelled(&self) -> Vec<FrameHandle> {
        self.log.borrow().cancelled.clone()
    }

    /// Make the next `schedule_next` fail.
    pub fn fail_next(&self) {
        self.log.borrow_mut().fail_next = true;
    }
}
