use std::cell::Cell;
use std::rc::Rc;

/// Start/stop handle for the per-frame loop.
///
/// Clones share one flag. The frame callback calls [`LoopHandle::tick`]
/// before doing any work and stops rescheduling once it returns `false`.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
    generation: Rc<Cell<u64>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
            frames: Rc::new(Cell::new(0)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("[loop] stopped after {} frames", self.frames.get());
        }
    }

    /// Mark the loop running again. Returns `true` when it had been stopped,
    /// in which case the caller must schedule a fresh frame callback.
    pub fn resume(&self) -> bool {
        let was_stopped = !self.running.replace(true);
        if was_stopped {
            self.generation.set(self.generation.get() + 1);
            log::info!("[loop] resumed at frame {}", self.frames.get());
        }
        was_stopped
    }

    /// Bumped on every resume; a frame callback compares it against the value
    /// it was started with so only the newest loop keeps running.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Count a frame if the loop is still running.
    pub fn tick(&self) -> bool {
        if !self.running.get() {
            return false;
        }
        self.frames.set(self.frames.get() + 1);
        true
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}
