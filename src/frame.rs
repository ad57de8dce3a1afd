use std::cell::Cell;

/// Collapses any number of update requests into one recomputation per frame.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Cell<bool>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an update as pending. Returns true when the caller should
    /// schedule a frame, false when one is already on its way.
    pub fn request_update(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Runs the recomputation and opens the scheduler for the next frame.
    pub fn flush(&self, update: impl FnOnce()) {
        update();
        self.pending.set(false);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
