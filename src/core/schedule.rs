/// Identifies one requested frame. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

/// One-slot frame request queue. A frame source calls [`FrameTicker::fire`] once per
/// display refresh; at most one request is pending at a time.
#[derive(Debug, Default)]
pub struct FrameTicker {
    next_id: u64,
    pending: Option<TickHandle>,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a tick on the next frame, replacing any request still pending.
    pub fn request(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    pub fn cancel(&mut self, handle: TickHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn fire(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
