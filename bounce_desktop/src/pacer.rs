use std::time::{Duration, Instant};

/// Fixed-rate frame scheduling for the event loop
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame_time: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(frame_time: Duration, now: Instant) -> Self {
        Self {
            frame_time,
            next_frame: now,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    /// Book the next frame one period later; after a stall, restart from `now`
    /// instead of running a burst of catch-up frames
    pub fn advance(&mut self, now: Instant) {
        self.next_frame += self.frame_time;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_time;
        }
    }
}
