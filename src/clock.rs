use std::time::Instant;

/// Measures the time between consecutive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last_tick: start }
    }

    /// Milliseconds since the previous tick (or since creation).
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick), against an explicit reading of the monotonic clock.
    ///
    /// Readings earlier than the previous one count as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = self.last_tick.max(now);
        elapsed.as_secs_f32() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
