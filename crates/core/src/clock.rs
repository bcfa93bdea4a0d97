//! Fixed-cadence clock driving AI movement.
//!
//! The clock is owned by the Playing round state: it comes into existence when
//! a round starts and is dropped with the round, so no AI step can fire after
//! the round has ended.

/// Accumulates elapsed time and releases one step per full period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiClock {
    period_ms: u32,
    pending_ms: u32,
}

impl AiClock {
    /// A zero period is treated as 1ms.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            pending_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Add wall-clock time.
    pub fn feed(&mut self, elapsed_ms: u32) {
        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);
    }

    /// Consume one due period. Returns `false` when no step is due yet.
    pub fn take_due(&mut self) -> bool {
        if self.pending_ms >= self.period_ms {
            self.pending_ms -= self.period_ms;
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next step becomes due.
    pub fn until_next_ms(&self) -> u32 {
        self.period_ms.saturating_sub(self.pending_ms)
    }
}
