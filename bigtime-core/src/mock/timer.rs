//! Mock timer service driven by a virtual millisecond clock

use heapless::Vec;

use crate::traits::{TimerError, TimerService};

/// Most timers pending at once
pub const MAX_TIMERS: usize = 8;

/// Handle of a mock timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTimerHandle(pub u32);

/// Timer service whose time only moves on [`MockTimer::advance`]
pub struct MockTimer {
    now_ms: u64,
    next_id: u32,
    pending: Vec<(MockTimerHandle, u64), MAX_TIMERS>,
    exhausted: bool,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            pending: Vec::new(),
            exhausted: false,
        }
    }

    /// Virtual time elapsed so far
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: MockTimerHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }

    /// Make `schedule` fail with `Exhausted`
    pub fn set_exhausted(&mut self, exhausted: bool) {
        self.exhausted = exhausted;
    }

    /// Move time forward and return the timers that expired, earliest first
    pub fn advance(&mut self, ms: u32) -> Vec<MockTimerHandle, MAX_TIMERS> {
        self.now_ms += u64::from(ms);
        let now = self.now_ms;

        let mut due: Vec<(MockTimerHandle, u64), MAX_TIMERS> = self
            .pending
            .iter()
            .filter(|(_, deadline)| *deadline <= now)
            .copied()
            .collect();
        due.sort_unstable_by_key(|(handle, deadline)| (*deadline, handle.0));
        self.pending.retain(|(_, deadline)| *deadline > now);

        due.iter().map(|(handle, _)| *handle).collect()
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService for MockTimer {
    type Handle = MockTimerHandle;

    fn schedule(&mut self, delay_ms: u32) -> Result<MockTimerHandle, TimerError> {
        if self.exhausted {
            return Err(TimerError::Exhausted);
        }
        let handle = MockTimerHandle(self.next_id);
        self.pending
            .push((handle, self.now_ms + u64::from(delay_ms)))
            .map_err(|_| TimerError::Exhausted)?;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(handle)
    }

    fn cancel(&mut self, handle: MockTimerHandle) {
        self.pending.retain(|(h, _)| *h != handle);
    }
}
