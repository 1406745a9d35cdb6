use smallvec::SmallVec;
use std::time::Duration;

/// The timers owned by the loading gate. Each kind has at most one live
/// instance; scheduling a kind again replaces the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateTimer {
    /// Repeating photo-cycle ticker.
    PhotoCycle,
    /// One-shot delay between fade-out and the photo swap.
    FadeSwap,
    /// One-shot minimum display time.
    MinimumTime,
    /// One-shot safety net for a host-loaded signal that never arrives.
    HardTimeout,
}

impl GateTimer {
    pub const ALL: [GateTimer; 4] = [
        GateTimer::PhotoCycle,
        GateTimer::FadeSwap,
        GateTimer::MinimumTime,
        GateTimer::HardTimeout,
    ];
}

/// Host timer facility (`setTimeout`/`setInterval` in the browser).
///
/// The host calls back into the gate with the fired [`GateTimer`].
/// Cancelling a timer that is not pending is a no-op.
pub trait TimerHost {
    fn schedule_once(&mut self, timer: GateTimer, after: Duration);
    fn schedule_repeating(&mut self, timer: GateTimer, every: Duration);
    fn cancel(&mut self, timer: GateTimer);

    fn cancel_all(&mut self) {
        for timer in GateTimer::ALL {
            self.cancel(timer);
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    timer: GateTimer,
    every: Option<Duration>,
}

/// Deterministic timer host driven by an explicit clock.
///
/// Timers fire in due-time order; timers due at the same instant fire in the
/// order they were scheduled. Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    next_seq: u64,
    pending: SmallVec<[PendingTimer; 4]>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_pending(&self, timer: GateTimer) -> bool {
        self.pending.iter().any(|p| p.timer == timer)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance the clock to `deadline`, firing every timer due on the way.
    /// `on_fire` receives the timer and the host so it can reschedule or
    /// cancel from inside the callback.
    pub fn run_until(
        &mut self,
        deadline: Duration,
        mut on_fire: impl FnMut(GateTimer, &mut Self),
    ) -> usize {
        let mut fired = 0;
        while let Some(idx) = self.next_due(deadline) {
            let entry = self.pending.remove(idx);
            self.now = entry.due;
            if let Some(every) = entry.every {
                self.push(entry.timer, entry.due + every, Some(every));
            }
            on_fire(entry.timer, self);
            fired += 1;
        }
        if deadline > self.now {
            self.now = deadline;
        }
        fired
    }

    fn next_due(&self, deadline: Duration) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)
    }

    fn push(&mut self, timer: GateTimer, due: Duration, every: Option<Duration>) {
        self.pending.retain(|p| p.timer != timer);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            due,
            seq,
            timer,
            every,
        });
    }
}

impl TimerHost for VirtualTimers {
    fn schedule_once(&mut self, timer: GateTimer, after: Duration) {
        let due = self.now + after;
        self.push(timer, due, None);
    }

    fn schedule_repeating(&mut self, timer: GateTimer, every: Duration) {
        let due = self.now + every;
        self.push(timer, due, Some(every));
    }

    fn cancel(&mut self, timer: GateTimer) {
        self.pending.retain(|p| p.timer != timer);
    }
}
