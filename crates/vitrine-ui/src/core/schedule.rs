//! Generation-guarded deferred steps.
//!
//! # Design
//! - Every user-initiated flow starts a new generation.
//! - Deferred steps carry the generation they were issued under; stale ones are dropped.
//! - The core only describes delays. The shell owns the real timers.

/// Monotonic flow identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value, for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A step tagged with the generation that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket<S> {
    /// Issuing generation.
    pub generation: Generation,
    /// Step to run when the delay elapses.
    pub step: S,
}

/// A ticket plus the delay after which it should fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deferred<S> {
    /// Delay in milliseconds.
    pub delay_ms: u32,
    /// Ticket to deliver.
    pub ticket: Ticket<S>,
}

/// Issues generations and deferred tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Sequencer {
    current: Generation,
}

impl Sequencer {
    /// Invalidate everything pending and start a new generation.
    pub const fn begin(&mut self) -> Generation {
        self.current = Generation(self.current.0 + 1);
        self.current
    }

    /// Generation currently accepted.
    #[must_use]
    pub const fn current(self) -> Generation {
        self.current
    }

    /// Whether a ticket still belongs to the live flow.
    #[must_use]
    pub fn accepts<S>(self, ticket: &Ticket<S>) -> bool {
        ticket.generation == self.current
    }

    /// Issue a step under the current generation.
    #[must_use]
    pub const fn defer<S>(self, delay_ms: u32, step: S) -> Deferred<S> {
        Deferred {
            delay_ms,
            ticket: Ticket {
                generation: self.current,
                step,
            },
        }
    }
}

/// Deterministic clock for driving deferred steps in tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::{Deferred, Ticket};

    /// Pending tickets ordered by due time, then issue order.
    #[derive(Debug)]
    pub(crate) struct VirtualClock<S> {
        now_ms: u64,
        seq: u64,
        pending: Vec<(u64, u64, Ticket<S>)>,
    }

    impl<S: Copy> VirtualClock<S> {
        pub(crate) const fn new() -> Self {
            Self {
                now_ms: 0,
                seq: 0,
                pending: Vec::new(),
            }
        }

        pub(crate) const fn now_ms(&self) -> u64 {
            self.now_ms
        }

        pub(crate) fn schedule(&mut self, deferred: Vec<Deferred<S>>) {
            for item in deferred {
                self.seq += 1;
                self.pending
                    .push((self.now_ms + u64::from(item.delay_ms), self.seq, item.ticket));
            }
        }

        pub(crate) fn is_idle(&self) -> bool {
            self.pending.is_empty()
        }

        /// Advance by `ms`, firing every due ticket through `fire`.
        pub(crate) fn advance(
            &mut self,
            ms: u64,
            mut fire: impl FnMut(Ticket<S>) -> Vec<Deferred<S>>,
        ) {
            let target = self.now_ms + ms;
            loop {
                let next = self
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(index, _)| index);
                let Some(index) = next else {
                    break;
                };
                let (due, _, ticket) = self.pending.remove(index);
                self.now_ms = due;
                let follow = fire(ticket);
                self.schedule(follow);
            }
            self.now_ms = target;
        }
    }
}
