//! Scheduled prewarm transitions.
//!
//! A switch enables the incoming camera right away but only presents it a few
//! ticks later. The scheduler holds at most one pending transition; each one
//! carries a generation number so a superseded transition can never complete.

use rcam_models::CameraId;

/// A camera switch waiting for its prewarm window to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub generation: u64,
    pub incoming: CameraId,
    ticks_remaining: u32,
}

impl Transition {
    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }
}

/// Single-slot scheduler for prewarm transitions.
#[derive(Debug, Clone, Default)]
pub struct TransitionScheduler {
    next_generation: u64,
    pending: Option<Transition>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a transition that completes after `ticks` calls to
    /// [`advance`](Self::advance).
    ///
    /// Returns the new transition and the one it superseded, if any.
    pub fn schedule(&mut self, incoming: CameraId, ticks: u32) -> (Transition, Option<Transition>) {
        self.next_generation += 1;
        let transition = Transition {
            generation: self.next_generation,
            incoming,
            ticks_remaining: ticks,
        };
        let superseded = self.pending.replace(transition);
        (transition, superseded)
    }

    pub fn pending(&self) -> Option<&Transition> {
        self.pending.as_ref()
    }

    /// Whether `generation` is the transition still pending.
    pub fn is_current(&self, generation: u64) -> bool {
        self.pending.is_some_and(|t| t.generation == generation)
    }

    /// Drop the pending transition.
    pub fn cancel(&mut self) -> Option<Transition> {
        self.pending.take()
    }

    /// Count down one tick. Returns the transition once its window is over.
    pub fn advance(&mut self) -> Option<Transition> {
        let pending = self.pending.as_mut()?;
        pending.ticks_remaining = pending.ticks_remaining.saturating_sub(1);
        if pending.ticks_remaining == 0 {
            self.pending.take()
        } else {
            None
        }
    }
}
