// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Debounce: host-agnostic signal coalescing.
//!
//! Scroll and resize signals arrive in bursts; evaluating visibility on every
//! one is wasted work. [`Debounce`] collapses a burst into a single firing
//! after a configurable quiet period, without owning a timer or a clock: the
//! host reports activity with [`Debounce::signal`] and polls
//! [`Debounce::fire`] with its own monotonic timestamps, typically once per
//! frame or timer tick.
//!
//! This keeps the delay mechanism out of the visibility core entirely. A host
//! loop looks like:
//!
//! ```rust
//! use sightline_debounce::Debounce;
//!
//! let mut debounce = Debounce::new(70);
//! let mut evaluations = 0;
//!
//! // A burst of scroll signals at 0, 10, and 40ms...
//! debounce.signal(0);
//! debounce.signal(10);
//! debounce.signal(40);
//!
//! // ...polled every 30ms: nothing fires until 70ms of quiet have passed
//! // since the last signal (40 + 70 = 110).
//! for now in [30, 60, 90, 120, 150] {
//!     if debounce.fire(now) {
//!         evaluations += 1; // tracker.evaluate(&source)
//!     }
//! }
//! assert_eq!(evaluations, 1);
//! ```
//!
//! Timestamps are caller-defined milliseconds and are expected to be
//! monotonic. This crate is `no_std` and allocation-free.

#![no_std]

/// Coalesces a burst of signals into one firing after a quiet period.
///
/// The debouncer holds at most one pending deadline. Every [`signal`]
/// re-arms it at `now + delay`; [`fire`] returns `true` exactly once per
/// quiet period, the first time it is polled at or past the deadline.
///
/// [`signal`]: Self::signal
/// [`fire`]: Self::fire
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// A debouncer firing `delay` milliseconds after the last signal.
    #[must_use]
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records one signal at time `now`, re-arming the deadline.
    pub fn signal(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// Polls the debouncer at time `now`.
    ///
    /// Returns `true` if the quiet period has elapsed, disarming the
    /// deadline; later polls return `false` until the next [`signal`].
    ///
    /// [`signal`]: Self::signal
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a firing is currently pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The configured quiet period in milliseconds.
    #[must_use]
    pub const fn delay(&self) -> u64 {
        self.delay
    }

    /// Drops any pending firing without waiting for it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
