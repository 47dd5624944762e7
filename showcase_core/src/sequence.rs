// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered three-video demo.
//!
//! The [`SequencePlayer`] runs a fixed cycle over three videos. At the start
//! of every cycle all three are paused, rewound and hidden, then the first is
//! started and shown; the other two are started and shown at their reveal
//! offsets. The cycle repeats every [`SequenceConfig::period`] for the life of
//! the page.
//!
//! ```text
//!   t = 0 s      4 s         10 s        15 s
//!       │        │           │           │
//!   A   ▶━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━▶ (reset) ━━━
//!   B   ·········▶━━━━━━━━━━━━━━━━━━━━━━━▶ (reset) ···
//!   C   ·····················▶━━━━━━━━━━━▶ (reset) ···
//! ```
//!
//! Each cycle schedules its own one-shot reveals. Nothing is ever cancelled;
//! every callback is an idempotent reset or reveal, so a late callback from a
//! previous cycle cannot corrupt the current one.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use thiserror::Error;

use crate::media::{MediaElement, PlayAttempt, PlayPhase};
use crate::time::Duration;
use crate::timer::TimerHost;
use crate::trace::{SequenceCycleEvent, SequenceRevealEvent, Tracer};

/// Number of videos in the sequence.
pub const SLOTS: usize = 3;

/// Invalid sequence timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The first slot must start with the cycle.
    #[error("first reveal must be at 0ms, got {0}")]
    FirstRevealDelayed(Duration),
    /// Reveal offsets must increase strictly from slot to slot.
    #[error("reveal of slot {slot} at {at} is not after the previous slot")]
    RevealsOutOfOrder {
        /// Offending slot.
        slot: usize,
        /// Its reveal offset.
        at: Duration,
    },
    /// The last reveal must happen before the next cycle starts.
    #[error("last reveal at {last} does not fit in a {period} cycle")]
    PeriodTooShort {
        /// Last reveal offset.
        last: Duration,
        /// Cycle length.
        period: Duration,
    },
}

/// Timing of a sequence cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    reveal_at: [Duration; SLOTS],
    period: Duration,
}

impl SequenceConfig {
    /// The showcase page's timing: reveals at 0 s, 4 s and 10 s of a 15 s
    /// cycle.
    #[must_use]
    pub const fn showcase() -> Self {
        Self {
            reveal_at: [
                Duration::ZERO,
                Duration::from_secs(4),
                Duration::from_secs(10),
            ],
            period: Duration::from_secs(15),
        }
    }

    /// Validates and creates a config.
    pub fn new(reveal_at: [Duration; SLOTS], period: Duration) -> Result<Self, SequenceError> {
        if !reveal_at[0].is_zero() {
            return Err(SequenceError::FirstRevealDelayed(reveal_at[0]));
        }
        for slot in 1..SLOTS {
            if reveal_at[slot] <= reveal_at[slot - 1] {
                return Err(SequenceError::RevealsOutOfOrder {
                    slot,
                    at: reveal_at[slot],
                });
            }
        }
        let last = reveal_at[SLOTS - 1];
        if last >= period {
            return Err(SequenceError::PeriodTooShort { last, period });
        }
        Ok(Self { reveal_at, period })
    }

    /// Offset of each slot's reveal from the cycle start.
    #[must_use]
    pub const fn reveal_at(&self) -> [Duration; SLOTS] {
        self.reveal_at
    }

    /// Cycle length.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::showcase()
    }
}

/// Drives three videos through a repeating staggered cycle.
pub struct SequencePlayer<M: MediaElement, T: TimerHost> {
    videos: [M; SLOTS],
    config: SequenceConfig,
    timers: T,
    tracer: Tracer,
    cycle: Cell<u64>,
}

impl<M: MediaElement, T: TimerHost> fmt::Debug for SequencePlayer<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequencePlayer")
            .field("config", &self.config)
            .field("cycle", &self.cycle.get())
            .finish_non_exhaustive()
    }
}

impl<M: MediaElement + 'static, T: TimerHost + 'static> SequencePlayer<M, T> {
    /// Starts the first cycle and the repeating interval.
    ///
    /// Returns `None`, without scheduling anything, if any of the three
    /// videos is missing.
    pub fn activate(
        videos: [Option<M>; SLOTS],
        config: SequenceConfig,
        timers: T,
        tracer: Tracer,
    ) -> Option<Rc<Self>> {
        let [Some(a), Some(b), Some(c)] = videos else {
            return None;
        };

        let player = Rc::new(Self {
            videos: [a, b, c],
            config,
            timers,
            tracer,
            cycle: Cell::new(0),
        });

        Self::begin_cycle(&player);
        let repeat = Rc::clone(&player);
        player.timers.set_interval(
            config.period,
            Box::new(move || Self::begin_cycle(&repeat)),
        );
        Some(player)
    }

    fn begin_cycle(this: &Rc<Self>) {
        let cycle = this.cycle.get() + 1;
        this.cycle.set(cycle);
        this.tracer.sequence_cycle(&SequenceCycleEvent { cycle });

        for video in &this.videos {
            video.pause();
            video.rewind();
            video.set_visible(false);
        }
        this.reveal(cycle, 0);

        for slot in 1..SLOTS {
            let player = Rc::clone(this);
            this.timers.set_timeout(
                this.config.reveal_at[slot],
                Box::new(move || player.reveal(cycle, slot)),
            );
        }
    }

    fn reveal(&self, cycle: u64, slot: usize) {
        let video = &self.videos[slot];
        video.play(PlayAttempt::new(PlayPhase::Reveal, self.tracer.clone()));
        video.set_visible(true);
        self.tracer.sequence_reveal(&SequenceRevealEvent {
            cycle,
            slot,
            offset: self.config.reveal_at[slot],
        });
    }
}

impl<M: MediaElement, T: TimerHost> SequencePlayer<M, T> {
    /// Number of cycles started so far, including the activation cycle.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycle.get()
    }

    /// The player's timing.
    #[must_use]
    pub fn config(&self) -> SequenceConfig {
        self.config
    }

    /// The three videos, in reveal order.
    #[must_use]
    pub fn videos(&self) -> &[M; SLOTS] {
        &self.videos
    }
}
