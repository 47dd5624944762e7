// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronized looping of a set of media elements.
//!
//! A [`PlaybackGroup`] owns the videos shown for one comparison. Its members
//! never loop on their own; instead each "ended" event arrives at a shared
//! [`EndedBarrier`], and once every member has arrived the whole group is
//! rewound and restarted together. Members that finish early hold their last
//! frame until the slowest one catches up.
//!
//! ```text
//!   member 0 ended ─┐
//!   member 1 ended ─┼─► EndedBarrier::arrive() ──(N of N)──► rewind + play all
//!   member 2 ended ─┘                                        counter := 0
//! ```
//!
//! A group lives for exactly one render. Dropping it removes the ended
//! handlers it installed, so events from a previous comparison can never
//! reach the next one.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use crate::media::{MediaElement, PlayAttempt, PlayPhase};
use crate::trace::{GroupArmedEvent, GroupRestartEvent, MemberEndedEvent, Tracer};

/// Counts arrivals and trips once all `size` parties have arrived.
///
/// After tripping, the count resets to zero for the next round. A barrier of
/// size zero trips on every arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndedBarrier {
    size: usize,
    arrived: usize,
}

impl EndedBarrier {
    /// Creates a barrier for `size` parties with no arrivals.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size, arrived: 0 }
    }

    /// Number of parties.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Arrivals in the current round.
    #[must_use]
    pub const fn arrived(self) -> usize {
        self.arrived
    }

    /// Records one arrival. Returns `true` if this arrival completed the
    /// round, in which case the count has been reset.
    pub fn arrive(&mut self) -> bool {
        self.arrived += 1;
        if self.arrived >= self.size {
            self.arrived = 0;
            true
        } else {
            false
        }
    }
}

/// State shared between a group and its ended handlers.
#[derive(Debug)]
struct GroupShared {
    index: usize,
    barrier: Cell<EndedBarrier>,
    restarts: Cell<u64>,
}

/// The media elements synchronized for one displayed comparison.
pub struct PlaybackGroup<M: MediaElement + 'static> {
    members: Rc<[M]>,
    shared: Rc<GroupShared>,
    tracer: Tracer,
}

impl<M: MediaElement + 'static> fmt::Debug for PlaybackGroup<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackGroup")
            .field("index", &self.shared.index)
            .field("size", &self.members.len())
            .field("barrier", &self.shared.barrier.get())
            .field("restarts", &self.shared.restarts.get())
            .finish_non_exhaustive()
    }
}

impl<M: MediaElement + 'static> PlaybackGroup<M> {
    /// Starts `members` from time zero and installs the shared ended handler.
    ///
    /// Each member is forced to non-looping and muted, rewound, and asked to
    /// play independently; refusals are reported through `tracer` with
    /// [`PlayPhase::Start`]. `index` identifies the comparison in trace
    /// events.
    #[must_use]
    pub fn launch(index: usize, members: Vec<M>, tracer: Tracer) -> Self {
        let group = Self {
            shared: Rc::new(GroupShared {
                index,
                barrier: Cell::new(EndedBarrier::new(members.len())),
                restarts: Cell::new(0),
            }),
            members: members.into(),
            tracer,
        };
        group.start();
        group.arm();
        group
    }

    fn start(&self) {
        for member in self.members.iter() {
            member.set_looping(false);
            member.set_muted(true);
            member.rewind();
            member.play(PlayAttempt::new(PlayPhase::Start, self.tracer.clone()));
        }
    }

    fn arm(&self) {
        for member in self.members.iter() {
            let members = Rc::clone(&self.members);
            let shared = Rc::clone(&self.shared);
            let tracer = self.tracer.clone();
            member.set_ended_handler(Some(Box::new(move || {
                on_member_ended(&members, &shared, &tracer);
            })));
        }
        self.tracer.group_armed(&GroupArmedEvent {
            index: self.shared.index,
            size: self.members.len(),
        });
    }

    /// Number of synchronized members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The synchronized members, reference first.
    #[must_use]
    pub fn members(&self) -> &[M] {
        &self.members
    }

    /// Members that have ended in the current round.
    #[must_use]
    pub fn arrived(&self) -> usize {
        self.shared.barrier.get().arrived()
    }

    /// How many times the group has looped.
    #[must_use]
    pub fn restarts(&self) -> u64 {
        self.shared.restarts.get()
    }
}

impl<M: MediaElement + 'static> Drop for PlaybackGroup<M> {
    fn drop(&mut self) {
        // The handlers hold `members`; clearing them breaks the Rc cycle.
        for member in self.members.iter() {
            member.set_ended_handler(None);
        }
    }
}

fn on_member_ended<M: MediaElement>(members: &[M], shared: &GroupShared, tracer: &Tracer) {
    let mut barrier = shared.barrier.get();
    let tripped = barrier.arrive();
    shared.barrier.set(barrier);

    tracer.member_ended(&MemberEndedEvent {
        index: shared.index,
        arrived: if tripped {
            barrier.size()
        } else {
            barrier.arrived()
        },
        size: barrier.size(),
    });

    if !tripped {
        return;
    }

    let restarts = shared.restarts.get() + 1;
    shared.restarts.set(restarts);
    tracer.group_restart(&GroupRestartEvent {
        index: shared.index,
        restarts,
    });
    for member in members {
        member.rewind();
        member.play(PlayAttempt::new(PlayPhase::Restart, tracer.clone()));
    }
}
