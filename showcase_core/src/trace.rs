// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the playback controllers.
//!
//! This module provides a [`TraceSink`] trait with one method per event. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] is the handle the controllers report through. Timer, click and
//! media callbacks outlive any borrow, so unlike a frame-scoped tracer it owns
//! a shared, optional sink and is cheap to clone into closures.
//!
//! Every event implements [`Display`](core::fmt::Display) as a single
//! `[tag] key=value ...` line. [`RecorderSink`] keeps events in memory for
//! tests and post-mortem inspection; backends provide sinks that write lines
//! to a platform log.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::media::{PlayPhase, PlaybackError};
use crate::time::Duration;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How the gallery arrived at the displayed comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationKind {
    /// First render during initialization.
    Initial,
    /// The "next" control.
    Next,
    /// The "previous" control.
    Previous,
    /// An indicator click or a direct `go_to`.
    Jump,
}

impl NavigationKind {
    /// Returns a short lowercase label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Jump => "jump",
        }
    }
}

/// Which page component an event concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// The staggered three-video demo.
    Sequence,
    /// The comparison gallery.
    Gallery,
}

impl Component {
    /// Returns a short lowercase label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Gallery => "gallery",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the sequence player resets and starts a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceCycleEvent {
    /// Cycle counter, starting at 1 for the activation cycle.
    pub cycle: u64,
}

/// Emitted when a sequence slot starts playing and becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceRevealEvent {
    /// Cycle the reveal belongs to.
    pub cycle: u64,
    /// Slot index (0, 1 or 2).
    pub slot: usize,
    /// Offset from the cycle start.
    pub offset: Duration,
}

/// Emitted after the gallery renders a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigateEvent {
    /// Previously displayed index, `None` on the first render.
    pub from: Option<usize>,
    /// Newly displayed index.
    pub to: usize,
    /// What triggered the navigation.
    pub kind: NavigationKind,
}

/// Emitted when a playback group is started and its ended handlers installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupArmedEvent {
    /// Comparison index the group belongs to.
    pub index: usize,
    /// Number of synchronized members.
    pub size: usize,
}

/// Emitted for every "ended" event a group member delivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberEndedEvent {
    /// Comparison index the group belongs to.
    pub index: usize,
    /// Members that have ended so far in this round, including this one.
    pub arrived: usize,
    /// Number of synchronized members.
    pub size: usize,
}

/// Emitted when every member has ended and the group loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupRestartEvent {
    /// Comparison index the group belongs to.
    pub index: usize,
    /// Total restarts of this group, including this one.
    pub restarts: u64,
}

/// Emitted when a `play()` request is refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackRejectedEvent {
    /// Controller step that issued the request.
    pub phase: PlayPhase,
    /// Source path of the refusing element.
    pub source: String,
    /// Refusal reason.
    pub error: PlaybackError,
}

/// Emitted when a component declines to start because an anchor is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountSkippedEvent {
    /// The component that was not started.
    pub component: Component,
    /// Identifier of the first missing anchor.
    pub missing: &'static str,
}

impl fmt::Display for SequenceCycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[cycle] cycle={}", self.cycle)
    }
}

impl fmt::Display for SequenceRevealEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[reveal] cycle={} slot={} offset={}",
            self.cycle, self.slot, self.offset
        )
    }
}

impl fmt::Display for NavigateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(
                f,
                "[navigate] from={from} to={} kind={}",
                self.to,
                self.kind.as_str()
            ),
            None => write!(f, "[navigate] to={} kind={}", self.to, self.kind.as_str()),
        }
    }
}

impl fmt::Display for GroupArmedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[armed] index={} size={}", self.index, self.size)
    }
}

impl fmt::Display for MemberEndedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ended] index={} arrived={}/{}",
            self.index, self.arrived, self.size
        )
    }
}

impl fmt::Display for GroupRestartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[restart] index={} restarts={}",
            self.index, self.restarts
        )
    }
}

impl fmt::Display for PlaybackRejectedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[rejected] phase={} source={} error={}",
            self.phase.as_str(),
            self.source,
            self.error
        )
    }
}

impl fmt::Display for MountSkippedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[skipped] component={} missing=#{}",
            self.component.as_str(),
            self.missing
        )
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the controllers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the sequence player starts a cycle.
    fn on_sequence_cycle(&mut self, e: &SequenceCycleEvent) {
        _ = e;
    }

    /// Called when a sequence slot is revealed.
    fn on_sequence_reveal(&mut self, e: &SequenceRevealEvent) {
        _ = e;
    }

    /// Called after the gallery renders a comparison.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called when a playback group is armed.
    fn on_group_armed(&mut self, e: &GroupArmedEvent) {
        _ = e;
    }

    /// Called for every member "ended" event.
    fn on_member_ended(&mut self, e: &MemberEndedEvent) {
        _ = e;
    }

    /// Called when a playback group loops.
    fn on_group_restart(&mut self, e: &GroupRestartEvent) {
        _ = e;
    }

    /// Called when a `play()` request is refused.
    fn on_playback_rejected(&mut self, e: &PlaybackRejectedEvent) {
        _ = e;
    }

    /// Called when a component is not started.
    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// Any event, as stored by [`RecorderSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A [`SequenceCycleEvent`].
    SequenceCycle(SequenceCycleEvent),
    /// A [`SequenceRevealEvent`].
    SequenceReveal(SequenceRevealEvent),
    /// A [`NavigateEvent`].
    Navigate(NavigateEvent),
    /// A [`GroupArmedEvent`].
    GroupArmed(GroupArmedEvent),
    /// A [`MemberEndedEvent`].
    MemberEnded(MemberEndedEvent),
    /// A [`GroupRestartEvent`].
    GroupRestart(GroupRestartEvent),
    /// A [`PlaybackRejectedEvent`].
    PlaybackRejected(PlaybackRejectedEvent),
    /// A [`MountSkippedEvent`].
    MountSkipped(MountSkippedEvent),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SequenceCycle(e) => fmt::Display::fmt(e, f),
            Self::SequenceReveal(e) => fmt::Display::fmt(e, f),
            Self::Navigate(e) => fmt::Display::fmt(e, f),
            Self::GroupArmed(e) => fmt::Display::fmt(e, f),
            Self::MemberEnded(e) => fmt::Display::fmt(e, f),
            Self::GroupRestart(e) => fmt::Display::fmt(e, f),
            Self::PlaybackRejected(e) => fmt::Display::fmt(e, f),
            Self::MountSkipped(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// A [`TraceSink`] that keeps every event in order.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<TraceEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn drain(&mut self) -> Vec<TraceEvent> {
        core::mem::take(&mut self.events)
    }
}

impl TraceSink for RecorderSink {
    fn on_sequence_cycle(&mut self, e: &SequenceCycleEvent) {
        self.events.push(TraceEvent::SequenceCycle(*e));
    }

    fn on_sequence_reveal(&mut self, e: &SequenceRevealEvent) {
        self.events.push(TraceEvent::SequenceReveal(*e));
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.events.push(TraceEvent::Navigate(*e));
    }

    fn on_group_armed(&mut self, e: &GroupArmedEvent) {
        self.events.push(TraceEvent::GroupArmed(*e));
    }

    fn on_member_ended(&mut self, e: &MemberEndedEvent) {
        self.events.push(TraceEvent::MemberEnded(*e));
    }

    fn on_group_restart(&mut self, e: &GroupRestartEvent) {
        self.events.push(TraceEvent::GroupRestart(*e));
    }

    fn on_playback_rejected(&mut self, e: &PlaybackRejectedEvent) {
        self.events.push(TraceEvent::PlaybackRejected(e.clone()));
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        self.events.push(TraceEvent::MountSkipped(*e));
    }
}

// ---------------------------------------------------------------------------
// Tracer handle
// ---------------------------------------------------------------------------

/// Shared handle around an optional [`TraceSink`].
///
/// Each method checks the inner `Option` (one branch) before dispatching. A
/// sink that is already borrowed (an event emitted from inside another sink
/// call) drops the nested event instead of panicking.
#[derive(Clone, Default)]
pub struct Tracer {
    sink: Option<Rc<RefCell<dyn TraceSink>>>,
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.sink.is_some())
            .finish()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[must_use]
    pub fn new(sink: Rc<RefCell<dyn TraceSink>>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Creates a tracer that discards all events.
    #[must_use]
    pub fn none() -> Self {
        Self { sink: None }
    }

    #[inline]
    fn emit(&self, f: impl FnOnce(&mut dyn TraceSink)) {
        if let Some(sink) = &self.sink
            && let Ok(mut sink) = sink.try_borrow_mut()
        {
            f(&mut *sink);
        }
    }

    /// Emits a [`SequenceCycleEvent`].
    pub fn sequence_cycle(&self, e: &SequenceCycleEvent) {
        self.emit(|s| s.on_sequence_cycle(e));
    }

    /// Emits a [`SequenceRevealEvent`].
    pub fn sequence_reveal(&self, e: &SequenceRevealEvent) {
        self.emit(|s| s.on_sequence_reveal(e));
    }

    /// Emits a [`NavigateEvent`].
    pub fn navigate(&self, e: &NavigateEvent) {
        self.emit(|s| s.on_navigate(e));
    }

    /// Emits a [`GroupArmedEvent`].
    pub fn group_armed(&self, e: &GroupArmedEvent) {
        self.emit(|s| s.on_group_armed(e));
    }

    /// Emits a [`MemberEndedEvent`].
    pub fn member_ended(&self, e: &MemberEndedEvent) {
        self.emit(|s| s.on_member_ended(e));
    }

    /// Emits a [`GroupRestartEvent`].
    pub fn group_restart(&self, e: &GroupRestartEvent) {
        self.emit(|s| s.on_group_restart(e));
    }

    /// Emits a [`PlaybackRejectedEvent`].
    pub fn playback_rejected(&self, e: &PlaybackRejectedEvent) {
        self.emit(|s| s.on_playback_rejected(e));
    }

    /// Emits a [`MountSkippedEvent`].
    pub fn mount_skipped(&self, e: &MountSkippedEvent) {
        self.emit(|s| s.on_mount_skipped(e));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
