// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparison gallery navigation and rendering.
//!
//! [`GalleryState`] is the gallery's only mutable state: an index into the
//! record list that wraps in both directions. [`GalleryController`] owns it
//! together with the records, a [`GallerySurface`] and the current
//! [`PlaybackGroup`], and re-renders on every navigation:
//!
//! 1. drop the previous group (detaching its ended handlers),
//! 2. point the reference video at the record's reference path,
//! 3. refill the baseline and ours containers,
//! 4. replace the caption,
//! 5. mark the active indicator,
//! 6. collect the reference plus any slot videos and launch a new group.
//!
//! All DOM work happens before any playback starts, so the group always
//! observes the final set of elements for the render.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

use thiserror::Error;

use crate::backend::GallerySurface;
use crate::playback::PlaybackGroup;
use crate::record::{ComparisonRecord, Slot};
use crate::trace::{NavigateEvent, NavigationKind, Tracer};

/// Errors from constructing or navigating a gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The record list is empty.
    #[error("gallery has no comparison records")]
    NoRecords,
    /// A navigation target is not a valid record index.
    #[error("comparison index {index} out of range for {len} records")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of records.
        len: usize,
    },
}

/// The current index into a non-empty record list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryState {
    index: usize,
    len: NonZeroUsize,
}

impl GalleryState {
    /// Creates a state at index 0.
    #[must_use]
    pub const fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    /// Current index, always in `0..len`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Number of records.
    #[must_use]
    pub const fn count(self) -> usize {
        self.len.get()
    }

    /// Index after the current one, wrapping to 0.
    #[must_use]
    pub const fn following(self) -> usize {
        (self.index + 1) % self.len.get()
    }

    /// Index before the current one, wrapping to the last.
    #[must_use]
    pub const fn preceding(self) -> usize {
        (self.index + self.len.get() - 1) % self.len.get()
    }

    /// Sets the index.
    pub fn set(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.len.get() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.index = index;
        Ok(())
    }

    /// Advances with wraparound and returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = self.following();
        self.index
    }

    /// Retreats with wraparound and returns the new index.
    pub fn retreat(&mut self) -> usize {
        self.index = self.preceding();
        self.index
    }
}

/// Renders and navigates a fixed list of comparison records.
pub struct GalleryController<S: GallerySurface> {
    records: Cow<'static, [ComparisonRecord]>,
    state: GalleryState,
    surface: S,
    group: Option<PlaybackGroup<S::Video>>,
    rendered: bool,
    tracer: Tracer,
}

impl<S: GallerySurface> fmt::Debug for GalleryController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryController")
            .field("records", &self.records.len())
            .field("state", &self.state)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

impl<S: GallerySurface> GalleryController<S> {
    /// Creates a controller over `records`. Nothing is rendered until
    /// [`initialize`](Self::initialize).
    pub fn new(
        records: impl Into<Cow<'static, [ComparisonRecord]>>,
        surface: S,
        tracer: Tracer,
    ) -> Result<Self, GalleryError> {
        let records = records.into();
        let len = NonZeroUsize::new(records.len()).ok_or(GalleryError::NoRecords)?;
        Ok(Self {
            records,
            state: GalleryState::new(len),
            surface,
            group: None,
            rendered: false,
            tracer,
        })
    }

    /// Builds one indicator per record and renders index 0.
    pub fn initialize(&mut self) {
        self.surface.build_indicators(self.records.len());
        self.render(0, NavigationKind::Initial);
    }

    /// Renders the record at `index`.
    ///
    /// Out-of-range indices are rejected without touching state or surface.
    pub fn go_to(&mut self, index: usize) -> Result<(), GalleryError> {
        self.navigate(index, NavigationKind::Jump)
    }

    /// Indicator click: renders the literal `index`.
    pub fn jump(&mut self, index: usize) -> Result<(), GalleryError> {
        self.go_to(index)
    }

    /// Renders the next record, wrapping from the last to the first.
    pub fn next(&mut self) {
        let target = self.state.following();
        self.render(target, NavigationKind::Next);
    }

    /// Renders the previous record, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let target = self.state.preceding();
        self.render(target, NavigationKind::Previous);
    }

    /// Current index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.state.index()
    }

    /// The navigation state.
    #[must_use]
    pub fn state(&self) -> GalleryState {
        self.state
    }

    /// The record list.
    #[must_use]
    pub fn records(&self) -> &[ComparisonRecord] {
        &self.records
    }

    /// The surface the gallery renders into.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The playback group of the displayed comparison, once rendered.
    #[must_use]
    pub fn group(&self) -> Option<&PlaybackGroup<S::Video>> {
        self.group.as_ref()
    }

    fn navigate(&mut self, index: usize, kind: NavigationKind) -> Result<(), GalleryError> {
        if index >= self.records.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.render(index, kind);
        Ok(())
    }

    /// `index` must be in range.
    fn render(&mut self, index: usize, kind: NavigationKind) {
        let from = self.rendered.then_some(self.state.index());
        if self.state.set(index).is_err() {
            return;
        }

        // Detach before touching the reference video, which the next group
        // shares with this one.
        self.group = None;

        let record = &self.records[index];
        self.surface.set_reference_source(record.reference());
        for slot in Slot::ALL {
            self.surface.fill_slot(slot, record.descriptor(slot));
        }
        self.surface.set_caption_html(record.caption());
        self.surface.set_active_indicator(index);
        self.rendered = true;

        self.tracer.navigate(&NavigateEvent {
            from,
            to: index,
            kind,
        });

        let mut videos = Vec::with_capacity(3);
        videos.push(self.surface.reference_video());
        videos.extend(
            Slot::ALL
                .into_iter()
                .filter_map(|slot| self.surface.slot_video(slot)),
        );
        self.group = Some(PlaybackGroup::launch(index, videos, self.tracer.clone()));
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    use super::*;
    use crate::media::{MediaElement as _, PlayPhase, PlaybackError};
    use crate::record::MediaDescriptor;
    use crate::testing::{FakeMedia, FakeSurface, SlotContent};
    use crate::trace::{RecorderSink, TraceEvent};

    static RECORDS: [ComparisonRecord; 3] = [
        ComparisonRecord::new(
            "assets/r0.mp4",
            MediaDescriptor::video("assets/b0.mp4"),
            MediaDescriptor::video("assets/o0.mp4"),
            "first",
        ),
        ComparisonRecord::new(
            "assets/r1.mp4",
            MediaDescriptor::image("assets/b1.png"),
            MediaDescriptor::video("assets/o1.mp4"),
            "second <i>still</i>",
        ),
        ComparisonRecord::new(
            "assets/r2.mp4",
            MediaDescriptor::text("baseline failed"),
            MediaDescriptor::image("assets/o2.png"),
            "third",
        ),
    ];

    fn gallery() -> GalleryController<FakeSurface> {
        let mut g =
            GalleryController::new(&RECORDS[..], FakeSurface::default(), Tracer::none()).unwrap();
        g.initialize();
        g
    }

    fn slot_summary(s: &SlotContent) -> (u8, alloc::string::String) {
        match s {
            SlotContent::Empty => (0, "".into()),
            SlotContent::Video(v) => (1, v.source()),
            SlotContent::Image(p) => (2, p.clone()),
            SlotContent::Text(t) => (3, t.clone()),
        }
    }

    #[test]
    fn state_wraps_both_ways() {
        let mut state = GalleryState::new(NonZeroUsize::new(3).unwrap());
        assert_eq!(state.retreat(), 2);
        assert_eq!(state.advance(), 0);
        assert_eq!(state.advance(), 1);
        assert_eq!(
            state.set(3),
            Err(GalleryError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn single_record_state_stays_at_zero() {
        let mut state = GalleryState::new(NonZeroUsize::MIN);
        assert_eq!(state.advance(), 0);
        assert_eq!(state.retreat(), 0);
    }

    #[test]
    fn empty_records_are_rejected() {
        let err = GalleryController::new(
            Vec::<ComparisonRecord>::new(),
            FakeSurface::default(),
            Tracer::none(),
        )
        .unwrap_err();
        assert_eq!(err, GalleryError::NoRecords);
    }

    #[test]
    fn initialize_builds_indicators_and_renders_first() {
        let g = gallery();
        let s = g.surface();
        assert_eq!(g.current(), 0);
        assert_eq!(s.indicators.len(), 3);
        assert_eq!(s.active_indicators(), [0]);
        assert_eq!(s.reference.source(), "assets/r0.mp4");
        assert_eq!(slot_summary(&s.baseline), (1, "assets/b0.mp4".into()));
        assert_eq!(slot_summary(&s.ours), (1, "assets/o0.mp4".into()));
        assert_eq!(s.caption, "first");
        assert_eq!(g.group().map(PlaybackGroup::len), Some(3));
    }

    #[test]
    fn next_three_times_returns_to_start() {
        let mut g = gallery();
        let mut seen = vec![];
        for _ in 0..3 {
            g.next();
            seen.push(g.current());
        }
        assert_eq!(seen, [1, 2, 0]);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut g = gallery();
        g.previous();
        assert_eq!(g.current(), 2);
        assert_eq!(g.surface().active_indicators(), [2]);
    }

    #[test]
    fn navigation_sequences_track_net_offset() {
        // Deterministic pseudo-random walk.
        let mut g = gallery();
        let mut seed: u32 = 0x9e37_79b9;
        let mut net: i64 = 0;
        for _ in 0..200 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed & 1 == 0 {
                g.next();
                net += 1;
            } else {
                g.previous();
                net -= 1;
            }
            let expected = usize::try_from(net.rem_euclid(3)).unwrap();
            assert_eq!(g.current(), expected);
            assert!(g.current() < 3);
            assert_eq!(g.surface().active_indicators(), [expected]);
        }
    }

    #[test]
    fn go_to_is_idempotent() {
        let mut g = gallery();
        g.go_to(1).unwrap();
        let first = (
            g.surface().reference.source(),
            slot_summary(&g.surface().baseline),
            slot_summary(&g.surface().ours),
            g.surface().caption.clone(),
            g.surface().active_indicators(),
            g.group().map(PlaybackGroup::len),
        );
        g.go_to(1).unwrap();
        let second = (
            g.surface().reference.source(),
            slot_summary(&g.surface().baseline),
            slot_summary(&g.surface().ours),
            g.surface().caption.clone(),
            g.surface().active_indicators(),
            g.group().map(PlaybackGroup::len),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn jump_renders_literal_index() {
        let mut g = gallery();
        g.jump(2).unwrap();
        assert_eq!(g.current(), 2);
        assert_eq!(g.surface().caption, "third");
    }

    #[test]
    fn out_of_range_go_to_changes_nothing() {
        let mut g = gallery();
        g.next();
        let fills = g.surface().fills;
        assert_eq!(
            g.go_to(7),
            Err(GalleryError::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(g.current(), 1);
        assert_eq!(g.surface().fills, fills, "surface untouched");
        assert!(g.group().is_some(), "group kept");
    }

    #[test]
    fn image_baseline_shrinks_group() {
        let mut g = gallery();
        g.go_to(1).unwrap();
        let s = g.surface();
        assert!(!s.slot(Slot::Baseline).is_video());
        assert!(s.slot_video(Slot::Baseline).is_none());
        assert_eq!(g.group().map(PlaybackGroup::len), Some(2));
        assert_eq!(
            g.group().map(|group| group.members()[1].source()),
            Some("assets/o1.mp4".into())
        );
    }

    #[test]
    fn text_and_image_leave_reference_alone() {
        let mut g = gallery();
        g.go_to(2).unwrap();
        let s = g.surface();
        assert_eq!(slot_summary(&s.baseline), (3, "baseline failed".into()));
        assert_eq!(slot_summary(&s.ours), (2, "assets/o2.png".into()));
        assert_eq!(g.group().map(PlaybackGroup::len), Some(1));
    }

    #[test]
    fn untyped_descriptor_renders_as_text() {
        let records = vec![ComparisonRecord::new(
            "r.mp4",
            MediaDescriptor::from_tagged("gif", "loop.gif"),
            MediaDescriptor::video("o.mp4"),
            "",
        )];
        let mut g = GalleryController::new(records, FakeSurface::default(), Tracer::none())
            .unwrap();
        g.initialize();
        assert_eq!(slot_summary(&g.surface().baseline), (3, "loop.gif".into()));
        assert_eq!(g.group().map(PlaybackGroup::len), Some(2));
    }

    #[test]
    fn render_starts_group_muted_from_zero() {
        let g = gallery();
        let group = g.group().unwrap();
        for m in group.members() {
            assert!(m.is_playing(), "{}", m.source());
            assert!(m.is_muted());
            assert!(!m.is_looping());
            assert!(m.rewinds() >= 1);
        }
    }

    #[test]
    fn full_round_restarts_displayed_comparison() {
        let g = gallery();
        let members: Vec<FakeMedia> = g.group().unwrap().members().to_vec();
        members[0].finish();
        members[1].finish();
        assert_eq!(g.group().unwrap().restarts(), 0);
        members[2].finish();
        assert_eq!(g.group().unwrap().restarts(), 1);
    }

    #[test]
    fn navigation_discards_previous_wiring() {
        let mut g = gallery();
        let old: Vec<FakeMedia> = g.group().unwrap().members().to_vec();
        g.go_to(1).unwrap();

        // Old slot videos are no longer wired; the reference got a new handler.
        assert!(!old[1].has_ended_handler());
        assert!(!old[2].has_ended_handler());
        assert!(old[0].has_ended_handler(), "reference is shared");

        // Stale ended events from the old baseline do not count.
        old[1].finish();
        old[2].finish();
        let group = g.group().unwrap();
        assert_eq!(group.arrived(), 0);
        group.members()[0].finish();
        assert_eq!(group.restarts(), 0);
        group.members()[1].finish();
        assert_eq!(group.restarts(), 1);
    }

    #[test]
    fn refused_start_is_logged_and_not_fatal() {
        let recorder = Rc::new(RefCell::new(RecorderSink::new()));
        let surface = FakeSurface::default();
        surface
            .reference
            .refuse_play(PlaybackError::NotAllowed("autoplay".into()));
        let mut g =
            GalleryController::new(&RECORDS[..], surface, Tracer::new(recorder.clone())).unwrap();
        g.initialize();

        let group = g.group().unwrap();
        assert_eq!(group.len(), 3);
        assert!(!group.members()[0].is_playing());
        assert!(group.members()[1].is_playing());

        let events = recorder.borrow();
        let rejected: Vec<_> = events
            .events()
            .iter()
            .filter_map(|e| match e {
                TraceEvent::PlaybackRejected(e) => Some(e),
                _ => None,
            })
            .collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].phase, PlayPhase::Start);
        assert_eq!(rejected[0].source, "assets/r0.mp4");
    }

    #[test]
    fn navigation_is_traced() {
        let recorder = Rc::new(RefCell::new(RecorderSink::new()));
        let mut g = GalleryController::new(
            &RECORDS[..],
            FakeSurface::default(),
            Tracer::new(recorder.clone()),
        )
        .unwrap();
        g.initialize();
        g.previous();
        g.next();
        g.jump(1).unwrap();

        let navigations: Vec<NavigateEvent> = recorder
            .borrow()
            .events()
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Navigate(e) => Some(*e),
                _ => None,
            })
            .collect();
        assert_eq!(
            navigations,
            [
                NavigateEvent {
                    from: None,
                    to: 0,
                    kind: NavigationKind::Initial
                },
                NavigateEvent {
                    from: Some(0),
                    to: 2,
                    kind: NavigationKind::Previous
                },
                NavigateEvent {
                    from: Some(2),
                    to: 0,
                    kind: NavigationKind::Next
                },
                NavigateEvent {
                    from: Some(0),
                    to: 1,
                    kind: NavigationKind::Jump
                },
            ]
        );
    }
}
