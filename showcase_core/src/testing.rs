// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory doubles for the backend contracts.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::backend::GallerySurface;
use crate::media::{MediaElement, PlayAttempt, PlaybackError};
use crate::record::{MediaDescriptor, Slot};
use crate::time::Duration;
use crate::timer::TimerHost;

// ---------------------------------------------------------------------------
// FakeMedia
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MediaState {
    source: String,
    playing: bool,
    visible: bool,
    looping: bool,
    muted: bool,
    rewinds: u32,
    plays: u32,
    pauses: u32,
    refuse: Option<PlaybackError>,
    ended: Option<Box<dyn FnMut()>>,
    handler_generation: u64,
}

/// A media element that records what was done to it.
///
/// Clones share state, like DOM handles.
#[derive(Clone, Default)]
pub(crate) struct FakeMedia {
    state: Rc<RefCell<MediaState>>,
}

impl fmt::Debug for FakeMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state.borrow();
        f.debug_struct("FakeMedia")
            .field("source", &s.source)
            .field("playing", &s.playing)
            .field("visible", &s.visible)
            .finish_non_exhaustive()
    }
}

impl FakeMedia {
    pub(crate) fn new(source: &str) -> Self {
        let media = Self::default();
        media.state.borrow_mut().source = source.to_string();
        media
    }

    pub(crate) fn set_source(&self, source: &str) {
        self.state.borrow_mut().source = source.to_string();
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub(crate) fn is_looping(&self) -> bool {
        self.state.borrow().looping
    }

    pub(crate) fn is_muted(&self) -> bool {
        self.state.borrow().muted
    }

    pub(crate) fn rewinds(&self) -> u32 {
        self.state.borrow().rewinds
    }

    pub(crate) fn plays(&self) -> u32 {
        self.state.borrow().plays
    }

    pub(crate) fn pauses(&self) -> u32 {
        self.state.borrow().pauses
    }

    pub(crate) fn has_ended_handler(&self) -> bool {
        self.state.borrow().ended.is_some()
    }

    /// Makes every following `play()` fail with `error`.
    pub(crate) fn refuse_play(&self, error: PlaybackError) {
        self.state.borrow_mut().refuse = Some(error);
    }

    /// Plays to the end: stops and delivers the "ended" event.
    pub(crate) fn finish(&self) {
        let (handler, generation) = {
            let mut s = self.state.borrow_mut();
            s.playing = false;
            (s.ended.take(), s.handler_generation)
        };
        if let Some(mut handler) = handler {
            handler();
            // Put it back unless the handler was replaced while running.
            let mut s = self.state.borrow_mut();
            if s.handler_generation == generation {
                s.ended = Some(handler);
            }
        }
    }
}

impl MediaElement for FakeMedia {
    fn source(&self) -> String {
        self.state.borrow().source.clone()
    }

    fn play(&self, attempt: PlayAttempt) {
        let refused = {
            let mut s = self.state.borrow_mut();
            match s.refuse.clone() {
                Some(error) => Some((s.source.clone(), error)),
                None => {
                    s.playing = true;
                    s.plays += 1;
                    None
                }
            }
        };
        if let Some((source, error)) = refused {
            attempt.reject(&source, error);
        }
    }

    fn pause(&self) {
        let mut s = self.state.borrow_mut();
        s.playing = false;
        s.pauses += 1;
    }

    fn rewind(&self) {
        self.state.borrow_mut().rewinds += 1;
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn set_looping(&self, looping: bool) {
        self.state.borrow_mut().looping = looping;
    }

    fn set_muted(&self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }

    fn set_ended_handler(&self, handler: Option<Box<dyn FnMut()>>) {
        let mut s = self.state.borrow_mut();
        s.handler_generation += 1;
        s.ended = handler;
    }
}

// ---------------------------------------------------------------------------
// FakeSurface
// ---------------------------------------------------------------------------

/// What a fake slot container currently holds.
#[derive(Clone, Debug, Default)]
pub(crate) enum SlotContent {
    #[default]
    Empty,
    Video(FakeMedia),
    Image(String),
    Text(String),
}

impl SlotContent {
    pub(crate) fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}

/// A gallery surface that keeps the rendered state in plain fields.
#[derive(Debug, Default)]
pub(crate) struct FakeSurface {
    pub(crate) reference: FakeMedia,
    pub(crate) baseline: SlotContent,
    pub(crate) ours: SlotContent,
    pub(crate) caption: String,
    pub(crate) indicators: Vec<bool>,
    pub(crate) fills: usize,
}

impl FakeSurface {
    pub(crate) fn slot(&self, slot: Slot) -> &SlotContent {
        match slot {
            Slot::Baseline => &self.baseline,
            Slot::Ours => &self.ours,
        }
    }

    pub(crate) fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, &active)| active.then_some(i))
            .collect()
    }
}

impl GallerySurface for FakeSurface {
    type Video = FakeMedia;

    fn build_indicators(&mut self, count: usize) {
        self.indicators = alloc::vec![false; count];
    }

    fn set_reference_source(&mut self, path: &str) {
        self.reference.set_source(path);
    }

    fn reference_video(&self) -> FakeMedia {
        self.reference.clone()
    }

    fn fill_slot(&mut self, slot: Slot, descriptor: &MediaDescriptor) {
        self.fills += 1;
        let content = match descriptor {
            MediaDescriptor::Video(path) => {
                let video = FakeMedia::new(path);
                video.set_muted(true);
                video.set_looping(false);
                SlotContent::Video(video)
            }
            MediaDescriptor::Image(path) => SlotContent::Image(path.to_string()),
            MediaDescriptor::Text(text) => SlotContent::Text(text.to_string()),
        };
        match slot {
            Slot::Baseline => self.baseline = content,
            Slot::Ours => self.ours = content,
        }
    }

    fn slot_video(&self, slot: Slot) -> Option<FakeMedia> {
        match self.slot(slot) {
            SlotContent::Video(video) => Some(video.clone()),
            _ => None,
        }
    }

    fn set_caption_html(&mut self, caption: &str) {
        self.caption = caption.to_string();
    }

    fn set_active_indicator(&mut self, index: usize) {
        for (i, active) in self.indicators.iter_mut().enumerate() {
            *active = i == index;
        }
    }
}

// ---------------------------------------------------------------------------
// ManualTimers
// ---------------------------------------------------------------------------

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat {
        period: Duration,
        callback: Box<dyn FnMut()>,
    },
}

struct Entry {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct TimerQueue {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry>,
    scheduled: usize,
}

impl TimerQueue {
    fn push(&mut self, due: Duration, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, task });
    }

    /// Removes the earliest entry due at or before `limit`, ties by
    /// scheduling order.
    fn pop_due(&mut self, limit: Duration) -> Option<Entry> {
        let (pos, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= limit)
            .min_by_key(|(_, e)| (e.due, e.seq))?;
        Some(self.entries.swap_remove(pos))
    }
}

/// A [`TimerHost`] driven by an explicit virtual clock.
///
/// Nothing runs until [`advance_to`](Self::advance_to) is called; callbacks
/// then run in due order with the clock set to their due time.
#[derive(Clone, Default)]
pub(crate) struct ManualTimers {
    queue: Rc<RefCell<TimerQueue>>,
}

impl fmt::Debug for ManualTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.queue.borrow();
        f.debug_struct("ManualTimers")
            .field("now", &q.now)
            .field("pending", &q.entries.len())
            .finish()
    }
}

impl ManualTimers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Callbacks currently waiting to run.
    pub(crate) fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Every `set_timeout`/`set_interval` call ever made.
    pub(crate) fn scheduled(&self) -> usize {
        self.queue.borrow().scheduled
    }

    /// Runs everything due up to and including `target`.
    pub(crate) fn advance_to(&self, target: Duration) {
        loop {
            let entry = {
                let mut q = self.queue.borrow_mut();
                let Some(entry) = q.pop_due(target) else {
                    break;
                };
                q.now = entry.due;
                entry
            };
            match entry.task {
                Task::Once(callback) => callback(),
                Task::Repeat {
                    period,
                    mut callback,
                } => {
                    callback();
                    self.queue.borrow_mut().push(
                        entry.due + period,
                        Task::Repeat { period, callback },
                    );
                }
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl TimerHost for ManualTimers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let mut q = self.queue.borrow_mut();
        let due = q.now + delay;
        q.scheduled += 1;
        q.push(due, Task::Once(callback));
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) {
        let mut q = self.queue.borrow_mut();
        let due = q.now + period;
        q.scheduled += 1;
        q.push(due, Task::Repeat { period, callback });
    }
}
