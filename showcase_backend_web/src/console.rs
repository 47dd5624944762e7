// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one line per event with
//! `console.log`, or `console.warn` for refused playback and skipped
//! components.

use alloc::string::ToString as _;
use core::fmt::Display;

use showcase_core::trace::{
    GroupArmedEvent, GroupRestartEvent, MemberEndedEvent, MountSkippedEvent, NavigateEvent,
    PlaybackRejectedEvent, SequenceCycleEvent, SequenceRevealEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes trace lines to the browser console.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleSink {
    info: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs every event.
    #[must_use]
    pub const fn new() -> Self {
        Self { info: true }
    }

    /// Creates a sink that logs only refused playback and skipped components.
    #[must_use]
    pub const fn warnings_only() -> Self {
        Self { info: false }
    }

    fn log(&self, e: &impl Display) {
        if self.info {
            console::log_1(&JsValue::from_str(&e.to_string()));
        }
    }

    fn warn(&self, e: &impl Display) {
        console::warn_1(&JsValue::from_str(&e.to_string()));
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for ConsoleSink {
    fn on_sequence_cycle(&mut self, e: &SequenceCycleEvent) {
        self.log(e);
    }

    fn on_sequence_reveal(&mut self, e: &SequenceRevealEvent) {
        self.log(e);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.log(e);
    }

    fn on_group_armed(&mut self, e: &GroupArmedEvent) {
        self.log(e);
    }

    fn on_member_ended(&mut self, e: &MemberEndedEvent) {
        self.log(e);
    }

    fn on_group_restart(&mut self, e: &GroupRestartEvent) {
        self.log(e);
    }

    fn on_playback_rejected(&mut self, e: &PlaybackRejectedEvent) {
        self.warn(e);
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        self.warn(e);
    }
}
