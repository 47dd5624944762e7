// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The playable-element contract.
//!
//! [`MediaElement`] is the minimal capability both controllers need from a
//! video: play, pause, rewind, visibility, loop/mute flags and a single
//! replaceable "ended" handler. The web backend implements it over
//! `HtmlVideoElement`; tests implement it with in-memory fakes.
//!
//! Starting playback is asynchronous in browsers and may be refused (autoplay
//! policy, unsupported source, a `pause()` racing the start). Refusals never
//! propagate: implementations hand them to the [`PlayAttempt`] passed into
//! [`MediaElement::play`], which reports them to the trace sink.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::trace::{PlaybackRejectedEvent, Tracer};

/// Why a `play()` request was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The user agent blocked playback, usually the autoplay policy.
    #[error("playback not allowed: {0}")]
    NotAllowed(String),
    /// The source cannot be decoded or loaded.
    #[error("media not supported: {0}")]
    NotSupported(String),
    /// The start was interrupted, e.g. by `pause()` or a new `src`.
    #[error("playback aborted: {0}")]
    Aborted(String),
    /// Anything else the platform reported.
    #[error("playback failed: {0}")]
    Other(String),
}

impl PlaybackError {
    /// Classifies a DOM exception by its `name`.
    #[must_use]
    pub fn from_dom_exception(name: &str, message: String) -> Self {
        match name {
            "NotAllowedError" => Self::NotAllowed(message),
            "NotSupportedError" => Self::NotSupported(message),
            "AbortError" => Self::Aborted(message),
            _ => Self::Other(message),
        }
    }
}

/// Which controller step issued a `play()` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayPhase {
    /// A sequence-player slot being revealed.
    Reveal,
    /// A comparison group starting after navigation.
    Start,
    /// A comparison group looping after every member ended.
    Restart,
}

impl PlayPhase {
    /// Returns a short lowercase label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::Start => "start",
            Self::Restart => "restart",
        }
    }
}

/// Context for one `play()` request, used to report a refusal.
#[derive(Clone)]
pub struct PlayAttempt {
    phase: PlayPhase,
    tracer: Tracer,
}

impl fmt::Debug for PlayAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayAttempt")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl PlayAttempt {
    /// Creates an attempt that reports refusals through `tracer`.
    #[must_use]
    pub fn new(phase: PlayPhase, tracer: Tracer) -> Self {
        Self { phase, tracer }
    }

    /// Returns the step that issued the request.
    #[must_use]
    pub fn phase(&self) -> PlayPhase {
        self.phase
    }

    /// Records that playback of `source` was refused.
    ///
    /// May be called from an asynchronous continuation long after
    /// [`MediaElement::play`] returned.
    pub fn reject(&self, source: &str, error: PlaybackError) {
        self.tracer.playback_rejected(&PlaybackRejectedEvent {
            phase: self.phase,
            source: source.into(),
            error,
        });
    }
}

/// A single playable media element.
///
/// Handles are expected to be cheap references to a shared element (as DOM
/// handles are), so every method takes `&self`.
pub trait MediaElement {
    /// Returns the current source path, for diagnostics.
    fn source(&self) -> String;

    /// Requests playback from the current position.
    ///
    /// Never fails synchronously; refusals are handed to `attempt`.
    fn play(&self, attempt: PlayAttempt);

    /// Pauses playback.
    fn pause(&self);

    /// Seeks to time zero.
    fn rewind(&self);

    /// Shows or hides the element (opacity, not layout).
    fn set_visible(&self, visible: bool);

    /// Sets whether the element loops on its own.
    fn set_looping(&self, looping: bool);

    /// Sets whether audio is muted.
    fn set_muted(&self, muted: bool);

    /// Replaces the "ended" handler. `None` removes it.
    ///
    /// An element has at most one handler; installing a new one drops the
    /// previous one.
    fn set_ended_handler(&self, handler: Option<Box<dyn FnMut()>>);
}
