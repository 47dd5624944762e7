// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback controllers for the project showcase page.
//!
//! `showcase_core` holds every piece of stateful logic on the page, with no
//! dependency on a browser. It is `no_std` compatible (with `alloc`); platform
//! glue lives in backend crates that implement the small contracts defined
//! here.
//!
//! # Architecture
//!
//! Two controllers run side by side and never talk to each other:
//!
//! ```text
//!   TimerHost ──► SequencePlayer ──► MediaElement × 3
//!                  (reveal cues on a repeating cycle)
//!
//!   clicks ──► GalleryController ──► GallerySurface
//!                  │                    (reference video, two slots,
//!                  │                     caption, indicators)
//!                  ▼
//!              PlaybackGroup ──► EndedBarrier
//!                  (rewind + restart once every member has ended)
//! ```
//!
//! **[`media`]**: The [`MediaElement`](media::MediaElement) contract for a
//! single playable element and the [`PlaybackError`](media::PlaybackError)
//! taxonomy for rejected `play()` calls.
//!
//! **[`record`]**: The fixed [`ComparisonRecord`](record::ComparisonRecord)
//! data model and the closed [`MediaDescriptor`](record::MediaDescriptor)
//! union rendered into each slot.
//!
//! **[`gallery`]**: [`GalleryState`](gallery::GalleryState) (the wrapping
//! index) and [`GalleryController`](gallery::GalleryController), which renders
//! a record and rebuilds the playback group on every navigation.
//!
//! **[`playback`]**: [`EndedBarrier`](playback::EndedBarrier) and
//! [`PlaybackGroup`](playback::PlaybackGroup), the synchronized loop.
//!
//! **[`sequence`]**: [`SequencePlayer`](sequence::SequencePlayer), the
//! staggered three-video demo.
//!
//! **[`timer`]**: The [`TimerHost`](timer::TimerHost) contract for one-shot
//! and repeating callbacks.
//!
//! **[`backend`]**: The [`GallerySurface`](backend::GallerySurface) trait
//! that backends implement to render a record.
//!
//! **[`trace`]**: Diagnostics events, sinks and the [`Tracer`](trace::Tracer)
//! handle the controllers report through.
//!
//! **[`time`]**: Millisecond [`Duration`](time::Duration).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod gallery;
pub mod media;
pub mod playback;
pub mod record;
pub mod sequence;
pub mod time;
pub mod timer;
pub mod trace;

#[cfg(test)]
pub(crate) mod testing;
