// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for the showcase controllers.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomVideo`]: [`MediaElement`] over `HTMLVideoElement`
//! - [`WindowTimers`]: `setTimeout`/`setInterval` timer host
//! - [`DomGallerySurface`]: renders comparison records into the page
//! - [`ConsoleSink`]: trace events to the browser console
//! - [`mount_sequence`] / [`mount_gallery`]: look up the page anchors and
//!   start each component

#![no_std]

extern crate alloc;

mod console;
mod mount;
mod surface;
mod timers;
mod video;

pub use console::ConsoleSink;
pub use mount::{GalleryAnchors, SequenceAnchors, WebGallery, mount_gallery, mount_sequence};
pub use showcase_core::backend::GallerySurface;
pub use showcase_core::media::MediaElement;
pub use surface::{DomGallerySurface, IndicatorStyle, SLOT_MEDIA_CLASS, TEXT_FALLBACK_CLASS};
pub use timers::WindowTimers;
pub use video::{DomVideo, HIDDEN_CLASS};
