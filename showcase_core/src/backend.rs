// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Platform-specific work lives in *backend* crates. Each backend provides
//! the following pieces:
//!
//! - **Media**: Implements [`MediaElement`] over a native video handle.
//!   Playback refusals, synchronous or asynchronous, go to the
//!   [`PlayAttempt`](crate::media::PlayAttempt) passed into `play`.
//!
//! - **Timers**: Implements [`TimerHost`](crate::timer::TimerHost) over the
//!   platform event loop.
//!
//! - **Surface**: Implements [`GallerySurface`] to render one comparison
//!   record into native elements.
//!
//! - **Sink**: Optionally a [`TraceSink`](crate::trace::TraceSink) writing to
//!   the platform log.
//!
//! - **Mounting**: Looks up the page anchors and constructs the controllers,
//!   declining to construct a controller when any of its anchors is missing.
//!   This is backend-specific and not abstracted by a trait because anchor
//!   lookup differs fundamentally across platforms.
//!
//! # Crate boundaries
//!
//! `showcase_core` owns the data model, navigation, synchronization and this
//! contract module. Backend crates depend on `showcase_core` and provide
//! platform glue. Application code depends on both, supplies the record list
//! and wires input events (clicks) to the controllers.

use crate::media::MediaElement;
use crate::record::{MediaDescriptor, Slot};

/// Renders comparison records into a platform-native tree.
///
/// The [`GalleryController`](crate::gallery::GalleryController) calls these in
/// a fixed order on every navigation (reference source, both slots, caption,
/// indicators) and only then collects videos for the playback group, so
/// implementations may assume each call sees the effects of the previous ones.
///
/// # Render pseudocode
///
/// ```rust,ignore
/// fn render(surface: &mut impl GallerySurface, record: &ComparisonRecord, index: usize) {
///     surface.set_reference_source(record.reference());
///     for slot in Slot::ALL {
///         surface.fill_slot(slot, record.descriptor(slot));
///     }
///     surface.set_caption_html(record.caption());
///     surface.set_active_indicator(index);
///
///     let mut videos = vec![surface.reference_video()];
///     videos.extend(Slot::ALL.into_iter().filter_map(|s| surface.slot_video(s)));
///     let group = PlaybackGroup::launch(index, videos, tracer);
/// }
/// ```
pub trait GallerySurface {
    /// Handle type for the videos this surface renders.
    type Video: MediaElement + 'static;

    /// Creates `count` navigation indicators, none active.
    fn build_indicators(&mut self, count: usize);

    /// Points the persistent reference video at `path`.
    fn set_reference_source(&mut self, path: &str);

    /// Returns a handle to the persistent reference video.
    fn reference_video(&self) -> Self::Video;

    /// Clears the container for `slot` and inserts a fresh element matching
    /// `descriptor`.
    ///
    /// Videos are created muted, non-looping, autoplaying and inline; images
    /// and videos fill the container; text is centered.
    fn fill_slot(&mut self, slot: Slot, descriptor: &MediaDescriptor);

    /// Returns the video currently inside the container for `slot`, if any.
    fn slot_video(&self, slot: Slot) -> Option<Self::Video>;

    /// Replaces the caption with `caption`, interpreted as markup.
    fn set_caption_html(&mut self, caption: &str);

    /// Marks exactly the indicator at `index` as active.
    fn set_active_indicator(&mut self, index: usize);
}
