// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page entry helpers.
//!
//! Each `mount_*` function looks up its component's anchors by element id.
//! If any anchor is missing (or is not the expected element type) the
//! component is not started: nothing is scheduled, no listener is attached,
//! and a [`MountSkippedEvent`] names the first missing id.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::RefCell;

use showcase_core::gallery::GalleryController;
use showcase_core::record::ComparisonRecord;
use showcase_core::sequence::{SLOTS, SequenceConfig, SequencePlayer};
use showcase_core::trace::{Component, MountSkippedEvent, Tracer};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlVideoElement};

use crate::surface::{DomGallerySurface, IndicatorStyle};
use crate::timers::WindowTimers;
use crate::video::DomVideo;

/// A mounted gallery, shared with its click handlers.
pub type WebGallery = Rc<RefCell<GalleryController<DomGallerySurface>>>;

/// Element ids of the sequence player's videos, in reveal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceAnchors {
    /// `<video>` ids revealed first, second and third.
    pub videos: [&'static str; SLOTS],
}

impl SequenceAnchors {
    /// The showcase page's ids.
    #[must_use]
    pub const fn showcase() -> Self {
        Self {
            videos: ["video-src", "video-ref", "video-sim"],
        }
    }
}

impl Default for SequenceAnchors {
    fn default() -> Self {
        Self::showcase()
    }
}

/// Element ids of the comparison gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryAnchors {
    /// The persistent reference `<video>`.
    pub reference: &'static str,
    /// Container for the baseline result.
    pub baseline: &'static str,
    /// Container for our result.
    pub ours: &'static str,
    /// Caption element.
    pub caption: &'static str,
    /// "Previous" control.
    pub previous: &'static str,
    /// "Next" control.
    pub next: &'static str,
    /// Container the indicators are created in.
    pub indicators: &'static str,
}

impl GalleryAnchors {
    /// The showcase page's ids.
    #[must_use]
    pub const fn showcase() -> Self {
        Self {
            reference: "comp-video-ref",
            baseline: "comp-baseline-container",
            ours: "comp-ours-container",
            caption: "comp-caption",
            previous: "prev-comparison",
            next: "next-comparison",
            indicators: "comp-dots",
        }
    }
}

impl Default for GalleryAnchors {
    fn default() -> Self {
        Self::showcase()
    }
}

/// Starts the staggered sequence on the page's three videos.
///
/// Returns `None` if any video is missing.
pub fn mount_sequence(
    document: &Document,
    anchors: &SequenceAnchors,
    config: SequenceConfig,
    tracer: Tracer,
) -> Option<Rc<SequencePlayer<DomVideo, WindowTimers>>> {
    let mut videos: [Option<DomVideo>; SLOTS] = [None, None, None];
    for (video, id) in videos.iter_mut().zip(anchors.videos) {
        let element: HtmlVideoElement = lookup(document, id, Component::Sequence, &tracer)?;
        *video = Some(DomVideo::new(element));
    }
    SequencePlayer::activate(videos, config, WindowTimers::new(), tracer)
}

/// Renders the first comparison and wires the previous, next and indicator
/// controls.
///
/// Returns `Ok(None)` if any anchor is missing. Errors come from an empty
/// record list or from the DOM while attaching listeners.
pub fn mount_gallery(
    document: &Document,
    anchors: &GalleryAnchors,
    records: impl Into<Cow<'static, [ComparisonRecord]>>,
    style: IndicatorStyle,
    tracer: Tracer,
) -> Result<Option<WebGallery>, JsValue> {
    let Some((surface, previous, next)) = gallery_elements(document, anchors, style, &tracer)
    else {
        return Ok(None);
    };

    let controller = GalleryController::new(records, surface, tracer)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let gallery: WebGallery = Rc::new(RefCell::new(controller));
    gallery.borrow_mut().initialize();

    on_click(&previous, {
        let gallery = Rc::clone(&gallery);
        move || {
            if let Ok(mut gallery) = gallery.try_borrow_mut() {
                gallery.previous();
            }
        }
    })?;
    on_click(&next, {
        let gallery = Rc::clone(&gallery);
        move || {
            if let Ok(mut gallery) = gallery.try_borrow_mut() {
                gallery.next();
            }
        }
    })?;

    let indicators: Vec<HtmlButtonElement> = gallery.borrow().surface().indicators().to_vec();
    for (index, indicator) in indicators.iter().enumerate() {
        let gallery = Rc::clone(&gallery);
        on_click(indicator, move || {
            if let Ok(mut gallery) = gallery.try_borrow_mut() {
                // Indicators are built one per record, so `index` is in range.
                let _ = gallery.jump(index);
            }
        })?;
    }

    Ok(Some(gallery))
}

fn gallery_elements(
    document: &Document,
    anchors: &GalleryAnchors,
    style: IndicatorStyle,
    tracer: &Tracer,
) -> Option<(DomGallerySurface, HtmlElement, HtmlElement)> {
    let component = Component::Gallery;
    let reference: HtmlVideoElement = lookup(document, anchors.reference, component, tracer)?;
    let baseline: HtmlElement = lookup(document, anchors.baseline, component, tracer)?;
    let ours: HtmlElement = lookup(document, anchors.ours, component, tracer)?;
    let caption: HtmlElement = lookup(document, anchors.caption, component, tracer)?;
    let previous: HtmlElement = lookup(document, anchors.previous, component, tracer)?;
    let next: HtmlElement = lookup(document, anchors.next, component, tracer)?;
    let indicators: HtmlElement = lookup(document, anchors.indicators, component, tracer)?;

    let surface = DomGallerySurface::new(
        document.clone(),
        DomVideo::new(reference),
        baseline,
        ours,
        caption,
        indicators,
        style,
    );
    Some((surface, previous, next))
}

/// Finds `id` as a `T`, tracing a skipped mount if it is absent.
fn lookup<T: JsCast>(
    document: &Document,
    id: &'static str,
    component: Component,
    tracer: &Tracer,
) -> Option<T> {
    let found = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok());
    if found.is_none() {
        tracer.mount_skipped(&MountSkippedEvent {
            component,
            missing: id,
        });
    }
    found
}

fn on_click(target: &EventTarget, mut action: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_event: Event| action()) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
