// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM rendering of comparison records.
//!
//! [`DomGallerySurface`] owns the gallery's page elements and rebuilds the two
//! slot containers on every render. Slot contents are always created fresh;
//! nothing from the previous record is reused except the reference video.

use alloc::string::String;
use alloc::vec::Vec;

use showcase_core::backend::GallerySurface;
use showcase_core::record::{MediaDescriptor, Slot};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlImageElement};

use crate::video::DomVideo;

/// Class for videos and images filling a slot container.
pub const SLOT_MEDIA_CLASS: &str = "w-full h-full object-cover absolute inset-0";

/// Class for the centered text shown in place of media.
pub const TEXT_FALLBACK_CLASS: &str = "text-center px-4";

/// Class names for the navigation indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorStyle {
    /// Applied to every indicator.
    pub base: &'static str,
    /// Added to the indicator of the displayed record.
    pub active: &'static str,
    /// Added to every other indicator.
    pub inactive: &'static str,
}

impl IndicatorStyle {
    /// Small round dots, blue when active.
    #[must_use]
    pub const fn showcase() -> Self {
        Self {
            base: "w-2 h-2 rounded-full transition-colors",
            active: "bg-blue-600",
            inactive: "bg-gray-300",
        }
    }

    /// Full class attribute for an indicator.
    #[must_use]
    pub fn class_for(&self, active: bool) -> String {
        let state = if active { self.active } else { self.inactive };
        let mut class = String::with_capacity(self.base.len() + 1 + state.len());
        class.push_str(self.base);
        class.push(' ');
        class.push_str(state);
        class
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self::showcase()
    }
}

/// Renders records into the gallery's page elements.
pub struct DomGallerySurface {
    document: Document,
    reference: DomVideo,
    baseline: HtmlElement,
    ours: HtmlElement,
    slot_videos: [Option<DomVideo>; 2],
    caption: HtmlElement,
    indicator_host: HtmlElement,
    indicators: Vec<HtmlButtonElement>,
    style: IndicatorStyle,
}

impl core::fmt::Debug for DomGallerySurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomGallerySurface")
            .field("reference", &self.reference)
            .field("slot_videos", &self.slot_videos)
            .field("indicators", &self.indicators.len())
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl DomGallerySurface {
    /// Creates a surface over existing page elements.
    #[must_use]
    pub fn new(
        document: Document,
        reference: DomVideo,
        baseline: HtmlElement,
        ours: HtmlElement,
        caption: HtmlElement,
        indicator_host: HtmlElement,
        style: IndicatorStyle,
    ) -> Self {
        Self {
            document,
            reference,
            baseline,
            ours,
            slot_videos: [None, None],
            caption,
            indicator_host,
            indicators: Vec::new(),
            style,
        }
    }

    /// The indicator buttons, in record order.
    #[must_use]
    pub fn indicators(&self) -> &[HtmlButtonElement] {
        &self.indicators
    }

    fn container(&self, slot: Slot) -> &HtmlElement {
        match slot {
            Slot::Baseline => &self.baseline,
            Slot::Ours => &self.ours,
        }
    }

    fn slot_index(slot: Slot) -> usize {
        match slot {
            Slot::Baseline => 0,
            Slot::Ours => 1,
        }
    }

    fn create_indicator(&self, index: usize) -> Result<HtmlButtonElement, JsValue> {
        let button: HtmlButtonElement = self.document.create_element("button")?.unchecked_into();
        button.set_class_name(&self.style.class_for(false));
        button.set_attribute("aria-label", &alloc::format!("Comparison {}", index + 1))?;
        self.indicator_host.append_child(&button)?;
        Ok(button)
    }

    /// Builds the element for `descriptor`. Returns the video handle when the
    /// element is a video.
    fn create_content(
        &self,
        descriptor: &MediaDescriptor,
    ) -> Result<(HtmlElement, Option<DomVideo>), JsValue> {
        match descriptor {
            MediaDescriptor::Video(src) => {
                let video = DomVideo::create(&self.document, src)?;
                let element: HtmlElement = video.element().clone().unchecked_into();
                element.set_class_name(SLOT_MEDIA_CLASS);
                Ok((element, Some(video)))
            }
            MediaDescriptor::Image(src) => {
                let image: HtmlImageElement = self.document.create_element("img")?.unchecked_into();
                image.set_src(src);
                image.set_class_name(SLOT_MEDIA_CLASS);
                Ok((image.unchecked_into(), None))
            }
            MediaDescriptor::Text(text) => {
                let span: HtmlElement = self.document.create_element("span")?.unchecked_into();
                span.set_text_content(Some(&**text));
                span.set_class_name(TEXT_FALLBACK_CLASS);
                Ok((span, None))
            }
        }
    }
}

impl GallerySurface for DomGallerySurface {
    type Video = DomVideo;

    fn build_indicators(&mut self, count: usize) {
        self.indicator_host.set_inner_html("");
        self.indicators.clear();
        for index in 0..count {
            if let Ok(button) = self.create_indicator(index) {
                self.indicators.push(button);
            }
        }
    }

    fn set_reference_source(&mut self, path: &str) {
        self.reference.set_source(path);
    }

    fn reference_video(&self) -> DomVideo {
        self.reference.clone()
    }

    fn fill_slot(&mut self, slot: Slot, descriptor: &MediaDescriptor) {
        let container = self.container(slot).clone();
        container.set_inner_html("");
        let video = match self.create_content(descriptor) {
            Ok((element, video)) => {
                let _ = container.append_child(&element);
                video
            }
            Err(_) => None,
        };
        self.slot_videos[Self::slot_index(slot)] = video;
    }

    fn slot_video(&self, slot: Slot) -> Option<DomVideo> {
        self.slot_videos[Self::slot_index(slot)].clone()
    }

    fn set_caption_html(&mut self, caption: &str) {
        self.caption.set_inner_html(caption);
    }

    fn set_active_indicator(&mut self, index: usize) {
        for (i, button) in self.indicators.iter().enumerate() {
            button.set_class_name(&self.style.class_for(i == index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_classes() {
        let style = IndicatorStyle::showcase();
        assert_eq!(
            style.class_for(true),
            "w-2 h-2 rounded-full transition-colors bg-blue-600"
        );
        assert_eq!(
            style.class_for(false),
            "w-2 h-2 rounded-full transition-colors bg-gray-300"
        );
    }

    #[test]
    fn custom_indicator_style() {
        let style = IndicatorStyle {
            base: "dot",
            active: "on",
            inactive: "off",
        };
        assert_eq!(style.class_for(true), "dot on");
        assert_eq!(style.class_for(false), "dot off");
    }
}
