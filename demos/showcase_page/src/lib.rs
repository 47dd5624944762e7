// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project showcase page.
//!
//! Starts the staggered three-video sequence and the comparison gallery on
//! the host page. Either component is skipped, with a console warning, when
//! the page lacks its elements.
//!
//! Build with: `wasm-pack build --target web demos/showcase_page`
//! Then serve `demos/showcase_page/` (with an `assets/` directory of clips)
//! and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod content;

use alloc::rc::Rc;
use core::cell::RefCell;

use showcase_backend_web::{
    ConsoleSink, GalleryAnchors, IndicatorStyle, SequenceAnchors, mount_gallery, mount_sequence,
};
use showcase_core::sequence::SequenceConfig;
use showcase_core::trace::Tracer;
use wasm_bindgen::prelude::*;

/// Entry point for the showcase page.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let tracer = Tracer::new(Rc::new(RefCell::new(ConsoleSink::new())));

    // The repeating interval owns the player from here on.
    let _sequence = mount_sequence(
        &document,
        &SequenceAnchors::showcase(),
        SequenceConfig::showcase(),
        tracer.clone(),
    );

    // Click handlers keep the gallery alive.
    let _gallery = mount_gallery(
        &document,
        &GalleryAnchors::showcase(),
        &content::COMPARISONS[..],
        IndicatorStyle::showcase(),
        tracer,
    )?;

    web_sys::console::log_1(&JsValue::from_str("Project page loaded."));
    Ok(())
}
