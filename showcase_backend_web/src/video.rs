// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `HTMLVideoElement` as a [`MediaElement`].
//!
//! `play()` returns a promise in every current browser. A synchronous throw
//! and a rejected promise are both handed to the [`PlayAttempt`]; the
//! promise is awaited on the microtask queue with
//! [`wasm_bindgen_futures::spawn_local`], so no closure is leaked per call.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use js_sys::Promise;
use showcase_core::media::{MediaElement, PlayAttempt, PlaybackError};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, HtmlVideoElement};

/// Class that hides a video without affecting layout.
pub const HIDDEN_CLASS: &str = "opacity-0";

type EndedClosure = Closure<dyn FnMut()>;

/// A handle to a `<video>` element.
///
/// Clones refer to the same element and share the installed "ended" handler,
/// so replacing the handler through one clone replaces it for all.
#[derive(Clone)]
pub struct DomVideo {
    element: HtmlVideoElement,
    /// The JS closure currently assigned to `onended`. Kept alive here and
    /// dropped only after `onended` no longer points at it.
    ended: Rc<RefCell<Option<EndedClosure>>>,
}

impl core::fmt::Debug for DomVideo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomVideo")
            .field("src", &self.element.src())
            .field("has_ended_handler", &self.ended.borrow().is_some())
            .finish()
    }
}

impl DomVideo {
    /// Wraps an existing `<video>` element.
    #[must_use]
    pub fn new(element: HtmlVideoElement) -> Self {
        Self {
            element,
            ended: Rc::new(RefCell::new(None)),
        }
    }

    /// Creates a detached slot video: muted, non-looping, autoplaying and
    /// inline-playable.
    pub(crate) fn create(document: &web_sys::Document, src: &str) -> Result<Self, JsValue> {
        let element: HtmlVideoElement = document.create_element("video")?.unchecked_into();
        element.set_src(src);
        element.set_muted(true);
        element.set_loop(false);
        element.set_autoplay(true);
        element.set_attribute("playsinline", "")?;
        Ok(Self::new(element))
    }

    /// Returns the underlying element.
    #[must_use]
    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }

    /// Points the element at a new source.
    pub fn set_source(&self, src: &str) {
        self.element.set_src(src);
    }
}

impl MediaElement for DomVideo {
    fn source(&self) -> String {
        self.element.src()
    }

    fn play(&self, attempt: PlayAttempt) {
        let promise: Promise = match self.element.play() {
            Ok(promise) => promise,
            Err(err) => {
                attempt.reject(&self.source(), playback_error(&err));
                return;
            }
        };
        let source = self.source();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                attempt.reject(&source, playback_error(&err));
            }
        });
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }

    fn rewind(&self) {
        self.element.set_current_time(0.0);
    }

    fn set_visible(&self, visible: bool) {
        let _ = self
            .element
            .class_list()
            .toggle_with_force(HIDDEN_CLASS, !visible);
    }

    fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn set_ended_handler(&self, handler: Option<Box<dyn FnMut()>>) {
        match handler {
            Some(handler) => {
                let closure = Closure::wrap(handler);
                self.element
                    .set_onended(Some(closure.as_ref().unchecked_ref()));
                // The previous closure is dropped here, after `onended` moved on.
                *self.ended.borrow_mut() = Some(closure);
            }
            None => {
                self.element.set_onended(None);
                self.ended.borrow_mut().take();
            }
        }
    }
}

/// Classifies whatever `play()` threw or rejected with.
fn playback_error(value: &JsValue) -> PlaybackError {
    match value.dyn_ref::<DomException>() {
        Some(exception) => {
            PlaybackError::from_dom_exception(&exception.name(), exception.message())
        }
        None => PlaybackError::Other(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        ),
    }
}
