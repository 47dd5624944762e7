// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` / `setInterval` timer host.
//!
//! Neither kind of timer is ever cleared: one-shot closures free themselves
//! after running, and interval closures are leaked for the life of the page.

use alloc::boxed::Box;

use showcase_core::time::Duration;
use showcase_core::timer::TimerHost;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so scheduling
// never has to fetch (and unwrap) the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, period_ms: i32) -> i32;
}

/// Schedules callbacks on the window's event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowTimers;

impl WindowTimers {
    /// Creates a timer host.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimerHost for WindowTimers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let closure = Closure::once_into_js(move || callback());
        set_timeout(&closure, clamp_ms(delay));
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) {
        let closure = Closure::wrap(callback);
        set_interval(closure.as_ref(), clamp_ms(period));
        closure.forget();
    }
}

/// Browsers treat delays above `i32::MAX` as zero; clamp instead.
fn clamp_ms(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}
