// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer contract.
//!
//! The sequence player needs exactly two primitives: a one-shot delay and a
//! repeating interval. Neither is ever cancelled; the page's lifetime bounds
//! them. Backends map these onto `setTimeout`/`setInterval`; tests use a
//! virtual clock.

use alloc::boxed::Box;

use crate::time::Duration;

/// Schedules callbacks on the host's event loop.
///
/// Callbacks run on the same thread that scheduled them, never re-entrantly
/// from inside the scheduling call.
pub trait TimerHost {
    /// Runs `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);

    /// Runs `callback` every `period`, first after one full period.
    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>);
}
