// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The comparisons shown in the gallery, in navigation order.

use showcase_core::record::{ComparisonRecord, MediaDescriptor};

pub(crate) static COMPARISONS: [ComparisonRecord; 3] = [
    ComparisonRecord::new(
        "assets/baseline_1_ref.mp4",
        MediaDescriptor::video("assets/baseline_1_sfv.mp4"),
        MediaDescriptor::video("assets/baseline_1_ours.mp4"),
        "Baseline methods are unable to complete turning motions due to inaccurate estimation of the ball's depth.",
    ),
    ComparisonRecord::new(
        "assets/baseline_2_ref.mp4",
        MediaDescriptor::video("assets/baseline_2_sfv.mp4"),
        MediaDescriptor::video("assets/baseline_2_ours.mp4"),
        "The imperfect 3D reconstruction in baseline methods limits their ability to capture precise dribbling styles.",
    ),
    ComparisonRecord::new(
        "assets/baseline_3_ref.mp4",
        MediaDescriptor::video("assets/baseline_3_sfv.mp4"),
        MediaDescriptor::video("assets/baseline_3_ours.mp4"),
        "Our method generalizes robustly to non-human topologies, while baseline approaches struggle with limb coordination due to the absence of tailored priors.",
    ),
];
