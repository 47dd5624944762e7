// Copyright 2026 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparison records.
//!
//! A [`ComparisonRecord`] pairs a reference clip with two [`MediaDescriptor`]s
//! (the baseline result and ours) and a caption. Records are compiled into
//! the page as `'static` literals; the list is never mutated and its order
//! defines navigation.

use alloc::borrow::Cow;

/// Which of the two dynamic containers a descriptor renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The baseline method's output.
    Baseline,
    /// Our method's output.
    Ours,
}

impl Slot {
    /// Both slots, in render order.
    pub const ALL: [Self; 2] = [Self::Baseline, Self::Ours];

    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Ours => "ours",
        }
    }
}

/// Discriminant of a [`MediaDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// A video clip.
    Video,
    /// A still image.
    Image,
    /// Plain text.
    Text,
}

/// What to render into a slot.
///
/// The union is closed: a tag outside {video, image} read from untyped data
/// becomes [`Text`](Self::Text) via [`from_tagged`](Self::from_tagged), so a
/// renderer matching on this enum never sees an unknown variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MediaDescriptor {
    /// A video path, played muted and in sync with the reference.
    Video(Cow<'static, str>),
    /// An image path.
    Image(Cow<'static, str>),
    /// Literal text, shown centered.
    Text(Cow<'static, str>),
}

impl MediaDescriptor {
    /// A video descriptor for a static path.
    #[must_use]
    pub const fn video(path: &'static str) -> Self {
        Self::Video(Cow::Borrowed(path))
    }

    /// An image descriptor for a static path.
    #[must_use]
    pub const fn image(path: &'static str) -> Self {
        Self::Image(Cow::Borrowed(path))
    }

    /// A text descriptor for static content.
    #[must_use]
    pub const fn text(content: &'static str) -> Self {
        Self::Text(Cow::Borrowed(content))
    }

    /// Builds a descriptor from a string tag, falling back to text for any
    /// tag other than `"video"` or `"image"`.
    #[must_use]
    pub fn from_tagged(kind: &str, content: impl Into<Cow<'static, str>>) -> Self {
        let content = content.into();
        match kind {
            "video" => Self::Video(content),
            "image" => Self::Image(content),
            _ => Self::Text(content),
        }
    }

    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        match self {
            Self::Video(_) => MediaKind::Video,
            Self::Image(_) => MediaKind::Image,
            Self::Text(_) => MediaKind::Text,
        }
    }

    /// Returns the path or literal text.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Video(c) | Self::Image(c) | Self::Text(c) => c,
        }
    }

    /// Returns `true` for the video variant.
    #[must_use]
    pub const fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}

/// One navigable entry in the comparison gallery.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComparisonRecord {
    reference: Cow<'static, str>,
    baseline: MediaDescriptor,
    ours: MediaDescriptor,
    caption: Cow<'static, str>,
}

impl ComparisonRecord {
    /// Creates a record from static parts.
    ///
    /// `caption` may contain simple inline markup; it is inserted as HTML.
    #[must_use]
    pub const fn new(
        reference: &'static str,
        baseline: MediaDescriptor,
        ours: MediaDescriptor,
        caption: &'static str,
    ) -> Self {
        Self {
            reference: Cow::Borrowed(reference),
            baseline,
            ours,
            caption: Cow::Borrowed(caption),
        }
    }

    /// Path of the reference video.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The baseline descriptor.
    #[must_use]
    pub fn baseline(&self) -> &MediaDescriptor {
        &self.baseline
    }

    /// Our descriptor.
    #[must_use]
    pub fn ours(&self) -> &MediaDescriptor {
        &self.ours
    }

    /// Descriptor for the given slot.
    #[must_use]
    pub fn descriptor(&self, slot: Slot) -> &MediaDescriptor {
        match slot {
            Slot::Baseline => &self.baseline,
            Slot::Ours => &self.ours,
        }
    }

    /// Caption markup.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Number of videos a render of this record synchronizes (1–3).
    #[must_use]
    pub fn video_count(&self) -> usize {
        1 + Slot::ALL
            .iter()
            .filter(|&&slot| self.descriptor(slot).is_video())
            .count()
    }
}
