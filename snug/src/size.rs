// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size resolution under host layout constraints.

use crate::{Padding, Spacing, TextLayout};

/// How the host constrains one dimension of a label.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub enum SizeMode {
    /// No constraint; the label takes the size of its content.
    #[default]
    Unspecified,
    /// The label may be at most this large.
    AtMost(f32),
    /// The label must be exactly this large.
    Exactly(f32),
}

impl SizeMode {
    /// Returns the size carried by the constraint, if any.
    pub fn size(self) -> Option<f32> {
        match self {
            Self::Unspecified => None,
            Self::AtMost(size) | Self::Exactly(size) => Some(size),
        }
    }

    /// Returns the space available under this constraint, which is unbounded for
    /// [`SizeMode::Unspecified`].
    pub fn available(self) -> f32 {
        self.size().unwrap_or(f32::INFINITY)
    }

    /// Shrinks the constraint by `amount`, never below zero.
    ///
    /// A `NaN` size places no bound, so it deflates to [`SizeMode::Unspecified`].
    #[must_use]
    pub fn deflate(self, amount: f32) -> Self {
        match self {
            Self::Unspecified => Self::Unspecified,
            Self::AtMost(size) | Self::Exactly(size) if size.is_nan() => Self::Unspecified,
            Self::AtMost(size) => Self::AtMost((size - amount).max(0.0)),
            Self::Exactly(size) => Self::Exactly((size - amount).max(0.0)),
        }
    }
}

/// The width and height constraints of a measure pass.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Constraints {
    /// Width constraint.
    pub width: SizeMode,
    /// Height constraint.
    ///
    /// Labels derive their height from their content, so this is not consulted.
    pub height: SizeMode,
}

impl Constraints {
    /// Creates constraints for both dimensions.
    pub const fn new(width: SizeMode, height: SizeMode) -> Self {
        Self { width, height }
    }

    /// Creates constraints that only restrict the width.
    pub const fn width(width: SizeMode) -> Self {
        Self::new(width, SizeMode::Unspecified)
    }
}

/// Which vertical position a label reports as its baseline.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum BaselinePolicy {
    /// The baseline of the first line.
    #[default]
    FirstLine,
    /// The bottom of the content box.
    ///
    /// Aligning on this puts the last line's descent, rather than any baseline, on the
    /// siblings' baseline. Use it only to reproduce layouts that depended on it.
    ContentBottom,
}

/// The size of a label after a measure pass.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct ResolvedSize {
    /// Outer width, including padding.
    pub width: f32,
    /// Outer height, including padding.
    pub height: f32,
    /// Offset of the baseline from the top of the outer box.
    pub baseline: f32,
    /// Width of the content box.
    pub content_width: f32,
    /// Height of the content box.
    pub content_height: f32,
}

/// Resolves the size of a wrapped layout.
///
/// `width` is the host's constraint on the outer box. It is deflated by the horizontal
/// padding before being applied to the content, so for `AtMost` and `Exactly` constraints the
/// outer width never exceeds the constraint (unless the padding alone does).
///
/// A single line takes its measured width when unconstrained, at most the constraint under
/// [`SizeMode::AtMost`], and exactly the constraint under [`SizeMode::Exactly`], even if the
/// text overflows. Multiple lines always fill the constraint. The content height is one line
/// height per line plus the spacing gap between consecutive lines, with no gap after the last.
pub fn resolve_size(
    layout: &TextLayout,
    width: SizeMode,
    spacing: Spacing,
    padding: Padding,
    baseline: BaselinePolicy,
) -> ResolvedSize {
    let metrics = layout.metrics();
    let line_count = layout.line_count();
    let content = width.deflate(padding.horizontal());

    let (content_width, content_height) = if line_count <= 1 {
        let width = match content {
            SizeMode::Unspecified => layout.text_width(),
            SizeMode::AtMost(size) => layout.text_width().min(size),
            SizeMode::Exactly(size) => size,
        };
        (width, metrics.line_height)
    } else {
        #[allow(
            clippy::cast_precision_loss,
            reason = "line counts are bounded by the length of a label"
        )]
        let lines = line_count as f32;
        let height = metrics.line_height * lines + spacing.gap(metrics.line_height) * (lines - 1.0);
        (content.size().unwrap_or(layout.text_width()), height)
    };

    let baseline = match baseline {
        BaselinePolicy::FirstLine => padding.top + metrics.baseline,
        BaselinePolicy::ContentBottom => padding.top + content_height,
    };

    ResolvedSize {
        width: content_width + padding.horizontal(),
        height: content_height + padding.vertical(),
        baseline,
        content_width,
        content_height,
    }
}
