// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement capability.

use alloc::boxed::Box;
use core::ops::Range;

use crate::{LayoutError, TextStyle};

/// The glyph bounding box of a run of text.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct TextBounds {
    /// Distance from the top of the tallest glyph to the bottom of the lowest one.
    pub height: f32,
    /// Distance from the baseline down to the bottom of the lowest glyph.
    ///
    /// Negative when every glyph sits above the baseline.
    pub descent: f32,
}

/// Measures text for layout.
///
/// Implementations must be deterministic: the same text and style must always produce the
/// same advance and bounds, otherwise wrapping and sizing are not stable across passes.
pub trait TextMeasurer {
    /// Returns the advance width of `text` when rendered with `style`.
    fn advance(&self, text: &str, style: &TextStyle) -> f32;

    /// Returns the advance width of `text[range]`.
    ///
    /// `range` always lies on `char` boundaries. The default implementation measures the
    /// slice; implementations that can measure a range without slicing may override it.
    fn advance_range(&self, text: &str, range: Range<usize>, style: &TextStyle) -> f32 {
        self.advance(&text[range], style)
    }

    /// Returns the glyph bounds of `text` when rendered with `style`.
    fn bounds(&self, text: &str, style: &TextStyle) -> TextBounds;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn advance(&self, text: &str, style: &TextStyle) -> f32 {
        (**self).advance(text, style)
    }

    fn advance_range(&self, text: &str, range: Range<usize>, style: &TextStyle) -> f32 {
        (**self).advance_range(text, range, style)
    }

    fn bounds(&self, text: &str, style: &TextStyle) -> TextBounds {
        (**self).bounds(text, style)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn advance(&self, text: &str, style: &TextStyle) -> f32 {
        (**self).advance(text, style)
    }

    fn advance_range(&self, text: &str, range: Range<usize>, style: &TextStyle) -> f32 {
        (**self).advance_range(text, range, style)
    }

    fn bounds(&self, text: &str, style: &TextStyle) -> TextBounds {
        (**self).bounds(text, style)
    }
}

/// Vertical metrics shared by every line of a label.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct LineMetrics {
    /// Height of one line.
    pub line_height: f32,
    /// Distance from the top of a line to its baseline.
    pub baseline: f32,
}

impl LineMetrics {
    /// Derives line metrics from the glyph bounds of the whole text.
    pub fn from_bounds(bounds: TextBounds) -> Self {
        Self {
            line_height: bounds.height,
            baseline: bounds.height - bounds.descent,
        }
    }
}

pub(crate) fn checked_advance(advance: f32) -> Result<f32, LayoutError> {
    if advance.is_finite() && advance >= 0.0 {
        Ok(advance)
    } else {
        Err(LayoutError::InvalidAdvance { advance })
    }
}

pub(crate) fn checked_bounds(bounds: TextBounds) -> Result<TextBounds, LayoutError> {
    let TextBounds { height, descent } = bounds;
    if height.is_finite() && height >= 0.0 && descent.is_finite() {
        Ok(bounds)
    } else {
        Err(LayoutError::InvalidBounds { height, descent })
    }
}
