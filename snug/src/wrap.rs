// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy character-level line breaking.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;

use smallvec::SmallVec;

use crate::measure::{checked_advance, checked_bounds};
use crate::{LayoutError, LineMetrics, TextBounds, TextMeasurer, TextStyle};

/// The byte ranges of each line of a wrapped text, in reading order.
///
/// Ranges are contiguous, non-overlapping and lie on `char` boundaries, so concatenating the
/// lines always reproduces the text they were computed from.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct LineBreaks {
    ranges: SmallVec<[Range<usize>; 4]>,
}

impl LineBreaks {
    fn single(len: usize) -> Self {
        let mut ranges = SmallVec::new();
        ranges.push(0..len);
        Self { ranges }
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if there are no lines.
    ///
    /// Breaks produced by [`break_lines`] always contain at least one line.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the byte range of each line.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Returns an iterator over the lines of `text`.
    ///
    /// `text` must be the text these breaks were computed for.
    pub fn lines<'t>(&self, text: &'t str) -> Lines<'_, 't> {
        Lines {
            text,
            ranges: self.ranges.iter(),
        }
    }
}

/// Iterator over the lines of a wrapped text.
///
/// Lines borrow from the text, not from the breaks they were computed with.
#[derive(Clone, Debug)]
pub struct Lines<'r, 't> {
    text: &'t str,
    ranges: slice::Iter<'r, Range<usize>>,
}

impl Lines<'_, '_> {
    pub(crate) fn empty() -> Self {
        Self {
            text: "",
            ranges: <&[Range<usize>]>::default().iter(),
        }
    }
}

impl<'t> Iterator for Lines<'_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next()?;
        Some(&self.text[range.clone()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl DoubleEndedIterator for Lines<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next_back()?;
        Some(&self.text[range.clone()])
    }
}

impl ExactSizeIterator for Lines<'_, '_> {}

impl FusedIterator for Lines<'_, '_> {}

/// Breaks `text` into lines no wider than `max_width`.
///
/// Lines are packed greedily one `char` at a time; word boundaries are not considered. A
/// character that is wider than `max_width` on its own is placed alone on its line, so the
/// result has at most one line per character and never drops text. When `max_width` is zero
/// or negative every character ends up on its own line. A `NaN` width is unbounded.
///
/// Empty text yields a single empty line.
///
/// The measurer is asked for the advance of a growing prefix of each line, so the work is
/// quadratic in the length of the text. This is intended for labels, not documents.
pub fn break_lines<M: TextMeasurer + ?Sized>(
    text: &str,
    measurer: &M,
    style: &TextStyle,
    max_width: f32,
) -> Result<LineBreaks, LayoutError> {
    let text_width = checked_advance(measurer.advance(text, style))?;
    break_measured_lines(text, text_width, measurer, style, max_width)
}

/// Breaks `text` into lines and returns them as slices.
///
/// See [`break_lines`] for the breaking rules.
pub fn wrap<'a, M: TextMeasurer + ?Sized>(
    text: &'a str,
    measurer: &M,
    style: &TextStyle,
    max_width: f32,
) -> Result<Vec<&'a str>, LayoutError> {
    let breaks = break_lines(text, measurer, style, max_width)?;
    Ok(breaks.lines(text).collect())
}

fn break_measured_lines<M: TextMeasurer + ?Sized>(
    text: &str,
    text_width: f32,
    measurer: &M,
    style: &TextStyle,
    max_width: f32,
) -> Result<LineBreaks, LayoutError> {
    let max_width = if max_width.is_nan() {
        f32::INFINITY
    } else {
        max_width
    };

    if text.is_empty() || text_width <= max_width {
        return Ok(LineBreaks::single(text.len()));
    }

    let mut ranges = SmallVec::new();
    let mut start = 0;
    // End of the longest prefix of the current line known to fit.
    let mut fitted = 0;
    for (index, ch) in text.char_indices() {
        let end = index + ch.len_utf8();
        let advance = checked_advance(measurer.advance_range(text, start..end, style))?;
        if advance <= max_width {
            fitted = end;
            continue;
        }
        if fitted == start {
            log::debug!(
                "character at {start}..{end} is wider than {max_width}px, placing it on its own line"
            );
            ranges.push(start..end);
            start = end;
            fitted = end;
            continue;
        }
        ranges.push(start..fitted);
        start = fitted;
        fitted = end;
    }
    if start < text.len() {
        ranges.push(start..text.len());
    }

    Ok(LineBreaks { ranges })
}

/// Measures the advance and bounds of `text` on a single line, rejecting invalid values.
pub(crate) fn measure_text<M: TextMeasurer + ?Sized>(
    text: &str,
    measurer: &M,
    style: &TextStyle,
) -> Result<(f32, TextBounds), LayoutError> {
    let text_width = checked_advance(measurer.advance(text, style))?;
    let bounds = checked_bounds(measurer.bounds(text, style))?;
    Ok((text_width, bounds))
}

/// The result of wrapping a text: its line breaks plus the metrics they were computed with.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct TextLayout {
    breaks: LineBreaks,
    metrics: LineMetrics,
    text_width: f32,
}

impl TextLayout {
    /// Measures and wraps `text` to `max_width`.
    pub fn new<M: TextMeasurer + ?Sized>(
        text: &str,
        measurer: &M,
        style: &TextStyle,
        max_width: f32,
    ) -> Result<Self, LayoutError> {
        let (text_width, bounds) = measure_text(text, measurer, style)?;
        Self::from_measurements(text, text_width, bounds, measurer, style, max_width)
    }

    /// Wraps `text` given its already validated single-line advance and bounds.
    pub(crate) fn from_measurements<M: TextMeasurer + ?Sized>(
        text: &str,
        text_width: f32,
        bounds: TextBounds,
        measurer: &M,
        style: &TextStyle,
        max_width: f32,
    ) -> Result<Self, LayoutError> {
        let breaks = break_measured_lines(text, text_width, measurer, style, max_width)?;
        Ok(Self {
            breaks,
            metrics: LineMetrics::from_bounds(bounds),
            text_width,
        })
    }

    /// Returns the line breaks.
    pub fn breaks(&self) -> &LineBreaks {
        &self.breaks
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.breaks.len()
    }

    /// Returns the line height and baseline shared by every line.
    pub fn metrics(&self) -> LineMetrics {
        self.metrics
    }

    /// Returns the advance of the whole text laid out on a single line.
    pub fn text_width(&self) -> f32 {
        self.text_width
    }

    /// Returns an iterator over the lines of `text`.
    ///
    /// `text` must be the text this layout was computed for.
    pub fn lines<'t>(&self, text: &'t str) -> Lines<'_, 't> {
        self.breaks.lines(text)
    }
}
