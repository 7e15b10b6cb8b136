// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling and spacing for labels.

use peniko::color::palette::css;
use peniko::Color;

/// Horizontal alignment of each line within the content box.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Alignment {
    /// Lines are anchored at the left edge of the content box.
    #[default]
    Left,
    /// Lines are centered around the middle of the content box.
    Center,
}

/// The resolved style of a label.
///
/// This is a plain value: a label captures a copy at the start of each measure and draw pass,
/// so a pass always sees one consistent style.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    /// Color of the glyphs.
    pub color: Color,
    /// Font size in device pixels.
    pub font_size: f32,
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Whether glyph edges should be anti-aliased.
    pub antialias: bool,
}

impl TextStyle {
    /// The parts of the style that can change measured widths and bounds.
    ///
    /// Color and alignment only matter when drawing.
    pub(crate) fn measure_key(&self) -> MeasureKey {
        MeasureKey {
            font_size: self.font_size.to_bits(),
            antialias: self.antialias,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: css::BLACK,
            font_size: 20.0,
            alignment: Alignment::Left,
            antialias: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct MeasureKey {
    font_size: u32,
    antialias: bool,
}

/// Extra space between consecutive lines.
///
/// The gap inserted between two lines is `line_height * (multiplier - 1) + extra`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Spacing {
    /// Multiple of the line height taken by each line.
    pub multiplier: f32,
    /// Pixels added on top of the multiplied line height.
    pub extra: f32,
}

impl Spacing {
    /// Creates a new spacing policy.
    pub const fn new(multiplier: f32, extra: f32) -> Self {
        Self { multiplier, extra }
    }

    /// The gap between the bottom of one line and the top of the next.
    pub fn gap(self, line_height: f32) -> f32 {
        line_height * (self.multiplier - 1.0) + self.extra
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Space around the content box, in device pixels.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Padding {
    /// Left padding.
    pub left: f32,
    /// Top padding.
    pub top: f32,
    /// Right padding.
    pub right: f32,
    /// Bottom padding.
    pub bottom: f32,
}

impl Padding {
    /// Creates padding from the four sides, in left, top, right, bottom order.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same padding on every side.
    pub const fn uniform(amount: f32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Conversion from scale-independent font sizes to device pixels.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DisplayMetrics {
    /// Device pixels per scale-independent pixel, including the user's font scale preference.
    pub scaled_density: f32,
}

impl DisplayMetrics {
    /// Creates display metrics for the given scaled density.
    pub const fn new(scaled_density: f32) -> Self {
        Self { scaled_density }
    }

    /// Converts a scale-independent size to device pixels.
    pub fn sp_to_px(&self, sp: f32) -> f32 {
        sp * self.scaled_density
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}
