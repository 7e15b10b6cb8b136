// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Snug Dev
//!
//! This crate provides utilities for developing Snug: deterministic measurers and a surface
//! that records what was drawn, so that layouts can be checked without a font or a renderer.

use std::cell::Cell;
use std::collections::HashMap;

use snug::{RenderSurface, TextBounds, TextMeasurer, TextStyle};

/// A measurer where every `char` has the same advance, unless overridden.
///
/// Advances scale with the font size: `advance` is the width of a character at
/// [`REFERENCE_FONT_SIZE`](Self::REFERENCE_FONT_SIZE). Every call to
/// [`TextMeasurer::advance`] or [`TextMeasurer::advance_range`] is counted.
#[derive(Debug)]
pub struct FixedAdvanceMeasurer {
    advance: f32,
    overrides: HashMap<char, f32>,
    bounds: TextBounds,
    calls: Cell<usize>,
}

impl FixedAdvanceMeasurer {
    /// The font size at which advances and bounds are given unscaled.
    pub const REFERENCE_FONT_SIZE: f32 = 20.0;

    /// Creates a measurer with `advance` pixels per character and 20px lines with a 4px descent.
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            overrides: HashMap::new(),
            bounds: TextBounds {
                height: 20.0,
                descent: 4.0,
            },
            calls: Cell::new(0),
        }
    }

    /// Gives `ch` its own advance.
    #[must_use]
    pub fn with_char(mut self, ch: char, advance: f32) -> Self {
        self.overrides.insert(ch, advance);
        self
    }

    /// Replaces the glyph bounds reported for every text.
    #[must_use]
    pub fn with_bounds(mut self, height: f32, descent: f32) -> Self {
        self.bounds = TextBounds { height, descent };
        self
    }

    /// Returns how many advances have been measured.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Resets the call counter.
    pub fn reset_calls(&self) {
        self.calls.set(0);
    }

    fn scale(style: &TextStyle) -> f32 {
        style.font_size / Self::REFERENCE_FONT_SIZE
    }

    fn char_advance(&self, ch: char) -> f32 {
        self.overrides.get(&ch).copied().unwrap_or(self.advance)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn advance(&self, text: &str, style: &TextStyle) -> f32 {
        self.calls.set(self.calls.get() + 1);
        let unscaled: f32 = text.chars().map(|ch| self.char_advance(ch)).sum();
        unscaled * Self::scale(style)
    }

    fn bounds(&self, _text: &str, style: &TextStyle) -> TextBounds {
        let scale = Self::scale(style);
        TextBounds {
            height: self.bounds.height * scale,
            descent: self.bounds.descent * scale,
        }
    }
}

/// A measurer that reports a fixed advance for every text, whatever its length.
///
/// Useful to provoke misbehavior, e.g. negative advances.
#[derive(Debug, Clone, Copy)]
pub struct ConstantMeasurer {
    /// The advance reported for every text.
    pub advance: f32,
    /// The bounds reported for every text.
    pub bounds: TextBounds,
}

impl TextMeasurer for ConstantMeasurer {
    fn advance(&self, _text: &str, _style: &TextStyle) -> f32 {
        self.advance
    }

    fn bounds(&self, _text: &str, _style: &TextStyle) -> TextBounds {
        self.bounds
    }
}

/// A single call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A run of text was drawn.
    Text {
        /// The text of the run.
        text: String,
        /// Horizontal anchor in surface coordinates.
        x: f32,
        /// Baseline in surface coordinates.
        y: f32,
        /// The style the run was drawn with.
        style: TextStyle,
    },
    /// The origin was moved.
    Translate {
        /// Horizontal offset.
        dx: f32,
        /// Vertical offset.
        dy: f32,
    },
}

/// A surface that records draw calls, with text positions resolved to surface coordinates.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    origin: (f32, f32),
}

impl RecordingSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded command, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the text runs with their surface positions, in order.
    pub fn texts(&self) -> Vec<(&str, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                DrawCommand::Translate { .. } => None,
            })
            .collect()
    }

    /// Returns the current origin.
    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Forgets all recorded commands; the origin is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x: self.origin.0 + x,
            y: self.origin.1 + y,
            style: *style,
        });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
        self.commands.push(DrawCommand::Translate { dx, dy });
    }
}

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples.
#[derive(Debug)]
pub struct TextSamples {
    /// A short label.
    pub short: Sample,
    /// A sentence-length Latin text.
    pub latin: Sample,
    /// A Japanese text, where every character is a multi-byte sequence.
    pub japanese: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        Self {
            short: Sample {
                name: "short",
                text: "HELLOWORLD",
            },
            latin: Sample {
                name: "latin",
                text: "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                       tempor incididunt ut labore et dolore magna aliqua.",
            },
            japanese: Sample {
                name: "japanese",
                text: "吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。",
            },
        }
    }

    /// Returns every sample.
    pub fn all(&self) -> [&Sample; 3] {
        [&self.short, &self.latin, &self.japanese]
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
