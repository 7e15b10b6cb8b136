// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use snug::{Constraints, Label, ResolvedSize, SizeMode};
use snug_dev::{FixedAdvanceMeasurer, RecordingSurface};
use tiny_skia::Pixmap;

use super::PixmapSurface;

/// Width of a character in the default measurer.
pub(crate) const ADVANCE: f32 = 10.0;

/// A label together with the measurer it is laid out with.
pub(crate) struct TestEnv {
    test_name: &'static str,
    pub(crate) measurer: FixedAdvanceMeasurer,
    pub(crate) label: Label,
}

impl TestEnv {
    /// Creates an environment for `text` where every character is [`ADVANCE`] pixels wide and
    /// lines are 20px tall with a 4px descent.
    pub(crate) fn new(test_name: &'static str, text: &str) -> Self {
        let mut label = Label::new();
        label.set_text(text);
        Self {
            test_name,
            measurer: FixedAdvanceMeasurer::new(ADVANCE),
            label,
        }
    }

    /// Replaces the measurer.
    pub(crate) fn with_measurer(mut self, measurer: FixedAdvanceMeasurer) -> Self {
        self.measurer = measurer;
        self.label.clear_cache();
        self
    }

    /// Runs a measure pass with the given width constraint.
    pub(crate) fn measure(&mut self, width: SizeMode) -> ResolvedSize {
        self.label
            .measure(Constraints::width(width), &self.measurer)
            .unwrap_or_else(|err| panic!("{}: measure failed: {err}", self.test_name))
    }

    /// Returns the lines from the last measure pass.
    pub(crate) fn lines(&self) -> Vec<&str> {
        self.label.lines().collect()
    }

    /// Runs a draw pass onto a recording surface.
    pub(crate) fn record(&self) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        self.label.draw(&mut surface);
        surface
    }

    /// Runs a draw pass onto a pixmap the size of the label.
    pub(crate) fn rasterize(&self) -> Pixmap {
        let size = self
            .label
            .size()
            .unwrap_or_else(|| panic!("{}: rasterizing an unmeasured label", self.test_name));
        let mut surface = PixmapSurface::new(
            size.width.ceil() as u32,
            size.height.ceil() as u32,
            &self.measurer,
        );
        self.label.draw(&mut surface);
        surface.into_pixmap()
    }
}
