// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The label widget: configuration, measure pass and draw pass.

use alloc::string::String;

use crate::cache::{WrapCache, WrapLookup};
use crate::wrap::measure_text;
use crate::{
    render, resolve_size, Alignment, BaselinePolicy, Color, Constraints, DisplayMetrics,
    LayoutError, Lines, Padding, RenderSurface, ResolvedSize, SizeMode, Spacing, TextLayout,
    TextMeasurer, TextStyle,
};

/// What a host has to do after a label changed.
///
/// [`Invalidation::Relayout`] implies a redraw.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Invalidation {
    /// Only the appearance changed; the size from the last measure pass still holds.
    Redraw,
    /// The size may have changed; the label must be measured again before it is drawn.
    Relayout,
}

/// Construction-time options for a [`Label`].
#[derive(Clone, Debug)]
pub struct LabelOptions {
    /// Spacing between lines.
    pub spacing: Spacing,
    /// Padding around the content box.
    pub padding: Padding,
    /// Which position is reported as the baseline.
    pub baseline: BaselinePolicy,
    /// How many wrap results to keep across measure passes; zero disables the cache.
    pub cache_capacity: usize,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            spacing: Spacing::default(),
            padding: Padding::default(),
            baseline: BaselinePolicy::default(),
            cache_capacity: 4,
        }
    }
}

#[derive(Clone, Debug)]
struct Measured {
    layout: TextLayout,
    size: ResolvedSize,
}

/// A single-style text label that wraps to its width and fits its height to its glyphs.
///
/// Hosts drive a label through two passes:
///
/// - [`measure`](Self::measure) wraps the text for the given constraints and resolves the
///   label's size, and
/// - [`draw`](Self::draw) paints the lines from the last measure pass onto a surface.
///
/// Setters record what the host has to redo, which it collects with
/// [`take_invalidation`](Self::take_invalidation). Setters that can change the size also drop
/// the measured layout, so drawing before the next measure pass draws nothing.
#[derive(Debug)]
pub struct Label {
    text: String,
    style: TextStyle,
    spacing: Spacing,
    padding: Padding,
    baseline: BaselinePolicy,
    measured: Option<Measured>,
    cache: WrapCache,
    pending: Option<Invalidation>,
}

impl Label {
    /// Creates an empty label with the default style and options.
    pub fn new() -> Self {
        Self::with_options(LabelOptions::default())
    }

    /// Creates an empty label with the given options.
    pub fn with_options(options: LabelOptions) -> Self {
        Self {
            text: String::new(),
            style: TextStyle::default(),
            spacing: options.spacing,
            padding: options.padding,
            baseline: options.baseline,
            measured: None,
            cache: WrapCache::new(options.cache_capacity),
            pending: None,
        }
    }

    /// Returns the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the current style.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Returns the line spacing.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Returns the padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Returns the baseline policy.
    pub fn baseline_policy(&self) -> BaselinePolicy {
        self.baseline
    }

    /// Sets the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate(Invalidation::Relayout);
    }

    /// Sets the text to the empty string.
    pub fn clear_text(&mut self) {
        self.text.clear();
        self.invalidate(Invalidation::Relayout);
    }

    /// Sets the line spacing: each line takes `multiplier` line heights plus `extra` pixels.
    pub fn set_spacing(&mut self, multiplier: f32, extra: f32) {
        self.spacing = Spacing::new(multiplier, extra);
        self.invalidate(Invalidation::Relayout);
    }

    /// Sets the font size in scale-independent pixels.
    pub fn set_font_size(&mut self, sp: f32, metrics: &DisplayMetrics) {
        self.set_font_size_px(metrics.sp_to_px(sp));
    }

    /// Sets the font size in device pixels.
    pub fn set_font_size_px(&mut self, px: f32) {
        self.style.font_size = px;
        self.invalidate(Invalidation::Relayout);
    }

    /// Sets the text color.
    pub fn set_text_color(&mut self, color: Color) {
        self.style.color = color;
        self.invalidate(Invalidation::Redraw);
    }

    /// Sets the horizontal alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.style.alignment = alignment;
        self.invalidate(Invalidation::Redraw);
    }

    /// Aligns lines to the left edge.
    pub fn set_align_left(&mut self) {
        self.set_alignment(Alignment::Left);
    }

    /// Centers lines within the label.
    pub fn set_align_center(&mut self) {
        self.set_alignment(Alignment::Center);
    }

    /// Enables or disables anti-aliasing.
    pub fn set_antialias(&mut self, antialias: bool) {
        self.style.antialias = antialias;
        self.invalidate(Invalidation::Redraw);
    }

    /// Sets the padding on all four sides.
    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.invalidate(Invalidation::Relayout);
    }

    /// Sets the bottom padding, keeping the other sides.
    pub fn set_padding_bottom(&mut self, bottom: f32) {
        self.padding.bottom = bottom;
        self.invalidate(Invalidation::Relayout);
    }

    /// Sets which position is reported as the baseline.
    pub fn set_baseline_policy(&mut self, baseline: BaselinePolicy) {
        self.baseline = baseline;
        self.invalidate(Invalidation::Relayout);
    }

    /// Returns and clears the work requested by setters since the last call.
    pub fn take_invalidation(&mut self) -> Option<Invalidation> {
        self.pending.take()
    }

    /// Drops every cached wrap result.
    ///
    /// See [`measure`](Self::measure) for when switching measurers requires this.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.invalidate(Invalidation::Relayout);
    }

    fn invalidate(&mut self, invalidation: Invalidation) {
        if invalidation == Invalidation::Relayout {
            self.measured = None;
        }
        self.pending = self.pending.max(Some(invalidation));
    }

    /// Wraps the text for `constraints` and resolves the size of the label.
    ///
    /// The text is wrapped to the width constraint minus the horizontal padding. The height
    /// constraint is not consulted: the height always follows from the number of lines.
    ///
    /// Every pass measures the whole text once, which is validated and compared against the
    /// cached wrap results. Only the line breaking itself is reused across passes. Cached
    /// breaks can only tell measurers apart by the advance and bounds of the whole text, so
    /// call [`clear_cache`](Self::clear_cache) when switching to a measurer that agrees on
    /// those but distributes the advance differently.
    pub fn measure<M: TextMeasurer + ?Sized>(
        &mut self,
        constraints: Constraints,
        measurer: &M,
    ) -> Result<ResolvedSize, LayoutError> {
        let layout = match self.wrap_text(constraints.width, measurer) {
            Ok(layout) => layout,
            Err(err) => {
                self.measured = None;
                return Err(err);
            }
        };

        let size = resolve_size(
            &layout,
            constraints.width,
            self.spacing,
            self.padding,
            self.baseline,
        );
        log::trace!(
            "measured {} line(s) into {}x{}",
            layout.line_count(),
            size.width,
            size.height
        );
        self.measured = Some(Measured { layout, size });
        Ok(size)
    }

    fn wrap_text<M: TextMeasurer + ?Sized>(
        &mut self,
        width: SizeMode,
        measurer: &M,
    ) -> Result<TextLayout, LayoutError> {
        let style = self.style;
        let max_width = width.deflate(self.padding.horizontal()).available();
        let text = &self.text;
        let (text_width, bounds) = measure_text(text, measurer, &style)?;
        let lookup = WrapLookup {
            text,
            measure: style.measure_key(),
            max_width,
            text_width,
            bounds,
        };
        self.cache.get_or_insert(lookup, || {
            TextLayout::from_measurements(text, text_width, bounds, measurer, &style, max_width)
        })
    }

    /// Draws the lines from the last measure pass onto `surface`.
    ///
    /// Draws nothing if the label has not been measured since its size last changed.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let Some(measured) = &self.measured else {
            log::debug!("skipping draw of a label that has not been measured");
            return;
        };
        let style = self.style;
        render(
            &self.text,
            &measured.layout,
            &style,
            self.spacing,
            self.padding,
            measured.size.content_width,
            surface,
        );
    }

    /// Returns the size from the last measure pass.
    pub fn size(&self) -> Option<ResolvedSize> {
        self.measured.as_ref().map(|measured| measured.size)
    }

    /// Returns the baseline offset from the last measure pass.
    pub fn baseline(&self) -> Option<f32> {
        self.size().map(|size| size.baseline)
    }

    /// Returns the layout from the last measure pass.
    pub fn layout(&self) -> Option<&TextLayout> {
        self.measured.as_ref().map(|measured| &measured.layout)
    }

    /// Returns the lines from the last measure pass, or nothing if the label is not measured.
    pub fn lines(&self) -> Lines<'_, '_> {
        match &self.measured {
            Some(measured) => measured.layout.lines(&self.text),
            None => Lines::empty(),
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}
