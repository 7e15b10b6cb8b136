// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line placement and drawing.

use core::iter::FusedIterator;

use crate::{Alignment, Padding, Spacing, TextLayout, TextStyle};

/// A surface that text can be drawn onto.
pub trait RenderSurface {
    /// Draws `text` with its baseline at `y`.
    ///
    /// `x` is the left edge of the text for [`Alignment::Left`] and its horizontal center for
    /// [`Alignment::Center`]; the surface is responsible for positioning the run around it.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    /// Moves the origin of subsequent draws by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        (**self).draw_text(text, x, y, style);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        (**self).translate(dx, dy);
    }
}

/// The anchor point of one line, relative to the content box.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct LineOrigin {
    /// Horizontal anchor, interpreted according to the alignment.
    pub x: f32,
    /// Vertical position of the baseline.
    pub y: f32,
}

/// Iterator over the anchor points of the lines of a layout.
#[derive(Clone, Debug)]
pub struct LineOrigins {
    x: f32,
    y: f32,
    advance: f32,
    remaining: usize,
}

impl Iterator for LineOrigins {
    type Item = LineOrigin;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let origin = LineOrigin {
            x: self.x,
            y: self.y,
        };
        self.y += self.advance;
        Some(origin)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineOrigins {}

impl FusedIterator for LineOrigins {}

/// Computes where each line of `layout` is anchored within a content box `content_width` wide.
///
/// The first baseline sits at the layout's baseline offset, and each following one a line
/// height plus the spacing gap further down.
pub fn line_origins(
    layout: &TextLayout,
    alignment: Alignment,
    spacing: Spacing,
    content_width: f32,
) -> LineOrigins {
    let metrics = layout.metrics();
    let x = match alignment {
        Alignment::Left => 0.0,
        Alignment::Center => content_width * 0.5,
    };
    LineOrigins {
        x,
        y: metrics.baseline,
        advance: metrics.line_height + spacing.gap(metrics.line_height),
        remaining: layout.line_count(),
    }
}

/// Draws the lines of `text` onto `surface`, offset by the top-left padding.
///
/// `layout` must have been computed for `text`. Lines are drawn in reading order, and the
/// surface's origin is restored afterwards.
pub fn render<S: RenderSurface + ?Sized>(
    text: &str,
    layout: &TextLayout,
    style: &TextStyle,
    spacing: Spacing,
    padding: Padding,
    content_width: f32,
    surface: &mut S,
) {
    surface.translate(padding.left, padding.top);
    let origins = line_origins(layout, style.alignment, spacing, content_width);
    for (line, origin) in layout.lines(text).zip(origins) {
        surface.draw_text(line, origin.x, origin.y, style);
    }
    surface.translate(-padding.left, -padding.top);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TextBounds, TextMeasurer};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    struct Fixed;

    impl TextMeasurer for Fixed {
        fn advance(&self, text: &str, _style: &TextStyle) -> f32 {
            text.chars().count() as f32 * 10.0
        }

        fn bounds(&self, _text: &str, _style: &TextStyle) -> TextBounds {
            TextBounds {
                height: 20.0,
                descent: 4.0,
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum Op {
        Text(String, f32, f32),
        Translate(f32, f32),
    }

    #[derive(Default)]
    struct Log(Vec<Op>);

    impl RenderSurface for Log {
        fn draw_text(&mut self, text: &str, x: f32, y: f32, _style: &TextStyle) {
            self.0.push(Op::Text(text.to_string(), x, y));
        }

        fn translate(&mut self, dx: f32, dy: f32) {
            self.0.push(Op::Translate(dx, dy));
        }
    }

    fn hello_world() -> TextLayout {
        TextLayout::new("HELLOWORLD", &Fixed, &TextStyle::default(), 35.0).unwrap()
    }

    #[test]
    fn left_aligned_origins() {
        let origins: Vec<_> = line_origins(&hello_world(), Alignment::Left, Spacing::default(), 35.0)
            .map(|origin| (origin.x, origin.y))
            .collect();
        assert_eq!(origins, [(0.0, 16.0), (0.0, 36.0), (0.0, 56.0), (0.0, 76.0)]);
    }

    #[test]
    fn centered_origins_use_half_width() {
        let origins = line_origins(&hello_world(), Alignment::Center, Spacing::default(), 35.0);
        assert_eq!(origins.len(), 4);
        assert!(
            origins.into_iter().all(|origin| origin.x == 17.5),
            "every line is anchored at the middle"
        );
    }

    #[test]
    fn spacing_advances_baselines() {
        let ys: Vec<_> = line_origins(
            &hello_world(),
            Alignment::Left,
            Spacing::new(1.5, 2.0),
            35.0,
        )
        .map(|origin| origin.y)
        .collect();
        assert_eq!(ys, [16.0, 48.0, 80.0, 112.0], "each line is 20 + 12 below the last");
    }

    #[test]
    fn render_translates_by_padding() {
        let layout = hello_world();
        let mut log = Log::default();
        render(
            "HELLOWORLD",
            &layout,
            &TextStyle::default(),
            Spacing::default(),
            Padding::new(4.0, 2.0, 4.0, 2.0),
            35.0,
            &mut log,
        );
        assert_eq!(
            log.0,
            [
                Op::Translate(4.0, 2.0),
                Op::Text("HEL".into(), 0.0, 16.0),
                Op::Text("LOW".into(), 0.0, 36.0),
                Op::Text("ORL".into(), 0.0, 56.0),
                Op::Text("D".into(), 0.0, 76.0),
                Op::Translate(-4.0, -2.0),
            ]
        );
    }
}
