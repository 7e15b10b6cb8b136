// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A raster surface that paints each character as a solid box.
//!
//! Boxes span the character's advance minus a one pixel gap, and rise from the baseline by the
//! ascent of the line. That is enough to check on pixels where lines and characters land.

use snug::{Alignment, RenderSurface, TextMeasurer, TextStyle};
use tiny_skia::{Paint, Pixmap, Rect, Transform};

pub(crate) struct PixmapSurface<'a, M: TextMeasurer> {
    pixmap: Pixmap,
    measurer: &'a M,
    transform: Transform,
}

impl<'a, M: TextMeasurer> PixmapSurface<'a, M> {
    pub(crate) fn new(width: u32, height: u32, measurer: &'a M) -> Self {
        let pixmap = Pixmap::new(width.max(1), height.max(1)).expect("valid pixmap size");
        Self {
            pixmap,
            measurer,
            transform: Transform::identity(),
        }
    }

    pub(crate) fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

impl<M: TextMeasurer> RenderSurface for PixmapSurface<'_, M> {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let width = self.measurer.advance(text, style);
        let bounds = self.measurer.bounds(text, style);
        let ascent = bounds.height - bounds.descent;
        let left = match style.alignment {
            Alignment::Left => x,
            Alignment::Center => x - width * 0.5,
        };

        let rgba = style.color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
        paint.anti_alias = style.antialias;

        let mut offset = 0.0;
        let mut buf = [0_u8; 4];
        for ch in text.chars() {
            let advance = self.measurer.advance(ch.encode_utf8(&mut buf), style);
            if let Some(rect) =
                Rect::from_xywh(left + offset, y - ascent, (advance - 1.0).max(0.0), ascent)
            {
                self.pixmap.fill_rect(rect, &paint, self.transform, None);
            }
            offset += advance;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.pre_translate(dx, dy);
    }
}
