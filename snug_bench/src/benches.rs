// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module provides benchmarks for wrapping and measuring labels.

use snug::{break_lines, Constraints, Label, LabelOptions, SizeMode, TextStyle};
use snug_dev::{FixedAdvanceMeasurer, TextSamples};
use std::hint::black_box;
use tango_bench::{benchmark_fn, Benchmark};

const WIDTHS: [f32; 3] = [35.0, 200.0, 640.0];

static SAMPLES: TextSamples = TextSamples::new();

/// Benchmark for breaking the text samples at several widths.
pub fn wrap() -> Vec<Benchmark> {
    SAMPLES
        .all()
        .into_iter()
        .flat_map(|sample| {
            WIDTHS.into_iter().map(move |max_width| {
                benchmark_fn(format!("Wrap - {} {max_width}px", sample.name), move |b| {
                    let style = TextStyle::default();
                    let measurer = FixedAdvanceMeasurer::new(10.0)
                        .with_char('i', 4.0)
                        .with_char('m', 15.0);
                    b.iter(move || {
                        let breaks = break_lines(sample.text, &measurer, &style, max_width);
                        black_box(breaks)
                    })
                })
            })
        })
        .collect()
}

/// Benchmark for repeated measure passes, with and without the wrap cache.
pub fn label() -> Vec<Benchmark> {
    [("Cached", 4), ("Uncached", 0)]
        .into_iter()
        .map(|(name, cache_capacity)| {
            let text = SAMPLES.latin.text;
            benchmark_fn(format!("Label Measure - {name}"), move |b| {
                let measurer = FixedAdvanceMeasurer::new(10.0);
                let mut label = Label::with_options(LabelOptions {
                    cache_capacity,
                    ..LabelOptions::default()
                });
                label.set_text(text);
                b.iter(move || {
                    // A host typically measures with a loose constraint, then an exact one.
                    for mode in [SizeMode::AtMost(200.0), SizeMode::Exactly(200.0)] {
                        let size = label.measure(Constraints::width(mode), &measurer).unwrap();
                        black_box(size);
                    }
                })
            })
        })
        .collect()
}
