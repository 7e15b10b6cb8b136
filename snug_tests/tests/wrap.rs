// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text wrapping tests.

use snug::{break_lines, wrap, SizeMode, TextMeasurer, TextStyle};
use snug_dev::{FixedAdvanceMeasurer, TextSamples};

use crate::test_name;
use crate::util::TestEnv;

fn wrap_fixed(text: &str, max_width: f32) -> Vec<&str> {
    wrap(
        text,
        &FixedAdvanceMeasurer::new(10.0),
        &TextStyle::default(),
        max_width,
    )
    .unwrap()
}

#[test]
fn wrap_hello_world_at_35() {
    let mut env = TestEnv::new(test_name!(), "HELLOWORLD");
    env.measure(SizeMode::AtMost(35.0));
    assert_eq!(env.lines(), ["HEL", "LOW", "ORL", "D"]);
}

#[test]
fn wrap_hello_world_fits_at_500() {
    let mut env = TestEnv::new(test_name!(), "HELLOWORLD");
    env.measure(SizeMode::AtMost(500.0));
    assert_eq!(env.lines(), ["HELLOWORLD"]);
}

#[test]
fn wrap_empty_text() {
    let mut env = TestEnv::new(test_name!(), "");
    env.measure(SizeMode::AtMost(100.0));
    assert_eq!(env.lines(), [""]);
}

#[test]
fn wrap_unconstrained_never_breaks() {
    let samples = TextSamples::new();
    for sample in samples.all() {
        let mut env = TestEnv::new(test_name!(), sample.text);
        env.measure(SizeMode::Unspecified);
        assert_eq!(env.lines(), [sample.text], "{}", sample.name);
    }
}

#[test]
fn wrap_reconstructs_samples() {
    let samples = TextSamples::new();
    for sample in samples.all() {
        for max_width in [-10.0, 0.0, 1.0, 9.5, 10.0, 45.0, 123.0, 640.0] {
            let lines = wrap_fixed(sample.text, max_width);
            assert_eq!(
                lines.concat(),
                sample.text,
                "{} at {max_width}px",
                sample.name
            );
            assert!(
                !lines.is_empty() && lines.len() <= sample.text.chars().count(),
                "{} at {max_width}px produced {} lines",
                sample.name,
                lines.len()
            );
        }
    }
}

#[test]
fn wrap_lines_never_exceed_width() {
    let measurer = FixedAdvanceMeasurer::new(10.0).with_char('i', 4.0).with_char('m', 15.0);
    let style = TextStyle::default();
    let text = TextSamples::new().latin.text;
    for max_width in [20.0, 33.0, 50.0, 97.0] {
        for line in wrap(text, &measurer, &style, max_width).unwrap() {
            let advance = measurer.advance(line, &style);
            assert!(
                advance <= max_width,
                "{line:?} is {advance}px wide at {max_width}px"
            );
        }
    }
}

#[test]
fn wrap_lines_are_greedy() {
    // Each line but the last would overflow if it took the next character.
    let measurer = FixedAdvanceMeasurer::new(10.0).with_char('W', 18.0);
    let style = TextStyle::default();
    let text = "WAVE WAVE WAVE";
    let lines = wrap(text, &measurer, &style, 45.0).unwrap();
    assert_eq!(lines, ["WAV", "E W", "AVE ", "WAV", "E"]);
    let mut rest = text;
    for line in &lines[..lines.len() - 1] {
        rest = &rest[line.len()..];
        let next = rest.chars().next().unwrap();
        let longer = format!("{line}{next}");
        assert!(
            measurer.advance(&longer, &style) > 45.0,
            "{longer:?} would have fit"
        );
    }
}

#[test]
fn wrap_line_count_is_monotonic() {
    let text = TextSamples::new().latin.text;
    let mut previous = 0;
    for step in (0..=60).rev() {
        let max_width = step as f32 * 7.5;
        let count = wrap_fixed(text, max_width).len();
        assert!(
            count >= previous,
            "{count} lines at {max_width}px but {previous} at a wider width"
        );
        previous = count;
    }
}

#[test]
fn wrap_is_idempotent() {
    let text = TextSamples::new().japanese.text;
    assert_eq!(wrap_fixed(text, 55.0), wrap_fixed(text, 55.0));
}

#[test]
fn wrap_fast_path_returns_text() {
    let measurer = FixedAdvanceMeasurer::new(10.0);
    let style = TextStyle::default();
    let breaks = break_lines("HELLOWORLD", &measurer, &style, 100.0).unwrap();
    assert_eq!(breaks.ranges(), [0..10]);
    assert_eq!(measurer.calls(), 1, "only the whole text is measured");
}

#[test]
fn wrap_over_wide_chars_each_get_a_line() {
    let measurer = FixedAdvanceMeasurer::new(50.0);
    let lines = wrap("ABCD", &measurer, &TextStyle::default(), 35.0).unwrap();
    assert_eq!(lines, ["A", "B", "C", "D"]);
}

#[test]
fn wrap_respects_font_size() {
    let measurer = FixedAdvanceMeasurer::new(10.0);
    let large = TextStyle {
        font_size: 40.0,
        ..TextStyle::default()
    };
    let lines = wrap("HELLOWORLD", &measurer, &large, 70.0).unwrap();
    assert_eq!(lines, ["HEL", "LOW", "ORL", "D"], "characters are 20px wide at 40px");
}
