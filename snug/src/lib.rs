// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snug lays out single-style text labels that wrap to the available width and size themselves
//! tightly around their glyphs, with no vertical padding beyond what the font requires.
//!
//! The crate is independent of any windowing or graphics toolkit. Hosts provide two
//! capabilities:
//!
//! - a [`TextMeasurer`], which reports the advance width and glyph bounds of text runs, and
//! - a [`RenderSurface`], which draws a run of text at an anchor point.
//!
//! On top of those, the crate provides greedy character-level [line breaking](break_lines),
//! [size resolution](resolve_size) under `Unspecified`, `AtMost` and `Exactly` constraints,
//! [line placement](line_origins) for left and centered alignment, and the [`Label`] widget
//! state that ties them together into measure and draw passes.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! ## Example
//!
//! ```
//! use snug::{Constraints, Label, SizeMode, TextBounds, TextMeasurer, TextStyle};
//!
//! /// Every character is 10px wide and 20px tall.
//! struct Fixed;
//!
//! impl TextMeasurer for Fixed {
//!     fn advance(&self, text: &str, _style: &TextStyle) -> f32 {
//!         text.chars().count() as f32 * 10.0
//!     }
//!
//!     fn bounds(&self, _text: &str, _style: &TextStyle) -> TextBounds {
//!         TextBounds { height: 20.0, descent: 4.0 }
//!     }
//! }
//!
//! let mut label = Label::new();
//! label.set_text("HELLOWORLD");
//! let size = label
//!     .measure(Constraints::width(SizeMode::AtMost(35.0)), &Fixed)
//!     .unwrap();
//!
//! assert_eq!(label.lines().collect::<Vec<_>>(), ["HEL", "LOW", "ORL", "D"]);
//! assert_eq!((size.width, size.height), (35.0, 80.0));
//! ```
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("snug requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod cache;
mod error;
mod label;
mod measure;
mod render;
mod size;
mod style;
mod wrap;

pub use peniko::Color;

pub use error::LayoutError;
pub use label::{Invalidation, Label, LabelOptions};
pub use measure::{LineMetrics, TextBounds, TextMeasurer};
pub use render::{line_origins, render, LineOrigin, LineOrigins, RenderSurface};
pub use size::{resolve_size, BaselinePolicy, Constraints, ResolvedSize, SizeMode};
pub use style::{Alignment, DisplayMetrics, Padding, Spacing, TextStyle};
pub use wrap::{break_lines, wrap, LineBreaks, Lines, TextLayout};
