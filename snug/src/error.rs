// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An error returned when a [`TextMeasurer`](crate::TextMeasurer) reports values that no
/// layout can be built from.
///
/// Ordinary inputs never produce an error: empty text, zero or negative widths and characters
/// wider than the available width all lay out. Only a misbehaving measurer does.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum LayoutError {
    /// The measurer returned a negative or non-finite advance.
    InvalidAdvance {
        /// The advance that was returned.
        advance: f32,
    },
    /// The measurer returned a negative or non-finite height, or a non-finite descent.
    InvalidBounds {
        /// The height that was returned.
        height: f32,
        /// The descent that was returned.
        descent: f32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAdvance { advance } => {
                write!(f, "text measurer returned an invalid advance of {advance}")
            }
            Self::InvalidBounds { height, descent } => write!(
                f,
                "text measurer returned invalid bounds (height {height}, descent {descent})"
            ),
        }
    }
}

impl core::error::Error for LayoutError {}
