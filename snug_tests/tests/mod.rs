// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `snug`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that shared utilities are compiled once.
//! - Put new tests into the module for their topic (`wrap`, `size`, `draw`, `label`).
//!   Tests for bugs should go into `issues.rs`.
//! - For test naming, put the topic of the test at the start of the name, e.g.
//!   `wrap_over_wide_char` rather than `over_wide_char_wrap`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod wrap;
#[macro_use]
mod util;
