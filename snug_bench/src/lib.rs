// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Snug Bench
//!
//! This crate provides benchmarks for the Snug library.

pub mod benches;
