// Copyright 2026 the Snug Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization of wrap results across measure passes.

use alloc::string::String;
use alloc::vec::Vec;

use crate::style::MeasureKey;
use crate::{LayoutError, TextBounds, TextLayout};

/// Identifies the inputs that a [`TextLayout`] depends on.
///
/// Besides the text, style and width, the key holds what the measurer reported for the whole
/// text, so a measurer that disagrees with the one that filled the entry misses.
#[derive(Clone, PartialEq, Debug)]
pub(crate) struct WrapKey {
    text: String,
    measure: MeasureKey,
    max_width: u32,
    text_width: u32,
    bounds: [u32; 2],
}

/// A borrowed [`WrapKey`], so that lookups that hit do not allocate.
#[derive(Copy, Clone, Debug)]
pub(crate) struct WrapLookup<'a> {
    pub(crate) text: &'a str,
    pub(crate) measure: MeasureKey,
    pub(crate) max_width: f32,
    pub(crate) text_width: f32,
    pub(crate) bounds: TextBounds,
}

impl WrapLookup<'_> {
    fn bounds_bits(&self) -> [u32; 2] {
        [self.bounds.height.to_bits(), self.bounds.descent.to_bits()]
    }

    fn matches(&self, key: &WrapKey) -> bool {
        self.max_width.to_bits() == key.max_width
            && self.text_width.to_bits() == key.text_width
            && self.bounds_bits() == key.bounds
            && self.measure == key.measure
            && self.text == key.text
    }

    fn to_key(self) -> WrapKey {
        WrapKey {
            text: self.text.into(),
            measure: self.measure,
            max_width: self.max_width.to_bits(),
            text_width: self.text_width.to_bits(),
            bounds: self.bounds_bits(),
        }
    }
}

struct Entry {
    epoch: u64,
    key: WrapKey,
    layout: TextLayout,
}

/// A least-recently-used cache of wrap results.
///
/// Lookups are a linear scan, so capacities should stay in the order of tens. A capacity of
/// zero disables caching.
pub(crate) struct WrapCache {
    entries: Vec<Entry>,
    epoch: u64,
    max_entries: usize,
}

impl WrapCache {
    pub(crate) fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            epoch: 0,
            max_entries,
        }
    }

    /// Returns the layout for `lookup`, computing it with `make_layout` if it is not cached.
    ///
    /// Errors from `make_layout` are returned as is and nothing is cached for them.
    pub(crate) fn get_or_insert(
        &mut self,
        lookup: WrapLookup<'_>,
        make_layout: impl FnOnce() -> Result<TextLayout, LayoutError>,
    ) -> Result<TextLayout, LayoutError> {
        if self.max_entries == 0 {
            return make_layout();
        }
        self.epoch += 1;
        let epoch = self.epoch;

        let mut oldest_epoch = u64::MAX;
        let mut oldest_index = 0;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if lookup.matches(&entry.key) {
                log::trace!(
                    "wrap cache hit for {} bytes at {}px",
                    lookup.text.len(),
                    lookup.max_width
                );
                entry.epoch = epoch;
                return Ok(entry.layout.clone());
            }
            if entry.epoch < oldest_epoch {
                oldest_epoch = entry.epoch;
                oldest_index = index;
            }
        }

        log::trace!(
            "wrap cache miss for {} bytes at {}px",
            lookup.text.len(),
            lookup.max_width
        );
        let layout = make_layout()?;
        let entry = Entry {
            epoch,
            key: lookup.to_key(),
            layout: layout.clone(),
        };
        if self.entries.len() < self.max_entries {
            self.entries.push(entry);
        } else {
            self.entries[oldest_index] = entry;
        }
        Ok(layout)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl core::fmt::Debug for WrapCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WrapCache")
            .field("len", &self.entries.len())
            .field("epoch", &self.epoch)
            .field("max_entries", &self.max_entries)
            .finish_non_exhaustive()
    }
}
