// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::FxIndexSet;
use treetap_profiling_protobuf::StringOffset;

/// Holds unique strings and provides [StringOffset]s that correspond to the
/// order the strings were first inserted. Append-only: offsets are stable
/// for the table's lifetime and entries are never removed.
pub struct StringTable {
    strings: FxIndexSet<Box<str>>,
}

impl StringTable {
    /// Creates a new string table, which initially holds the empty string
    /// and no others. Offset 0 must name the empty string: an absent
    /// optional index field on the wire reads the same as one pointing
    /// at "".
    pub fn new() -> Self {
        let mut strings = FxIndexSet::default();
        // A profile has at least "", two sample types with units, and a
        // name and filename per frame; skip the tiny first allocations.
        strings.reserve(32);
        strings.insert("".into());
        Self { strings }
    }

    /// Returns the number of strings currently held in the table.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Adds the string to the table if it isn't present already, and
    /// returns the offset of its first insertion.
    pub fn intern(&mut self, str: &str) -> StringOffset {
        match self.strings.get_index_of(str) {
            Some(offset) => StringOffset::from_offset(offset),
            None => {
                let offset = StringOffset::from_offset(self.strings.len());
                self.strings.insert(str.into());
                offset
            }
        }
    }

    /// Resolves an offset back to its string.
    pub fn get(&self, offset: StringOffset) -> Option<&str> {
        self.strings.get_index(usize::from(offset)).map(|s| &**s)
    }

    /// The strings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(|s| &**s)
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}
