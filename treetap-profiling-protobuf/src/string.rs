// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// An index into a profile's string table.
///
/// Offset 0 always names the empty string, which makes an absent optional
/// index field and a field pointing at "" read the same. Offsets are
/// assigned in insertion order and are never reused.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct StringOffset(u32);

impl StringOffset {
    /// The offset of the empty string.
    pub const ZERO: StringOffset = StringOffset(0);

    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Converts a table position into an offset.
    ///
    /// # Panics
    /// Panics if the position cannot be represented, which would take more
    /// than u32::MAX strings.
    pub fn from_offset(offset: usize) -> Self {
        #[allow(clippy::expect_used)]
        let offset: u32 = offset.try_into().expect("string offset to fit in a u32");
        Self(offset)
    }
}

impl From<u32> for StringOffset {
    fn from(offset: u32) -> Self {
        Self(offset)
    }
}

impl From<StringOffset> for u32 {
    fn from(offset: StringOffset) -> u32 {
        offset.0
    }
}

impl From<StringOffset> for u64 {
    fn from(offset: StringOffset) -> u64 {
        u64::from(offset.0)
    }
}

impl From<StringOffset> for i64 {
    fn from(offset: StringOffset) -> i64 {
        i64::from(offset.0)
    }
}

impl From<StringOffset> for usize {
    fn from(offset: StringOffset) -> usize {
        offset.0 as usize
    }
}
