// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{scalar_opt, Message, StringOffset};

/// Mapping describes an object file and the memory range it was loaded at.
/// The profiles produced by this crate's callers carry no native mappings,
/// so the record exists for schema completeness and the table stays empty.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Mapping {
    /// Unique nonzero id, assigned in table order.
    pub id: u64,
    pub memory_start: u64,
    pub memory_limit: u64,
    pub file_offset: u64,
    pub filename: StringOffset,
    pub build_id: StringOffset,
    pub has_functions: bool,
    pub has_filenames: bool,
    pub has_line_numbers: bool,
    pub has_inline_frames: bool,
}

impl Message for Mapping {
    fn encode(&self, buf: &mut Vec<u8>) {
        scalar_opt(1, self.id, buf);
        scalar_opt(2, self.memory_start, buf);
        scalar_opt(3, self.memory_limit, buf);
        scalar_opt(4, self.file_offset, buf);
        scalar_opt(5, self.filename, buf);
        scalar_opt(6, self.build_id, buf);
        scalar_opt(7, self.has_functions, buf);
        scalar_opt(8, self.has_filenames, buf);
        scalar_opt(9, self.has_line_numbers, buf);
        scalar_opt(10, self.has_inline_frames, buf);
    }
}

#[cfg(feature = "prost_impls")]
impl From<&Mapping> for crate::prost_impls::Mapping {
    fn from(mapping: &Mapping) -> Self {
        Self {
            id: mapping.id,
            memory_start: mapping.memory_start,
            memory_limit: mapping.memory_limit,
            file_offset: mapping.file_offset,
            filename: mapping.filename.into(),
            build_id: mapping.build_id.into(),
            has_functions: mapping.has_functions,
            has_filenames: mapping.has_filenames,
            has_line_numbers: mapping.has_line_numbers,
            has_inline_frames: mapping.has_inline_frames,
        }
    }
}
