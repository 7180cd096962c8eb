// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{messages, scalar_opt, Message};

/// One source line attributed to a [Location].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Line {
    /// The id of the corresponding [crate::Function].
    pub function_id: u64,
    /// Line number. May be negative; it is encoded as-is.
    pub line: i64,
}

impl Message for Line {
    fn encode(&self, buf: &mut Vec<u8>) {
        scalar_opt(1, self.function_id, buf);
        scalar_opt(2, self.line, buf);
    }
}

/// A deduplicated call site: one [crate::Function] plus the line it was
/// observed at.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Location {
    /// Unique nonzero id, assigned in table order.
    pub id: u64,
    pub mapping_id: u64,
    pub address: u64,
    /// Multiple lines model inlined functions, innermost first. The
    /// profiles built here record exactly one line per location.
    pub lines: Vec<Line>,
    pub is_folded: bool,
}

impl Message for Location {
    fn encode(&self, buf: &mut Vec<u8>) {
        scalar_opt(1, self.id, buf);
        scalar_opt(2, self.mapping_id, buf);
        scalar_opt(3, self.address, buf);
        messages(4, &self.lines, buf);
        scalar_opt(5, self.is_folded, buf);
    }
}

#[cfg(feature = "prost_impls")]
impl From<&Location> for crate::prost_impls::Location {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id,
            mapping_id: location.mapping_id,
            address: location.address,
            lines: location
                .lines
                .iter()
                .map(|line| crate::prost_impls::Line {
                    function_id: line.function_id,
                    line: line.line,
                })
                .collect(),
            is_folded: location.is_folded,
        }
    }
}
