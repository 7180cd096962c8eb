// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{messages, repeated_scalar, Label, Message};

/// Each Sample records the values encountered in some program context,
/// which here is always a stack of call-site ids.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sample {
    /// Ids of [crate::Location] records; the leaf frame is first.
    pub location_ids: Vec<u64>,
    /// One value per entry of the profile's sample-type list, in the same
    /// order.
    pub values: Vec<i64>,
    pub labels: Vec<Label>,
}

impl Message for Sample {
    fn encode(&self, buf: &mut Vec<u8>) {
        repeated_scalar(1, &self.location_ids, buf);
        repeated_scalar(2, &self.values, buf);
        messages(3, &self.labels, buf);
    }
}

#[cfg(feature = "prost_impls")]
impl From<&Sample> for crate::prost_impls::Sample {
    fn from(sample: &Sample) -> Self {
        Self {
            location_ids: sample.location_ids.clone(),
            values: sample.values.clone(),
            labels: sample
                .labels
                .iter()
                .map(crate::prost_impls::Label::from)
                .collect(),
        }
    }
}
