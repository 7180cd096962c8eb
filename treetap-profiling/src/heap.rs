// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::api;
use crate::internal::{flatten, Profile};
use log::debug;

/// One sampled allocation bucket: `count` objects of `size_bytes` each.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Allocation {
    pub count: i64,
    pub size_bytes: i64,
}

/// A call-tree node produced by the sampling heap profiler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AllocationNode {
    /// Function name; possibly empty.
    pub name: String,
    /// Resource name of the script; possibly empty.
    pub filename: String,
    /// Stable per-process id of the script.
    pub script_id: i64,
    /// 1-based line number; 0 when unknown.
    pub line: i64,
    /// 1-based column number; 0 when unknown.
    pub column: i64,
    /// Allocations attributed to this exact frame, bucketed by size.
    pub allocations: Vec<Allocation>,
    pub children: Vec<AllocationNode>,
}

/// A finalized heap-allocation sampling run. The tree must not change
/// while it is being serialized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeapProfile {
    /// Synthetic root; it is never sampled, only its descendants are.
    pub root: AllocationNode,
}

#[derive(Copy, Clone)]
struct HeapFrame<'a> {
    node: &'a AllocationNode,
}

impl api::Node for HeapFrame<'_> {
    fn name(&self) -> &str {
        &self.node.name
    }

    fn filename(&self) -> &str {
        &self.node.filename
    }

    fn file_id(&self) -> i64 {
        self.node.script_id
    }

    fn line(&self) -> i64 {
        self.node.line
    }

    fn column(&self) -> i64 {
        self.node.column
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children
            .iter()
            .map(|node| HeapFrame { node })
            .collect()
    }

    fn samples(&self) -> Vec<api::Sample<'_>> {
        self.node
            .allocations
            .iter()
            .map(|allocation| api::Sample {
                values: vec![
                    allocation.count,
                    allocation.count * allocation.size_bytes,
                ],
                labels: vec![api::Label {
                    key: "allocation",
                    str: None,
                    num: allocation.size_bytes,
                    num_unit: Some("bytes"),
                }],
            })
            .collect()
    }
}

/// Serializes one heap-allocation sampling run to pprof bytes.
///
/// Sample types are [("objects", "count"), ("space", "bytes")]; the period
/// is the sampling interval in bytes. Each allocation bucket becomes one
/// sample labeled with its per-object size.
pub fn serialize_heap_profile(
    profile: &HeapProfile,
    interval_bytes: i64,
    start_time_nanos: i64,
) -> anyhow::Result<Vec<u8>> {
    let mut pprof = Profile::new("space", "bytes", interval_bytes, start_time_nanos, 0);
    pprof.add_sample_type("objects", "count");
    pprof.add_sample_type("space", "bytes");

    flatten(&HeapFrame { node: &profile.root }, &mut pprof)?;

    let buf = pprof.encode();
    debug!(
        "heap profile: {} samples, {} locations, {} functions, {} bytes",
        pprof.samples().len(),
        pprof.locations().len(),
        pprof.functions().len(),
        buf.len()
    );
    Ok(buf)
}
